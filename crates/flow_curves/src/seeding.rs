//! Seed candidates derived from an accepted curve.
//!
//! For every segment of a curve, two candidates are placed `d_sep` away from the segment's
//! first point, perpendicular to the segment on the left and on the right.
use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use crate::curve::Curve;

/// Single-use list of candidate start points, in segment order (left, then right).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeedPointsQueue {
    points: Vec<DVec2>,
}

impl SeedPointsQueue {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            points: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub fn insert_point(&mut self, p: DVec2) {
        self.points.push(p);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }
}

impl IntoIterator for SeedPointsQueue {
    type Item = DVec2;
    type IntoIter = std::vec::IntoIter<DVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// Collects `2 × (steps_taken − 1)` candidates from `curve`.
pub fn collect_seedpoints(curve: &Curve, d_sep: f64) -> SeedPointsQueue {
    let steps = curve.steps();
    let mut queue = SeedPointsQueue::with_capacity(2 * steps.len().saturating_sub(1));

    for pair in steps.windows(2) {
        let p = pair[0].position;
        let next = pair[1].position;
        let angle = (next.y - p.y).atan2(next.x - p.x);

        let angle_left = angle + FRAC_PI_2;
        let angle_right = angle - FRAC_PI_2;

        queue.insert_point(DVec2::new(
            p.x + d_sep * angle_left.cos(),
            p.y + d_sep * angle_left.sin(),
        ));
        queue.insert_point(DVec2::new(
            p.x + d_sep * angle_right.cos(),
            p.y + d_sep * angle_right.sin(),
        ));
    }

    queue
}
