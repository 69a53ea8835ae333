//! Row-per-step view of a curve collection.
use crate::curve::{Curve, CurveId};

/// One step of one curve, flattened for tabular consumers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveRow {
    pub curve_id: CurveId,
    pub steps_taken: usize,
    pub x: f64,
    pub y: f64,
    pub direction_id: u8,
    pub step_id: usize,
}

/// Flattens `curves` in order, each curve's steps in insertion order.
pub fn curves_to_rows(curves: &[Curve]) -> Vec<CurveRow> {
    let total = curves.iter().map(Curve::steps_taken).sum();
    let mut rows = Vec::with_capacity(total);
    for curve in curves {
        let steps_taken = curve.steps_taken();
        rows.extend(curve.steps().iter().map(|step| CurveRow {
            curve_id: curve.id(),
            steps_taken,
            x: step.position.x,
            y: step.position.y,
            direction_id: step.direction.id(),
            step_id: step.step_id,
        }));
    }
    rows
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::curve::Direction;

    #[test]
    fn rows_follow_curve_then_step_order() {
        let mut a = Curve::new(0);
        a.insert_step(DVec2::new(5.0, 5.0), Direction::Backward);
        a.insert_step(DVec2::new(6.0, 5.0), Direction::Forward);
        let mut b = Curve::new(1);
        b.insert_step(DVec2::new(2.0, 3.0), Direction::Backward);

        let rows = curves_to_rows(&[a, b]);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[1],
            CurveRow {
                curve_id: 0,
                steps_taken: 2,
                x: 6.0,
                y: 5.0,
                direction_id: 1,
                step_id: 1,
            }
        );
        assert_eq!((rows[2].curve_id, rows[2].steps_taken), (1, 1));
    }

    #[test]
    fn empty_collection_has_no_rows() {
        assert!(curves_to_rows(&[]).is_empty());
    }
}
