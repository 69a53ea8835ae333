//! Streamline records produced by the tracer.
use glam::DVec2;

/// Identifier of an accepted curve; equals its position in the output collection.
pub type CurveId = usize;

/// Pass that produced a step.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Stepping against the field; also tags the seed.
    Backward,
    /// Stepping along the field.
    Forward,
}

impl Direction {
    /// Numeric tag used in tabular output (0 backward, 1 forward).
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Direction::Backward => 0,
            Direction::Forward => 1,
        }
    }
}

/// One integration step of a curve.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveStep {
    pub position: DVec2,
    pub direction: Direction,
    /// Insertion order within the curve, not spatial order.
    pub step_id: usize,
}

/// Append-only sequence of steps traced from a single seed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Upper bound on the step storage [`Curve::with_capacity`] reserves ahead of time.
pub const MAX_RESERVED_STEPS: usize = 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    id: CurveId,
    steps: Vec<CurveStep>,
}

impl Curve {
    pub fn new(id: CurveId) -> Self {
        Self {
            id,
            steps: Vec::new(),
        }
    }

    /// Creates an empty curve expecting up to `n_steps` steps.
    ///
    /// At most [`MAX_RESERVED_STEPS`] are reserved up front; the budget is only an upper
    /// bound and most curves stop early at the field edge or against other curves.
    pub fn with_capacity(id: CurveId, n_steps: usize) -> Self {
        Self {
            id,
            steps: Vec::with_capacity(n_steps.min(MAX_RESERVED_STEPS)),
        }
    }

    /// Number of steps the backing storage can hold without reallocating.
    #[inline]
    pub fn reserved_steps(&self) -> usize {
        self.steps.capacity()
    }

    /// Appends a step; its `step_id` is the number of steps taken so far.
    pub fn insert_step(&mut self, position: DVec2, direction: Direction) {
        let step_id = self.steps.len();
        self.steps.push(CurveStep {
            position,
            direction,
            step_id,
        });
    }

    #[inline]
    pub fn id(&self) -> CurveId {
        self.id
    }

    #[inline]
    pub fn steps(&self) -> &[CurveStep] {
        &self.steps
    }

    #[inline]
    pub fn steps_taken(&self) -> usize {
        self.steps.len()
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.steps.iter().map(|s| s.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_step_numbers_in_insertion_order() {
        let mut curve = Curve::with_capacity(3, 4);
        curve.insert_step(DVec2::new(5.0, 5.0), Direction::Backward);
        curve.insert_step(DVec2::new(4.0, 5.0), Direction::Backward);
        curve.insert_step(DVec2::new(6.0, 5.0), Direction::Forward);

        assert_eq!(curve.id(), 3);
        assert_eq!(curve.steps_taken(), 3);
        let ids: Vec<_> = curve.steps().iter().map(|s| s.step_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(curve.steps()[2].direction, Direction::Forward);
    }

    #[test]
    fn direction_ids_match_pass() {
        assert_eq!(Direction::Backward.id(), 0);
        assert_eq!(Direction::Forward.id(), 1);
    }

    #[test]
    fn huge_budget_reserves_bounded_storage() {
        let curve = Curve::with_capacity(0, usize::MAX);
        assert!(curve.reserved_steps() >= MAX_RESERVED_STEPS);
        assert!(curve.reserved_steps() < 2 * MAX_RESERVED_STEPS);
        assert_eq!(curve.steps_taken(), 0);
    }
}
