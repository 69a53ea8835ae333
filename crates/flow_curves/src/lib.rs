#![forbid(unsafe_code)]
//! flow_curves: evenly-spaced, non-overlapping streamlines over 2D direction fields.
//!
//! Modules:
//! - field: direction field sampling ([`field::FlowField`] and the [`field::DirectionField`] trait)
//! - curve: append-only streamline records
//! - density: separation index with saturating cells
//! - seeding: perpendicular seed candidates derived from a curve
//! - tracer: bidirectional integration of a single curve
//! - placement: frontier and pre-seeded placement runs, plus event sinks
//! - sampling: seed-list generators for pre-seeded placement
//! - table: row-per-step view of a curve collection
pub mod curve;
pub mod density;
pub mod error;
pub mod field;
pub mod placement;
pub mod sampling;
pub mod seeding;
pub mod table;
pub mod tracer;

/// Convenient re-exports for common types. Import with `use flow_curves::prelude::*;`.
pub mod prelude {
    pub use crate::curve::{Curve, CurveId, CurveStep, Direction};
    pub use crate::density::{DensityCell, DensityGrid, DEFAULT_CELL_CAPACITY};
    pub use crate::error::{Error, Result};
    pub use crate::field::{DirectionField, FlowField};
    pub use crate::placement::{
        run_frontier, run_frontier_with_events, run_preseeded, run_preseeded_with_events,
        CurvePlacer, EventSink, FnSink, MultiSink, PlacementConfig, PlacementEvent,
        PlacementEventKind, PlacementMode, PlacementResult, VecSink,
    };
    pub use crate::sampling::{JitterGridSeeds, SeedSampling, UniformRandomSeeds};
    pub use crate::seeding::{collect_seedpoints, SeedPointsQueue};
    pub use crate::table::{curves_to_rows, CurveRow};
    pub use crate::tracer::trace_curve;
}
