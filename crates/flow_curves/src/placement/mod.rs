//! Curve placement over a direction field.
//!
//! - [`runner`]: configuration, the frontier and pre-seeded modes, and [`CurvePlacer`].
//! - [`events`]: observer hooks for accepted, discarded and rejected candidates.
pub mod events;
pub mod runner;

pub use events::{EventSink, FnSink, MultiSink, PlacementEvent, PlacementEventKind, VecSink};
pub use runner::{
    run_frontier, run_frontier_with_events, run_preseeded, run_preseeded_with_events,
    CurvePlacer, PlacementConfig, PlacementMode, PlacementResult,
};
