//! Event types and sinks for observing placement runs.
//!
//! This module defines [`PlacementEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while executing [`crate::placement::runner::run_frontier_with_events`]
//! or [`crate::placement::runner::run_preseeded_with_events`].
use glam::DVec2;

use crate::curve::CurveId;
use crate::placement::runner::{PlacementConfig, PlacementMode, PlacementResult};

/// Describes events emitted while placing curves.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PlacementEvent {
    /// Emitted once parameters and seeds have been validated.
    RunStarted {
        mode: PlacementMode,
        config: PlacementConfig,
    },

    /// Emitted when the run completes.
    RunFinished { result: PlacementResult },

    /// A seed candidate failed the separation test against the current grid.
    SeedRejected { seed: DVec2 },

    /// A traced curve was shorter than `min_steps_allowed` and was thrown away.
    CurveDiscarded { seed: DVec2, steps_taken: usize },

    /// A curve was accepted and committed to the density grid.
    CurveAccepted {
        curve_id: CurveId,
        seed: DVec2,
        steps_taken: usize,
    },

    /// Non-fatal warning generated during placement.
    Warning {
        /// Context string (e.g. mode name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

impl PlacementEvent {
    pub fn kind(&self) -> PlacementEventKind {
        match self {
            PlacementEvent::RunStarted { .. } => PlacementEventKind::RunStarted,
            PlacementEvent::RunFinished { .. } => PlacementEventKind::RunFinished,
            PlacementEvent::SeedRejected { .. } => PlacementEventKind::SeedRejected,
            PlacementEvent::CurveDiscarded { .. } => PlacementEventKind::CurveDiscarded,
            PlacementEvent::CurveAccepted { .. } => PlacementEventKind::CurveAccepted,
            PlacementEvent::Warning { .. } => PlacementEventKind::Warning,
        }
    }
}

/// Discriminant of [`PlacementEvent`], used to skip building unwanted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementEventKind {
    RunStarted,
    RunFinished,
    SeedRejected,
    CurveDiscarded,
    CurveAccepted,
    Warning,
}

/// A generic event sink that accepts [`PlacementEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PlacementEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&mut self, _kind: PlacementEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PlacementEvent) {}

    #[inline]
    fn wants(&mut self, _kind: PlacementEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    #[inline]
    fn send(&mut self, event: PlacementEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PlacementEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<PlacementEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PlacementEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PlacementEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to every contained sink that wants it.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self { sinks: Vec::new() }
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: PlacementEvent) {
        let kind = event.kind();
        for sink in &mut self.sinks {
            if sink.wants(kind) {
                sink.send(event.clone());
            }
        }
    }

    fn wants(&mut self, kind: PlacementEventKind) -> bool {
        self.sinks.iter_mut().any(|s| s.wants(kind))
    }
}
