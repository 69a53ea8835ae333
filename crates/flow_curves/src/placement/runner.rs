//! High-level runner for placing evenly-spaced curves over a direction field.
//!
//! Two modes share the same accept rule: a candidate seed must clear the density grid, the
//! traced curve must reach `min_steps_allowed`, and only then is it committed to the grid and
//! appended to the output. Acceptance order drives every later separation test, so runs are
//! fully deterministic for identical inputs.
use glam::DVec2;
use tracing::{debug, info, trace, warn};

use crate::curve::Curve;
use crate::density::{grid_dimensions, DensityGrid, DEFAULT_CELL_CAPACITY};
use crate::error::{Error, Result};
use crate::field::DirectionField;
use crate::placement::events::{EventSink, PlacementEvent, PlacementEventKind};
use crate::seeding::collect_seedpoints;
use crate::table::{curves_to_rows, CurveRow};
use crate::tracer::trace_curve;

/// Which placement strategy produced a result.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Grow outward from one initial curve using perpendicular seed candidates.
    Frontier,
    /// Try caller-supplied seeds in order.
    PreSeeded,
}

/// Parameters shared by both placement modes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    /// Maximum number of curves to accept.
    pub n_curves: usize,
    /// Maximum number of points per curve, seed included.
    pub n_steps: usize,
    /// Curves with fewer points are discarded.
    pub min_steps_allowed: usize,
    /// Distance covered by each integration step.
    pub step_length: f64,
    /// Separation distance between points of distinct curves; also the density cell size.
    pub d_sep: f64,
    /// Per-cell point capacity of the density grid.
    pub cell_capacity: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            n_curves: 100,
            n_steps: 30,
            min_steps_allowed: 0,
            step_length: 1.0,
            d_sep: 1.0,
            cell_capacity: DEFAULT_CELL_CAPACITY,
        }
    }
}

impl PlacementConfig {
    /// Creates a new [`PlacementConfig`] with the required parameters.
    pub fn new(n_curves: usize, n_steps: usize, step_length: f64, d_sep: f64) -> Self {
        Self {
            n_curves,
            n_steps,
            step_length,
            d_sep,
            ..Default::default()
        }
    }

    pub fn with_n_curves(mut self, n_curves: usize) -> Self {
        self.n_curves = n_curves;
        self
    }

    pub fn with_n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    /// Sets the minimum number of points an accepted curve must have.
    pub fn with_min_steps_allowed(mut self, min_steps_allowed: usize) -> Self {
        self.min_steps_allowed = min_steps_allowed;
        self
    }

    pub fn with_step_length(mut self, step_length: f64) -> Self {
        self.step_length = step_length;
        self
    }

    pub fn with_d_sep(mut self, d_sep: f64) -> Self {
        self.d_sep = d_sep;
        self
    }

    /// Sets the density grid per-cell capacity.
    pub fn with_cell_capacity(mut self, cell_capacity: usize) -> Self {
        self.cell_capacity = cell_capacity;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.n_steps == 0 {
            return Err(Error::invalid("n_steps must be > 0"));
        }
        if !self.d_sep.is_finite() || self.d_sep <= 0.0 {
            return Err(Error::invalid("d_sep must be finite and > 0"));
        }
        if !self.step_length.is_finite() {
            return Err(Error::invalid("step_length must be finite"));
        }
        if self.cell_capacity == 0 {
            return Err(Error::invalid("cell_capacity must be > 0"));
        }

        Ok(())
    }

    /// Like [`PlacementConfig::validate`], and also checks that the density grid for a field
    /// of `field_width` cells can be allocated with this `d_sep`.
    pub fn validate_for_width(&self, field_width: usize) -> Result<()> {
        self.validate()?;
        if grid_dimensions(field_width, field_width, self.d_sep).is_none() {
            return Err(Error::invalid(format!(
                "d_sep {} is too small for a field of width {field_width}",
                self.d_sep
            )));
        }
        Ok(())
    }
}

/// Result of a placement run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementResult {
    /// Accepted curves in acceptance order; `curves[i].id() == i`.
    pub curves: Vec<Curve>,
    /// Seeds tested against the density grid (the frontier's initial seed included).
    pub seeds_evaluated: usize,
    /// Seeds that failed the separation test.
    pub seeds_rejected: usize,
    /// Traced curves dropped for being shorter than `min_steps_allowed`.
    pub curves_discarded: usize,
}

impl PlacementResult {
    /// Flattens the accepted curves into one row per step.
    pub fn rows(&self) -> Vec<CurveRow> {
        curves_to_rows(&self.curves)
    }

    pub fn total_steps(&self) -> usize {
        self.curves.iter().map(Curve::steps_taken).sum()
    }
}

/// Borrows a direction field and runs placements against it with a fixed configuration.
pub struct CurvePlacer<'a, F: DirectionField + ?Sized> {
    /// Run configuration applied to this placer.
    pub config: PlacementConfig,
    /// Field sampled by every trace.
    pub field: &'a F,
}

impl<'a, F: DirectionField + ?Sized> CurvePlacer<'a, F> {
    pub fn try_new(config: PlacementConfig, field: &'a F) -> Result<Self> {
        config.validate_for_width(field.width())?;
        Ok(Self { config, field })
    }

    /// Grows curves outward from `seed`.
    pub fn run_frontier(&self, seed: DVec2) -> Result<PlacementResult> {
        run_frontier(self.field, seed, &self.config)
    }

    pub fn run_frontier_with_events(
        &self,
        seed: DVec2,
        sink: &mut dyn EventSink,
    ) -> Result<PlacementResult> {
        run_frontier_with_events(self.field, seed, &self.config, sink)
    }

    /// Places curves from `seeds`, in order.
    pub fn run_preseeded(&self, seeds: &[DVec2]) -> Result<PlacementResult> {
        run_preseeded(self.field, seeds, &self.config)
    }

    pub fn run_preseeded_with_events(
        &self,
        seeds: &[DVec2],
        sink: &mut dyn EventSink,
    ) -> Result<PlacementResult> {
        run_preseeded_with_events(self.field, seeds, &self.config, sink)
    }
}

pub fn run_frontier<F: DirectionField + ?Sized>(
    field: &F,
    seed: DVec2,
    config: &PlacementConfig,
) -> Result<PlacementResult> {
    run_frontier_with_events(field, seed, config, &mut ())
}

/// Frontier growth: trace curve 0 from `seed`, then walk the accepted curves in acceptance
/// order and try each of their perpendicular seed candidates.
pub fn run_frontier_with_events<F: DirectionField + ?Sized>(
    field: &F,
    seed: DVec2,
    config: &PlacementConfig,
    sink: &mut dyn EventSink,
) -> Result<PlacementResult> {
    config.validate_for_width(field.width())?;
    ensure_in_field(field, seed)?;

    info!(
        "Frontier placement from ({:.3}, {:.3}) | n_curves: {}, n_steps: {}, d_sep: {}.",
        seed.x, seed.y, config.n_curves, config.n_steps, config.d_sep
    );
    let mut run = PlacementRun::new(field, config, sink, PlacementMode::Frontier)?;

    if config.n_curves == 0 {
        return Ok(run.finish());
    }

    run.result.seeds_evaluated += 1;
    let first = trace_curve(0, seed, config.n_steps, config.step_length, field, &run.density)?;
    if first.steps_taken() < config.min_steps_allowed {
        warn!(
            "Initial curve has {} steps, below the minimum of {}; nothing placed.",
            first.steps_taken(),
            config.min_steps_allowed
        );
        run.discard(seed, first.steps_taken());
        run.warn(
            "frontier",
            "Initial curve is shorter than min_steps_allowed; nothing placed",
        );
        return Ok(run.finish());
    }
    run.accept(seed, first);

    let mut next = 0;
    'frontier: while next < run.result.curves.len() {
        let candidates = collect_seedpoints(&run.result.curves[next], config.d_sep);
        for candidate in candidates {
            if run.is_full() {
                break 'frontier;
            }
            run.try_place(candidate)?;
        }
        next += 1;
    }

    Ok(run.finish())
}

pub fn run_preseeded<F: DirectionField + ?Sized>(
    field: &F,
    seeds: &[DVec2],
    config: &PlacementConfig,
) -> Result<PlacementResult> {
    run_preseeded_with_events(field, seeds, config, &mut ())
}

/// Pre-seeded placement: every seed is checked against the field up front, then tried in
/// order against the grid state left by the previously accepted curves.
pub fn run_preseeded_with_events<F: DirectionField + ?Sized>(
    field: &F,
    seeds: &[DVec2],
    config: &PlacementConfig,
    sink: &mut dyn EventSink,
) -> Result<PlacementResult> {
    config.validate_for_width(field.width())?;
    for &seed in seeds {
        ensure_in_field(field, seed)?;
    }

    info!(
        "Pre-seeded placement | seeds: {}, n_curves: {}, n_steps: {}, d_sep: {}.",
        seeds.len(),
        config.n_curves,
        config.n_steps,
        config.d_sep
    );
    let mut run = PlacementRun::new(field, config, sink, PlacementMode::PreSeeded)?;
    if seeds.is_empty() {
        warn!("Pre-seeded placement received no seeds.");
        run.warn("preseeded", "No seeds supplied");
    }

    for &seed in seeds {
        if run.is_full() {
            break;
        }
        run.try_place(seed)?;
    }

    Ok(run.finish())
}

fn ensure_in_field<F: DirectionField + ?Sized>(field: &F, seed: DVec2) -> Result<()> {
    if field.off_boundaries(seed) {
        return Err(Error::SeedOutOfBounds {
            x: seed.x,
            y: seed.y,
        });
    }
    Ok(())
}

/// Mutable state of one run: the density grid and the growing result.
struct PlacementRun<'a, 's, F: DirectionField + ?Sized> {
    field: &'a F,
    config: &'a PlacementConfig,
    sink: &'s mut dyn EventSink,
    density: DensityGrid,
    result: PlacementResult,
}

impl<'a, 's, F: DirectionField + ?Sized> PlacementRun<'a, 's, F> {
    fn new(
        field: &'a F,
        config: &'a PlacementConfig,
        sink: &'s mut dyn EventSink,
        mode: PlacementMode,
    ) -> Result<Self> {
        let width = field.width();
        let density = DensityGrid::try_new(width, width, config.d_sep, config.cell_capacity)?;
        if sink.wants(PlacementEventKind::RunStarted) {
            sink.send(PlacementEvent::RunStarted {
                mode,
                config: config.clone(),
            });
        }

        Ok(Self {
            field,
            config,
            sink,
            density,
            result: PlacementResult {
                curves: Vec::with_capacity(config.n_curves.min(1024)),
                ..Default::default()
            },
        })
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.result.curves.len() >= self.config.n_curves
    }

    /// Tests `seed` against the grid, traces it and accepts it if long enough.
    fn try_place(&mut self, seed: DVec2) -> Result<bool> {
        self.result.seeds_evaluated += 1;
        if !self.density.is_valid_next_step(seed) {
            trace!("Seed ({:.3}, {:.3}) rejected by density grid.", seed.x, seed.y);
            self.result.seeds_rejected += 1;
            if self.sink.wants(PlacementEventKind::SeedRejected) {
                self.sink.send(PlacementEvent::SeedRejected { seed });
            }
            return Ok(false);
        }

        let curve = trace_curve(
            self.result.curves.len(),
            seed,
            self.config.n_steps,
            self.config.step_length,
            self.field,
            &self.density,
        )?;
        if curve.steps_taken() < self.config.min_steps_allowed {
            self.discard(seed, curve.steps_taken());
            return Ok(false);
        }

        self.accept(seed, curve);
        Ok(true)
    }

    fn accept(&mut self, seed: DVec2, curve: Curve) {
        debug!(
            "Curve {} accepted | steps: {}.",
            curve.id(),
            curve.steps_taken()
        );
        self.density.insert_curve_coords(&curve);
        if self.sink.wants(PlacementEventKind::CurveAccepted) {
            self.sink.send(PlacementEvent::CurveAccepted {
                curve_id: curve.id(),
                seed,
                steps_taken: curve.steps_taken(),
            });
        }
        self.result.curves.push(curve);
    }

    fn discard(&mut self, seed: DVec2, steps_taken: usize) {
        trace!(
            "Curve from ({:.3}, {:.3}) discarded | steps: {}.",
            seed.x,
            seed.y,
            steps_taken
        );
        self.result.curves_discarded += 1;
        if self.sink.wants(PlacementEventKind::CurveDiscarded) {
            self.sink.send(PlacementEvent::CurveDiscarded { seed, steps_taken });
        }
    }

    fn warn(&mut self, context: &str, message: &str) {
        if self.sink.wants(PlacementEventKind::Warning) {
            self.sink.send(PlacementEvent::Warning {
                context: context.into(),
                message: message.into(),
            });
        }
    }

    fn finish(self) -> PlacementResult {
        let PlacementRun {
            sink,
            density,
            result,
            ..
        } = self;
        if density.dropped_points() > 0 {
            debug!(
                "Density grid dropped {} points in saturated cells.",
                density.dropped_points()
            );
        }
        info!(
            "Placement finished | curves: {}, seeds evaluated: {}, rejected: {}, discarded: {}.",
            result.curves.len(),
            result.seeds_evaluated,
            result.seeds_rejected,
            result.curves_discarded
        );
        if sink.wants(PlacementEventKind::RunFinished) {
            sink.send(PlacementEvent::RunFinished {
                result: result.clone(),
            });
        }
        result
    }
}
