//! Bidirectional curve integration.
//!
//! [`trace_curve`] grows a curve from its seed, first against the field (backward) and then
//! along it (forward), with a fixed step length. Each step is accepted only while the
//! current position is inside the field and the next one clears the density grid.
//!
//! The backward pass gets at most half of the step budget; the forward pass inherits whatever
//! the backward pass left unused. This keeps the seed close to the middle of the curve.
use glam::DVec2;

use crate::curve::{Curve, CurveId, Direction};
use crate::density::DensityGrid;
use crate::error::Result;
use crate::field::DirectionField;

/// Traces one curve of at most `n_steps` points starting at `seed`.
///
/// The seed itself is always recorded as step 0. The density grid is only read; committing
/// an accepted curve is up to the caller.
pub fn trace_curve<F: DirectionField + ?Sized>(
    id: CurveId,
    seed: DVec2,
    n_steps: usize,
    step_length: f64,
    field: &F,
    density: &DensityGrid,
) -> Result<Curve> {
    let mut curve = Curve::with_capacity(id, n_steps);
    curve.insert_step(seed, Direction::Backward);

    let mut i = 1;
    let mut p = seed;
    while i < n_steps / 2 {
        let Some(next) = advance(p, -step_length, field, density)? else {
            break;
        };
        curve.insert_step(next, Direction::Backward);
        p = next;
        i += 1;
    }

    p = seed;
    while i < n_steps {
        let Some(next) = advance(p, step_length, field, density)? else {
            break;
        };
        curve.insert_step(next, Direction::Forward);
        p = next;
        i += 1;
    }

    Ok(curve)
}

/// One signed step from `p`, or `None` when integration has to stop.
#[inline]
fn advance<F: DirectionField + ?Sized>(
    p: DVec2,
    signed_step: f64,
    field: &F,
    density: &DensityGrid,
) -> Result<Option<DVec2>> {
    if field.off_boundaries(p) {
        return Ok(None);
    }
    let angle = field.angle(p)?;
    let next = p + DVec2::new(angle.cos(), angle.sin()) * signed_step;
    if !density.is_valid_next_step(next) {
        return Ok(None);
    }
    Ok(Some(next))
}
