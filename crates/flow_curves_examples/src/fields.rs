//! Procedural direction fields for the example binaries.
use std::f64::consts::{FRAC_PI_2, PI};

use flow_curves::prelude::*;

/// Vortex around the field center, drifting outward by `twist` radians.
pub fn swirl_field(width: usize, twist: f64) -> Result<FlowField> {
    let c = width as f64 / 2.0;
    FlowField::from_fn(width, |col, row| {
        let dx = col as f64 + 0.5 - c;
        let dy = row as f64 + 0.5 - c;
        dy.atan2(dx) + FRAC_PI_2 + twist
    })
}

/// Horizontal flow bent by a sine wave along X.
pub fn waves_field(width: usize, periods: f64, amplitude: f64) -> Result<FlowField> {
    let w = width as f64;
    FlowField::from_fn(width, |col, _row| {
        amplitude * (col as f64 / w * periods * 2.0 * PI).sin()
    })
}

/// Sum of a few incommensurate sinusoids; looks like smooth noise.
pub fn noise_like_field(width: usize, scale: f64) -> Result<FlowField> {
    FlowField::from_fn(width, |col, row| {
        let x = col as f64 * scale;
        let y = row as f64 * scale;
        let v = (x * 1.3 + (y * 0.7).sin()).sin()
            + (y * 1.1 - (x * 0.5).cos()).cos()
            + 0.5 * (x * 2.3 + y * 1.9).sin();
        v * PI / 2.5
    })
}
