//! Jittered-grid seed sampling strategy.
use mint::Vector2;
use rand::Rng;

use crate::sampling::{clamp_open, rand01, SeedSampling};

/// One seed per grid cell, optionally displaced inside its cell.
#[derive(Debug, Clone)]
pub struct JitterGridSeeds {
    /// Jitter amount in [0, 1], where 0 is cell centers and 1 is max jitter.
    pub jitter: f64,
    /// Grid spacing; usually a small multiple of `d_sep`.
    pub spacing: f64,
}

impl JitterGridSeeds {
    /// Create a new JitterGridSeeds with specified jitter (0.0 to 1.0).
    pub fn new(jitter: f64, spacing: f64) -> Self {
        Self {
            jitter: jitter.clamp(0.0, 1.0),
            spacing,
        }
    }
}

impl SeedSampling for JitterGridSeeds {
    fn generate(&self, field_width: f64, rng: &mut dyn Rng) -> Vec<Vector2<f64>> {
        if !field_width.is_finite() || field_width <= 0.0 {
            return Vec::new();
        }

        let w = field_width;
        let eff = if self.spacing.is_finite() && self.spacing > 0.0 {
            self.spacing
        } else {
            (w / 10.0).max(1.0)
        };

        let n = ((w / eff).floor() as usize).max(1);
        let cell = w / n as f64;
        let max_jitter = self.jitter * (cell * 0.5);

        let mut points = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let cx = (col as f64 + 0.5) * cell;
                let cy = (row as f64 + 0.5) * cell;
                let (jx, jy) = if max_jitter > 0.0 {
                    (
                        (rand01(rng) * 2.0 - 1.0) * max_jitter,
                        (rand01(rng) * 2.0 - 1.0) * max_jitter,
                    )
                } else {
                    (0.0, 0.0)
                };

                points.push(Vector2 {
                    x: clamp_open(cx + jx, w),
                    y: clamp_open(cy + jy, w),
                });
            }
        }

        points
    }
}
