//! Seed-list generators for pre-seeded placement.
//!
//! Every strategy proposes points strictly inside the open field domain `(0, width)²`, so the
//! output can be handed to [`crate::placement::run_preseeded`] without tripping
//! [`crate::error::Error::SeedOutOfBounds`].
use glam::DVec2;
use mint::Vector2;
use rand::Rng;

pub mod jitter_grid;
pub mod uniform_random;

pub use jitter_grid::JitterGridSeeds;
pub use uniform_random::UniformRandomSeeds;

/// Trait for seed sampling over a square field of side `field_width`.
pub trait SeedSampling: Send + Sync {
    fn generate(&self, field_width: f64, rng: &mut dyn Rng) -> Vec<Vector2<f64>>;

    /// Convenience wrapper returning [`DVec2`] seeds.
    fn generate_seeds(&self, field_width: f64, rng: &mut dyn Rng) -> Vec<DVec2> {
        self.generate(field_width, rng)
            .into_iter()
            .map(DVec2::from)
            .collect()
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Clamps `v` into the open interval `(0, width)`.
#[inline]
pub(crate) fn clamp_open(v: f64, width: f64) -> f64 {
    v.clamp(0.0f64.next_up(), width.next_down())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng {
        value: u64,
    }

    impl rand::TryRng for FixedRng {
        type Error = core::convert::Infallible;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            Ok(self.value as u32)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            Ok(self.value)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Self::Error> {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
            Ok(())
        }
    }

    #[test]
    fn rand01_covers_half_open_range() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);

        let mut rng = FixedRng { value: u64::MAX };
        let top = rand01(&mut rng);
        assert!(top < 1.0);
        assert!(top > 0.999_999);

        let mut rng = FixedRng { value: u64::MAX / 2 };
        assert!((rand01(&mut rng) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn clamp_open_excludes_edges() {
        assert!(clamp_open(0.0, 10.0) > 0.0);
        assert!(clamp_open(-3.0, 10.0) > 0.0);
        assert!(clamp_open(10.0, 10.0) < 10.0);
        assert_eq!(clamp_open(4.5, 10.0), 4.5);
    }
}
