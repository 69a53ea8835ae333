//! Uniform random seed sampling strategy.
use mint::Vector2;
use rand::Rng;

use crate::sampling::{clamp_open, rand01, SeedSampling};

/// Uniform i.i.d. random seeds over the field.
#[derive(Debug, Clone)]
pub struct UniformRandomSeeds {
    /// Number of seeds to generate.
    pub count: usize,
}

impl UniformRandomSeeds {
    /// Create a new uniform random sampler that generates `count` seeds.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl SeedSampling for UniformRandomSeeds {
    fn generate(&self, field_width: f64, rng: &mut dyn Rng) -> Vec<Vector2<f64>> {
        if self.count == 0 || !field_width.is_finite() || field_width <= 0.0 {
            return Vec::new();
        }

        (0..self.count)
            .map(|_| {
                let x = clamp_open(rand01(rng) * field_width, field_width);
                let y = clamp_open(rand01(rng) * field_width, field_width);
                Vector2 { x, y }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn empty_for_zero_count_or_non_positive_width() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(UniformRandomSeeds::new(0).generate(10.0, &mut rng).is_empty());
        assert!(UniformRandomSeeds::new(10).generate(0.0, &mut rng).is_empty());
        assert!(UniformRandomSeeds::new(10).generate(-5.0, &mut rng).is_empty());
    }

    #[test]
    fn count_and_bounds_are_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        let seeds = UniformRandomSeeds::new(100).generate(8.0, &mut rng);
        assert_eq!(seeds.len(), 100);
        for p in seeds {
            assert!(p.x > 0.0 && p.x < 8.0);
            assert!(p.y > 0.0 && p.y < 8.0);
        }
    }

    #[test]
    fn determinism_for_same_seed() {
        let s = UniformRandomSeeds::new(32);

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        assert_eq!(s.generate(10.0, &mut rng_a), s.generate(10.0, &mut rng_b));

        let mut rng_c = StdRng::seed_from_u64(456);
        let mut rng_d = StdRng::seed_from_u64(123);
        assert_ne!(s.generate(10.0, &mut rng_c), s.generate(10.0, &mut rng_d));
    }
}
