use flow_curves::prelude::*;
use flow_curves_examples::{init_tracing, print_summary, waves_field};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let width = 150;
    let d_sep = 1.5;
    let field = waves_field(width, 3.0, 0.8)?;

    let mut rng = StdRng::seed_from_u64(42);
    let seeds = JitterGridSeeds::new(0.6, 3.0 * d_sep).generate_seeds(width as f64, &mut rng);

    let config = PlacementConfig::new(1000, 200, 0.75, d_sep).with_min_steps_allowed(8);
    let result = run_preseeded(&field, &seeds, &config)?;

    print_summary("pre-seeded jitter grid over waves", &result);
    Ok(())
}
