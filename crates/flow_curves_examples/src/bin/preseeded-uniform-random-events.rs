use flow_curves::prelude::*;
use flow_curves_examples::{init_tracing, noise_like_field, print_summary};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let width = 120;
    let field = noise_like_field(width, 0.05)?;

    let mut rng = StdRng::seed_from_u64(7);
    let seeds = UniformRandomSeeds::new(4000).generate_seeds(width as f64, &mut rng);

    let mut accepted_lengths = Vec::new();
    let mut rejected = 0usize;
    let mut sink = FnSink::new(|event: PlacementEvent| match event {
        PlacementEvent::CurveAccepted { steps_taken, .. } => accepted_lengths.push(steps_taken),
        PlacementEvent::SeedRejected { .. } => rejected += 1,
        _ => {}
    });

    let config = PlacementConfig::new(600, 120, 0.5, 1.0).with_min_steps_allowed(6);
    let result = run_preseeded_with_events(&field, &seeds, &config, &mut sink)?;
    drop(sink);

    print_summary("pre-seeded uniform random over smooth noise", &result);
    println!(
        "events: {} accepted, {} rejected seeds",
        accepted_lengths.len(),
        rejected
    );
    Ok(())
}
