use flow_curves::prelude::*;
use flow_curves_examples::{init_tracing, print_rows_csv, print_summary, swirl_field};
use glam::DVec2;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let width = 200;
    let field = swirl_field(width, 0.25)?;

    let config = PlacementConfig::new(800, 300, 0.5, 2.0).with_min_steps_allowed(10);
    let placer = CurvePlacer::try_new(config, &field)?;
    let result = placer.run_frontier(DVec2::new(120.0, 100.0))?;

    print_summary("frontier growth over a swirl", &result);
    print_rows_csv(&result, 20);
    Ok(())
}
