//! Logging setup and stdout reporting for the example binaries.
use flow_curves::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber; `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

pub fn print_summary(title: &str, result: &PlacementResult) {
    let lengths: Vec<usize> = result.curves.iter().map(Curve::steps_taken).collect();
    let longest = lengths.iter().copied().max().unwrap_or(0);
    let mean = if lengths.is_empty() {
        0.0
    } else {
        lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
    };

    println!("== {title}");
    println!("curves:           {}", result.curves.len());
    println!("points:           {}", result.total_steps());
    println!("longest curve:    {longest}");
    println!("mean curve:       {mean:.1}");
    println!("seeds evaluated:  {}", result.seeds_evaluated);
    println!("seeds rejected:   {}", result.seeds_rejected);
    println!("curves discarded: {}", result.curves_discarded);
}

/// Prints `curve_id,steps_taken,x,y,direction_id,step_id` rows, at most `limit` of them.
pub fn print_rows_csv(result: &PlacementResult, limit: usize) {
    println!("curve_id,steps_taken,x,y,direction_id,step_id");
    for row in result.rows().into_iter().take(limit) {
        println!(
            "{},{},{:.6},{:.6},{},{}",
            row.curve_id, row.steps_taken, row.x, row.y, row.direction_id, row.step_id
        );
    }
}
