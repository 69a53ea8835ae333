#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use flow_curves::field::FlowField;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Smooth swirling field used by every bench.
pub fn swirl_field(width: usize) -> FlowField {
    let w = width as f64;
    FlowField::from_fn(width, |col, row| {
        let x = col as f64 / w;
        let y = row as f64 / w;
        (x * 6.0).sin() * 2.0 + (y * 4.0).cos() * 1.5
    })
    .expect("bench field width is non-zero")
}
