mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flow_curves::density::{DensityGrid, DEFAULT_CELL_CAPACITY};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: usize = 1000;
const SEPARATIONS: [f64; 4] = [20.0, 10.0, 5.0, 2.0];
const QUERIES: usize = 10_000;

fn random_points(rng: &mut StdRng, n: usize) -> Vec<DVec2> {
    let unit = |rng: &mut StdRng| (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
    (0..n)
        .map(|_| DVec2::new(unit(rng) * WIDTH as f64, unit(rng) * WIDTH as f64))
        .collect()
}

fn density_query_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("density/is_valid_next_step");
    group.throughput(common::elements_throughput(QUERIES));

    for &d_sep in &SEPARATIONS {
        let mut rng = StdRng::seed_from_u64(0xD5E9_u64 ^ d_sep.to_bits());
        let mut grid = DensityGrid::new(WIDTH, WIDTH, d_sep, DEFAULT_CELL_CAPACITY);
        for p in random_points(&mut rng, 50_000) {
            grid.insert_coord(p);
        }
        let queries = random_points(&mut rng, QUERIES);

        group.bench_with_input(BenchmarkId::from_parameter(d_sep), &d_sep, |b, _| {
            b.iter(|| {
                let valid = queries
                    .iter()
                    .filter(|p| grid.is_valid_next_step(**p))
                    .count();
                black_box(valid);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = density_query_benches
}
criterion_main!(benches);
