use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

use cpack::entities::{BoxItem, Surface};
use cpack::geometry::PlaneFrame;
use cpack::geometry::primitives::{Aabb3, Vec3};
use gtf::config::GTFConfig;
use gtf::opt::gtf_optimizer::GTFOptimizer;

criterion_main!(benches);
criterion_group!(benches, gtf_solve_bench, gtf_rotations_bench);

const N_ITEMS: [usize; 3] = [50, 200, 800];
const ROTATIONS: [usize; 3] = [8, 24, 72];

/// Random boxes scattered around the origin, their footprints cover roughly half of `surface`
fn create_items(n: usize, surface: &Surface, seed: u64) -> Vec<BoxItem> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mean_radius = (0.5 * surface.area() / (n as f64 * std::f64::consts::PI)).sqrt();
    (0..n)
        .map(|id| {
            let half = rng.random_range(0.3..1.0) * mean_radius * std::f64::consts::FRAC_1_SQRT_2;
            let pivot = Vec3::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0), 0.0);
            BoxItem::new(id as u64, pivot, Some(Aabb3::new(pivot, Vec3::new(half, half, half))))
        })
        .collect_vec()
}

/// Benchmark complete packing passes for an increasing number of items.
fn gtf_solve_bench(c: &mut Criterion) {
    let surface = Surface::new(10.0, 10.0);
    let config = GTFConfig {
        random_seed: 1,
        area_usage_limit: 1.0,
        ..GTFConfig::default()
    };

    let mut group = c.benchmark_group("gtf_solve");
    for n in N_ITEMS {
        let items = create_items(n, &surface, 0);
        group.throughput(criterion::Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let mut items = items.clone();
                GTFOptimizer::new(surface, PlaneFrame::xy(), config).pack(&mut items)
            })
        });
    }
    group.finish();
}

/// Benchmark the cost of denser tangent sampling.
fn gtf_rotations_bench(c: &mut Criterion) {
    let surface = Surface::new(10.0, 10.0);
    let items = create_items(200, &surface, 0);

    let mut group = c.benchmark_group("gtf_rotations_around");
    for rotations_around in ROTATIONS {
        let config = GTFConfig {
            random_seed: 1,
            rotations_around,
            ..GTFConfig::default()
        };
        group.bench_function(BenchmarkId::from_parameter(rotations_around), |b| {
            b.iter(|| {
                let mut items = items.clone();
                GTFOptimizer::new(surface, PlaneFrame::xy(), config).pack(&mut items)
            })
        });
    }
    group.finish();
}
