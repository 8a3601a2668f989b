use cpack::entities::{Layout, PackableItem, Surface};
use cpack::geometry::primitives::{Circle, Point};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

criterion_main!(benches);
criterion_group!(benches, layout_collides_bench);

const GRID_SIZES: [usize; 3] = [5, 10, 20];
const N_PROBES: usize = 1000;

/// Dense square grid of tangent unit circles
fn grid_layout(n: usize) -> Layout {
    let half = n as f64;
    let mut layout = Layout::new(Surface::new(half, half));
    for i in 0..n {
        for j in 0..n {
            let center = Point(-half + 1.0 + 2.0 * i as f64, -half + 1.0 + 2.0 * j as f64);
            layout.place(&PackableItem::new(i * n + j, 1.0), center);
        }
    }
    layout
}

/// Benchmark how many collision queries against a full layout can be performed every second.
fn layout_collides_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_collides_1k");
    for n in GRID_SIZES {
        let layout = grid_layout(n);
        let probes = (0..N_PROBES)
            .map(|i| {
                let t = i as f64 / N_PROBES as f64;
                Circle::new(Point(t * n as f64 - 0.5 * n as f64, 0.25), 0.1)
            })
            .collect::<Vec<_>>();

        group.throughput(criterion::Throughput::Elements(N_PROBES as u64));
        group.bench_function(BenchmarkId::from_parameter(n * n), |b| {
            b.iter(|| probes.iter().filter(|p| layout.collides(p, None)).count())
        });
    }
    group.finish();
}
