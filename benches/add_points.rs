use criterion::{
    criterion_group, criterion_main, AxisScale, BatchSize, BenchmarkId, Criterion,
    PlotConfiguration, Throughput,
};
use kdtree2d::test_utils::rand_points;
use kdtree2d::KdTree;
use std::hint::black_box;

pub fn add_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("Add Points");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in [100usize, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("f64", size), &size, |b, &size| {
            b.iter_batched(
                || rand_points::<f64>(size, 1),
                |points| {
                    let mut tree: KdTree<f64> = KdTree::with_capacity(points.len());
                    for point in points {
                        tree.insert(point).unwrap();
                    }
                    black_box(tree)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, add_points);
criterion_main!(benches);
