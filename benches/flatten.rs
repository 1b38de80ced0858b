//! Benchmarks for spline flattening.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use curvekit::curves::{BezierSpline, CatmullRom2, CubicBezier2, NaturalCubicSpline};
use curvekit::flatten::{cubic_to_quads, Spline, SplineToBezier};
use curvekit::Point2;

/// Knots along a gentle wave.
fn generate_knots(count: usize) -> Vec<Point2<f64>> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            Point2::new(x, (x * 0.7).sin() * 3.0)
        })
        .collect()
}

fn bench_cubic_to_quads(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubic_to_quads");

    let curve = CubicBezier2::new(
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 10.0),
        Point2::new(7.0, -10.0),
        Point2::new(10.0, 0.0),
    );

    // Tighter tolerance = more quads
    for tolerance in [0.1, 0.01, 0.001] {
        group.bench_with_input(
            BenchmarkId::new("tolerance", format!("{}", tolerance)),
            &tolerance,
            |b, &tol| b.iter(|| cubic_to_quads(&curve, black_box(tol), 3)),
        );
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("spline_to_bezier");
    let converter = SplineToBezier::new();

    for count in [10, 100, 1000] {
        let knots = generate_knots(count);
        let natural = NaturalCubicSpline::new(knots.clone()).unwrap();
        let catmull = CatmullRom2::centripetal(knots.clone());
        let bezier = BezierSpline::new(knots);

        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("cartesian", count), &natural, |b, s| {
            b.iter(|| converter.convert(Spline::Cartesian(s), black_box(0.01)))
        });
        group.bench_with_input(BenchmarkId::new("catmull_rom", count), &catmull, |b, s| {
            b.iter(|| converter.convert(Spline::CatmullRom(s), black_box(0.01)))
        });
        group.bench_with_input(BenchmarkId::new("cubic_bezier", count), &bezier, |b, s| {
            b.iter(|| converter.convert(Spline::CubicBezier(s), black_box(0.01)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cubic_to_quads, bench_convert);
criterion_main!(benches);
