//! Benchmarks for curve operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use curvekit::curves::{BezierSplineControl, CubicBezier2, QuadraticBezier2};
use curvekit::integrate::GaussLegendre;
use curvekit::Point2;

fn bench_bezier_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("bezier_eval");

    let quad = QuadraticBezier2::new(
        Point2::new(0.0, 0.0),
        Point2::new(5.0, 10.0),
        Point2::new(10.0, 0.0),
    );

    let cubic = CubicBezier2::new(
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 10.0),
        Point2::new(7.0, 10.0),
        Point2::new(10.0, 0.0),
    );

    group.bench_function("quadratic_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let t = i as f64 / 1000.0;
                let _ = quad.eval(black_box(t));
            }
        })
    });

    group.bench_function("cubic_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let t = i as f64 / 1000.0;
                let _ = cubic.eval(black_box(t));
            }
        })
    });

    group.finish();
}

fn bench_arc_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc_length");

    let quad = QuadraticBezier2::new(
        Point2::new(0.0, 0.0),
        Point2::new(5.0, 10.0),
        Point2::new(10.0, 0.0),
    );

    let cubic = CubicBezier2::new(
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 10.0),
        Point2::new(7.0, 10.0),
        Point2::new(10.0, 0.0),
    );

    // Closed form
    group.bench_function("quadratic", |b| b.iter(|| black_box(quad).length()));

    // Quadrature, including node setup
    group.bench_function("cubic", |b| b.iter(|| black_box(cubic).length()));

    // Quadrature with nodes reused
    let gauss = GaussLegendre::new(16);
    group.bench_function("cubic_reused_nodes", |b| {
        b.iter(|| cubic.length_at_with(&gauss, black_box(1.0)))
    });

    group.bench_function("cubic_t_at_length", |b| {
        b.iter(|| cubic.t_at_length(black_box(7.5)))
    });

    group.finish();
}

fn bench_gauss_legendre_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_legendre_setup");

    for order in [6, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("order", order), &order, |b, &order| {
            b.iter(|| GaussLegendre::<f64>::new(black_box(order)))
        });
    }

    group.finish();
}

fn bench_coordinate_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_queries");

    let cubic = CubicBezier2::new(
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 10.0),
        Point2::new(7.0, -10.0),
        Point2::new(10.0, 0.0),
    );

    group.bench_function("cubic_t_at_x", |b| b.iter(|| cubic.t_at_x(black_box(4.2))));
    group.bench_function("cubic_x_at_y", |b| b.iter(|| cubic.x_at_y(black_box(0.5))));

    group.finish();
}

/// Knots along a gentle wave.
fn generate_knots(count: usize) -> Vec<Point2<f64>> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            Point2::new(x, (x * 0.7).sin() * 3.0)
        })
        .collect()
}

fn bench_spline_control(c: &mut Criterion) {
    let mut group = c.benchmark_group("bezier_spline_control");

    let open = BezierSplineControl::new();
    let closed = BezierSplineControl::new().with_closed(true);

    for count in [10, 100, 1000] {
        let knots = generate_knots(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("open", count), &knots, |b, knots| {
            b.iter(|| open.construct(black_box(knots)))
        });
        group.bench_with_input(BenchmarkId::new("closed", count), &knots, |b, knots| {
            b.iter(|| closed.construct(black_box(knots)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bezier_eval,
    bench_arc_length,
    bench_gauss_legendre_setup,
    bench_coordinate_queries,
    bench_spline_control
);
criterion_main!(benches);
