//! Flattens one spline of each kind and prints an SVG document to stdout.
//!
//! Run with: RUST_LOG=trace cargo run --example flatten_svg > splines.svg

use curvekit::curves::{BezierSpline, BezierSplineControl, CatmullRom2, NaturalCubicSpline};
use curvekit::flatten::{QuadFlattening, Spline, SplineKind, SplineToBezier};
use curvekit::{CurveError, Point2};

/// Simple SVG builder
struct Svg {
    content: String,
}

impl Svg {
    fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn path(&mut self, d: &str, stroke: &str) {
        self.content.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="0.05"/>"#,
            d, stroke
        ));
        self.content.push('\n');
    }

    fn knots(&mut self, knots: &[Point2<f64>], fill: &str) {
        for knot in knots {
            self.content.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="0.08" fill="{}"/>"#,
                knot.x, knot.y, fill
            ));
            self.content.push('\n');
        }
    }

    fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"-1 -4 14 18\">\n{}</svg>\n",
            self.content
        )
    }
}

fn shifted(knots: &[Point2<f64>], dy: f64) -> Vec<Point2<f64>> {
    knots.iter().map(|p| Point2::new(p.x, p.y + dy)).collect()
}

fn report(kind: SplineKind, out: &QuadFlattening<f64>) {
    log::info!(
        "{kind}: {} segments, {} quads, length {:.4}",
        out.segment_count(),
        out.quads.len(),
        out.total_length()
    );
}

fn main() -> Result<(), CurveError> {
    env_logger::init();

    let knots = vec![
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 3.0),
        Point2::new(4.0, 0.5),
        Point2::new(7.0, 2.5),
        Point2::new(9.0, -1.0),
        Point2::new(12.0, 1.0),
    ];
    let converter = SplineToBezier::new();
    let mut svg = Svg::new();

    let natural = NaturalCubicSpline::new(knots.clone())?;
    let out = converter.convert(Spline::Cartesian(&natural), 0.01);
    report(SplineKind::Cartesian, &out);
    svg.knots(&knots, "black");
    svg.path(&out.to_svg_path(), "crimson");

    let catmull = CatmullRom2::centripetal(shifted(&knots, 5.0));
    let out = converter.convert(Spline::CatmullRom(&catmull), 0.01);
    report(SplineKind::CatmullRom, &out);
    svg.knots(&catmull.points, "black");
    svg.path(&out.to_svg_path(), "seagreen");

    let bezier = BezierSpline::with_control(
        shifted(&knots, 10.0),
        BezierSplineControl::new().with_tension(0.3),
    );
    let out = converter.convert(Spline::CubicBezier(&bezier), 0.01);
    report(SplineKind::CubicBezier, &out);
    svg.knots(bezier.knots(), "black");
    svg.path(&out.to_svg_path(), "royalblue");

    print!("{}", svg.finish());
    Ok(())
}
