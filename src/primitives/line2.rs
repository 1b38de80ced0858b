//! 2D infinite line type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D infinite line defined by a point and direction.
///
/// # Example
///
/// ```
/// use curvekit::primitives::{Line2, Point2, Vec2};
///
/// let a: Line2<f64> = Line2::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
/// let b = Line2::new(Point2::new(4.0, 0.0), Vec2::new(-1.0, 1.0));
/// let hit = a.intersect(&b).unwrap();
/// assert!((hit.x - 2.0).abs() < 1e-12 && (hit.y - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// A point on the line
    pub origin: Point2<F>,
    /// Direction vector of the line (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a new line from a point and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a line passing through two points.
    #[inline]
    pub fn from_points(p1: Point2<F>, p2: Point2<F>) -> Self {
        Self::new(p1, p2 - p1)
    }

    /// Creates the line through `point` with slope `dy/dx`.
    ///
    /// Slopes whose magnitude exceeds `vertical_threshold` (or are infinite)
    /// produce a vertical line rather than a near-degenerate direction.
    pub fn through_with_slope(point: Point2<F>, slope: F, vertical_threshold: F) -> Self {
        if !slope.is_finite() || slope.abs() > vertical_threshold {
            Self::new(point, Vec2::new(F::zero(), F::one()))
        } else {
            Self::new(point, Vec2::new(F::one(), slope))
        }
    }

    /// Returns the point on the line at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Returns the unit normal vector (perpendicular to direction, pointing "left").
    #[inline]
    pub fn unit_normal(&self) -> Option<Vec2<F>> {
        self.direction.perpendicular().normalize()
    }

    /// Intersects two lines.
    ///
    /// Returns `None` when the lines are parallel (including coincident) or
    /// either direction is degenerate.
    pub fn intersect(&self, other: &Line2<F>) -> Option<Point2<F>> {
        let cross = self.direction.cross(other.direction);
        let scale = self.direction.magnitude() * other.direction.magnitude();

        if scale <= F::epsilon() || cross.abs() <= F::epsilon() * scale {
            return None;
        }

        let delta = other.origin - self.origin;
        let t = delta.cross(other.direction) / cross;
        Some(self.point_at(t))
    }

    /// Returns the symmetric 2x2 matrix that reflects vectors across this
    /// line's direction, as `[[a, b], [b, d]]`.
    ///
    /// Returns `None` for a degenerate direction.
    pub fn reflection_matrix(&self) -> Option<[[F; 2]; 2]> {
        let u = self.direction.normalize()?;
        let two = F::one() + F::one();
        let b = two * u.x * u.y;
        Some([
            [two * u.x * u.x - F::one(), b],
            [b, two * u.y * u.y - F::one()],
        ])
    }

    /// Reflects `point` across this line.
    ///
    /// A degenerate line reflects through its origin point.
    pub fn reflect_point(&self, point: Point2<F>) -> Point2<F> {
        match self.reflection_matrix() {
            Some([[a, b], [_, d]]) => {
                let v = point - self.origin;
                self.origin + Vec2::new(a * v.x + b * v.y, b * v.x + d * v.y)
            }
            None => self.origin.reflect(point),
        }
    }
}
