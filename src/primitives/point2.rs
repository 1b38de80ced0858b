//! 2D point type for positions.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point representing a position.
///
/// Points are plain values; two points with equal coordinates are the same
/// point. Subtracting points yields a [`Vec2`], and a point can be offset by a
/// vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub fn origin() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        (other - self).magnitude()
    }

    /// Returns the point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let half = F::one() / (F::one() + F::one());
        Self::new((self.x + other.x) * half, (self.y + other.y) * half)
    }

    /// Linearly interpolates between `self` (t = 0) and `other` (t = 1).
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        let mt = F::one() - t;
        Self::new(mt * self.x + t * other.x, mt * self.y + t * other.y)
    }

    /// Reflects `other` through this point (`2 * self - other`).
    #[inline]
    pub fn reflect(self, other: Self) -> Self {
        Self::new(
            self.x + self.x - other.x,
            self.y + self.y - other.y,
        )
    }

    /// Returns the vector from the origin to this point.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, offset: Vec2<F>) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, offset: Vec2<F>) -> Self {
        Self::new(self.x - offset.x, self.y - offset.y)
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}
