//! Vector kernel for the two coordinate families.
//!
//! `IVec2` operations are exact for coordinates below `2^30` in magnitude.
//! `Vec2` operations carry an absolute error of a few [`EPS`]; their
//! predicates take the tolerance into account.
//!
//! Addition, subtraction, scalar multiplication and `dot` come from
//! `nalgebra`; the traits below add the planar operations on top.

use std::cmp::Ordering;

use super::{IVec2, Vec2, EPS};
use crate::error::{GeometryError, Result};

/// Planar operations on exact integer vectors.
pub trait IntVector2Ext: Copy {
    /// 2D cross product `a.x * b.y - a.y * b.x`.
    ///
    /// Positive when `other` lies counterclockwise of `self`.
    fn det(self, other: Self) -> i64;
    fn len2(self) -> i64;
    fn dist2(self, other: Self) -> i64;
    fn length(self) -> f64;
    fn dist(self, other: Self) -> f64;
    fn rotate_ccw90(self) -> Self;
    fn rotate_cw90(self) -> Self;
    /// Polar angle in `(-pi, pi]`. The zero vector maps to `0`.
    fn polar_angle(self) -> f64;
    /// Canonical representative pointing into the upper half plane
    /// (`y > 0`, or `y == 0` and `x >= 0`).
    fn up(self) -> Self;
    fn is_parallel(self, other: Self) -> bool;
    /// Unsigned angle between two non-zero vectors, in `[0, pi]`.
    fn angle_to(self, other: Self) -> f64;
    /// Product of the vectors read as Gaussian integers `x + iy`.
    fn complex_mul(self, other: Self) -> Self;
    /// Lexicographic order by `x`, then `y`.
    fn lex_cmp(&self, other: &Self) -> Ordering;
    fn to_f64(self) -> Vec2;
}

impl IntVector2Ext for IVec2 {
    #[inline]
    fn det(self, other: Self) -> i64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    fn len2(self) -> i64 {
        self.dot(&self)
    }

    #[inline]
    fn dist2(self, other: Self) -> i64 {
        (self - other).len2()
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn length(self) -> f64 {
        (self.len2() as f64).sqrt()
    }

    #[inline]
    fn dist(self, other: Self) -> f64 {
        (self - other).length()
    }

    #[inline]
    fn rotate_ccw90(self) -> Self {
        IVec2::new(-self.y, self.x)
    }

    #[inline]
    fn rotate_cw90(self) -> Self {
        IVec2::new(self.y, -self.x)
    }

    #[inline]
    fn polar_angle(self) -> f64 {
        self.to_f64().polar_angle()
    }

    #[inline]
    fn up(self) -> Self {
        if self.y < 0 || (self.y == 0 && self.x < 0) {
            -self
        } else {
            self
        }
    }

    #[inline]
    fn is_parallel(self, other: Self) -> bool {
        self.det(other) == 0
    }

    #[allow(clippy::cast_precision_loss)]
    fn angle_to(self, other: Self) -> f64 {
        let cos = self.dot(&other) as f64 / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos()
    }

    #[inline]
    fn complex_mul(self, other: Self) -> Self {
        IVec2::new(
            self.x * other.x - self.y * other.y,
            self.x * other.y + other.x * self.y,
        )
    }

    #[inline]
    fn lex_cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn to_f64(self) -> Vec2 {
        Vec2::new(self.x as f64, self.y as f64)
    }
}

/// Planar operations on floating vectors.
pub trait FloatVector2Ext: Copy {
    fn det(self, other: Self) -> f64;
    fn len2(self) -> f64;
    fn dist2(self, other: Self) -> f64;
    fn length(self) -> f64;
    fn dist(self, other: Self) -> f64;
    fn rotate_ccw90(self) -> Self;
    fn rotate_cw90(self) -> Self;
    /// Counterclockwise rotation by `rad` radians.
    fn rotate_ccw(self, rad: f64) -> Self;
    /// Polar angle in `(-pi, pi]`.
    fn polar_angle(self) -> f64;
    fn up(self) -> Self;
    /// Parallel within [`EPS`] on the cross product.
    fn is_parallel(self, other: Self) -> bool;
    fn angle_to(self, other: Self) -> f64;
    /// Unit vector perpendicular to `self`, pointing to its left.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` for a vector shorter than [`EPS`].
    fn unit_normal(self) -> Result<Self>;
    fn approx_eq(self, other: Self) -> bool;
    /// Lexicographic "strictly less" with a dead zone of [`EPS`] per axis.
    fn approx_lex_lt(self, other: Self) -> bool;
}

impl FloatVector2Ext for Vec2 {
    #[inline]
    fn det(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    fn len2(self) -> f64 {
        self.dot(&self)
    }

    #[inline]
    fn dist2(self, other: Self) -> f64 {
        (self - other).len2()
    }

    #[inline]
    fn length(self) -> f64 {
        self.len2().sqrt()
    }

    #[inline]
    fn dist(self, other: Self) -> f64 {
        (self - other).length()
    }

    #[inline]
    fn rotate_ccw90(self) -> Self {
        Vec2::new(-self.y, self.x)
    }

    #[inline]
    fn rotate_cw90(self) -> Self {
        Vec2::new(self.y, -self.x)
    }

    fn rotate_ccw(self, rad: f64) -> Self {
        let (sin, cos) = rad.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    fn polar_angle(self) -> f64 {
        // -0.0 would map the negative x axis to -pi.
        (self.y + 0.0).atan2(self.x)
    }

    #[inline]
    fn up(self) -> Self {
        if self.y < 0.0 || (self.y == 0.0 && self.x < 0.0) {
            -self
        } else {
            self
        }
    }

    #[inline]
    fn is_parallel(self, other: Self) -> bool {
        self.det(other).abs() < EPS
    }

    fn angle_to(self, other: Self) -> f64 {
        let cos = self.dot(&other) / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos()
    }

    fn unit_normal(self) -> Result<Self> {
        let len = self.length();
        if len < EPS {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self.rotate_ccw90() / len)
    }

    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }

    #[inline]
    fn approx_lex_lt(self, other: Self) -> bool {
        self.x + EPS < other.x || (self.x < other.x + EPS && self.y + EPS < other.y)
    }
}

/// Sorts vectors by polar angle, ascending over `(-pi, pi]`.
pub fn sort_by_polar_angle(vs: &mut [IVec2]) {
    vs.sort_by(|a, b| a.polar_angle().total_cmp(&b.polar_angle()));
}

/// Replaces every vector by its [`IntVector2Ext::up`] representative and sorts
/// the result by angle in `[0, pi)` using cross products only.
///
/// Collinear vectors end up adjacent. Zero vectors sort first.
pub fn sort_upper_half(vs: &mut [IVec2]) {
    for v in vs.iter_mut() {
        *v = v.up();
    }
    let zero = IVec2::zeros();
    vs.sort_by(|a, b| match (*a == zero, *b == zero) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => 0.cmp(&a.det(*b)),
    });
}
