use crate::error::{GeometryError, Result};
use crate::math::distance_2d::{point_to_line_dist, project_onto_line};
use crate::math::intersect_2d::{line_line_intersect_2d_eps, point_at};
use crate::math::{FloatVector2Ext, IVec2, IntVector2Ext, Vec2, EPS};

/// An infinite line through two distinct lattice points.
///
/// The direction vector is `p2 - p1`; "left" means counterclockwise of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub p1: IVec2,
    pub p2: IVec2,
}

impl Line {
    #[must_use]
    pub const fn new(p1: IVec2, p2: IVec2) -> Self {
        Self { p1, p2 }
    }

    /// Returns the direction vector `p2 - p1`.
    #[must_use]
    pub fn direction(&self) -> IVec2 {
        self.p2 - self.p1
    }

    /// Twice the signed area of `p1, p2, p`: positive when `p` is on the left.
    #[must_use]
    pub fn orientation(&self, p: IVec2) -> i64 {
        self.direction().det(p - self.p1)
    }

    #[must_use]
    pub fn contains(&self, p: IVec2) -> bool {
        self.orientation(p) == 0
    }

    /// The line through `p` perpendicular to `self`, directed a quarter turn
    /// counterclockwise from it.
    #[must_use]
    pub fn perpendicular_through(&self, p: IVec2) -> Line {
        Line::new(p, p + self.direction().rotate_ccw90())
    }

    #[must_use]
    pub fn to_f64(&self) -> LineF {
        LineF::new(self.p1.to_f64(), self.p2.to_f64())
    }
}

/// An infinite line through two distinct floating points.
///
/// `point_at(t)` is `p1 + t * (p2 - p1)`, so `t = 0` and `t = 1` hit the
/// defining points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineF {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl LineF {
    #[must_use]
    pub const fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    /// Returns the direction vector `p2 - p1`.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.p2 - self.p1
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Vec2 {
        point_at(self.p1, self.direction(), t)
    }

    /// Strictly left of the line, by more than [`EPS`] on the cross product.
    #[must_use]
    pub fn is_on_left(&self, p: Vec2) -> bool {
        self.direction().det(p - self.p1) > EPS
    }

    /// Signed distance, positive on the left.
    #[must_use]
    pub fn signed_distance(&self, p: Vec2) -> f64 {
        let v = self.direction();
        v.det(p - self.p1) / v.length()
    }

    #[must_use]
    pub fn distance_to(&self, p: Vec2) -> f64 {
        point_to_line_dist(p, self.p1, self.p2)
    }

    /// Orthogonal projection of `p` onto the line.
    #[must_use]
    pub fn projection(&self, p: Vec2) -> Vec2 {
        project_onto_line(p, self.p1, self.p2)
    }

    /// Intersection point of two lines.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParallelLines` when the directions are parallel
    /// (cross product within [`EPS`]), including coincident lines.
    pub fn intersection(&self, other: &LineF) -> Result<Vec2> {
        self.intersection_within(other, EPS)
    }

    /// Like [`intersection`](Self::intersection), with `eps` as the
    /// parallelism cutoff.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParallelLines` when the cross product of the
    /// directions is within `eps`.
    pub fn intersection_within(&self, other: &LineF, eps: f64) -> Result<Vec2> {
        let (t, _) = line_line_intersect_2d_eps(
            self.p1,
            self.direction(),
            other.p1,
            other.direction(),
            eps,
        )
        .ok_or(GeometryError::ParallelLines)?;
        Ok(self.point_at(t))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn orientation_sign() {
        let l = Line::new(IVec2::new(0, 0), IVec2::new(10, 0));
        assert!(l.orientation(IVec2::new(3, 5)) > 0);
        assert!(l.orientation(IVec2::new(3, -5)) < 0);
        assert!(l.contains(IVec2::new(-7, 0)));
    }

    #[test]
    fn perpendicular_through_point() {
        let l = Line::new(IVec2::new(0, 0), IVec2::new(2, 1));
        let p = IVec2::new(5, 5);
        let perp = l.perpendicular_through(p);
        assert_eq!(perp.p1, p);
        assert_eq!(perp.direction().dot(&l.direction()), 0);
        assert!(l.direction().det(perp.direction()) > 0);
    }

    #[test]
    fn intersection_of_crossing_lines() {
        let a = LineF::new(v(0.0, 0.0), v(4.0, 4.0));
        let b = LineF::new(v(0.0, 4.0), v(4.0, 0.0));
        let p = a.intersection(&b).unwrap();
        assert!(p.approx_eq(v(2.0, 2.0)), "p={p:?}");
    }

    #[test]
    fn intersection_of_parallel_lines_fails() {
        let a = LineF::new(v(0.0, 0.0), v(1.0, 1.0));
        let b = LineF::new(v(0.0, 1.0), v(1.0, 2.0));
        assert!(a.intersection(&b).is_err());
        // Coincident lines are parallel too.
        assert!(a.intersection(&a).is_err());
    }

    #[test]
    fn nearly_parallel_lines_under_a_tighter_cutoff() {
        let a = LineF::new(v(0.0, 0.0), v(1.0, 0.0));
        let b = LineF::new(v(0.0, -1.0), v(1.0, -1.0 + 5e-9));
        assert!(a.intersection(&b).is_err());
        let p = a.intersection_within(&b, 1e-12).unwrap();
        assert_abs_diff_eq!(p.y, 0.0);
        assert!((p.x / 2e8 - 1.0).abs() < 1e-6, "p={p:?}");
    }

    #[test]
    fn left_side_is_strict() {
        let l = LineF::new(v(0.0, 0.0), v(1.0, 0.0));
        assert!(l.is_on_left(v(5.0, 1.0)));
        assert!(!l.is_on_left(v(5.0, 0.0)));
        assert!(!l.is_on_left(v(5.0, -1.0)));
        assert_abs_diff_eq!(l.signed_distance(v(5.0, -2.0)), -2.0);
    }

    #[test]
    fn projection_and_distance() {
        let l = LineF::new(v(0.0, 0.0), v(2.0, 2.0));
        let q = l.projection(v(0.0, 2.0));
        assert!(q.approx_eq(v(1.0, 1.0)));
        assert_abs_diff_eq!(l.distance_to(v(0.0, 2.0)), 2.0_f64.sqrt(), epsilon = 1e-12);
        assert!(l.point_at(0.5).approx_eq(v(1.0, 1.0)));
    }
}
