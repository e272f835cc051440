use super::{FloatVector2Ext, IVec2, IntVector2Ext, Vec2, EPS};

/// Returns the distance from `p` to the infinite line through `a` and `b`.
///
/// `a` and `b` must be distinct.
#[must_use]
pub fn point_to_line_dist(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    let v = b - a;
    v.det(p - a).abs() / v.length()
}

/// Returns the minimum distance from `p` to the segment from `a` to `b`.
///
/// The projection parameter is never formed explicitly: the point is
/// classified as lying before `a`, after `b`, or beside the interior.
#[must_use]
pub fn point_to_segment_dist(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    let v = b - a;
    if v.len2() < EPS * EPS {
        // Degenerate segment (zero length).
        return p.dist(a);
    }
    let ap = p - a;
    let bp = p - b;
    if v.dot(&ap) < EPS {
        return ap.length();
    }
    if v.dot(&bp) > -EPS {
        return bp.length();
    }
    v.det(ap).abs() / v.length()
}

/// Orthogonal projection of `p` onto the infinite line through `a` and `b`.
#[must_use]
pub fn project_onto_line(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let v = b - a;
    let t = v.dot(&(p - a)) / v.len2();
    a + v * t
}

/// Exact test for "distance from `p` to segment `a`-`b` is at most `r`".
///
/// Only squared quantities are compared; the interior case widens to `i128`
/// because the squared cross product outgrows `i64` at moderate coordinates.
#[must_use]
pub fn within_range_int(p: IVec2, a: IVec2, b: IVec2, r: i64) -> bool {
    let v = b - a;
    let ap = p - a;
    let bp = p - b;
    let r2 = i128::from(r) * i128::from(r);
    if v.dot(&ap) <= 0 {
        return i128::from(ap.len2()) <= r2;
    }
    if v.dot(&bp) >= 0 {
        return i128::from(bp.len2()) <= r2;
    }
    let cross = i128::from(v.det(ap));
    cross * cross <= i128::from(v.len2()) * r2
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── point_to_segment_dist tests ──

    #[test]
    fn segment_dist_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let d = point_to_segment_dist(v(1.0, 1.0), v(0.0, 0.0), v(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist(v(-1.0, 0.0), v(0.0, 0.0), v(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
        let d = point_to_segment_dist(v(5.0, 4.0), v(0.0, 0.0), v(2.0, 0.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_on_segment() {
        let d = point_to_segment_dist(v(1.0, 0.0), v(0.0, 0.0), v(2.0, 0.0));
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        // Zero-length segment: distance is point-to-point.
        let d = point_to_segment_dist(v(3.0, 4.0), v(0.0, 0.0), v(0.0, 0.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    // ── line helpers ──

    #[test]
    fn line_dist_ignores_segment_bounds() {
        let d = point_to_line_dist(v(10.0, 3.0), v(0.0, 0.0), v(1.0, 0.0));
        assert!((d - 3.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn projection_lands_on_foot() {
        let q = project_onto_line(v(2.0, 2.0), v(0.0, 0.0), v(4.0, 0.0));
        assert!((q - v(2.0, 0.0)).norm() < TOL);
        let q = project_onto_line(v(0.0, 2.0), v(0.0, 0.0), v(1.0, 1.0));
        assert!((q - v(1.0, 1.0)).norm() < TOL);
    }

    // ── within_range_int tests ──

    #[test]
    fn within_range_interior_and_ends() {
        let a = IVec2::new(0, 0);
        let b = IVec2::new(10, 0);
        assert!(within_range_int(IVec2::new(5, 3), a, b, 3));
        assert!(!within_range_int(IVec2::new(5, 4), a, b, 3));
        // Beyond the end the distance is measured to the endpoint: √(9+16) = 5.
        assert!(within_range_int(IVec2::new(13, 4), a, b, 5));
        assert!(!within_range_int(IVec2::new(13, 4), a, b, 4));
        assert!(within_range_int(IVec2::new(-3, -4), a, b, 5));
    }

    #[test]
    fn within_range_large_coordinates() {
        let a = IVec2::new(-1_000_000_000, 0);
        let b = IVec2::new(1_000_000_000, 0);
        assert!(within_range_int(IVec2::new(0, 999_999_999), a, b, 1_000_000_000));
        assert!(!within_range_int(IVec2::new(0, 1_000_000_001), a, b, 1_000_000_000));
    }
}
