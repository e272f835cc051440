use super::{sign, FloatVector2Ext, IVec2, IntVector2Ext, Vec2, EPS};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(p1: Vec2, d1: Vec2, p2: Vec2, d2: Vec2) -> Option<(f64, f64)> {
    line_line_intersect_2d_eps(p1, d1, p2, d2, EPS)
}

/// [`line_line_intersect_2d`] with a caller-chosen parallelism cutoff on the
/// cross product of the directions.
#[must_use]
pub fn line_line_intersect_2d_eps(
    p1: Vec2,
    d1: Vec2,
    p2: Vec2,
    d2: Vec2,
    eps: f64,
) -> Option<(f64, f64)> {
    let cross = d1.det(d2);
    if cross.abs() < eps {
        return None;
    }
    let dp = p2 - p1;
    let t = dp.det(d2) / cross;
    let u = dp.det(d1) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Parallel segments report no intersection, even when they overlap.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: Vec2,
    a1: Vec2,
    b0: Vec2,
    b1: Vec2,
) -> Option<(Vec2, f64, f64)> {
    let (t, u) = line_line_intersect_2d(a0, a1 - a0, b0, b1 - b0)?;

    // Use a small epsilon to include endpoints.
    if (-EPS..=1.0 + EPS).contains(&t) && (-EPS..=1.0 + EPS).contains(&u) {
        let t = t.clamp(0.0, 1.0);
        Some((point_at(a0, a1 - a0, t), t, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Strict crossing test for segments `a0`-`a1` and `b0`-`b1`.
///
/// Each endpoint is classified against the other segment's line with
/// [`sign`]; touching, endpoint contact and collinear overlap do not count.
#[must_use]
pub fn segments_properly_cross(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> bool {
    let va = a1 - a0;
    let vb = b1 - b0;
    let d1 = sign(va.det(b0 - a0), EPS);
    let d2 = sign(va.det(b1 - a0), EPS);
    let d3 = sign(vb.det(a0 - b0), EPS);
    let d4 = sign(vb.det(a1 - b0), EPS);
    d1 * d2 < 0 && d3 * d4 < 0
}

/// Exact inclusive intersection test for integer segments.
///
/// Endpoint contact and collinear overlap count as intersecting.
#[must_use]
pub fn segments_intersect_int(a0: IVec2, a1: IVec2, b0: IVec2, b1: IVec2) -> bool {
    let d1 = (a1 - a0).det(b0 - a0).signum();
    let d2 = (a1 - a0).det(b1 - a0).signum();
    let d3 = (b1 - b0).det(a0 - b0).signum();
    let d4 = (b1 - b0).det(a1 - b0).signum();
    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }
    (d1 == 0 && on_segment_int(b0, a0, a1))
        || (d2 == 0 && on_segment_int(b1, a0, a1))
        || (d3 == 0 && on_segment_int(a0, b0, b1))
        || (d4 == 0 && on_segment_int(a1, b0, b1))
}

/// Exact test for `p` lying on the closed segment `a`-`b`.
#[must_use]
pub fn on_segment_int(p: IVec2, a: IVec2, b: IVec2) -> bool {
    let pa = a - p;
    let pb = b - p;
    pa.det(pb) == 0 && pa.dot(&pb) <= 0
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: Vec2, dir: Vec2, t: f64) -> Vec2 {
    origin + dir * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    fn iv(x: i64, y: i64) -> IVec2 {
        IVec2::new(x, y)
    }

    #[test]
    fn line_line_perpendicular() {
        // X-axis and the vertical line x = 2.
        let (t, u) =
            line_line_intersect_2d(v(0.0, 0.0), v(1.0, 0.0), v(2.0, -1.0), v(0.0, 1.0)).unwrap();
        assert!((t - 2.0).abs() < TOL);
        assert!((u - 1.0).abs() < TOL);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        let r = line_line_intersect_2d(v(0.0, 0.0), v(1.0, 1.0), v(0.0, 1.0), v(2.0, 2.0));
        assert!(r.is_none());
    }

    #[test]
    fn parallel_cutoff_is_configurable() {
        let (p1, d1) = (v(0.0, 0.0), v(1.0, 0.0));
        let (p2, d2) = (v(0.0, -1.0), v(1.0, 5e-9));
        assert!(line_line_intersect_2d(p1, d1, p2, d2).is_none());
        let (t, _) = line_line_intersect_2d_eps(p1, d1, p2, d2, 1e-12).unwrap();
        assert!((t - 2e8).abs() < 1e-3);
    }

    #[test]
    fn segment_segment_crossing() {
        let (p, t, u) =
            segment_segment_intersect_2d(v(0.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), v(2.0, 0.0))
                .unwrap();
        assert!((p - v(1.0, 1.0)).norm() < TOL);
        assert!((t - 0.5).abs() < TOL);
        assert!((u - 0.5).abs() < TOL);
    }

    #[test]
    fn segment_segment_no_crossing() {
        let r = segment_segment_intersect_2d(v(0.0, 0.0), v(1.0, 0.0), v(2.0, -1.0), v(2.0, 1.0));
        assert!(r.is_none());
    }

    #[test]
    fn proper_crossing_excludes_touching() {
        // Crossing in the interiors.
        assert!(segments_properly_cross(v(0.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), v(2.0, 0.0)));
        // T-junction: endpoint of b touches the interior of a.
        assert!(!segments_properly_cross(v(0.0, 0.0), v(2.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)));
        // Collinear overlap.
        assert!(!segments_properly_cross(v(0.0, 0.0), v(2.0, 0.0), v(1.0, 0.0), v(3.0, 0.0)));
    }

    #[test]
    fn exact_intersection_includes_touching() {
        assert!(segments_intersect_int(iv(0, 0), iv(2, 0), iv(1, 0), iv(1, 1)));
        assert!(segments_intersect_int(iv(0, 0), iv(2, 0), iv(1, 0), iv(3, 0)));
        assert!(segments_intersect_int(iv(0, 0), iv(2, 2), iv(0, 2), iv(2, 0)));
        assert!(!segments_intersect_int(iv(0, 0), iv(1, 0), iv(2, 0), iv(3, 0)));
        assert!(!segments_intersect_int(iv(0, 0), iv(2, 0), iv(1, 1), iv(1, 2)));
    }

    #[test]
    fn on_segment_includes_endpoints() {
        assert!(on_segment_int(iv(0, 0), iv(0, 0), iv(4, 4)));
        assert!(on_segment_int(iv(2, 2), iv(0, 0), iv(4, 4)));
        assert!(!on_segment_int(iv(5, 5), iv(0, 0), iv(4, 4)));
        assert!(!on_segment_int(iv(2, 3), iv(0, 0), iv(4, 4)));
    }

    #[test]
    fn point_at_interpolation() {
        let p = point_at(v(1.0, 1.0), v(2.0, -1.0), 0.5);
        assert!((p - v(2.0, 0.5)).norm() < TOL);
    }
}
