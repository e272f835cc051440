//! Triangle centers and related closed forms.
//!
//! The circumcenter formula divides by twice the signed triangle area, so
//! collinear input is rejected with `GeometryError::CollinearPoints` instead
//! of producing infinities.

use super::{FloatVector2Ext, IVec2, IntVector2Ext, Vec2, EPS};
use crate::error::{GeometryError, Result};

/// Circumcenter of triangle `abc` (intersection of the perpendicular bisectors).
///
/// # Errors
///
/// Returns `GeometryError::CollinearPoints` if the three points are collinear.
pub fn circumcenter(a: Vec2, b: Vec2, c: Vec2) -> Result<Vec2> {
    let (a1, b1) = (b.x - a.x, b.y - a.y);
    let (a2, b2) = (c.x - a.x, c.y - a.y);
    let c1 = a1 * a1 + b1 * b1;
    let c2 = a2 * a2 + b2 * b2;
    let d = 2.0 * (a1 * b2 - a2 * b1);
    if d.abs() < EPS {
        return Err(GeometryError::CollinearPoints.into());
    }
    Ok(Vec2::new(
        a.x + (c1 * b2 - c2 * b1) / d,
        a.y + (a1 * c2 - a2 * c1) / d,
    ))
}

/// Circumradius `R = |ab| |ac| |bc| / (2 |ab x ac|)`.
///
/// # Errors
///
/// Returns `GeometryError::CollinearPoints` if the three points are collinear.
pub fn circumradius(a: Vec2, b: Vec2, c: Vec2) -> Result<f64> {
    let area2 = (b - a).det(c - a).abs();
    if area2 < EPS {
        return Err(GeometryError::CollinearPoints.into());
    }
    // Divide before the last multiplication to keep magnitudes moderate.
    Ok(0.5 * a.dist(b) * a.dist(c) / area2 * b.dist(c))
}

/// Orthocenter of triangle `abc` (intersection of the altitudes).
///
/// Uses the Euler relation `H = A + B + C - 2O`.
///
/// # Errors
///
/// Returns `GeometryError::CollinearPoints` if the three points are collinear.
pub fn orthocenter(a: Vec2, b: Vec2, c: Vec2) -> Result<Vec2> {
    let o = circumcenter(a, b, c)?;
    Ok(a + b + c - o * 2.0)
}

/// Incenter of triangle `abc`: vertices weighted by the opposite side lengths.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if all three points coincide.
pub fn incenter(a: Vec2, b: Vec2, c: Vec2) -> Result<Vec2> {
    let bc = b.dist(c);
    let ac = a.dist(c);
    let ab = a.dist(b);
    let sum = bc + ac + ab;
    if sum < EPS {
        return Err(GeometryError::Degenerate("triangle has zero perimeter".into()).into());
    }
    Ok((a * bc + b * ac + c * ab) / sum)
}

/// Length of the side opposite to `angle`, given the two adjacent sides.
#[must_use]
pub fn law_of_cosines(a: f64, b: f64, angle: f64) -> f64 {
    (a * a + b * b - 2.0 * a * b * angle.cos()).max(0.0).sqrt()
}

/// Exact test for `p` inside or on triangle `abc`.
///
/// Compares the triangle's doubled area with the sum of the three
/// sub-triangles formed with `p`.
#[must_use]
pub fn point_in_triangle(a: IVec2, b: IVec2, c: IVec2, p: IVec2) -> bool {
    let (pa, pb, pc) = (a - p, b - p, c - p);
    (b - a).det(c - a).abs() == pa.det(pb).abs() + pb.det(pc).abs() + pc.det(pa).abs()
}
