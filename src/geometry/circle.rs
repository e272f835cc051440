use std::f64::consts::PI;

use super::{LineF, SegmentF};
use crate::error::{GeometryError, Result};
use crate::math::{FloatVector2Ext, IVec2, IntVector2Ext, Vec2, EPS};

/// A circle with lattice center and integer radius.
///
/// Classification queries (containment, tangency, intersection count) are
/// exact; constructed points are floating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    pub center: IVec2,
    pub r: i64,
}

/// Outcome of intersecting two integer circles.
#[derive(Debug, Clone, PartialEq)]
pub enum CircleIntersection {
    /// Same center and radius: infinitely many common points.
    Coincident,
    /// One circle strictly contains the other, or they are too far apart.
    Separate,
    /// One point on tangency, otherwise two.
    Points(Vec<Vec2>),
}

impl CircleIntersection {
    /// `false` only for coincident circles, whose intersection is not a
    /// finite point set.
    #[must_use]
    pub fn is_normal(&self) -> bool {
        !matches!(self, Self::Coincident)
    }

    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        match self {
            Self::Points(ps) => ps,
            Self::Coincident | Self::Separate => &[],
        }
    }
}

impl Circle {
    #[must_use]
    pub const fn new(center: IVec2, r: i64) -> Self {
        Self { center, r }
    }

    /// Point on the circle at polar angle `rad` around the center.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn point_at(&self, rad: f64) -> Vec2 {
        let (sin, cos) = rad.sin_cos();
        let r = self.r as f64;
        self.center.to_f64() + Vec2::new(r * cos, r * sin)
    }

    /// `p` is inside or on the circle.
    #[must_use]
    pub fn contains(&self, p: IVec2) -> bool {
        self.center.dist2(p) <= self.r * self.r
    }

    /// Directions of the tangent lines through `p`.
    ///
    /// Empty when `p` is strictly inside, a single direction perpendicular to
    /// the radius when `p` is on the circle, two directions otherwise. Each
    /// tangent line is `p + t * dir`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tangents_from(&self, p: IVec2) -> Vec<Vec2> {
        let po = self.center - p;
        let d2 = po.len2();
        let r2 = self.r * self.r;
        if d2 < r2 {
            return Vec::new();
        }
        let po = po.to_f64();
        if d2 == r2 {
            return vec![po.rotate_ccw90()];
        }
        let ang = (self.r as f64 / po.length()).asin();
        vec![po.rotate_ccw(-ang), po.rotate_ccw(ang)]
    }

    /// Intersection points with `other`.
    ///
    /// The angle subtended at the larger circle's center follows from the
    /// law of cosines; an angular half-width within [`EPS`] of zero collapses
    /// to a single tangency point.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn intersect_circle(&self, other: &Circle) -> CircleIntersection {
        let (a, b) = if self.r < other.r {
            (other, self)
        } else {
            (self, other)
        };
        let ab = b.center - a.center;
        let dab2 = ab.len2();
        let diff = a.r - b.r;
        let sum = a.r + b.r;
        if dab2 == 0 {
            return if diff == 0 {
                CircleIntersection::Coincident
            } else {
                CircleIntersection::Separate
            };
        }
        if sum * sum < dab2 || diff * diff > dab2 {
            return CircleIntersection::Separate;
        }

        let angle_ab = ab.polar_angle();
        let cos = (sum * diff + dab2) as f64 / (2.0 * a.r as f64 * ab.length());
        let delta = cos.clamp(-1.0, 1.0).acos();
        let mut points = vec![a.point_at(angle_ab - delta)];
        if delta.abs() > EPS {
            points.push(a.point_at(angle_ab + delta));
        }
        CircleIntersection::Points(points)
    }

    /// Center of the radius-`r` circle through `a` and `b` that lies to the
    /// right of the directed chord `a -> b`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the chord is longer than the
    /// diameter.
    #[allow(clippy::cast_precision_loss)]
    pub fn center_from_chord(a: IVec2, b: IVec2, r: i64) -> Result<Vec2> {
        let ab = b - a;
        let chord2 = ab.len2();
        if chord2 > 4 * r * r {
            return Err(GeometryError::Degenerate(format!(
                "chord of squared length {chord2} does not fit a circle of radius {r}"
            ))
            .into());
        }
        let mid = (a + b).to_f64() * 0.5;
        let d = ((r * r) as f64 - chord2 as f64 / 4.0).max(0.0).sqrt();
        let angle = ab.polar_angle();
        Ok(mid + Vec2::new(d * angle.sin(), -d * angle.cos()))
    }

    /// Overlap test with the axis-aligned rectangle `[min, max]`, boundary
    /// contact included. Requires `min.x < max.x` and `min.y < max.y`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn overlaps_rect(&self, min: IVec2, max: IVec2) -> bool {
        let c = (min + max).to_f64() * 0.5;
        let h = (max - min).to_f64() * 0.5;
        let o = self.center.to_f64();
        // Fold the center into the first quadrant of the rectangle's frame.
        let x = ((o.x - c.x).abs() - h.x).max(0.0);
        let y = ((o.y - c.y).abs() - h.y).max(0.0);
        x * x + y * y < (self.r * self.r) as f64 + EPS
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> CircleF {
        CircleF::new(self.center.to_f64(), self.r as f64)
    }
}

/// A circle with floating center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleF {
    pub center: Vec2,
    pub r: f64,
}

/// Outcome of intersecting a line with a circle.
///
/// Parameters refer to [`LineF::point_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCircleIntersection {
    Miss,
    Tangent { point: Vec2, t: f64 },
    /// Two points ordered by increasing line parameter.
    Secant { points: [Vec2; 2], t: [f64; 2] },
}

impl LineCircleIntersection {
    /// Line parameters of the hits; a tangent reports the same value twice.
    #[must_use]
    pub fn params(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Miss => None,
            Self::Tangent { t, .. } => Some((t, t)),
            Self::Secant { t, .. } => Some((t[0], t[1])),
        }
    }

    #[must_use]
    pub fn points(&self) -> Vec<Vec2> {
        match *self {
            Self::Miss => Vec::new(),
            Self::Tangent { point, .. } => vec![point],
            Self::Secant { points, .. } => points.to_vec(),
        }
    }
}

/// Common tangents of two circles.
#[derive(Debug, Clone, PartialEq)]
pub enum CommonTangents {
    /// Coincident circles.
    Infinite,
    /// Each tangent as its touching points, `p1` on the receiver and `p2` on
    /// the argument. The two points coincide where the circles touch.
    Lines(Vec<SegmentF>),
}

impl CircleF {
    #[must_use]
    pub const fn new(center: Vec2, r: f64) -> Self {
        Self { center, r }
    }

    #[must_use]
    pub fn point_at(&self, rad: f64) -> Vec2 {
        let (sin, cos) = rad.sin_cos();
        self.center + Vec2::new(self.r * cos, self.r * sin)
    }

    /// `p` is inside or within [`EPS`] of the circle (on squared distance).
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        self.center.dist2(p) < self.r * self.r + EPS
    }

    /// Intersection with the infinite line `line`.
    ///
    /// Substitutes `line.point_at(t)` into the circle equation and solves the
    /// quadratic; the discriminant is compared against [`EPS`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the line's defining points
    /// coincide.
    pub fn intersect_line(&self, line: &LineF) -> Result<LineCircleIntersection> {
        let v = line.direction();
        let w = line.p1 - self.center;
        let a = v.len2();
        if a < EPS {
            return Err(GeometryError::ZeroVector.into());
        }
        let b = 2.0 * v.dot(&w);
        let c = w.len2() - self.r * self.r;
        let delta = b * b - 4.0 * a * c;
        if delta < -EPS {
            return Ok(LineCircleIntersection::Miss);
        }
        if delta < EPS {
            let t = -b / (2.0 * a);
            return Ok(LineCircleIntersection::Tangent {
                point: line.point_at(t),
                t,
            });
        }
        let s = delta.sqrt();
        let t1 = (-b - s) / (2.0 * a);
        let t2 = (-b + s) / (2.0 * a);
        Ok(LineCircleIntersection::Secant {
            points: [line.point_at(t1), line.point_at(t2)],
            t: [t1, t2],
        })
    }

    /// Common tangent lines of `self` and `other`.
    ///
    /// Classification compares squared center distance with the squared
    /// radius difference and sum, within [`EPS`]:
    /// - contained: no tangents
    /// - internally tangent: one
    /// - otherwise two outer tangents, plus one inner tangent when the
    ///   circles touch externally or two when they are apart.
    #[must_use]
    pub fn common_tangents(&self, other: &CircleF) -> CommonTangents {
        let swapped = self.r < other.r;
        let (a, b) = if swapped { (other, self) } else { (self, other) };
        let ab = b.center - a.center;
        let dab2 = ab.len2();
        let diff = a.r - b.r;
        let sum = a.r + b.r;
        if dab2 < EPS && diff.abs() < EPS {
            return CommonTangents::Infinite;
        }
        if dab2 < diff * diff - EPS {
            return CommonTangents::Lines(Vec::new());
        }

        let angle_ab = ab.polar_angle();
        let mut lines = Vec::with_capacity(4);
        if (dab2 - diff * diff).abs() < EPS {
            lines.push(SegmentF::new(a.point_at(angle_ab), b.point_at(angle_ab)));
        } else {
            let dab = dab2.sqrt();
            let ang = (diff / dab).clamp(-1.0, 1.0).acos();
            lines.push(SegmentF::new(
                a.point_at(angle_ab + ang),
                b.point_at(angle_ab + ang),
            ));
            lines.push(SegmentF::new(
                a.point_at(angle_ab - ang),
                b.point_at(angle_ab - ang),
            ));
            if (dab2 - sum * sum).abs() < EPS {
                lines.push(SegmentF::new(
                    a.point_at(angle_ab),
                    b.point_at(angle_ab + PI),
                ));
            } else if dab2 > sum * sum {
                let ang = (sum / dab).clamp(-1.0, 1.0).acos();
                lines.push(SegmentF::new(
                    a.point_at(angle_ab + ang),
                    b.point_at(angle_ab + ang + PI),
                ));
                lines.push(SegmentF::new(
                    a.point_at(angle_ab - ang),
                    b.point_at(angle_ab - ang + PI),
                ));
            }
        }

        if swapped {
            for l in &mut lines {
                std::mem::swap(&mut l.p1, &mut l.p2);
            }
        }
        CommonTangents::Lines(lines)
    }
}
