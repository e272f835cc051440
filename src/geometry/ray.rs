use crate::math::intersect_2d::point_at;
use crate::math::{FloatVector2Ext, IVec2, IntVector2Ext, Vec2, EPS};

/// A ray from `origin` along `dir` over lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ray {
    pub origin: IVec2,
    pub dir: IVec2,
}

impl Ray {
    #[must_use]
    pub const fn new(origin: IVec2, dir: IVec2) -> Self {
        Self { origin, dir }
    }

    /// `p` lies on the ray, origin included. Exact.
    #[must_use]
    pub fn contains(&self, p: IVec2) -> bool {
        let op = p - self.origin;
        self.dir.det(op) == 0 && self.dir.dot(&op) >= 0
    }

    #[must_use]
    pub fn to_f64(&self) -> RayF {
        RayF::new(self.origin.to_f64(), self.dir.to_f64())
    }
}

/// A moving point `origin + t * dir`, `t >= 0`.
///
/// `|dir|` is the speed, so intersection parameters are arrival times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayF {
    pub origin: Vec2,
    pub dir: Vec2,
}

impl RayF {
    #[must_use]
    pub const fn new(origin: Vec2, dir: Vec2) -> Self {
        Self { origin, dir }
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Vec2 {
        point_at(self.origin, self.dir, t)
    }

    /// Times `(ta, tb)` at which `self` and `other` first reach a common point.
    ///
    /// The meeting point is `self.point_at(ta)`, which equals
    /// `other.point_at(tb)`. Returns `None` when the rays never meet going
    /// forward.
    ///
    /// Collinear rays are resolved by direction: with equal directions the
    /// trailing ray reaches the leading ray's origin (the leader's time is
    /// `0`); with opposite directions the rays meet halfway, weighted by
    /// speed, if they face each other.
    #[must_use]
    pub fn intersection(&self, other: &RayF) -> Option<(f64, f64)> {
        let (va, vb) = (self.dir, other.dir);
        let u = self.origin - other.origin;
        let d = va.det(vb);
        if d.abs() > EPS {
            let d1 = vb.det(u);
            let d2 = va.det(u);
            let forward =
                (d > 0.0 && d1 >= 0.0 && d2 >= 0.0) || (d < 0.0 && d1 <= 0.0 && d2 <= 0.0);
            return forward.then(|| (d1 / d, d2 / d));
        }
        if u.det(va).abs() > EPS {
            // Parallel but on distinct lines.
            return None;
        }
        let l = u.length();
        if va.dot(&vb) > 0.0 {
            if u.dot(&vb) >= 0.0 {
                Some((0.0, l / vb.length()))
            } else {
                Some((l / va.length(), 0.0))
            }
        } else if u.dot(&vb) >= 0.0 {
            let t = l / (va.length() + vb.length());
            Some((t, t))
        } else {
            None
        }
    }
}
