use std::collections::HashSet;

use tracing::debug;

use super::ConvexHull;
use crate::error::Result;
use crate::geometry::is_orthogonal;
use crate::math::{IVec2, IntVector2Ext};

/// Smallest-area rectangle whose four corners all belong to the point set.
///
/// Rectangles of any orientation count. Every ordered triple `a, b, c` with a
/// right angle at `b` proposes the fourth corner `a + c - b`, which is looked
/// up in a hash set. `O(n^3)`.
pub struct MinAreaRect {
    points: Vec<IVec2>,
}

impl MinAreaRect {
    /// Creates a new rectangle query over `points`.
    #[must_use]
    pub fn new(points: Vec<IVec2>) -> Self {
        Self { points }
    }

    /// Returns the minimum area, or `None` if no four points form a rectangle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Option<f64> {
        let set: HashSet<IVec2> = self.points.iter().copied().collect();
        let pts: Vec<IVec2> = set.iter().copied().collect();

        let mut best: Option<i128> = None;
        for &b in &pts {
            for &a in &pts {
                if a == b {
                    continue;
                }
                for &c in &pts {
                    if c == a || c == b || !is_orthogonal(a, b, c) {
                        continue;
                    }
                    if !set.contains(&(a + c - b)) {
                        continue;
                    }
                    let area2 = i128::from((a - b).len2()) * i128::from((c - b).len2());
                    if best.map_or(true, |m| area2 < m) {
                        best = Some(area2);
                    }
                }
            }
        }

        debug!(points = pts.len(), found = best.is_some(), "min area rect");
        best.map(|area2| (area2 as f64).sqrt())
    }
}

/// Smallest-area rectangle of any orientation enclosing the point set.
///
/// One side of an optimal rectangle lies on a hull edge, so each edge is tried
/// in turn: the extent along the edge and the height above it are measured in
/// exact integer units of `|e|` and divided out once. `O(h^2)` over the hull.
pub struct MinBoundingRect {
    points: Vec<IVec2>,
}

impl MinBoundingRect {
    /// Creates a new bounding-rectangle query over `points`.
    #[must_use]
    pub fn new(points: Vec<IVec2>) -> Self {
        Self { points }
    }

    /// Returns the minimum enclosing area; zero when the points are collinear.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the point set is empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<f64> {
        let hull = ConvexHull::new(self.points.clone()).execute()?;
        let ch = hull.vertices();
        let n = ch.len();
        if n < 3 {
            return Ok(0.0);
        }

        let mut best = f64::INFINITY;
        for i in 0..n {
            let o = ch[i];
            let e = ch[(i + 1) % n] - o;
            let (mut lo, mut hi, mut height) = (0_i128, 0_i128, 0_i128);
            for &p in ch {
                let op = p - o;
                let along = i128::from(e.dot(&op));
                lo = lo.min(along);
                hi = hi.max(along);
                height = height.max(i128::from(e.det(op)));
            }
            let area = ((hi - lo) * height) as f64 / e.len2() as f64;
            best = best.min(area);
        }

        debug!(hull = n, area = best, "min bounding rect");
        Ok(best)
    }
}
