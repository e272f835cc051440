use super::Segment;
use crate::error::{OperationError, Result};
use crate::math::{IVec2, IntVector2Ext};

/// A simple polygon over lattice points.
///
/// Vertices are stored in order with an implicit closing edge from the last
/// vertex back to the first. Operations that need a winding say so.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    vertices: Vec<IVec2>,
}

impl Polygon {
    #[must_use]
    pub fn new(vertices: Vec<IVec2>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[IVec2] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in vertex order, closing edge last.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Twice the signed area, positive for counterclockwise winding. Exact.
    #[must_use]
    pub fn twice_signed_area(&self) -> i64 {
        let Some(&p0) = self.vertices.first() else {
            return 0;
        };
        self.vertices
            .windows(2)
            .skip(1)
            .map(|w| (w[0] - p0).det(w[1] - p0))
            .sum()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn signed_area(&self) -> f64 {
        self.twice_signed_area() as f64 / 2.0
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.edges().iter().map(|e| e.direction().length()).sum()
    }

    /// Point-in-convex-polygon test in `O(log n)`, boundary inclusive.
    ///
    /// The polygon must be convex and counterclockwise. The fan of rays from
    /// the first vertex splits the polygon into wedges; a binary search finds
    /// the wedge containing `p` and a single orientation test settles it.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the polygon has fewer than
    /// three vertices.
    pub fn contains_convex(&self, p: IVec2) -> Result<bool> {
        let ps = &self.vertices;
        let n = ps.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "convex containment needs at least 3 vertices, got {n}"
            ))
            .into());
        }

        let o = ps[0];
        let op = p - o;
        let first = ps[1] - o;
        let last = ps[n - 1] - o;
        if first.det(op) < 0 || last.det(op) > 0 {
            return Ok(false);
        }

        // Largest i in [1, n-1] with p on the left of (or on) the ray o -> ps[i].
        let (mut lo, mut hi) = (1, n - 1);
        while lo < hi {
            let mid = (lo + hi + 1) / 2;
            if (ps[mid] - o).det(op) >= 0 {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }

        if lo == n - 1 {
            // On the ray through the closing edge.
            return Ok(op.len2() <= last.len2());
        }
        Ok((ps[lo + 1] - ps[lo]).det(p - ps[lo]) >= 0)
    }
}

/// Index of the point in `ps` that is most counterclockwise as seen from
/// `pivot`: every other point lies on its right or on the same ray.
///
/// Assumes all points fit in an open half-plane around `pivot`. Returns
/// `None` for an empty slice.
#[must_use]
pub fn most_counterclockwise(pivot: IVec2, ps: &[IVec2]) -> Option<usize> {
    extreme_by(pivot, ps, |d| d > 0)
}

/// Mirror of [`most_counterclockwise`].
#[must_use]
pub fn most_clockwise(pivot: IVec2, ps: &[IVec2]) -> Option<usize> {
    extreme_by(pivot, ps, |d| d < 0)
}

fn extreme_by(pivot: IVec2, ps: &[IVec2], replace: impl Fn(i64) -> bool) -> Option<usize> {
    if ps.is_empty() {
        return None;
    }
    let mut best = 0;
    for (i, &p) in ps.iter().enumerate().skip(1) {
        if replace((ps[best] - pivot).det(p - pivot)) {
            best = i;
        }
    }
    Some(best)
}

/// Angle `abc` (at `b`) is a right angle.
#[must_use]
pub fn is_orthogonal(a: IVec2, b: IVec2, c: IVec2) -> bool {
    (a - b).dot(&(c - b)) == 0
}

/// `a, b, c, d` in this order are the corners of a rectangle.
///
/// Corners must be distinct; a zero-length side satisfies every right-angle
/// test trivially.
#[must_use]
pub fn is_rectangle(a: IVec2, b: IVec2, c: IVec2, d: IVec2) -> bool {
    is_orthogonal(a, b, c) && is_orthogonal(b, c, d) && is_orthogonal(c, d, a)
}

/// The four points form a rectangle in some cyclic order.
#[must_use]
pub fn is_rectangle_any_order(a: IVec2, b: IVec2, c: IVec2, d: IVec2) -> bool {
    is_rectangle(a, b, c, d) || is_rectangle(a, b, d, c) || is_rectangle(a, c, b, d)
}
