use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::{IVec2, IntVector2Ext};

/// Finds the smallest distance between two points of a set.
///
/// Divide and conquer on an x-sorted working copy. Each half comes back
/// sorted by y, the halves are merged, and only the strip of points within
/// the current best distance of the split line is scanned. Distances are kept
/// squared and exact until the final square root. `O(n log n)`.
pub struct ClosestPair {
    points: Vec<IVec2>,
}

impl ClosestPair {
    /// Creates a new closest-pair query over `points`.
    #[must_use]
    pub fn new(points: Vec<IVec2>) -> Self {
        Self { points }
    }

    /// Executes the search, returning the minimum distance.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than two points are
    /// given.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<f64> {
        let n = self.points.len();
        if n < 2 {
            return Err(OperationError::InvalidInput(format!(
                "closest pair needs at least 2 points, got {n}"
            ))
            .into());
        }

        let mut ps = self.points.clone();
        ps.sort_unstable_by(|a, b| a.lex_cmp(b));
        let mut buf = Vec::with_capacity(n);
        let best2 = closest2(&mut ps, &mut buf);

        debug!(points = n, dist2 = best2, "closest pair");
        Ok((best2 as f64).sqrt())
    }
}

/// Squared closest distance within `ps`, which must be sorted by x on entry
/// and is left sorted by y.
fn closest2(ps: &mut [IVec2], buf: &mut Vec<IVec2>) -> i64 {
    let n = ps.len();
    if n <= 3 {
        let mut best = i64::MAX;
        for i in 0..n {
            for j in i + 1..n {
                best = best.min(ps[i].dist2(ps[j]));
            }
        }
        ps.sort_unstable_by_key(|p| p.y);
        return best;
    }

    let m = n / 2;
    let split_x = ps[m].x;
    let (left, right) = ps.split_at_mut(m);
    let mut best = closest2(left, buf).min(closest2(right, buf));

    merge_by_y(ps, m, buf);

    buf.clear();
    for &p in ps.iter() {
        let dx = p.x - split_x;
        if dx * dx > best {
            continue;
        }
        for &q in buf.iter().rev() {
            let dy = p.y - q.y;
            if dy * dy >= best {
                break;
            }
            best = best.min(p.dist2(q));
        }
        buf.push(p);
    }
    best
}

/// Merges the y-sorted runs `ps[..m]` and `ps[m..]` in place through `buf`.
fn merge_by_y(ps: &mut [IVec2], m: usize, buf: &mut Vec<IVec2>) {
    buf.clear();
    let (mut i, mut j) = (0, m);
    while i < m && j < ps.len() {
        if ps[j].y < ps[i].y {
            buf.push(ps[j]);
            j += 1;
        } else {
            buf.push(ps[i]);
            i += 1;
        }
    }
    buf.extend_from_slice(&ps[i..m]);
    buf.extend_from_slice(&ps[j..]);
    ps.copy_from_slice(buf);
}
