use tracing::debug;

use super::ConvexHull;
use crate::error::Result;
use crate::math::{IVec2, IntVector2Ext};

/// A diameter of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarthestPairResult {
    pub a: IVec2,
    pub b: IVec2,
    /// Squared distance between `a` and `b`. Exact.
    pub dist2: i64,
}

/// Finds the farthest pair of points with rotating calipers over the hull.
///
/// Two calipers start at the lexicographically smallest and largest hull
/// vertices. At each step the one whose next edge turns less advances, until
/// the calipers have swapped places. Runs in `O(n log n)` for the hull plus
/// `O(h)` for the sweep.
pub struct FarthestPair {
    points: Vec<IVec2>,
}

impl FarthestPair {
    /// Creates a new diameter query over `points`.
    #[must_use]
    pub fn new(points: Vec<IVec2>) -> Self {
        Self { points }
    }

    /// Executes the search.
    ///
    /// A single distinct point pairs with itself at distance zero.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the point set is empty.
    pub fn execute(&self) -> Result<FarthestPairResult> {
        let hull = ConvexHull::new(self.points.clone()).execute()?;
        let ch = hull.vertices();
        let n = ch.len();
        if n <= 2 {
            let (a, b) = (ch[0], ch[n - 1]);
            return Ok(FarthestPairResult {
                a,
                b,
                dist2: a.dist2(b),
            });
        }

        let mut i = 0;
        let mut j = 0;
        for (k, p) in ch.iter().enumerate() {
            if p.lex_cmp(&ch[i]).is_lt() {
                i = k;
            }
            if p.lex_cmp(&ch[j]).is_gt() {
                j = k;
            }
        }

        let (i0, j0) = (i, j);
        let mut best = FarthestPairResult {
            a: ch[i],
            b: ch[j],
            dist2: ch[i].dist2(ch[j]),
        };
        while i != j0 || j != i0 {
            let d2 = ch[i].dist2(ch[j]);
            if d2 > best.dist2 {
                best = FarthestPairResult {
                    a: ch[i],
                    b: ch[j],
                    dist2: d2,
                };
            }
            let ni = (i + 1) % n;
            let nj = (j + 1) % n;
            if (ch[ni] - ch[i]).det(ch[nj] - ch[j]) < 0 {
                i = ni;
            } else {
                j = nj;
            }
        }

        debug!(hull = n, dist2 = best.dist2, "farthest pair");
        Ok(best)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn iv(x: i64, y: i64) -> IVec2 {
        IVec2::new(x, y)
    }

    fn brute_force(pts: &[IVec2]) -> i64 {
        let mut best = 0;
        for (k, &a) in pts.iter().enumerate() {
            for &b in &pts[k + 1..] {
                best = best.max(a.dist2(b));
            }
        }
        best
    }

    #[test]
    fn rectangle_diagonal() {
        let pts = vec![iv(0, 0), iv(4, 0), iv(4, 3), iv(0, 3), iv(2, 1)];
        let res = FarthestPair::new(pts).execute().unwrap();
        assert_eq!(res.dist2, 25);
        assert_eq!(res.a.dist2(res.b), 25);
    }

    #[test]
    fn degenerate_hulls() {
        let one = FarthestPair::new(vec![iv(1, 1)]).execute().unwrap();
        assert_eq!(one.dist2, 0);

        let line = FarthestPair::new(vec![iv(0, 0), iv(1, 2), iv(3, 6)])
            .execute()
            .unwrap();
        assert_eq!(line.dist2, 45);

        assert!(FarthestPair::new(Vec::new()).execute().is_err());
    }

    #[test]
    fn matches_brute_force_on_random_sets() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(1..=200);
            let pts: Vec<IVec2> = (0..n)
                .map(|_| iv(rng.gen_range(-1000..=1000), rng.gen_range(-1000..=1000)))
                .collect();
            let res = FarthestPair::new(pts.clone()).execute().unwrap();
            assert_eq!(res.dist2, brute_force(&pts));
        }
    }
}
