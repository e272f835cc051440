use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::{IVec2, IntVector2Ext};

/// Computes the convex hull of a lattice point set (Andrew's monotone chain).
///
/// The result is counterclockwise, starts at the lexicographically smallest
/// point and has no repeated closing vertex. Duplicate inputs are merged and
/// points in the interior of hull edges are dropped, so an all-collinear input
/// yields its two extreme points and a single distinct point yields itself.
pub struct ConvexHull {
    points: Vec<IVec2>,
}

impl ConvexHull {
    /// Creates a new hull query over `points`.
    #[must_use]
    pub fn new(points: Vec<IVec2>) -> Self {
        Self { points }
    }

    /// Executes the hull construction.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the point set is empty.
    pub fn execute(&self) -> Result<Polygon> {
        if self.points.is_empty() {
            return Err(
                OperationError::InvalidInput("convex hull of an empty point set".into()).into(),
            );
        }

        let mut pts = self.points.clone();
        pts.sort_unstable_by(|a, b| a.lex_cmp(b));
        pts.dedup();

        let mut hull: Vec<IVec2> = Vec::with_capacity(pts.len() + 1);
        for &p in &pts {
            pop_clockwise(&mut hull, p, 1);
            hull.push(p);
        }
        let lower_len = hull.len();
        for &p in pts.iter().rev().skip(1) {
            pop_clockwise(&mut hull, p, lower_len);
            hull.push(p);
        }
        if pts.len() > 1 {
            hull.pop();
        }

        debug!(input = self.points.len(), hull = hull.len(), "convex hull");
        Ok(Polygon::new(hull))
    }

    /// Perimeter of the hull. Degenerate hulls count each edge once per
    /// direction, so two points give twice their distance.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the point set is empty.
    pub fn perimeter(&self) -> Result<f64> {
        Ok(self.execute()?.perimeter())
    }
}

/// Pops while the last two kept points and `p` do not make a strict left turn,
/// never shrinking the chain below `floor` points.
fn pop_clockwise(hull: &mut Vec<IVec2>, p: IVec2, floor: usize) {
    while hull.len() > floor {
        let n = hull.len();
        if (hull[n - 1] - hull[n - 2]).det(p - hull[n - 1]) > 0 {
            break;
        }
        hull.pop();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn iv(x: i64, y: i64) -> IVec2 {
        IVec2::new(x, y)
    }

    #[test]
    fn square_with_interior_and_edge_points() {
        let pts = vec![
            iv(2, 2),
            iv(0, 0),
            iv(4, 0),
            iv(2, 0),
            iv(4, 4),
            iv(0, 4),
            iv(1, 3),
            iv(0, 0),
        ];
        let hull = ConvexHull::new(pts).execute().unwrap();
        assert_eq!(hull.vertices(), &[iv(0, 0), iv(4, 0), iv(4, 4), iv(0, 4)]);
        assert!(hull.twice_signed_area() > 0);
    }

    #[test]
    fn degenerate_inputs() {
        let one = ConvexHull::new(vec![iv(3, 3), iv(3, 3)]).execute().unwrap();
        assert_eq!(one.vertices(), &[iv(3, 3)]);

        let line = ConvexHull::new(vec![iv(2, 2), iv(0, 0), iv(1, 1), iv(3, 3)])
            .execute()
            .unwrap();
        assert_eq!(line.vertices(), &[iv(0, 0), iv(3, 3)]);

        assert!(ConvexHull::new(Vec::new()).execute().is_err());
    }

    #[test]
    fn perimeter_of_hull() {
        let pts = vec![iv(0, 0), iv(3, 0), iv(0, 4), iv(1, 1)];
        assert_abs_diff_eq!(ConvexHull::new(pts).perimeter().unwrap(), 12.0);
    }

    proptest! {
        #[test]
        fn hull_covers_input(pts in prop::collection::vec((-50i64..50, -50i64..50), 3..60)) {
            let pts: Vec<IVec2> = pts.into_iter().map(|(x, y)| iv(x, y)).collect();
            let hull = ConvexHull::new(pts.clone()).execute().unwrap();
            for v in hull.vertices() {
                prop_assert!(pts.contains(v));
            }
            if hull.len() >= 3 {
                for &p in &pts {
                    prop_assert!(hull.contains_convex(p).unwrap(), "p={:?}", p);
                }
            }
        }
    }
}
