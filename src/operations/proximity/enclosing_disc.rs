use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::CircleF;
use crate::math::triangle_2d::circumcenter;
use crate::math::{FloatVector2Ext, Tolerance, Vec2};

/// Computes the smallest circle enclosing a point set (Welzl's randomized
/// incremental algorithm, expected `O(n)`).
///
/// Points are shuffled first; the random source is injectable so results can
/// be reproduced with a seeded generator.
pub struct SmallestEnclosingDisc {
    points: Vec<Vec2>,
    tol: Tolerance,
}

impl SmallestEnclosingDisc {
    /// Creates a new enclosing-disc query with the default tolerance.
    #[must_use]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self {
            points,
            tol: Tolerance::default(),
        }
    }

    /// Sets the slack allowed on squared distances when testing containment.
    #[must_use]
    pub fn with_tolerance(mut self, tol: Tolerance) -> Self {
        self.tol = tol;
        self
    }

    /// Executes with the thread-local generator.
    ///
    /// # Errors
    ///
    /// See [`execute_with_rng`](Self::execute_with_rng).
    pub fn execute(&self) -> Result<CircleF> {
        self.execute_with_rng(&mut rand::thread_rng())
    }

    /// Executes, shuffling with `rng`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the point set is empty, and
    /// propagates `GeometryError::CollinearPoints` if round-off makes a
    /// boundary triple collinear.
    pub fn execute_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CircleF> {
        let Some(&first) = self.points.first() else {
            return Err(
                OperationError::InvalidInput("enclosing disc of an empty point set".into()).into(),
            );
        };
        let eps = self.tol.eps;
        let mut ps = self.points.clone();
        ps.shuffle(rng);

        let mut o = first;
        let mut r2 = 0.0;
        for (i, &p) in ps.iter().enumerate() {
            if p.dist2(o) < r2 + eps {
                continue;
            }
            o = p;
            r2 = 0.0;
            for (j, &q) in ps[..i].iter().enumerate() {
                if q.dist2(o) < r2 + eps {
                    continue;
                }
                o = (p + q) * 0.5;
                r2 = p.dist2(o);
                for &x in &ps[..j] {
                    if x.dist2(o) > r2 + eps {
                        o = circumcenter(p, q, x)?;
                        r2 = p.dist2(o);
                    }
                }
            }
        }

        let disc = CircleF::new(o, r2.sqrt());
        debug!(points = ps.len(), r = disc.r, "enclosing disc");
        Ok(disc)
    }
}
