use std::cmp::Ordering;
use std::f64::consts::TAU;

use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::math::{IVec2, IntVector2Ext, Tolerance};

/// Maximum number of points a circle of fixed radius can cover, boundary
/// included (angular sweep, `O(n^2 log n)`).
///
/// Some optimal circle has an input point on its boundary. For each anchor
/// point `a`, every other point `b` within `2r` is covered while the circle's
/// center, rotating around `a` at distance `r`, stays inside an arc of polar
/// angles centered on the direction `a -> b`. Sweeping the arc endpoints gives
/// the best count for that anchor.
pub struct MaxCoveredPoints {
    points: Vec<IVec2>,
    r: i64,
    tol: Tolerance,
}

#[derive(Debug, Clone, Copy)]
struct Event {
    angle: f64,
    delta: i32,
}

impl MaxCoveredPoints {
    /// Creates a new query for circles of radius `r` with the default
    /// tolerance.
    #[must_use]
    pub fn new(points: Vec<IVec2>, r: i64) -> Self {
        Self {
            points,
            r,
            tol: Tolerance::default(),
        }
    }

    /// Sets the angular slack added to both ends of every arc.
    #[must_use]
    pub fn with_tolerance(mut self, tol: Tolerance) -> Self {
        self.tol = tol;
        self
    }

    /// Executes the sweep.
    ///
    /// Arcs are normalized to start in `[0, 2pi)` and swept together with a
    /// copy shifted by a full turn, so arcs that wrap past the seam are
    /// counted. Points coinciding with the anchor are covered by every
    /// circle through it.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the point set is empty or the
    /// radius is not positive.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<usize> {
        if self.points.is_empty() {
            return Err(OperationError::InvalidInput("no points to cover".into()).into());
        }
        if self.r <= 0 {
            return Err(
                OperationError::InvalidInput(format!("radius must be positive, got {}", self.r))
                    .into(),
            );
        }

        let eps = self.tol.eps;
        let diameter2 = 4 * self.r * self.r;
        let diameter = 2.0 * self.r as f64;
        let mut best = 1;
        let mut events = Vec::with_capacity(4 * self.points.len());

        for (i, &a) in self.points.iter().enumerate() {
            events.clear();
            let mut coincident = 0;
            for (j, &b) in self.points.iter().enumerate() {
                if j == i {
                    continue;
                }
                let ab = b - a;
                let d2 = ab.len2();
                if d2 == 0 {
                    coincident += 1;
                    continue;
                }
                if d2 > diameter2 {
                    continue;
                }
                let mid = ab.polar_angle();
                let half = (ab.length() / diameter).clamp(-1.0, 1.0).acos();
                let mut start = mid - half - eps;
                if start < 0.0 {
                    start += TAU;
                }
                let end = start + 2.0 * (half + eps);
                for shift in [0.0, TAU] {
                    events.push(Event {
                        angle: start + shift,
                        delta: 1,
                    });
                    events.push(Event {
                        angle: end + shift,
                        delta: -1,
                    });
                }
            }

            events.sort_unstable_by(|x, y| match x.angle.total_cmp(&y.angle) {
                Ordering::Equal => y.delta.cmp(&x.delta),
                ord => ord,
            });

            let base = 1 + coincident;
            let mut count: i32 = 0;
            let mut peak: i32 = 0;
            for e in &events {
                count += e.delta;
                peak = peak.max(count);
            }
            let covered = base + usize::try_from(peak).unwrap_or(0);
            trace!(anchor = i, covered, "anchor sweep");
            best = best.max(covered);
        }

        debug!(points = self.points.len(), r = self.r, best, "max covered points");
        Ok(best)
    }
}
