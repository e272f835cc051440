use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::geometry::{HalfPlane, LineF};
use crate::math::{FloatVector2Ext, Tolerance, Vec2};

/// Result of intersecting half-planes.
#[derive(Debug, Clone, PartialEq)]
pub enum HalfPlaneResult {
    /// A convex polygon with positive area, counterclockwise. Each entry's
    /// `next` is the vertex shared with the following entry, wrapping around.
    Bounded(Vec<HalfPlane>),
    /// The intersection is empty, degenerate, or not bounded.
    EmptyOrUnbounded,
}

impl HalfPlaneResult {
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded(_))
    }

    /// Polygon vertices in counterclockwise order; empty when not bounded.
    #[must_use]
    pub fn vertices(&self) -> Vec<Vec2> {
        match self {
            Self::Bounded(hs) => hs.iter().map(|h| h.next).collect(),
            Self::EmptyOrUnbounded => Vec::new(),
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices())
    }
}

/// Intersects the left sides of a set of directed lines.
///
/// Lines are sorted by the polar angle of their direction and fed through a
/// deque: each new line first drops back entries whose outgoing vertex it
/// cuts off, then front entries likewise. Of two lines with the same
/// direction only the more restrictive one is kept. A final pass trims the
/// back against the front before the closing vertex is computed.
/// `O(n log n)`.
pub struct HalfPlaneIntersection {
    lines: Vec<LineF>,
    tol: Tolerance,
}

impl HalfPlaneIntersection {
    /// Creates a new intersection query with the default tolerance.
    #[must_use]
    pub fn new(lines: Vec<LineF>) -> Self {
        Self {
            lines,
            tol: Tolerance::default(),
        }
    }

    /// Sets the tolerance for side tests, parallelism and the area cutoff.
    #[must_use]
    pub fn with_tolerance(mut self, tol: Tolerance) -> Self {
        self.tol = tol;
        self
    }

    /// Executes the intersection.
    ///
    /// Antiparallel lines that end up adjacent in the deque, fewer than three
    /// surviving lines, a turn of half a revolution or more between
    /// consecutive survivors, and a polygon of area within the tolerance all
    /// yield `EmptyOrUnbounded`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParallelLines` only if two surviving neighbours
    /// are parallel within the tolerance, which the construction rules out for
    /// well-formed input.
    pub fn execute(&self) -> Result<HalfPlaneResult> {
        let eps = self.tol.eps;
        let mut lines = self.lines.clone();
        lines.sort_by(|a, b| {
            a.direction()
                .polar_angle()
                .total_cmp(&b.direction().polar_angle())
        });

        let on_left = |l: &LineF, p: Vec2| l.direction().det(p - l.p1) > eps;

        let mut q: VecDeque<HalfPlane> = VecDeque::with_capacity(lines.len());
        for l in lines {
            while q.len() > 1 && !on_left(&l, q[q.len() - 2].next) {
                q.pop_back();
            }
            while q.len() > 1 && !on_left(&l, q[0].next) {
                q.pop_front();
            }

            match q.back_mut() {
                Some(back) if back.line.direction().det(l.direction()).abs() < eps => {
                    if back.line.direction().dot(&l.direction()) < 0.0 {
                        debug!("antiparallel boundary lines");
                        return Ok(HalfPlaneResult::EmptyOrUnbounded);
                    }
                    if on_left(&back.line, l.p1) {
                        back.line = l;
                    }
                }
                _ => q.push_back(HalfPlane::new(l, Vec2::zeros())),
            }

            let n = q.len();
            if n > 1 {
                let next = q[n - 2].line.intersection_within(&q[n - 1].line, eps)?;
                q[n - 2].next = next;
            }
        }

        while q.len() > 1 && !on_left(&q[0].line, q[q.len() - 2].next) {
            q.pop_back();
        }

        let n = q.len();
        if n < 3 {
            debug!(lines = self.lines.len(), kept = n, "half-plane intersection too small");
            return Ok(HalfPlaneResult::EmptyOrUnbounded);
        }
        let turns_left = (0..n).all(|i| {
            let (a, b) = (q[i].line.direction(), q[(i + 1) % n].line.direction());
            a.det(b) > eps
        });
        if !turns_left {
            debug!(kept = n, "half-plane intersection unbounded");
            return Ok(HalfPlaneResult::EmptyOrUnbounded);
        }

        let closing = q[n - 1].line.intersection_within(&q[0].line, eps)?;
        q[n - 1].next = closing;

        let planes: Vec<HalfPlane> = q.into_iter().collect();
        let vertices: Vec<Vec2> = planes.iter().map(|h| h.next).collect();
        let area = polygon_area(&vertices);
        if area <= eps {
            debug!(area, "half-plane intersection degenerate");
            return Ok(HalfPlaneResult::EmptyOrUnbounded);
        }

        debug!(lines = self.lines.len(), kept = planes.len(), area, "half-plane intersection");
        Ok(HalfPlaneResult::Bounded(planes))
    }
}

fn polygon_area(vs: &[Vec2]) -> f64 {
    let Some(&p0) = vs.first() else {
        return 0.0;
    };
    vs.windows(2)
        .skip(1)
        .map(|w| (w[0] - p0).det(w[1] - p0))
        .sum::<f64>()
        / 2.0
}
