use super::LineF;
use crate::math::Vec2;

/// A directed line keeping its left side, linked to the next boundary line
/// of an intersection result through their common vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub line: LineF,
    /// Intersection of `line` with the following half-plane's line.
    pub next: Vec2,
}

impl HalfPlane {
    #[must_use]
    pub const fn new(line: LineF, next: Vec2) -> Self {
        Self { line, next }
    }

    /// `p` lies strictly inside the kept side.
    #[must_use]
    pub fn keeps(&self, p: Vec2) -> bool {
        self.line.is_on_left(p)
    }
}
