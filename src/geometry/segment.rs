use super::{Line, LineF};
use crate::math::distance_2d::{point_to_segment_dist, within_range_int};
use crate::math::intersect_2d::{
    on_segment_int, segment_segment_intersect_2d, segments_intersect_int, segments_properly_cross,
};
use crate::math::{FloatVector2Ext, IVec2, IntVector2Ext, Vec2};

/// A closed segment between two lattice points. All predicates are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub p1: IVec2,
    pub p2: IVec2,
}

impl Segment {
    #[must_use]
    pub const fn new(p1: IVec2, p2: IVec2) -> Self {
        Self { p1, p2 }
    }

    #[must_use]
    pub fn direction(&self) -> IVec2 {
        self.p2 - self.p1
    }

    #[must_use]
    pub fn len2(&self) -> i64 {
        self.direction().len2()
    }

    /// `p` lies on the segment, endpoints included.
    #[must_use]
    pub fn contains(&self, p: IVec2) -> bool {
        on_segment_int(p, self.p1, self.p2)
    }

    /// Distance from `p` to the segment is at most `r`, decided without
    /// square roots.
    #[must_use]
    pub fn within_range(&self, p: IVec2, r: i64) -> bool {
        within_range_int(p, self.p1, self.p2, r)
    }

    /// Inclusive intersection test: touching and collinear overlap count.
    #[must_use]
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect_int(self.p1, self.p2, other.p1, other.p2)
    }

    /// The infinite line carrying this segment.
    #[must_use]
    pub fn supporting_line(&self) -> Line {
        Line::new(self.p1, self.p2)
    }

    #[must_use]
    pub fn to_f64(&self) -> SegmentF {
        SegmentF::new(self.p1.to_f64(), self.p2.to_f64())
    }
}

/// A closed segment between two floating points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentF {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl SegmentF {
    #[must_use]
    pub const fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.p2 - self.p1
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    #[must_use]
    pub fn midpoint(&self) -> Vec2 {
        (self.p1 + self.p2) * 0.5
    }

    /// Minimum distance from `p` to the segment.
    #[must_use]
    pub fn distance_to(&self, p: Vec2) -> f64 {
        point_to_segment_dist(p, self.p1, self.p2)
    }

    /// Strict crossing: interiors intersect in exactly one point.
    ///
    /// Endpoint contact and collinear overlap are not proper intersections.
    #[must_use]
    pub fn properly_intersects(&self, other: &SegmentF) -> bool {
        segments_properly_cross(self.p1, self.p2, other.p1, other.p2)
    }

    /// Crossing point of two non-parallel segments, endpoints included.
    #[must_use]
    pub fn intersection_point(&self, other: &SegmentF) -> Option<Vec2> {
        segment_segment_intersect_2d(self.p1, self.p2, other.p1, other.p2).map(|(p, _, _)| p)
    }

    #[must_use]
    pub fn supporting_line(&self) -> LineF {
        LineF::new(self.p1, self.p2)
    }
}
