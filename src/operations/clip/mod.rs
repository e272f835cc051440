mod half_plane;

pub use half_plane::{HalfPlaneIntersection, HalfPlaneResult};
