pub mod circle;
pub mod half_plane;
pub mod line;
pub mod polygon;
pub mod ray;
pub mod segment;

pub use circle::{Circle, CircleF, CircleIntersection, CommonTangents, LineCircleIntersection};
pub use half_plane::HalfPlane;
pub use line::{Line, LineF};
pub use polygon::{
    is_orthogonal, is_rectangle, is_rectangle_any_order, most_clockwise, most_counterclockwise,
    Polygon,
};
pub use ray::{Ray, RayF};
pub use segment::{Segment, SegmentF};
