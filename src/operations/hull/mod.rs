mod convex_hull;
mod farthest_pair;
mod min_area_rect;

pub use convex_hull::ConvexHull;
pub use farthest_pair::{FarthestPair, FarthestPairResult};
pub use min_area_rect::{MinAreaRect, MinBoundingRect};
