mod closest_pair;
mod enclosing_disc;
mod max_covered;

pub use closest_pair::ClosestPair;
pub use enclosing_disc::SmallestEnclosingDisc;
pub use max_covered::MaxCoveredPoints;
