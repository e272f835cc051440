pub mod distance_2d;
pub mod intersect_2d;
pub mod triangle_2d;
pub mod vector_2d;

pub use vector_2d::{sort_by_polar_angle, sort_upper_half, FloatVector2Ext, IntVector2Ext};

/// Exact lattice point or displacement.
///
/// Products of differences (`dot`, `det`, `dist2`) are exact as long as
/// coordinates stay below `2^30` in magnitude.
pub type IVec2 = nalgebra::Vector2<i64>;

/// Floating point or displacement. Compare with [`FloatVector2Ext::approx_eq`],
/// never with `==`.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Global tolerance for floating-point predicates.
pub const EPS: f64 = 1e-8;

/// Three-way sign of `x` with a dead zone of width `eps` around zero.
#[must_use]
pub fn sign(x: f64, eps: f64) -> i32 {
    if x < -eps {
        -1
    } else if x < eps {
        0
    } else {
        1
    }
}

/// Tolerance settings carried by operations that compare floating quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Tolerance {
    #[must_use]
    pub const fn new(eps: f64) -> Self {
        Self { eps }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: EPS }
    }
}
