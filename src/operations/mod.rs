pub mod clip;
pub mod hull;
pub mod proximity;
