pub mod tolerance;
pub mod transform;
pub mod vec2;

pub use tolerance::{approx_eq, approx_zero, EPSILON};
pub use transform::Transform;
pub use vec2::Vec2;
