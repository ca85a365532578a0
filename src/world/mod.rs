pub mod camera;
pub mod config;
pub mod physics_world;
pub mod render;
pub mod timestep;

pub use camera::Camera;
pub use config::{Partitioning, WorldConfig};
pub use physics_world::{World, DEFAULT_CAMERA};
pub use render::{Drawable, RenderSurface, RenderTarget};
pub use timestep::FixedTimestep;
