pub mod material;

pub use material::PhysicsMaterial;
