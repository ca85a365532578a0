//! A discrete-time 2D rigid-body simulator for arcade games.
//!
//! A [`World`] owns game objects, pushes gravity and drag onto their bodies
//! each tick, integrates them, and resolves collisions in two passes: a
//! broad phase over a spatial index of body positions and a narrow phase
//! that dispatches on the shape kinds of each candidate pair.

pub mod collision;
pub mod common;
pub mod error;
pub mod forces;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{BoundingBox, ContactData, ContactPair, SpatialIndex, AABB};
pub use common::PhysicsMaterial;
pub use error::{PhysicsError, PhysicsResult};
pub use forces::{DragGenerator, ForceGenerator, GravityGenerator};
pub use math::vec2::Vec2;
pub use objects::{BodyState, GameObject, ObjectId, RigidBody, SimObject};
pub use shapes::{Circle, LineSegment, Polygon, Rectangle, Shape, ShapeKind};
pub use world::{Camera, FixedTimestep, World, WorldConfig};
