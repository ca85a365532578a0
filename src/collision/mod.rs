pub mod aabb;
pub mod bounding_box;
pub mod broad_phase;
pub mod contact;
pub mod narrow_phase;
pub mod quadtree;
pub mod solver;
pub mod spatial_grid;
pub mod spatial_index;

// Re-export key types
pub use aabb::AABB;
pub use bounding_box::{BoundingBox, OrientedBox};
pub use broad_phase::{find_pairs, BroadPhaseBody};
pub use contact::{ContactData, ContactPair};
pub use narrow_phase::generate_contacts;
pub use quadtree::QuadTree;
pub use solver::{PositionSolver, VelocitySolver};
pub use spatial_grid::SpatialGrid;
pub use spatial_index::{IndexEntry, Partition, SpatialIndex};
