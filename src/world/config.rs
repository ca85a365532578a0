//! World configuration.

use serde::{Deserialize, Serialize};

use crate::collision::quadtree::MAX_QUADTREE_DEPTH;
use crate::collision::spatial_grid::grid_dimensions;
use crate::error::{PhysicsError, PhysicsResult};
use crate::math::vec2::Vec2;
use crate::objects::DEFAULT_DAMPER;

/// Layout of the spatial index the world rebuilds every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Partitioning {
    /// Uniform grid with square cells of `cell_size` world units.
    Grid { cell_size: f64 },
    /// Quadtree splitting leaves above `capacity` entries, `max_depth` levels deep.
    QuadTree { max_depth: usize, capacity: usize },
}

impl Default for Partitioning {
    fn default() -> Self {
        Partitioning::Grid { cell_size: 64.0 }
    }
}

/// Configuration for a [`World`](super::World).
///
/// # Example
///
/// ```
/// use arcade_physics::world::WorldConfig;
///
/// let config = WorldConfig::from_json(r#"{ "width": 320.0, "gravity": { "x": 0.0, "y": 9.8 } }"#).unwrap();
/// assert_eq!(config.width, 320.0);
/// assert_eq!(config.scale, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width in world units.
    pub width: f64,

    /// World height in world units.
    pub height: f64,

    /// Pixels per world unit.
    pub scale: f64,

    /// Gravitational acceleration. Zero disables the gravity generator.
    pub gravity: Vec2,

    /// Linear drag coefficient.
    pub drag_k1: f64,

    /// Quadratic drag coefficient. Drag is disabled when both are zero.
    pub drag_k2: f64,

    pub partitioning: Partitioning,

    /// Velocity damper given to bodies added through `World::add_body`.
    pub damper: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            scale: 1.0,
            gravity: Vec2::ZERO,
            drag_k1: 0.0,
            drag_k2: 0.0,
            partitioning: Partitioning::default(),
            damper: DEFAULT_DAMPER,
        }
    }
}

impl WorldConfig {
    #[must_use]
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    #[must_use]
    pub fn with_drag(mut self, k1: f64, k2: f64) -> Self {
        self.drag_k1 = k1;
        self.drag_k2 = k2;
        self
    }

    #[must_use]
    pub fn with_partitioning(mut self, partitioning: Partitioning) -> Self {
        self.partitioning = partitioning;
        self
    }

    #[must_use]
    pub fn with_damper(mut self, damper: f64) -> Self {
        self.damper = damper;
        self
    }

    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> PhysicsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> PhysicsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn has_gravity(&self) -> bool {
        !self.gravity.is_zero()
    }

    pub fn has_drag(&self) -> bool {
        !(self.drag_k1 == 0.0 && self.drag_k2 == 0.0)
    }

    /// Checks ranges that the world cannot run with.
    pub fn validate(&self) -> PhysicsResult<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(PhysicsError::invalid_argument(format!(
                "world dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(PhysicsError::invalid_argument(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !(0.0..=1.0).contains(&self.damper) {
            return Err(PhysicsError::invalid_argument(format!(
                "damper must lie in [0, 1], got {}",
                self.damper
            )));
        }
        match self.partitioning {
            Partitioning::Grid { cell_size } if cell_size.is_nan() || cell_size <= 0.0 => Err(PhysicsError::invalid_argument(
                format!("grid cell size must be positive, got {cell_size}"),
            )),
            Partitioning::Grid { cell_size } => {
                grid_dimensions(self.width, self.height, cell_size).map(|_| ())
            }
            Partitioning::QuadTree { capacity: 0, .. } => Err(PhysicsError::invalid_argument(
                "quadtree leaf capacity must be at least 1",
            )),
            Partitioning::QuadTree { max_depth, .. } if max_depth > MAX_QUADTREE_DEPTH => {
                Err(PhysicsError::invalid_argument(format!(
                    "quadtree depth {max_depth} exceeds the limit of {MAX_QUADTREE_DEPTH}"
                )))
            }
            Partitioning::QuadTree { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_gravity());
        assert!(!config.has_drag());
        assert_eq!(config.damper, DEFAULT_DAMPER);
    }

    #[test]
    fn test_builder() {
        let config = WorldConfig::new(100.0, 50.0, 2.0)
            .with_gravity(Vec2::new(0.0, 9.8))
            .with_drag(0.1, 0.0)
            .with_partitioning(Partitioning::QuadTree {
                max_depth: 5,
                capacity: 4,
            });
        assert!(config.has_gravity());
        assert!(config.has_drag());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        assert!(WorldConfig::new(0.0, 10.0, 1.0).validate().is_err());
        assert!(WorldConfig::new(10.0, 10.0, 0.0).validate().is_err());
        assert!(WorldConfig::default().with_damper(1.5).validate().is_err());
        let grid = WorldConfig::default().with_partitioning(Partitioning::Grid { cell_size: 0.0 });
        assert!(matches!(grid.validate(), Err(PhysicsError::InvalidArgument(_))));
        let tree = WorldConfig::default().with_partitioning(Partitioning::QuadTree {
            max_depth: 3,
            capacity: 0,
        });
        assert!(tree.validate().is_err());
        let deep = WorldConfig::default().with_partitioning(Partitioning::QuadTree {
            max_depth: MAX_QUADTREE_DEPTH + 1,
            capacity: 4,
        });
        assert!(matches!(deep.validate(), Err(PhysicsError::InvalidArgument(_))));
        let fine = WorldConfig::new(1e6, 1e6, 1.0).with_partitioning(Partitioning::Grid { cell_size: 1e-3 });
        assert!(matches!(fine.validate(), Err(PhysicsError::InvalidArgument(_))));
    }

    #[test]
    fn test_serialization() {
        let config = WorldConfig::new(640.0, 480.0, 2.0).with_gravity(Vec2::new(0.0, 9.8));
        let json = config.to_json().unwrap();
        let parsed = WorldConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WorldConfig::from_json(
            r#"{ "height": 240.0, "partitioning": { "kind": "quad_tree", "max_depth": 6, "capacity": 8 } }"#,
        )
        .unwrap();
        assert_eq!(config.height, 240.0);
        assert_eq!(config.width, 800.0);
        assert_eq!(
            config.partitioning,
            Partitioning::QuadTree {
                max_depth: 6,
                capacity: 8
            }
        );
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = WorldConfig::from_json("{ \"width\": \"wide\" }").unwrap_err();
        assert!(matches!(err, PhysicsError::Config(_)));
    }
}
