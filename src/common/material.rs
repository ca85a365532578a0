//! Defines physical material properties.

use serde::{Deserialize, Serialize};

/// Surface properties of a body.
///
/// Only `restitution` feeds the collision solvers. The friction
/// coefficients are carried for callers and are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsMaterial {
    /// Coefficient of restitution (bounciness), kept within [0, 1].
    restitution: f64,
    pub static_friction: f64,
    pub kinetic_friction: f64,
}

impl PhysicsMaterial {
    pub fn new(restitution: f64, static_friction: f64, kinetic_friction: f64) -> Self {
        Self {
            restitution: restitution.clamp(0.0, 1.0),
            static_friction,
            kinetic_friction,
        }
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    /// Sets the restitution, clamping into [0, 1].
    pub fn set_restitution(&mut self, restitution: f64) {
        self.restitution = restitution.clamp(0.0, 1.0);
    }
}

impl Default for PhysicsMaterial {
    /// Perfectly elastic, frictionless.
    fn default() -> Self {
        Self {
            restitution: 1.0,
            static_friction: 0.0,
            kinetic_friction: 0.0,
        }
    }
}
