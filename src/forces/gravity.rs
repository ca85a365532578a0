use crate::math::vec2::Vec2;
use crate::objects::{BodyState, ObjectId};

use super::ForceGenerator;

/// Uniform gravitational acceleration, scaled per axis by each body's
/// gravity modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct GravityGenerator {
    gravity: Vec2,
    subscribers: Vec<ObjectId>,
}

impl GravityGenerator {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            subscribers: Vec::new(),
        }
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }
}

impl ForceGenerator for GravityGenerator {
    fn name(&self) -> &'static str {
        "gravity"
    }

    fn subscribers(&self) -> &[ObjectId] {
        &self.subscribers
    }

    fn subscribers_mut(&mut self) -> &mut Vec<ObjectId> {
        &mut self.subscribers
    }

    fn force_for(&self, state: &BodyState) -> Option<Vec2> {
        let force = self.gravity.scale(state.gravity_modifier()) * state.mass();
        (!force.is_zero()).then_some(force)
    }
}
