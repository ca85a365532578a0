use crate::math::vec2::Vec2;
use crate::objects::{BodyState, ObjectId};

use super::ForceGenerator;

/// Velocity-opposing drag: `|F| = k1 * |v| + k2 * |v|^2`.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGenerator {
    k1: f64,
    k2: f64,
    subscribers: Vec<ObjectId>,
}

impl DragGenerator {
    pub fn new(k1: f64, k2: f64) -> Self {
        Self {
            k1,
            k2,
            subscribers: Vec::new(),
        }
    }

    pub fn coefficients(&self) -> (f64, f64) {
        (self.k1, self.k2)
    }

    pub fn set_coefficients(&mut self, k1: f64, k2: f64) {
        self.k1 = k1;
        self.k2 = k2;
    }
}

impl ForceGenerator for DragGenerator {
    fn name(&self) -> &'static str {
        "drag"
    }

    fn subscribers(&self) -> &[ObjectId] {
        &self.subscribers
    }

    fn subscribers_mut(&mut self) -> &mut Vec<ObjectId> {
        &mut self.subscribers
    }

    fn force_for(&self, state: &BodyState) -> Option<Vec2> {
        let velocity = state.velocity();
        if velocity.is_zero() {
            return None;
        }
        let speed = velocity.magnitude();
        let magnitude = self.k1 * speed + self.k2 * speed * speed;
        Some(-velocity.normalize() * magnitude)
    }
}
