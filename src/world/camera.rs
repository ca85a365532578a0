use serde::{Deserialize, Serialize};

use crate::collision::AABB;
use crate::math::vec2::Vec2;

/// A rectangular window onto the world, in world units. `position` is the
/// top-left corner of the view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    position: Vec2,
    extents: Vec2,
}

impl Camera {
    pub fn new(position: Vec2, extents: Vec2) -> Self {
        Self {
            position,
            extents: Vec2::new(extents.x.abs(), extents.y.abs()),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn extents(&self) -> Vec2 {
        self.extents
    }

    /// Centres the view on `target`.
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target - self.extents / 2.0;
    }

    pub fn view(&self) -> AABB {
        AABB::new(self.position, self.position + self.extents)
    }
}
