use crate::collision::AABB;
use crate::math::vec2::Vec2;

/// A dimensionless shape. Collides with nothing in the narrow phase but
/// still participates in containment queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Vec2,
}

impl Point {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    pub fn bounds(&self) -> AABB {
        AABB::new(self.position, self.position)
    }
}
