use crate::math::transform::Transform;
use crate::math::vec2::Vec2;

use super::aabb::AABB;

/// A box rotated about its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub rotation: f64,
}

impl OrientedBox {
    pub fn new(center: Vec2, width: f64, height: f64, rotation: f64) -> Self {
        Self {
            center,
            half_extents: Vec2::new(width.abs() / 2.0, height.abs() / 2.0),
            rotation,
        }
    }

    pub fn corners(&self) -> [Vec2; 4] {
        let t = Transform::new(self.center, self.rotation);
        let h = self.half_extents;
        [
            t.apply(Vec2::new(-h.x, -h.y)),
            t.apply(Vec2::new(h.x, -h.y)),
            t.apply(Vec2::new(h.x, h.y)),
            t.apply(Vec2::new(-h.x, h.y)),
        ]
    }
}

/// The coarse volume a body carries for broad-phase filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingBox {
    Axis(AABB),
    Oriented(OrientedBox),
}

impl BoundingBox {
    /// Axis-aligned box of the given size centred on `center`.
    pub fn axis(center: Vec2, width: f64, height: f64) -> Self {
        BoundingBox::Axis(AABB::from_center(center, width, height))
    }

    pub fn oriented(center: Vec2, width: f64, height: f64, rotation: f64) -> Self {
        BoundingBox::Oriented(OrientedBox::new(center, width, height, rotation))
    }

    pub fn center(&self) -> Vec2 {
        match self {
            BoundingBox::Axis(b) => b.center(),
            BoundingBox::Oriented(o) => o.center,
        }
    }

    pub fn set_center(&mut self, center: Vec2) {
        match self {
            BoundingBox::Axis(b) => *b = b.recentered(center),
            BoundingBox::Oriented(o) => o.center = center,
        }
    }

    /// Area of the box itself (not of its axis-aligned hull).
    pub fn area(&self) -> f64 {
        match self {
            BoundingBox::Axis(b) => b.area(),
            BoundingBox::Oriented(o) => 4.0 * o.half_extents.x * o.half_extents.y,
        }
    }

    /// Axis-aligned box enclosing this one. Used by the broad phase.
    pub fn to_aabb(&self) -> AABB {
        match self {
            BoundingBox::Axis(b) => *b,
            BoundingBox::Oriented(o) => {
                AABB::from_points(&o.corners()).unwrap_or_else(|| AABB::new(o.center, o.center))
            }
        }
    }
}
