use crate::collision::AABB;
use crate::math::vec2::Vec2;

use super::line_segment::LineSegment;

/// An axis-aligned rectangle positioned by its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub position: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(position: Vec2, width: f64, height: f64) -> Self {
        Self {
            position,
            width: width.abs(),
            height: height.abs(),
        }
    }

    pub fn from_aabb(aabb: &AABB) -> Self {
        Self::new(aabb.center(), aabb.width(), aabb.height())
    }

    pub fn to_aabb(&self) -> AABB {
        AABB::from_center(self.position, self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.to_aabb().contains_point(point)
    }

    /// Top, right, bottom and left edges, in that order (screen space, +y down).
    pub fn edges(&self) -> [LineSegment; 4] {
        let [top_left, top_right, bottom_right, bottom_left] = self.to_aabb().corners();
        [
            LineSegment::new(top_left, top_right),
            LineSegment::new(top_right, bottom_right),
            LineSegment::new(bottom_right, bottom_left),
            LineSegment::new(bottom_left, top_left),
        ]
    }
}
