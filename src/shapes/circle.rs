use crate::collision::AABB;
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Creates a circle. A negative radius is taken by magnitude.
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius: radius.abs() }
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_center(self.center, self.radius * 2.0, self.radius * 2.0)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Point on the circumference in the direction of `toward`.
    /// Falls back to the centre when `toward` coincides with it.
    pub fn surface_point_toward(&self, toward: Vec2) -> Vec2 {
        self.center + (toward - self.center).normalize() * self.radius
    }
}
