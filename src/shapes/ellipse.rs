use crate::collision::AABB;
use crate::math::tolerance::approx_zero;
use crate::math::vec2::Vec2;

/// An axis-aligned ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    pub fn new(center: Vec2, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x: radius_x.abs(),
            radius_y: radius_y.abs(),
        }
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius_x * self.radius_y
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_center(self.center, self.radius_x * 2.0, self.radius_y * 2.0)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        if approx_zero(self.radius_x) || approx_zero(self.radius_y) {
            return false;
        }
        let d = point - self.center;
        let nx = d.x / self.radius_x;
        let ny = d.y / self.radius_y;
        nx * nx + ny * ny <= 1.0
    }
}
