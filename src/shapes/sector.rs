use crate::collision::AABB;
use crate::math::vec2::Vec2;

use super::arc::{angle_in_sweep, sample_arc, sweep_between};

/// A filled circular wedge ("pie slice").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub center: Vec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Sector {
    pub fn new(center: Vec2, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
            start_angle,
            end_angle,
        }
    }

    pub fn sweep(&self) -> f64 {
        sweep_between(self.start_angle, self.end_angle)
    }

    pub fn area(&self) -> f64 {
        0.5 * self.radius * self.radius * self.sweep()
    }

    pub fn bounds(&self) -> AABB {
        let mut points = sample_arc(self.center, self.radius, self.start_angle, self.sweep());
        points.push(self.center);
        AABB::from_points(&points).unwrap_or_else(|| AABB::new(self.center, self.center))
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        let offset = point - self.center;
        if offset.magnitude_squared() > self.radius * self.radius {
            return false;
        }
        offset.is_zero() || angle_in_sweep(offset.angle(), self.start_angle, self.sweep())
    }
}
