use crate::collision::AABB;
use crate::math::tolerance::approx_zero;
use crate::math::vec2::Vec2;

/// A finite segment between two world-space endpoints.
/// Its position is the midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub a: Vec2,
    pub b: Vec2,
}

impl LineSegment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    pub fn length_squared(&self) -> f64 {
        self.a.distance_squared(self.b)
    }

    /// Returns the direction vector of the line segment (from a to b).
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) / 2.0
    }

    /// Moves both endpoints so the midpoint lands on `position`.
    pub fn set_position(&mut self, position: Vec2) {
        let offset = position - self.midpoint();
        self.a += offset;
        self.b += offset;
    }

    pub fn bounds(&self) -> AABB {
        AABB::new(self.a, self.b)
    }

    /// Closest point on the segment to `point`, with the clamped
    /// parameter `t` in [0, 1] along a -> b.
    pub fn closest_point(&self, point: Vec2) -> (Vec2, f64) {
        let segment_vec = self.direction();
        let length_sq = segment_vec.magnitude_squared();
        if approx_zero(length_sq) {
            return (self.a, 0.0);
        }
        let t = ((point - self.a).dot(segment_vec) / length_sq).clamp(0.0, 1.0);
        (self.a + segment_vec * t, t)
    }

    pub fn distance_to_point(&self, point: Vec2) -> f64 {
        let (closest, _) = self.closest_point(point);
        closest.distance(point)
    }

    pub fn distance_squared_to_point(&self, point: Vec2) -> f64 {
        let (closest, _) = self.closest_point(point);
        closest.distance_squared(point)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        approx_zero(self.distance_to_point(point))
    }
}
