use crate::collision::AABB;
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub points: [Vec2; 3],
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { points: [a, b, c] }
    }

    /// The centroid, used as the triangle's position.
    pub fn centroid(&self) -> Vec2 {
        (self.points[0] + self.points[1] + self.points[2]) / 3.0
    }

    pub fn translate(&mut self, offset: Vec2) {
        for p in self.points.iter_mut() {
            *p += offset;
        }
    }

    pub fn area(&self) -> f64 {
        let [a, b, c] = self.points;
        ((b - a).cross(c - a) / 2.0).abs()
    }

    pub fn bounds(&self) -> AABB {
        let [a, b, c] = self.points;
        AABB::new(
            Vec2::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Vec2::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        )
    }

    /// Same-side test; works for either winding.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let [a, b, c] = self.points;
        let d1 = (b - a).cross(point - a);
        let d2 = (c - b).cross(point - b);
        let d3 = (a - c).cross(point - c);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}
