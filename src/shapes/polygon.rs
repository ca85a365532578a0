use crate::collision::AABB;
use crate::error::{PhysicsError, PhysicsResult};
use crate::math::tolerance::approx_zero;
use crate::math::vec2::Vec2;

/// A simple polygon given by its world-space vertices, in consistent winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    ///
    /// Fails if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>) -> PhysicsResult<Self> {
        if vertices.len() < 3 {
            return Err(PhysicsError::invalid_argument(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Polygon { vertices })
    }

    /// Area by the shoelace formula. Winding independent.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut area = 0.0;
        for i in 0..n {
            area += self.vertices[i].cross(self.vertices[(i + 1) % n]);
        }
        (area / 2.0).abs()
    }

    /// Area-weighted centroid, falling back to the vertex mean for
    /// degenerate (collinear) outlines.
    pub fn centroid(&self) -> Vec2 {
        let n = self.vertices.len();
        if n < 3 {
            return if n == 0 { Vec2::ZERO } else { self.vertices.iter().copied().sum::<Vec2>() / n as f64 };
        }
        let origin = self.vertices[0];
        let mut centroid = Vec2::ZERO;
        let mut signed_area_sum = 0.0;

        for i in 1..(n - 1) {
            let v2 = self.vertices[i];
            let v3 = self.vertices[i + 1];
            let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += triangle_signed_area;
            centroid += (origin + v2 + v3) / 3.0 * triangle_signed_area;
        }

        if approx_zero(signed_area_sum) {
            self.vertices.iter().copied().sum::<Vec2>() / n as f64
        } else {
            centroid / signed_area_sum
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        for v in self.vertices.iter_mut() {
            *v += offset;
        }
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_points(&self.vertices).unwrap_or_else(|| AABB::new(Vec2::ZERO, Vec2::ZERO))
    }

    /// Even-odd ray cast containment.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > point.y) != (vj.y > point.y)
                && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
