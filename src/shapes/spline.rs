use crate::collision::AABB;
use crate::math::vec2::Vec2;

use super::arc::CURVE_SEGMENTS;
use super::line_segment::LineSegment;

/// A Catmull-Rom curve through its control points. Open curve, no area.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub control_points: Vec<Vec2>,
}

impl Spline {
    pub fn new(control_points: Vec<Vec2>) -> Self {
        Self { control_points }
    }

    /// Mean of the control points; zero for an empty spline.
    pub fn centroid(&self) -> Vec2 {
        if self.control_points.is_empty() {
            return Vec2::ZERO;
        }
        self.control_points.iter().copied().sum::<Vec2>() / self.control_points.len() as f64
    }

    pub fn translate(&mut self, offset: Vec2) {
        for p in self.control_points.iter_mut() {
            *p += offset;
        }
    }

    /// Points along the curve, `CURVE_SEGMENTS` per span.
    pub fn sample_points(&self) -> Vec<Vec2> {
        let pts = &self.control_points;
        if pts.len() < 2 {
            return pts.clone();
        }
        let last = pts.len() - 1;
        let mut out = Vec::with_capacity(last * CURVE_SEGMENTS + 1);
        for i in 0..last {
            let p0 = pts[i.saturating_sub(1)];
            let p1 = pts[i];
            let p2 = pts[i + 1];
            let p3 = pts[(i + 2).min(last)];
            for step in 0..CURVE_SEGMENTS {
                let t = step as f64 / CURVE_SEGMENTS as f64;
                out.push(catmull_rom(p0, p1, p2, p3, t));
            }
        }
        out.push(pts[last]);
        out
    }

    pub fn bounds(&self) -> AABB {
        let centroid = self.centroid();
        AABB::from_points(&self.sample_points()).unwrap_or_else(|| AABB::new(centroid, centroid))
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.sample_points()
            .windows(2)
            .any(|w| LineSegment::new(w[0], w[1]).contains_point(point))
    }
}

fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f64) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    (p1 * 2.0 + (p2 - p0) * t + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2 + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
        * 0.5
}
