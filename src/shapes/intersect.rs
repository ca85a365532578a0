//! Boolean overlap tests between shape pairs.
//!
//! These only answer "do they intersect"; contact generation lives in
//! `collision::narrow_phase`.

use crate::math::tolerance::approx_zero;
use crate::math::vec2::Vec2;

use super::{Circle, LineSegment, Rectangle};

/// Strict overlap: tangent circles do not intersect.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let radii = a.radius + b.radius;
    a.center.distance_squared(b.center) < radii * radii
}

pub fn circle_line(circle: &Circle, line: &LineSegment) -> bool {
    line.distance_squared_to_point(circle.center) < circle.radius * circle.radius
}

pub fn circle_rectangle(circle: &Circle, rect: &Rectangle) -> bool {
    let bounds = rect.to_aabb();
    let closest = Vec2::new(
        circle.center.x.clamp(bounds.min.x, bounds.max.x),
        circle.center.y.clamp(bounds.min.y, bounds.max.y),
    );
    closest.distance_squared(circle.center) < circle.radius * circle.radius
}

pub fn rectangle_rectangle(a: &Rectangle, b: &Rectangle) -> bool {
    a.to_aabb().overlaps(&b.to_aabb())
}

/// True when the segment crosses an edge or lies wholly inside.
pub fn rectangle_line(rect: &Rectangle, line: &LineSegment) -> bool {
    if rect.contains_point(line.a) || rect.contains_point(line.b) {
        return true;
    }
    rect.edges().iter().any(|edge| segment_intersection(edge, line).is_some())
}

pub fn line_line(a: &LineSegment, b: &LineSegment) -> bool {
    segment_intersection(a, b).is_some()
}

/// Intersection point of two segments, with the parameters `t` along `a`
/// and `u` along `b`. Parallel and collinear segments report `None`.
pub fn segment_intersection(a: &LineSegment, b: &LineSegment) -> Option<(Vec2, f64, f64)> {
    let d1 = a.direction();
    let d2 = b.direction();
    let delta_start = b.a - a.a;

    let denominator = d1.cross(d2);
    if approx_zero(denominator) {
        return None;
    }

    let t = delta_start.cross(d2) / denominator;
    let u = delta_start.cross(d1) / denominator;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some((a.a + d1 * t, t, u))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_circle() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        assert!(circle_circle(&a, &Circle::new(Vec2::new(1.5, 0.0), 1.0)));
        assert!(!circle_circle(&a, &Circle::new(Vec2::new(2.0, 0.0), 1.0)));
    }

    #[test]
    fn test_circle_line() {
        let line = LineSegment::new(Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0));
        assert!(circle_line(&Circle::new(Vec2::new(0.0, 0.5), 1.0), &line));
        assert!(!circle_line(&Circle::new(Vec2::new(0.0, 2.0), 1.0), &line));
        assert!(!circle_line(&Circle::new(Vec2::new(7.0, 0.0), 1.0), &line));
    }

    #[test]
    fn test_circle_rectangle() {
        let rect = Rectangle::new(Vec2::ZERO, 2.0, 2.0);
        assert!(circle_rectangle(&Circle::new(Vec2::new(1.5, 0.0), 1.0), &rect));
        assert!(circle_rectangle(&Circle::new(Vec2::ZERO, 0.1), &rect));
        assert!(!circle_rectangle(&Circle::new(Vec2::new(2.0, 2.0), 1.0), &rect));
    }

    #[test]
    fn test_rectangle_line() {
        let rect = Rectangle::new(Vec2::ZERO, 2.0, 2.0);
        let crossing = LineSegment::new(Vec2::new(-3.0, 0.0), Vec2::new(3.0, 0.0));
        let inside = LineSegment::new(Vec2::new(-0.5, 0.0), Vec2::new(0.5, 0.0));
        let outside = LineSegment::new(Vec2::new(-3.0, 3.0), Vec2::new(3.0, 3.0));
        assert!(rectangle_line(&rect, &crossing));
        assert!(rectangle_line(&rect, &inside));
        assert!(!rectangle_line(&rect, &outside));
    }

    #[test]
    fn test_segment_intersection() {
        let a = LineSegment::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        let b = LineSegment::new(Vec2::new(-1.0, 1.0), Vec2::new(1.0, -1.0));
        let (p, t, u) = segment_intersection(&a, &b).unwrap();
        assert_eq!(p, Vec2::ZERO);
        assert!((t - 0.5).abs() < 1e-12 && (u - 0.5).abs() < 1e-12);

        let parallel = LineSegment::new(Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0));
        let base = LineSegment::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert!(!line_line(&parallel, &base));
    }
}
