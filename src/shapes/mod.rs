pub mod arc;
pub mod circle;
pub mod ellipse;
pub mod intersect;
pub mod line_segment;
pub mod point;
pub mod polygon;
pub mod rectangle;
pub mod sector;
pub mod spline;
pub mod triangle;

pub use arc::Arc;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line_segment::LineSegment;
pub use point::Point;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use sector::Sector;
pub use spline::Spline;
pub use triangle::Triangle;

use crate::collision::AABB;
use crate::math::vec2::Vec2;

/// Runtime tag of a [`Shape`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Point,
    Line,
    Rectangle,
    Circle,
    Ellipse,
    Triangle,
    Arc,
    Polygon,
    Spline,
    Sector,
}

/// A collision shape in world space.
///
/// Every variant has a single reference position (centre, midpoint or
/// centroid) so that a body can keep its shape in step with its own
/// position through [`Shape::set_position`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Line(LineSegment),
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Arc(Arc),
    Polygon(Polygon),
    Spline(Spline),
    Sector(Sector),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Spline(_) => ShapeKind::Spline,
            Shape::Sector(_) => ShapeKind::Sector,
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Shape::Point(p) => p.position,
            Shape::Line(l) => l.midpoint(),
            Shape::Rectangle(r) => r.position,
            Shape::Circle(c) => c.center,
            Shape::Ellipse(e) => e.center,
            Shape::Triangle(t) => t.centroid(),
            Shape::Arc(a) => a.center,
            Shape::Polygon(p) => p.centroid(),
            Shape::Spline(s) => s.centroid(),
            Shape::Sector(s) => s.center,
        }
    }

    /// Moves the shape so that [`Shape::position`] returns `position`.
    pub fn set_position(&mut self, position: Vec2) {
        let offset = position - self.position();
        self.translate(offset);
    }

    pub fn translate(&mut self, offset: Vec2) {
        match self {
            Shape::Point(p) => p.position += offset,
            Shape::Line(l) => {
                l.a += offset;
                l.b += offset;
            }
            Shape::Rectangle(r) => r.position += offset,
            Shape::Circle(c) => c.center += offset,
            Shape::Ellipse(e) => e.center += offset,
            Shape::Triangle(t) => t.translate(offset),
            Shape::Arc(a) => a.center += offset,
            Shape::Polygon(p) => p.translate(offset),
            Shape::Spline(s) => s.translate(offset),
            Shape::Sector(s) => s.center += offset,
        }
    }

    /// Enclosed area; zero for points and open curves.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Point(_) | Shape::Line(_) | Shape::Arc(_) | Shape::Spline(_) => 0.0,
            Shape::Rectangle(r) => r.area(),
            Shape::Circle(c) => c.area(),
            Shape::Ellipse(e) => e.area(),
            Shape::Triangle(t) => t.area(),
            Shape::Polygon(p) => p.area(),
            Shape::Sector(s) => s.area(),
        }
    }

    /// Smallest axis-aligned box enclosing the shape.
    pub fn bounds(&self) -> AABB {
        match self {
            Shape::Point(p) => p.bounds(),
            Shape::Line(l) => l.bounds(),
            Shape::Rectangle(r) => r.to_aabb(),
            Shape::Circle(c) => c.bounds(),
            Shape::Ellipse(e) => e.bounds(),
            Shape::Triangle(t) => t.bounds(),
            Shape::Arc(a) => a.bounds(),
            Shape::Polygon(p) => p.bounds(),
            Shape::Spline(s) => s.bounds(),
            Shape::Sector(s) => s.bounds(),
        }
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            Shape::Point(p) => p.position == point,
            Shape::Line(l) => l.contains_point(point),
            Shape::Rectangle(r) => r.contains_point(point),
            Shape::Circle(c) => c.contains_point(point),
            Shape::Ellipse(e) => e.contains_point(point),
            Shape::Triangle(t) => t.contains_point(point),
            Shape::Arc(a) => a.contains_point(point),
            Shape::Polygon(p) => p.contains_point(point),
            Shape::Spline(s) => s.contains_point(point),
            Shape::Sector(s) => s.contains_point(point),
        }
    }
}
