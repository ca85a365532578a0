//! Contact generation for shape pairs.
//!
//! Each solver returns either nothing or the two mirrored [`ContactData`]
//! records of one contact. Only five shape pairings generate contacts;
//! every other pairing is listed explicitly in [`generate_contacts`] and
//! yields nothing.

use tracing::trace;

use crate::math::vec2::Vec2;
use crate::objects::ObjectId;
use crate::shapes::{intersect, Circle, LineSegment, Rectangle, Shape};

use super::contact::ContactData;

/// Dispatches on the shape kinds of both bodies.
pub fn generate_contacts(a_id: ObjectId, a: &Shape, b_id: ObjectId, b: &Shape) -> Vec<ContactData> {
    match (a, b) {
        (Shape::Circle(ca), Shape::Circle(cb)) => circle_circle(a_id, ca, b_id, cb),
        (Shape::Circle(circle), Shape::Line(line)) => circle_line(a_id, circle, b_id, line),
        (Shape::Line(line), Shape::Circle(circle)) => circle_line(b_id, circle, a_id, line),
        (Shape::Circle(circle), Shape::Rectangle(rect)) => circle_rectangle(a_id, circle, b_id, rect),
        (Shape::Rectangle(rect), Shape::Circle(circle)) => circle_rectangle(b_id, circle, a_id, rect),
        (Shape::Rectangle(ra), Shape::Rectangle(rb)) => rectangle_rectangle(a_id, ra, b_id, rb),
        (Shape::Rectangle(rect), Shape::Line(line)) => rectangle_line(a_id, rect, b_id, line),
        (Shape::Line(line), Shape::Rectangle(rect)) => rectangle_line(b_id, rect, a_id, line),
        (Shape::Line(_), Shape::Line(_)) => unhandled(a, b),
        (
            Shape::Point(_)
            | Shape::Ellipse(_)
            | Shape::Triangle(_)
            | Shape::Arc(_)
            | Shape::Polygon(_)
            | Shape::Spline(_)
            | Shape::Sector(_),
            _,
        )
        | (
            _,
            Shape::Point(_)
            | Shape::Ellipse(_)
            | Shape::Triangle(_)
            | Shape::Arc(_)
            | Shape::Polygon(_)
            | Shape::Spline(_)
            | Shape::Sector(_),
        ) => unhandled(a, b),
    }
}

fn unhandled(a: &Shape, b: &Shape) -> Vec<ContactData> {
    trace!(a = ?a.kind(), b = ?b.kind(), "no contact solver for shape pair");
    Vec::new()
}

/// Contact points sit on each circle's surface facing the other centre.
pub fn circle_circle(a_id: ObjectId, a: &Circle, b_id: ObjectId, b: &Circle) -> Vec<ContactData> {
    if !intersect::circle_circle(a, b) {
        return Vec::new();
    }
    let point_a = a.surface_point_toward(b.center);
    let point_b = b.surface_point_toward(a.center);
    let normal_a = (a.center - b.center).normalize();
    ContactData::mirrored(a_id, point_a, b_id, point_b, normal_a, point_a.distance(point_b)).to_vec()
}

/// The circle is pushed out along whichever line normal faces its centre.
pub fn circle_line(
    circle_id: ObjectId,
    circle: &Circle,
    line_id: ObjectId,
    line: &LineSegment,
) -> Vec<ContactData> {
    if !intersect::circle_line(circle, line) {
        return Vec::new();
    }
    let (closest, _) = line.closest_point(circle.center);
    let to_center = circle.center - closest;
    let direction = line.direction();
    let left = direction.left_normal();
    let right = direction.right_normal();
    let normal = if to_center.angle_between(left) <= to_center.angle_between(right) {
        left
    } else {
        right
    };
    let penetration = circle.radius - to_center.magnitude();
    let point_circle = circle.center - normal * circle.radius;
    ContactData::mirrored(circle_id, point_circle, line_id, closest, normal, penetration).to_vec()
}

/// Penetration comes from the nearest rectangle edge; the normal points
/// from the rectangle centre to the circle centre.
pub fn circle_rectangle(
    circle_id: ObjectId,
    circle: &Circle,
    rect_id: ObjectId,
    rect: &Rectangle,
) -> Vec<ContactData> {
    if !intersect::circle_rectangle(circle, rect) {
        return Vec::new();
    }
    let Some((edge_point, distance_sq)) = rect
        .edges()
        .iter()
        .map(|edge| {
            let (point, _) = edge.closest_point(circle.center);
            (point, point.distance_squared(circle.center))
        })
        .min_by(|x, y| x.1.total_cmp(&y.1))
    else {
        return Vec::new();
    };
    let distance = distance_sq.sqrt();
    let penetration = if rect.contains_point(circle.center) {
        circle.radius + distance
    } else {
        circle.radius - distance
    };
    let normal = (circle.center - rect.position).normalize();
    let point_circle = circle.surface_point_toward(rect.position);
    ContactData::mirrored(circle_id, point_circle, rect_id, edge_point, normal, penetration).to_vec()
}

/// Face normal chosen from the dominant axis of the centre offset.
/// Penetration is the larger side of the overlap region.
pub fn rectangle_rectangle(
    a_id: ObjectId,
    a: &Rectangle,
    b_id: ObjectId,
    b: &Rectangle,
) -> Vec<ContactData> {
    let Some(overlap) = a.to_aabb().intersection(&b.to_aabb()) else {
        return Vec::new();
    };
    let offset = a.position - b.position;
    let normal_a = if offset.x.abs() >= offset.y.abs() {
        // a lies to the right of b when the offset is positive
        if offset.x >= 0.0 {
            Vec2::X_AXIS
        } else {
            -Vec2::X_AXIS
        }
    } else if offset.y > 0.0 {
        // below, with +y down
        Vec2::Y_AXIS
    } else {
        -Vec2::Y_AXIS
    };
    let penetration = overlap.width().max(overlap.height());
    let point = overlap.center();
    ContactData::mirrored(a_id, point, b_id, point, normal_a, penetration).to_vec()
}

/// Detection only; never produces contacts.
pub fn rectangle_line(
    rect_id: ObjectId,
    rect: &Rectangle,
    line_id: ObjectId,
    line: &LineSegment,
) -> Vec<ContactData> {
    if intersect::rectangle_line(rect, line) {
        trace!(rect = %rect_id, line = %line_id, "rectangle-line overlap left unresolved");
    }
    Vec::new()
}
