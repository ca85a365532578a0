//! Collision response for one candidate pair.

use tracing::trace;

use crate::math::tolerance::approx_zero;
use crate::objects::{BodyState, ObjectId};

use super::contact::ContactData;
use super::narrow_phase::generate_contacts;

/// Elastic exchange of velocity along the line between the body centres,
/// followed by each body's own restitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocitySolver;

impl VelocitySolver {
    /// Updates both velocities in place. Returns false when the pair was
    /// skipped because neither body can move.
    pub fn solve(&self, a: &mut BodyState, b: &mut BodyState) -> bool {
        let inv_a = a.inverse_mass();
        let inv_b = b.inverse_mass();
        let inv_total = inv_a + inv_b;
        if approx_zero(inv_total) {
            return false;
        }

        let delta = a.position() - b.position();
        let distance_sq = delta.magnitude_squared();
        // Coincident centres give no direction to exchange along
        let normal_scale = if approx_zero(distance_sq) {
            0.0
        } else {
            (a.velocity() - b.velocity()).dot(delta) / distance_sq
        };

        let va = a.velocity() - delta * (2.0 * inv_a / inv_total * normal_scale);
        let vb = b.velocity() + delta * (2.0 * inv_b / inv_total * normal_scale);

        if !a.is_static() {
            a.set_velocity(va * a.material().restitution());
        }
        if !b.is_static() {
            b.set_velocity(vb * b.material().restitution());
        }
        true
    }
}

/// Pushes interpenetrating bodies apart along their contact normals,
/// weighted by inverse mass.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionSolver;

impl PositionSolver {
    /// Generates contacts from the two shapes and applies them. Returns the
    /// contacts that were applied; empty when there was nothing to resolve.
    pub fn solve(
        &self,
        a_id: ObjectId,
        a: &mut BodyState,
        b_id: ObjectId,
        b: &mut BodyState,
    ) -> Vec<ContactData> {
        let inv_a = a.inverse_mass();
        let inv_b = b.inverse_mass();
        let inv_total = inv_a + inv_b;
        if approx_zero(inv_total) {
            return Vec::new();
        }

        let (Some(shape_a), Some(shape_b)) = (a.shape(), b.shape()) else {
            return Vec::new();
        };
        let contacts = generate_contacts(a_id, shape_a, b_id, shape_b);

        for contact in &contacts {
            let (state, inv) = if contact.body == a_id {
                (&mut *a, inv_a)
            } else {
                (&mut *b, inv_b)
            };
            let displacement = contact.normal * (contact.penetration * inv / inv_total);
            trace!(body = %contact.body, ?displacement, "separating body");
            state.translate(displacement);
        }
        contacts
    }
}
