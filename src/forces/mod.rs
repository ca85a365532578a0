//! Per-tick force generators (gravity, drag).
//!
//! A generator keeps a list of subscribed body ids and, once per tick,
//! pushes its force onto each of them through [`BodyState::apply_force`].

pub mod drag;
pub mod gravity;

pub use drag::DragGenerator;
pub use gravity::GravityGenerator;

use std::collections::BTreeMap;

use tracing::warn;

use crate::math::vec2::Vec2;
use crate::objects::{BodyState, GameObject, ObjectId, RigidBody};

/// Mutable access to bodies by id, as needed by generators.
pub trait BodyLookup {
    fn body_mut(&mut self, id: ObjectId) -> Option<&mut RigidBody>;
}

impl BodyLookup for BTreeMap<ObjectId, Box<dyn GameObject>> {
    fn body_mut(&mut self, id: ObjectId) -> Option<&mut RigidBody> {
        self.get_mut(&id).and_then(|object| object.body_mut())
    }
}

impl BodyLookup for BTreeMap<ObjectId, RigidBody> {
    fn body_mut(&mut self, id: ObjectId) -> Option<&mut RigidBody> {
        self.get_mut(&id)
    }
}

pub trait ForceGenerator {
    fn name(&self) -> &'static str;

    fn subscribers(&self) -> &[ObjectId];

    fn subscribers_mut(&mut self) -> &mut Vec<ObjectId>;

    /// Force to apply to `state` this tick, or `None` to leave it alone.
    fn force_for(&self, state: &BodyState) -> Option<Vec2>;

    fn is_registered(&self, id: ObjectId) -> bool {
        self.subscribers().contains(&id)
    }

    /// Subscribes a body, wiping its pending forces and impulses.
    /// Returns false (and changes nothing) if it was already subscribed.
    fn register_body(&mut self, id: ObjectId, body: &mut RigidBody) -> bool {
        if self.is_registered(id) {
            return false;
        }
        self.subscribers_mut().push(id);
        body.state_mut().clear_forces();
        body.state_mut().clear_impulses();
        true
    }

    /// Unsubscribes a body, wiping its pending forces and impulses.
    /// Returns false if it was not subscribed.
    fn unregister_body(&mut self, id: ObjectId, body: Option<&mut RigidBody>) -> bool {
        let subscribers = self.subscribers_mut();
        let Some(index) = subscribers.iter().position(|s| *s == id) else {
            return false;
        };
        subscribers.remove(index);
        if let Some(body) = body {
            body.state_mut().clear_forces();
            body.state_mut().clear_impulses();
        }
        true
    }

    /// Applies this tick's force to every awake subscriber for `dt` seconds.
    fn update(&mut self, dt: f64, bodies: &mut dyn BodyLookup) {
        for &id in self.subscribers() {
            let Some(body) = bodies.body_mut(id) else {
                warn!(generator = self.name(), body = %id, "subscribed body is missing");
                continue;
            };
            if !body.is_active() {
                continue;
            }
            if let Some(force) = self.force_for(body.state()) {
                body.apply_force(force, dt);
            }
        }
    }
}
