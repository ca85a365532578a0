use std::cmp::Ordering;

use crate::math::tolerance::approx_eq_within;
use crate::math::vec2::Vec2;

use super::body_state::BodyState;

/// Default tolerance for [`RigidBody::mass_eq`] and [`RigidBody::mass_cmp`].
pub const DEFAULT_MASS_TOLERANCE: f64 = 1e-4;

/// Handle owning exactly one [`BodyState`].
///
/// Bodies have no equality of their own; identity lives in the world's
/// [`ObjectId`](super::ObjectId). Mass comparisons are explicit operations.
#[derive(Debug, Clone)]
pub struct RigidBody {
    state: BodyState,
    mass_tolerance: f64,
}

impl RigidBody {
    pub fn new(state: BodyState) -> Self {
        Self {
            state,
            mass_tolerance: DEFAULT_MASS_TOLERANCE,
        }
    }

    pub fn with_mass_tolerance(mut self, tolerance: f64) -> Self {
        self.mass_tolerance = tolerance.abs();
        self
    }

    pub fn state(&self) -> &BodyState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BodyState {
        &mut self.state
    }

    pub fn into_state(self) -> BodyState {
        self.state
    }

    pub fn mass_tolerance(&self) -> f64 {
        self.mass_tolerance
    }

    /// True when both masses agree within this body's tolerance.
    pub fn mass_eq(&self, other: &RigidBody) -> bool {
        approx_eq_within(self.state.mass(), other.state.mass(), self.mass_tolerance)
    }

    /// Orders bodies by mass, treating masses within tolerance as equal.
    pub fn mass_cmp(&self, other: &RigidBody) -> Ordering {
        if self.mass_eq(other) {
            Ordering::Equal
        } else if self.state.mass() < other.state.mass() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    // Shorthands for the most used state operations.

    pub fn position(&self) -> Vec2 {
        self.state.position()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.state.set_position(position);
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity()
    }

    pub fn mass(&self) -> f64 {
        self.state.mass()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn apply_force(&mut self, force: Vec2, duration: f64) -> bool {
        self.state.apply_force(force, duration)
    }

    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.state.apply_impulse(impulse);
    }

    pub fn update(&mut self, dt: f64) {
        self.state.update(dt);
    }
}

impl From<BodyState> for RigidBody {
    fn from(state: BodyState) -> Self {
        RigidBody::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(mass: f64) -> RigidBody {
        RigidBody::new(BodyState::new(mass, Vec2::ZERO))
    }

    #[test]
    fn test_mass_comparison_uses_tolerance() {
        let a = body(10.0);
        let b = body(10.00001);
        let c = body(12.0);
        assert!(a.mass_eq(&b));
        assert_eq!(a.mass_cmp(&b), Ordering::Equal);
        assert_eq!(a.mass_cmp(&c), Ordering::Less);
        assert_eq!(c.mass_cmp(&a), Ordering::Greater);
    }

    #[test]
    fn test_custom_tolerance() {
        let a = body(10.0).with_mass_tolerance(0.5);
        assert!(a.mass_eq(&body(10.4)));
        assert!(!a.mass_eq(&body(10.6)));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = body(1.0);
        original.apply_force(Vec2::new(1.0, 0.0), 1.0);
        let copy = original.clone();
        original.state_mut().clear_forces();
        assert_eq!(copy.state().forces().len(), 1);
        assert!(original.state().forces().is_empty());
    }
}
