use crate::collision::BoundingBox;
use crate::common::PhysicsMaterial;
use crate::math::tolerance::{approx_zero, EPSILON};
use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// Velocity multiplier applied once per integrated tick.
pub const DEFAULT_DAMPER: f64 = 0.9999;

/// A force that keeps acting until its remaining duration runs out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedForce {
    pub force: Vec2,
    pub remaining: f64,
}

/// The physical state of one body.
///
/// The bounding box and collision shape are owned by the state and always
/// follow its position: every position change goes through
/// [`BodyState::set_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    mass: f64,
    gravity_modifier: Vec2,
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    forces: Vec<TimedForce>,
    impulses: Vec<Vec2>,
    active: bool,
    bounding_box: Option<BoundingBox>,
    shape: Option<Shape>,
    material: PhysicsMaterial,
    damper: f64,
}

impl BodyState {
    /// Creates an awake body at `position`. A mass of zero makes the body
    /// static; negative masses are treated as zero.
    pub fn new(mass: f64, position: Vec2) -> Self {
        Self {
            mass: mass.max(0.0),
            gravity_modifier: Vec2::ONE,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            forces: Vec::new(),
            impulses: Vec::new(),
            active: true,
            bounding_box: None,
            shape: None,
            material: PhysicsMaterial::default(),
            damper: DEFAULT_DAMPER,
        }
    }

    pub fn with_bounding_box(mut self, mut bounding_box: BoundingBox) -> Self {
        bounding_box.set_center(self.position);
        self.bounding_box = Some(bounding_box);
        self
    }

    pub fn with_shape(mut self, mut shape: Shape) -> Self {
        shape.set_position(self.position);
        self.shape = Some(shape);
        self
    }

    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_damper(mut self, damper: f64) -> Self {
        self.damper = damper;
        self
    }

    // --- Accessors ---

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass.max(0.0);
    }

    /// Zero-mass bodies are pinned: they never move under forces or contacts.
    pub fn is_static(&self) -> bool {
        approx_zero(self.mass)
    }

    /// `1 / mass`, with zero mass treated as infinite mass.
    pub fn inverse_mass(&self) -> f64 {
        if self.is_static() {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves the body, carrying its bounding box and shape along.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        if let Some(bounding_box) = self.bounding_box.as_mut() {
            bounding_box.set_center(position);
        }
        if let Some(shape) = self.shape.as_mut() {
            shape.set_position(position);
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.set_position(self.position + offset);
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vec2) {
        self.acceleration = acceleration;
    }

    pub fn gravity_modifier(&self) -> Vec2 {
        self.gravity_modifier
    }

    pub fn set_gravity_modifier(&mut self, modifier: Vec2) {
        self.gravity_modifier = modifier;
    }

    pub fn damper(&self) -> f64 {
        self.damper
    }

    pub fn set_damper(&mut self, damper: f64) {
        self.damper = damper;
    }

    pub fn material(&self) -> &PhysicsMaterial {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut PhysicsMaterial {
        &mut self.material
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bounding_box.as_ref()
    }

    /// Replaces the bounding box, recentring it on the body.
    pub fn set_bounding_box(&mut self, bounding_box: Option<BoundingBox>) {
        self.bounding_box = bounding_box.map(|mut b| {
            b.set_center(self.position);
            b
        });
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Replaces the collision shape, moving it onto the body.
    pub fn set_shape(&mut self, shape: Option<Shape>) {
        self.shape = shape.map(|mut s| {
            s.set_position(self.position);
            s
        });
    }

    pub fn forces(&self) -> &[TimedForce] {
        &self.forces
    }

    pub fn impulses(&self) -> &[Vec2] {
        &self.impulses
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn wake(&mut self) {
        self.active = true;
    }

    pub fn sleep(&mut self) {
        self.active = false;
    }

    /// Mass per unit of bounding-box area. Infinite without a box or with
    /// a zero-area box.
    pub fn density(&self) -> f64 {
        match self.bounding_box.as_ref().map(BoundingBox::area) {
            Some(area) if !approx_zero(area) => self.mass / area,
            _ => f64::INFINITY,
        }
    }

    // --- Forces ---

    /// Applies `force` for `duration` seconds. Non-positive durations are
    /// rejected and leave the body untouched. Returns whether the force was
    /// accepted.
    pub fn apply_force(&mut self, force: Vec2, duration: f64) -> bool {
        if duration <= 0.0 {
            return false;
        }
        self.forces.push(TimedForce { force, remaining: duration });
        self.wake();
        true
    }

    /// Queues a one-shot impulse folded into the next tick's net force.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulses.push(impulse);
        self.wake();
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
    }

    pub fn clear_impulses(&mut self) {
        self.impulses.clear();
    }

    /// Sum of all live forces and pending impulses.
    pub fn net_force(&self) -> Vec2 {
        self.forces.iter().map(|f| f.force).sum::<Vec2>() + self.impulses.iter().copied().sum::<Vec2>()
    }

    fn halt(&mut self) {
        self.clear_forces();
        self.clear_impulses();
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
    }

    /// Advances the body by `dt` seconds under constant acceleration.
    pub fn update(&mut self, dt: f64) {
        if !self.active {
            self.halt();
            return;
        }

        let net_force = self.net_force();
        self.clear_impulses();

        if self.is_static() {
            self.halt();
            self.sleep();
            return;
        }

        self.acceleration = net_force / self.mass;
        let displacement = self.velocity * dt + self.acceleration * (0.5 * dt * dt);
        self.velocity = (self.velocity + self.acceleration * dt) * self.damper;
        self.translate(displacement);

        for force in self.forces.iter_mut() {
            force.remaining -= dt;
        }
        self.forces.retain(|f| f.remaining > EPSILON);

        if self.forces.is_empty()
            && self.impulses.is_empty()
            && self.acceleration.is_zero()
            && self.velocity.is_zero()
        {
            self.velocity = Vec2::ZERO;
            self.acceleration = Vec2::ZERO;
            self.sleep();
        } else {
            self.wake();
        }
    }
}
