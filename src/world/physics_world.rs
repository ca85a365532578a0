use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::collision::{
    find_pairs, BroadPhaseBody, ContactData, ContactPair, PositionSolver, QuadTree, SpatialGrid,
    SpatialIndex, VelocitySolver, AABB,
};
use crate::error::{PhysicsError, PhysicsResult};
use crate::forces::{DragGenerator, ForceGenerator, GravityGenerator};
use crate::math::vec2::Vec2;
use crate::objects::{GameObject, ObjectId, RigidBody, SimObject};

use super::camera::Camera;
use super::config::{Partitioning, WorldConfig};
use super::render::{RenderSurface, RenderTarget};

/// Camera registered by [`World::new`], covering the whole world.
pub const DEFAULT_CAMERA: u32 = 0;

type ObjectMap = BTreeMap<ObjectId, Box<dyn GameObject>>;

/// Owns every object and runs the per-tick pipeline:
/// force generators, then object updates, then collision resolution.
pub struct World {
    config: WorldConfig,
    bounds: AABB,
    objects: ObjectMap,
    next_id: u64,
    cameras: BTreeMap<u32, Camera>,
    gravity: Option<GravityGenerator>,
    drag: Option<DragGenerator>,
    index: Box<dyn SpatialIndex>,
    surface: RenderSurface,
    velocity_solver: VelocitySolver,
    position_solver: PositionSolver,
}

impl World {
    /// Builds an empty world. Generators are only created for non-zero
    /// gravity or drag.
    pub fn new(config: WorldConfig) -> PhysicsResult<Self> {
        config.validate()?;
        let surface = RenderSurface::for_world(config.width, config.height, config.scale)?;
        let bounds = AABB::new(Vec2::ZERO, Vec2::new(config.width, config.height));

        let index: Box<dyn SpatialIndex> = match config.partitioning {
            Partitioning::Grid { cell_size } => Box::new(SpatialGrid::new(bounds, cell_size)?),
            Partitioning::QuadTree { max_depth, capacity } => {
                Box::new(QuadTree::new(bounds, max_depth, capacity)?)
            }
        };
        let gravity = config.has_gravity().then(|| GravityGenerator::new(config.gravity));
        let drag = config
            .has_drag()
            .then(|| DragGenerator::new(config.drag_k1, config.drag_k2));

        let mut cameras = BTreeMap::new();
        cameras.insert(DEFAULT_CAMERA, Camera::new(Vec2::ZERO, bounds.max));

        debug!(
            width = config.width,
            height = config.height,
            scale = config.scale,
            gravity = gravity.is_some(),
            drag = drag.is_some(),
            partitioning = ?config.partitioning,
            "created world"
        );

        Ok(Self {
            config,
            bounds,
            objects: BTreeMap::new(),
            next_id: 0,
            cameras,
            gravity,
            drag,
            index,
            surface,
            velocity_solver: VelocitySolver,
            position_solver: PositionSolver,
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn gravity(&self) -> Option<&GravityGenerator> {
        self.gravity.as_ref()
    }

    pub fn drag(&self) -> Option<&DragGenerator> {
        self.drag.as_ref()
    }

    pub fn spatial_index(&self) -> &dyn SpatialIndex {
        self.index.as_ref()
    }

    // --- Objects ---

    /// Adds an object and subscribes its body, if any, to the generators.
    /// Subscribing clears any forces already queued on the body.
    pub fn add_object(&mut self, mut object: Box<dyn GameObject>) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        if let Some(body) = object.body_mut() {
            if let Some(gravity) = self.gravity.as_mut() {
                gravity.register_body(id, body);
            }
            if let Some(drag) = self.drag.as_mut() {
                drag.register_body(id, body);
            }
        }
        trace!(object = %id, has_body = object.body().is_some(), "added object");
        self.objects.insert(id, object);
        id
    }

    /// Wraps `body` in a [`SimObject`] and adds it, giving it the world's
    /// damper.
    pub fn add_body(&mut self, mut body: RigidBody) -> ObjectId {
        body.state_mut().set_damper(self.config.damper);
        self.add_object(Box::new(SimObject::new(body)))
    }

    /// Removes an object, unsubscribing its body from the generators.
    pub fn remove_object(&mut self, id: ObjectId) -> PhysicsResult<Box<dyn GameObject>> {
        let mut object = self
            .objects
            .remove(&id)
            .ok_or(PhysicsError::ObjectNotFound(id.0))?;
        if let Some(gravity) = self.gravity.as_mut() {
            gravity.unregister_body(id, object.body_mut());
        }
        if let Some(drag) = self.drag.as_mut() {
            drag.unregister_body(id, object.body_mut());
        }
        trace!(object = %id, "removed object");
        Ok(object)
    }

    pub fn object(&self, id: ObjectId) -> Option<&dyn GameObject> {
        self.objects.get(&id).map(|o| &**o)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut (dyn GameObject + 'static)> {
        self.objects.get_mut(&id).map(|o| &mut **o)
    }

    pub fn body(&self, id: ObjectId) -> Option<&RigidBody> {
        self.objects.get(&id).and_then(|o| o.body())
    }

    pub fn body_mut(&mut self, id: ObjectId) -> Option<&mut RigidBody> {
        self.objects.get_mut(&id).and_then(|o| o.body_mut())
    }

    /// Ids of every object, in insertion order.
    pub fn object_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    // --- Simulation ---

    /// Advances the world by `dt` seconds. Non-positive steps do nothing.
    pub fn update(&mut self, dt: f64) -> Vec<ContactData> {
        if dt <= 0.0 {
            return Vec::new();
        }

        if let Some(gravity) = self.gravity.as_mut() {
            gravity.update(dt, &mut self.objects);
        }
        if let Some(drag) = self.drag.as_mut() {
            drag.update(dt, &mut self.objects);
        }

        for object in self.objects.values_mut() {
            object.update(dt);
        }

        self.resolve_collisions()
    }

    /// Broad phase followed by narrow phase. Returns the contacts applied.
    pub fn resolve_collisions(&mut self) -> Vec<ContactData> {
        let pairs = self.broad_phase();
        self.narrow_phase(&pairs)
    }

    /// Rebuilds the spatial index and returns the candidate pairs whose
    /// bounding boxes overlap.
    pub fn broad_phase(&mut self) -> Vec<ContactPair> {
        let bodies: Vec<BroadPhaseBody> = self
            .objects
            .iter()
            .filter_map(|(&id, object)| {
                let state = object.body()?.state();
                Some(BroadPhaseBody {
                    id,
                    position: state.position(),
                    bounds: state.bounding_box().map(|b| b.to_aabb()),
                })
            })
            .collect();
        find_pairs(self.index.as_mut(), &bodies)
    }

    /// Wakes each pair, exchanges velocities and separates the shapes.
    pub fn narrow_phase(&mut self, pairs: &[ContactPair]) -> Vec<ContactData> {
        let mut contacts = Vec::new();
        for pair in pairs {
            let (a_id, b_id) = pair.ids();
            let Some((a, b)) = body_pair_mut(&mut self.objects, a_id, b_id) else {
                continue;
            };
            a.state_mut().wake();
            b.state_mut().wake();

            self.velocity_solver.solve(a.state_mut(), b.state_mut());
            let resolved = self
                .position_solver
                .solve(a_id, a.state_mut(), b_id, b.state_mut());
            trace!(a = %a_id, b = %b_id, contacts = resolved.len(), "narrow-phase pair");
            contacts.extend(resolved);
        }
        contacts
    }

    // --- Cameras and drawing ---

    /// Registers a camera, returning the one it replaced.
    pub fn add_camera(&mut self, id: u32, camera: Camera) -> Option<Camera> {
        self.cameras.insert(id, camera)
    }

    pub fn remove_camera(&mut self, id: u32) -> PhysicsResult<Camera> {
        self.cameras.remove(&id).ok_or(PhysicsError::CameraNotFound(id))
    }

    pub fn camera(&self, id: u32) -> PhysicsResult<&Camera> {
        self.cameras.get(&id).ok_or(PhysicsError::CameraNotFound(id))
    }

    pub fn camera_mut(&mut self, id: u32) -> PhysicsResult<&mut Camera> {
        self.cameras.get_mut(&id).ok_or(PhysicsError::CameraNotFound(id))
    }

    /// Draws every object with a body inside camera `camera_id`'s view.
    /// Returns how many objects were drawn.
    pub fn draw(&self, camera_id: u32, target: &mut dyn RenderTarget) -> PhysicsResult<usize> {
        let view = self.camera(camera_id)?.view();
        target.begin_view(&view, self.config.scale);

        let mut drawn = 0;
        for object in self.objects.values() {
            let Some(body) = object.body() else {
                continue;
            };
            let state = body.state();
            let visible = state
                .bounding_box()
                .is_some_and(|b| b.to_aabb().overlaps(&view))
                || view.contains_point(state.position());
            if visible {
                object.draw(target);
                drawn += 1;
            }
        }

        target.end_view();
        Ok(drawn)
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("config", &self.config)
            .field("objects", &self.objects.len())
            .field("cameras", &self.cameras)
            .field("gravity", &self.gravity)
            .field("drag", &self.drag)
            .finish()
    }
}

/// Mutable access to two distinct bodies at once.
fn body_pair_mut(
    objects: &mut ObjectMap,
    a: ObjectId,
    b: ObjectId,
) -> Option<(&mut RigidBody, &mut RigidBody)> {
    if a == b {
        return None;
    }
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    let mut range = objects.range_mut(low..=high);
    let (&low_id, low_object) = range.next()?;
    let (&high_id, high_object) = range.next_back()?;
    if low_id != low || high_id != high {
        return None;
    }
    let low_body = low_object.body_mut()?;
    let high_body = high_object.body_mut()?;
    Some(if a < b {
        (low_body, high_body)
    } else {
        (high_body, low_body)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::BoundingBox;
    use crate::objects::BodyState;
    use crate::shapes::{Circle, Shape};
    use crate::world::render::Drawable;
    use std::cell::Cell;
    use std::rc::Rc;

    const EPSILON: f64 = 1e-9;

    fn world() -> World {
        World::new(WorldConfig::new(100.0, 100.0, 1.0).with_damper(1.0)).unwrap()
    }

    fn ball(mass: f64, position: Vec2, velocity: Vec2) -> RigidBody {
        RigidBody::new(
            BodyState::new(mass, position)
                .with_shape(Shape::Circle(Circle::new(position, 1.0)))
                .with_bounding_box(BoundingBox::axis(position, 2.0, 2.0))
                .with_velocity(velocity),
        )
    }

    struct Counter(Rc<Cell<usize>>);

    impl Drawable for Counter {
        fn draw(&self, _target: &mut dyn RenderTarget) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[derive(Default)]
    struct Recorder {
        views: Vec<AABB>,
        ended: usize,
    }

    impl RenderTarget for Recorder {
        fn begin_view(&mut self, view: &AABB, _scale: f64) {
            self.views.push(*view);
        }

        fn end_view(&mut self) {
            self.ended += 1;
        }
    }

    #[test]
    fn test_world_new() {
        let world = world();
        assert!(world.is_empty());
        assert!(world.gravity().is_none());
        assert!(world.drag().is_none());
        assert_eq!(world.camera(DEFAULT_CAMERA).unwrap().view(), *world.bounds());
        assert_eq!(world.surface().width_px(), 100);
    }

    #[test]
    fn test_world_rejects_bad_config() {
        assert!(matches!(
            World::new(WorldConfig::new(0.5, 0.5, 1.0)),
            Err(PhysicsError::InvalidArgument(_))
        ));
        assert!(World::new(WorldConfig::new(10.0, 10.0, -1.0)).is_err());
    }

    #[test]
    fn test_world_rejects_oversized_grid() {
        let config =
            WorldConfig::new(1e6, 1e6, 1.0).with_partitioning(Partitioning::Grid { cell_size: 1e-3 });
        assert!(matches!(World::new(config), Err(PhysicsError::InvalidArgument(_))));
    }

    #[test]
    fn test_generators_follow_config() {
        let config = WorldConfig::new(10.0, 10.0, 1.0)
            .with_gravity(Vec2::new(0.0, 9.8))
            .with_drag(0.0, 0.2);
        let world = World::new(config).unwrap();
        assert_eq!(world.gravity().unwrap().gravity(), Vec2::new(0.0, 9.8));
        assert_eq!(world.drag().unwrap().coefficients(), (0.0, 0.2));
    }

    #[test]
    fn test_add_and_remove_objects() {
        let mut world = World::new(WorldConfig::default().with_gravity(Vec2::new(0.0, 1.0))).unwrap();
        let a = world.add_body(ball(1.0, Vec2::ZERO, Vec2::ZERO));
        let b = world.add_object(Box::new(SimObject::bodiless()));
        assert_eq!((a, b), (ObjectId(0), ObjectId(1)));
        assert_eq!(world.len(), 2);
        assert!(world.gravity().unwrap().is_registered(a));
        assert!(!world.gravity().unwrap().is_registered(b));
        assert!(world.body(b).is_none());

        let removed = world.remove_object(a).unwrap();
        assert!(removed.body().is_some());
        assert!(!world.gravity().unwrap().is_registered(a));
        assert!(matches!(world.remove_object(a), Err(PhysicsError::ObjectNotFound(0))));
        assert_eq!(world.object_ids().collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn test_step_gravity() {
        let mut world = World::new(
            WorldConfig::new(100.0, 100.0, 1.0)
                .with_gravity(Vec2::new(0.0, -10.0))
                .with_damper(1.0),
        )
        .unwrap();
        let id = world.add_body(RigidBody::new(BodyState::new(1.0, Vec2::new(50.0, 50.0))));

        world.update(0.1);
        let body = world.body(id).unwrap();
        assert!((body.velocity().y - -1.0).abs() < EPSILON);
        assert!((body.position().y - 49.95).abs() < EPSILON);
        assert!((body.position().x - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_step_no_gravity_on_static() {
        let mut world = World::new(WorldConfig::default().with_gravity(Vec2::new(0.0, -10.0))).unwrap();
        let id = world.add_body(RigidBody::new(BodyState::new(0.0, Vec2::new(5.0, 5.0))));

        world.update(0.1);
        let body = world.body(id).unwrap();
        assert_eq!(body.position(), Vec2::new(5.0, 5.0));
        assert_eq!(body.velocity(), Vec2::ZERO);
        assert!(!body.is_active());
    }

    #[test]
    fn test_zero_step_is_ignored() {
        let mut world = world();
        let id = world.add_body(ball(1.0, Vec2::new(5.0, 5.0), Vec2::new(1.0, 0.0)));
        assert!(world.update(0.0).is_empty());
        assert_eq!(world.body(id).unwrap().position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_colliding_balls_bounce_apart() {
        let mut world = world();
        let a = world.add_body(ball(1.0, Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0)));
        let b = world.add_body(ball(1.0, Vec2::new(11.0, 10.0), Vec2::new(-1.0, 0.0)));

        let pairs = world.broad_phase();
        assert_eq!(pairs, vec![ContactPair::new(a, b)]);

        let contacts = world.narrow_phase(&pairs);
        assert_eq!(contacts.len(), 2);

        let body_a = world.body(a).unwrap();
        let body_b = world.body(b).unwrap();
        assert_eq!(body_a.velocity(), Vec2::new(-1.0, 0.0));
        assert_eq!(body_b.velocity(), Vec2::new(1.0, 0.0));
        // one unit of overlap, split evenly
        assert!((body_a.position().x - 9.5).abs() < EPSILON);
        assert!((body_b.position().x - 11.5).abs() < EPSILON);
        assert_eq!(body_a.state().bounding_box().unwrap().center(), body_a.position());
    }

    #[test]
    fn test_body_pair_mut() {
        let mut world = world();
        let a = world.add_body(ball(1.0, Vec2::ZERO, Vec2::ZERO));
        let b = world.add_body(ball(2.0, Vec2::ZERO, Vec2::ZERO));
        world.add_object(Box::new(SimObject::bodiless()));

        let (first, second) = body_pair_mut(&mut world.objects, b, a).unwrap();
        assert_eq!((first.mass(), second.mass()), (2.0, 1.0));
        assert!(body_pair_mut(&mut world.objects, a, a).is_none());
        assert!(body_pair_mut(&mut world.objects, a, ObjectId(2)).is_none());
        assert!(body_pair_mut(&mut world.objects, a, ObjectId(7)).is_none());
    }

    #[test]
    fn test_draw_culls_to_camera() {
        let mut world = world();
        let count = Rc::new(Cell::new(0));
        for x in [10.0, 30.0, 90.0] {
            let object = SimObject::new(ball(1.0, Vec2::new(x, 10.0), Vec2::ZERO))
                .with_visual(Box::new(Counter(count.clone())));
            world.add_object(Box::new(object));
        }
        world.add_object(Box::new(SimObject::bodiless().with_visual(Box::new(Counter(count.clone())))));
        world.add_camera(1, Camera::new(Vec2::ZERO, Vec2::new(40.0, 40.0)));

        let mut target = Recorder::default();
        assert_eq!(world.draw(1, &mut target).unwrap(), 2);
        assert_eq!(count.get(), 2);
        assert_eq!(target.views, vec![AABB::new(Vec2::ZERO, Vec2::new(40.0, 40.0))]);
        assert_eq!(target.ended, 1);

        assert_eq!(world.draw(DEFAULT_CAMERA, &mut target).unwrap(), 3);
        assert_eq!(world.draw(5, &mut target).unwrap_err(), PhysicsError::CameraNotFound(5));
    }

    #[test]
    fn test_camera_lookup() {
        let mut world = world();
        world.camera_mut(DEFAULT_CAMERA).unwrap().set_position(Vec2::new(5.0, 5.0));
        assert_eq!(world.camera(DEFAULT_CAMERA).unwrap().position(), Vec2::new(5.0, 5.0));
        assert!(world.camera_mut(3).is_err());
        assert!(world.remove_camera(DEFAULT_CAMERA).is_ok());
        assert!(world.camera(DEFAULT_CAMERA).is_err());
    }
}
