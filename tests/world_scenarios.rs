use std::collections::HashSet;

use approx::assert_relative_eq;
use arcade_physics::collision::{BoundingBox, ContactPair};
use arcade_physics::common::PhysicsMaterial;
use arcade_physics::math::vec2::Vec2;
use arcade_physics::objects::{BodyState, ObjectId, RigidBody};
use arcade_physics::shapes::{Circle, Shape};
use arcade_physics::world::{FixedTimestep, Partitioning, World, WorldConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn world(config: WorldConfig) -> World {
    init_tracing();
    World::new(config).unwrap()
}

fn ball(mass: f64, position: Vec2, velocity: Vec2) -> RigidBody {
    RigidBody::new(
        BodyState::new(mass, position)
            .with_shape(Shape::Circle(Circle::new(position, 1.0)))
            .with_bounding_box(BoundingBox::axis(position, 2.0, 2.0))
            .with_velocity(velocity),
    )
}

#[test]
fn falling_body_follows_constant_acceleration() {
    let mut world = world(
        WorldConfig::default()
            .with_gravity(Vec2::new(0.0, 9.8))
            .with_damper(1.0),
    );
    let id = world.add_body(RigidBody::new(BodyState::new(1.0, Vec2::new(0.0, 100.0))));

    world.update(1.0);

    let state = world.body(id).unwrap().state();
    assert_relative_eq!(state.acceleration().x, 0.0);
    assert_relative_eq!(state.acceleration().y, 9.8, epsilon = 1e-12);
    assert_relative_eq!(state.velocity().y, 9.8, epsilon = 1e-12);
    assert_relative_eq!(state.position().x, 0.0);
    assert_relative_eq!(state.position().y, 104.9, epsilon = 1e-9);
}

#[test]
fn massless_bodies_stay_inert() {
    let mut world = world(WorldConfig::default().with_gravity(Vec2::new(0.0, 9.8)));
    let id = world.add_body(ball(0.0, Vec2::new(50.0, 50.0), Vec2::new(5.0, 0.0)));
    {
        let body = world.body_mut(id).unwrap();
        body.apply_force(Vec2::new(100.0, 0.0), 10.0);
        body.apply_impulse(Vec2::new(0.0, -50.0));
    }

    world.update(0.5);

    let body = world.body(id).unwrap();
    assert_eq!(body.velocity(), Vec2::ZERO);
    assert_eq!(body.state().acceleration(), Vec2::ZERO);
    assert_eq!(body.position(), Vec2::new(50.0, 50.0));
    assert!(!body.is_active());
}

#[test]
fn expired_forces_stop_accelerating() {
    let mut world = world(WorldConfig::default().with_damper(1.0));
    let id = world.add_body(RigidBody::new(BodyState::new(2.0, Vec2::new(10.0, 10.0))));
    world.body_mut(id).unwrap().apply_force(Vec2::new(4.0, 0.0), 0.25);

    let mut speeds = Vec::new();
    for _ in 0..5 {
        world.update(0.1);
        speeds.push(world.body(id).unwrap().velocity().x);
    }

    // Three ticks of 2 units/s^2, then nothing
    assert_relative_eq!(speeds[0], 0.2, epsilon = 1e-12);
    assert_relative_eq!(speeds[2], 0.6, epsilon = 1e-12);
    assert_relative_eq!(speeds[3], speeds[2], epsilon = 1e-12);
    assert_relative_eq!(speeds[4], speeds[2], epsilon = 1e-12);
    assert!(world.body(id).unwrap().state().forces().is_empty());
}

#[test]
fn resting_bodies_sleep_until_pushed() {
    let mut world = world(WorldConfig::default().with_damper(1.0));
    let id = world.add_body(RigidBody::new(BodyState::new(1.0, Vec2::new(20.0, 20.0))));

    world.update(0.1);
    assert!(!world.body(id).unwrap().is_active());
    world.update(0.1);
    assert!(!world.body(id).unwrap().is_active());

    world.body_mut(id).unwrap().apply_impulse(Vec2::new(1.0, 0.0));
    assert!(world.body(id).unwrap().is_active());
    world.update(0.1);
    let body = world.body(id).unwrap();
    assert!(body.is_active());
    assert!(body.velocity().x > 0.0);
}

#[test]
fn contact_pairs_are_unordered() {
    let a = ContactPair::new(ObjectId(3), ObjectId(8));
    let b = ContactPair::new(ObjectId(8), ObjectId(3));
    assert_eq!(a, b);
    let set: HashSet<ContactPair> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn equal_circles_exchange_velocities() {
    let mut world = world(WorldConfig::default().with_damper(1.0));
    let restitution = PhysicsMaterial::new(0.8, 0.0, 0.0);
    let mut left = ball(1.0, Vec2::new(100.0, 100.0), Vec2::new(2.0, 0.0));
    let mut right = ball(1.0, Vec2::new(101.0, 100.0), Vec2::new(-2.0, 0.0));
    *left.state_mut().material_mut() = restitution;
    *right.state_mut().material_mut() = restitution;
    let a = world.add_body(left);
    let b = world.add_body(right);

    let contacts = world.resolve_collisions();
    assert_eq!(contacts.len(), 2);
    assert_eq!(world.body(a).unwrap().velocity(), Vec2::new(-1.6, 0.0));
    assert_eq!(world.body(b).unwrap().velocity(), Vec2::new(1.6, 0.0));
}

#[test]
fn broad_phase_drops_bucket_mates_that_do_not_touch() {
    let mut world = world(WorldConfig::default().with_partitioning(Partitioning::Grid { cell_size: 100.0 }));
    world.add_body(ball(1.0, Vec2::new(10.0, 10.0), Vec2::ZERO));
    world.add_body(ball(1.0, Vec2::new(60.0, 60.0), Vec2::ZERO));
    let c = world.add_body(ball(1.0, Vec2::new(61.5, 60.0), Vec2::ZERO));

    let pairs = world.broad_phase();
    assert_eq!(pairs.len(), 1);
    assert!(pairs[0].contains(c));
    assert!(!pairs[0].contains(ObjectId(0)));
}

#[test]
fn heavier_circle_is_displaced_less() {
    let mut world = world(WorldConfig::default());
    let light_at = Vec2::new(200.0, 200.0);
    let heavy_at = Vec2::new(201.0, 200.0);
    let light = world.add_body(ball(1.0, light_at, Vec2::ZERO));
    let heavy = world.add_body(ball(4.0, heavy_at, Vec2::ZERO));

    world.resolve_collisions();

    let moved_light = world.body(light).unwrap().position().distance(light_at);
    let moved_heavy = world.body(heavy).unwrap().position().distance(heavy_at);
    assert!(moved_heavy < moved_light);
    assert_relative_eq!(moved_light / moved_heavy, 4.0, epsilon = 1e-9);
}

#[test]
fn quadtree_world_resolves_the_same_contacts() {
    let layouts = [
        Partitioning::Grid { cell_size: 64.0 },
        Partitioning::QuadTree {
            max_depth: 2,
            capacity: 2,
        },
    ];
    let mut outcomes = Vec::new();
    for partitioning in layouts {
        let mut world = world(WorldConfig::default().with_partitioning(partitioning));
        for i in 0..6 {
            let x = 20.0 + i as f64 * 1.5;
            world.add_body(ball(1.0, Vec2::new(x, 20.0), Vec2::ZERO));
        }
        world.add_body(ball(1.0, Vec2::new(500.0, 400.0), Vec2::ZERO));
        outcomes.push(world.broad_phase());
    }
    assert_eq!(outcomes[0], outcomes[1]);
    assert_eq!(outcomes[0].len(), 5);
}

#[test]
fn removed_bodies_leave_the_pipeline() {
    let mut world = world(WorldConfig::default().with_gravity(Vec2::new(0.0, 9.8)));
    let a = world.add_body(ball(1.0, Vec2::new(30.0, 30.0), Vec2::ZERO));
    world.add_body(ball(1.0, Vec2::new(31.0, 30.0), Vec2::ZERO));
    assert_eq!(world.broad_phase().len(), 1);

    world.remove_object(a).unwrap();
    assert!(world.broad_phase().is_empty());
    world.update(0.1);
    assert!(world.body(a).is_none());
}

#[test]
fn fixed_timestep_drives_the_world() {
    let mut world = world(WorldConfig::default().with_gravity(Vec2::new(0.0, 10.0)).with_damper(1.0));
    let id = world.add_body(RigidBody::new(BodyState::new(1.0, Vec2::new(0.0, 0.0))));
    let mut timestep = FixedTimestep::new(0.5, 2.0).unwrap();

    let steps = timestep.advance(1.25, |dt| {
        world.update(dt);
    });

    assert_eq!(steps, 2);
    assert_relative_eq!(timestep.alpha(), 0.5);
    // Two half-second steps of constant acceleration: 0.5 * 10 * 1^2
    assert_relative_eq!(world.body(id).unwrap().position().y, 5.0, epsilon = 1e-9);
}

#[test]
fn drag_slows_moving_bodies() {
    let mut dragged = world(WorldConfig::default().with_drag(0.5, 0.0).with_damper(1.0));
    let mut free = world(WorldConfig::default().with_damper(1.0));
    let start = Vec2::new(100.0, 100.0);
    let velocity = Vec2::new(10.0, 0.0);
    let a = dragged.add_body(RigidBody::new(BodyState::new(1.0, start).with_velocity(velocity)));
    let b = free.add_body(RigidBody::new(BodyState::new(1.0, start).with_velocity(velocity)));

    for _ in 0..2 {
        dragged.update(0.1);
        free.update(0.1);
    }

    // Linear drag removes 5% of the speed each 0.1s tick
    let slowed = dragged.body(a).unwrap();
    assert_relative_eq!(slowed.velocity().x, 9.025, epsilon = 1e-9);
    assert_relative_eq!(slowed.velocity().y, 0.0);
    assert!(slowed.position().x < free.body(b).unwrap().position().x);
    assert_relative_eq!(free.body(b).unwrap().velocity().x, 10.0);
}

#[test]
fn world_builds_from_json() {
    init_tracing();
    let config = WorldConfig::from_json(
        r#"{
            "width": 320.0,
            "height": 240.0,
            "scale": 2.0,
            "gravity": { "x": 0.0, "y": 9.8 },
            "drag_k1": 0.1,
            "partitioning": { "kind": "grid", "cell_size": 16.0 }
        }"#,
    )
    .unwrap();
    let world = World::new(config).unwrap();
    assert_eq!(world.surface().width_px(), 640);
    assert!(world.gravity().is_some());
    assert!(world.drag().is_some());
}
