use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use arcade_physics::{
    collision::BoundingBox,
    math::vec2::Vec2,
    objects::{BodyState, RigidBody},
    shapes::{Circle, Rectangle, Shape},
    world::{Partitioning, World, WorldConfig},
};

const WORLD_SIZE: f64 = 1000.0;

fn world(partitioning: Partitioning) -> World {
    let config = WorldConfig::new(WORLD_SIZE, WORLD_SIZE, 1.0)
        .with_gravity(Vec2::new(0.0, 9.8))
        .with_drag(0.01, 0.001)
        .with_partitioning(partitioning);
    match World::new(config) {
        Ok(world) => world,
        Err(err) => panic!("bench world: {err}"),
    }
}

fn circle(position: Vec2, radius: f64) -> RigidBody {
    RigidBody::new(
        BodyState::new(1.0, position)
            .with_shape(Shape::Circle(Circle::new(position, radius)))
            .with_bounding_box(BoundingBox::axis(position, radius * 2.0, radius * 2.0)),
    )
}

// --- Helper for creating stack benchmarks ---
fn run_circle_stack_bench(world: &mut World, num_circles: usize) {
    let radius = 4.0;
    let columns = 20;

    for i in 0..num_circles {
        let col = (i % columns) as f64;
        let row = (i / columns) as f64;
        // Slight overlap so every tick has contacts to resolve
        let position = Vec2::new(100.0 + col * radius * 1.9, 900.0 - row * radius * 1.9);
        world.add_body(circle(position, radius));
    }

    // Static floor under the stack
    let floor_at = Vec2::new(500.0, 950.0);
    world.add_body(RigidBody::new(
        BodyState::new(0.0, floor_at)
            .with_shape(Shape::Rectangle(Rectangle::new(floor_at, 1000.0, 20.0)))
            .with_bounding_box(BoundingBox::axis(floor_at, 1000.0, 20.0)),
    ));

    let dt = 1.0 / 60.0;
    let steps = 30;
    for _ in 0..steps {
        world.update(black_box(dt));
    }
}

// Benchmark for a stack of circles falling under gravity
fn bench_circle_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_stack");

    let layouts = [
        ("grid", Partitioning::Grid { cell_size: 32.0 }),
        ("quadtree", Partitioning::QuadTree { max_depth: 6, capacity: 8 }),
    ];
    for (name, partitioning) in layouts {
        for num_circles in [10, 100, 500] {
            group.bench_with_input(BenchmarkId::new(name, num_circles), &num_circles, |b, &n| {
                b.iter(|| {
                    let mut world = world(partitioning);
                    run_circle_stack_bench(&mut world, black_box(n));
                });
            });
        }
    }
    group.finish();
}

// Broad phase alone over a scattered field
fn bench_broad_phase(c: &mut Criterion) {
    let mut group = c.benchmark_group("broad_phase");

    for num_bodies in [100, 1000] {
        let mut world = world(Partitioning::Grid { cell_size: 50.0 });
        for i in 0..num_bodies {
            let t = i as f64;
            let position = Vec2::new((t * 37.0) % WORLD_SIZE, (t * 91.0) % WORLD_SIZE);
            world.add_body(circle(position, 6.0));
        }
        group.bench_with_input(BenchmarkId::from_parameter(num_bodies), &num_bodies, |b, _| {
            b.iter(|| black_box(world.broad_phase()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_circle_stack, bench_broad_phase);
criterion_main!(benches);
