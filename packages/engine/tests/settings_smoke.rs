use std::cell::Cell;
use std::fs;
use std::rc::Rc;

use steadystep_engine::{Collider, PhysicsWorld, Vec3};

fn load_world() -> PhysicsWorld {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/settings.json");
    let json = fs::read_to_string(path).expect("settings fixture should exist");
    PhysicsWorld::from_settings_json(&json).expect("settings fixture should parse")
}

#[test]
fn settings_smoke_parses_config_and_materials() {
    let world = load_world();

    assert_eq!(world.config().max_transforms, 16);
    assert_eq!(world.config().max_objects, 8);
    assert_eq!(world.config().max_triggers, 4);
    // Missing keys keep their defaults
    assert_eq!(world.config().fixed_timestep, 1.0 / 144.0);

    let heavy = world.material("heavy").expect("heavy material");
    assert_eq!(heavy.mass, 10.0);
    assert_eq!(heavy.static_friction, 0.1);
    assert!(world.material("missing").is_none());
}

#[test]
fn player_pushes_movable_box() {
    let mut world = load_world();
    let player_t = world.spawn_transform(Vec3::new(-1.0, 0.0, 0.0));
    let player = world.spawn_object(player_t, Collider::aabb(-0.25, 1.0, 0.25, 0.0));
    let movable_t = world.spawn_transform(Vec3::new(0.5, 0.0, 0.0));
    let movable = world.spawn_object(movable_t, Collider::aabb(-0.5, 1.0, 0.5, 0.0));
    assert!(world.apply_named_material(player, "player"));
    assert!(world.apply_named_material(movable, "movable"));

    world.set_velocity(player, Vec3::new(2.0, 0.0, 0.0));
    for _ in 0..60 {
        world.simulate(1.0 / 60.0);
    }

    // Perfectly inelastic, equal masses: momentum split evenly
    assert!((world.velocity(player).x - 1.0).abs() < 1e-3);
    assert!((world.velocity(movable).x - 1.0).abs() < 1e-3);
    assert!(world.object_position(movable).x > 0.5);
}

#[test]
fn water_trigger_respawns_player() {
    let mut world = load_world();
    let player_t = world.spawn_transform(Vec3::new(1.5, 0.0, 0.0));
    let player = world.spawn_object(player_t, Collider::aabb(-0.25, 1.0, 0.25, 0.0));
    assert!(world.apply_named_material(player, "player"));

    // Obstacle well above the player's path
    let obstacle_t = world.spawn_transform(Vec3::new(2.0, 5.0, 0.0));
    world.spawn_object(obstacle_t, Collider::aabb(-0.5, 0.8, 0.5, 0.1));

    let water_t = world.spawn_transform(Vec3::new(3.1, 0.0, 0.0));
    let water = world.spawn_trigger(water_t, Collider::aabb(-0.5, 1.0, 0.5, 0.0));

    let splashes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&splashes);
    world.set_trigger_enter_callback(water, move |object| {
        counter.set(counter.get() + 1);
        object.reset(Vec3::new(-1.0, 0.0, 0.0));
    });

    world.set_velocity(player, Vec3::new(2.0, 0.0, 0.0));
    for _ in 0..60 {
        world.simulate(1.0 / 60.0);
    }

    assert_eq!(splashes.get(), 1);
    assert_eq!(world.velocity(player), Vec3::zero());
    let rendered = world.object_position(player);
    assert!((rendered.x + 1.0).abs() < 1e-5);
    assert!(!world.was_intersecting(water, player));
}
