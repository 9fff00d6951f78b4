use crate::core::handle::{ObjectHandle, TransformHandle, TriggerHandle};
use crate::core::math::Vec3;
use crate::domain::config::Material;
use crate::domain::error::PhysicsError;
use crate::domain::shape::Collider;
use crate::systems::object::reset_body as reset_object_body;

use super::PhysicsWorld;

pub(super) fn spawn_transform(world: &mut PhysicsWorld, position: Vec3) -> Result<TransformHandle, PhysicsError> {
    let handle = world.transforms.allocate(position)?;
    log::debug!("spawned {handle} at ({}, {}, {})", position.x, position.y, position.z);
    Ok(handle)
}

pub(super) fn spawn_object(
    world: &mut PhysicsWorld,
    transform: TransformHandle,
    collider: Collider,
) -> Result<ObjectHandle, PhysicsError> {
    // Check the object pool first so a full pool never leaves an orphaned body
    let handle = world.objects.next_handle()?;
    let position = world.transforms.position(transform);
    let body = world.bodies.allocate(handle, position)?;
    let object = world.objects.allocate(transform, collider, body)?;
    log::debug!("spawned {object} ({:?}) on {transform}", collider.shape());
    Ok(object)
}

pub(super) fn spawn_trigger(
    world: &mut PhysicsWorld,
    transform: TransformHandle,
    collider: Collider,
) -> Result<TriggerHandle, PhysicsError> {
    let trigger = world.triggers.allocate(transform, collider)?;
    log::debug!("spawned {trigger} ({:?}) on {transform}", collider.shape());
    Ok(trigger)
}

pub(super) fn set_velocity(world: &mut PhysicsWorld, object: ObjectHandle, velocity: Vec3) {
    let body = world.objects.rigidbody(object);
    world.bodies.set_velocity(body, velocity);
}

pub(super) fn set_force(world: &mut PhysicsWorld, object: ObjectHandle, force: Vec3) {
    let body = world.objects.rigidbody(object);
    world.bodies.set_force(body, force);
}

pub(super) fn add_force(world: &mut PhysicsWorld, object: ObjectHandle, force: Vec3) {
    let body = world.objects.rigidbody(object);
    world.bodies.add_force(body, force);
}

pub(super) fn reset_body(world: &mut PhysicsWorld, object: ObjectHandle, position: Vec3) {
    let transform = world.objects.transform(object);
    let body = world.objects.rigidbody(object);
    reset_object_body(&mut world.transforms, &mut world.bodies, transform, body, position);
}

pub(super) fn apply_material(world: &mut PhysicsWorld, object: ObjectHandle, material: &Material) {
    let body = world.objects.rigidbody(object);
    world.bodies.apply_material(body, material);
}

pub(super) fn apply_named_material(world: &mut PhysicsWorld, object: ObjectHandle, name: &str) -> bool {
    let Some(material) = world.materials.get(name).copied() else {
        log::warn!("unknown material '{name}' for {object}");
        return false;
    };
    apply_material(world, object, &material);
    true
}
