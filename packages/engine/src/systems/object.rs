use crate::core::handle::{ObjectHandle, PoolTag, RigidbodyHandle, TransformHandle};
use crate::core::math::Vec3;
use crate::domain::error::PhysicsError;
use crate::domain::shape::Collider;

use super::rigid_body::RigidbodyPool;
use super::transform::TransformPool;

/// Physics objects: transform + collider + rigidbody per slot
pub struct ObjectPool {
    capacity: usize,
    transforms: Vec<TransformHandle>,
    colliders: Vec<Collider>,
    bodies: Vec<RigidbodyHandle>,
}

impl ObjectPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            transforms: Vec::with_capacity(capacity),
            colliders: Vec::with_capacity(capacity),
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Index the next allocation will receive, if there is room
    pub fn next_handle(&self) -> Result<ObjectHandle, PhysicsError> {
        if self.transforms.len() >= self.capacity {
            return Err(PhysicsError::CapacityExceeded {
                pool: PoolTag::Object,
                limit: self.capacity,
            });
        }
        Ok(ObjectHandle::from_index(self.transforms.len()))
    }

    pub fn allocate(
        &mut self,
        transform: TransformHandle,
        collider: Collider,
        body: RigidbodyHandle,
    ) -> Result<ObjectHandle, PhysicsError> {
        let handle = self.next_handle()?;
        self.transforms.push(transform);
        self.colliders.push(collider);
        self.bodies.push(body);
        Ok(handle)
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn transform(&self, object: ObjectHandle) -> TransformHandle {
        self.transforms[object.index()]
    }

    #[inline]
    pub fn collider(&self, object: ObjectHandle) -> &Collider {
        &self.colliders[object.index()]
    }

    pub fn set_collider(&mut self, object: ObjectHandle, collider: Collider) {
        self.colliders[object.index()] = collider;
    }

    #[inline]
    pub fn rigidbody(&self, object: ObjectHandle) -> RigidbodyHandle {
        self.bodies[object.index()]
    }

    pub fn handles(&self) -> impl Iterator<Item = ObjectHandle> {
        (0..self.len()).map(ObjectHandle::from_index)
    }
}

/// Mutable view of one object, handed to trigger callbacks.
///
/// Borrows the transform and rigidbody pools for the duration of the call,
/// so gameplay can push or teleport the object that crossed a trigger.
pub struct ObjectMut<'a> {
    handle: ObjectHandle,
    transform: TransformHandle,
    body: RigidbodyHandle,
    collider: Collider,
    transforms: &'a mut TransformPool,
    bodies: &'a mut RigidbodyPool,
}

impl<'a> ObjectMut<'a> {
    pub(crate) fn new(
        handle: ObjectHandle,
        objects: &ObjectPool,
        transforms: &'a mut TransformPool,
        bodies: &'a mut RigidbodyPool,
    ) -> Self {
        Self {
            handle,
            transform: objects.transform(handle),
            body: objects.rigidbody(handle),
            collider: *objects.collider(handle),
            transforms,
            bodies,
        }
    }

    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    /// Render-facing position
    pub fn position(&self) -> Vec3 {
        self.transforms.position(self.transform)
    }

    /// Simulation position
    pub fn current_position(&self) -> Vec3 {
        self.bodies.current_position(self.body)
    }

    pub fn velocity(&self) -> Vec3 {
        self.bodies.velocity(self.body)
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.bodies.set_velocity(self.body, velocity);
    }

    pub fn set_force(&mut self, force: Vec3) {
        self.bodies.set_force(self.body, force);
    }

    pub fn add_force(&mut self, force: Vec3) {
        self.bodies.add_force(self.body, force);
    }

    /// Teleport to `position` at rest
    pub fn reset(&mut self, position: Vec3) {
        reset_body(self.transforms, self.bodies, self.transform, self.body, position);
    }
}

/// Snap a body and its transform to `position`, clearing velocity and force.
pub(crate) fn reset_body(
    transforms: &mut TransformPool,
    bodies: &mut RigidbodyPool,
    transform: TransformHandle,
    body: RigidbodyHandle,
    position: Vec3,
) {
    bodies.reset(body, position);
    transforms.set_position(transform, position);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_mut_reset_moves_transform_and_body() {
        let mut transforms = TransformPool::new(1);
        let mut bodies = RigidbodyPool::new(1);
        let mut objects = ObjectPool::new(1);

        let t = transforms.allocate(Vec3::new(5.0, 0.0, 0.0)).unwrap();
        let handle = objects.next_handle().unwrap();
        let body = bodies.allocate(handle, transforms.position(t)).unwrap();
        objects.allocate(t, Collider::circle(1.0), body).unwrap();
        bodies.set_velocity(body, Vec3::new(1.0, 0.0, 0.0));

        let mut view = ObjectMut::new(handle, &objects, &mut transforms, &mut bodies);
        view.reset(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(view.velocity(), Vec3::zero());
        assert_eq!(view.position(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(view.current_position(), Vec3::new(0.0, 1.0, 0.0));
    }
}
