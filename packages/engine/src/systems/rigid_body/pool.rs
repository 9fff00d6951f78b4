use crate::core::handle::{ObjectHandle, PoolTag, RigidbodyHandle};
use crate::core::math::Vec3;
use crate::domain::config::Material;
use crate::domain::error::PhysicsError;

/// `1 / mass`, with zero meaning immovable.
///
/// Zero, negative and non-finite masses all map to an immovable body.
#[inline]
pub fn inverse_mass_from(mass: f32) -> f32 {
    if mass.is_finite() && mass > 0.0 {
        1.0 / mass
    } else {
        0.0
    }
}

/// Column storage for every rigidbody
pub struct RigidbodyPool {
    capacity: usize,
    pub(super) owners: Vec<ObjectHandle>,
    pub(super) current_positions: Vec<Vec3>,
    pub(super) previous_positions: Vec<Vec3>,
    pub(super) velocities: Vec<Vec3>,
    pub(super) forces: Vec<Vec3>,
    pub(super) inv_masses: Vec<f32>,
    pub(super) dynamic_frictions: Vec<f32>,
    pub(super) static_frictions: Vec<f32>,
    pub(super) restitutions: Vec<f32>,
}

impl RigidbodyPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            owners: Vec::with_capacity(capacity),
            current_positions: Vec::with_capacity(capacity),
            previous_positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            forces: Vec::with_capacity(capacity),
            inv_masses: Vec::with_capacity(capacity),
            dynamic_frictions: Vec::with_capacity(capacity),
            static_frictions: Vec::with_capacity(capacity),
            restitutions: Vec::with_capacity(capacity),
        }
    }

    /// Claim the next slot for `owner`, starting at rest at `position`.
    ///
    /// New bodies are immovable with zero friction and restitution until
    /// gameplay code sets their material.
    pub fn allocate(&mut self, owner: ObjectHandle, position: Vec3) -> Result<RigidbodyHandle, PhysicsError> {
        if self.owners.len() >= self.capacity {
            return Err(PhysicsError::CapacityExceeded {
                pool: PoolTag::Rigidbody,
                limit: self.capacity,
            });
        }
        let handle = RigidbodyHandle::from_index(self.owners.len());
        self.owners.push(owner);
        self.current_positions.push(position);
        self.previous_positions.push(position);
        self.velocities.push(Vec3::zero());
        self.forces.push(Vec3::zero());
        self.inv_masses.push(0.0);
        self.dynamic_frictions.push(0.0);
        self.static_frictions.push(0.0);
        self.restitutions.push(0.0);
        Ok(handle)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn owner(&self, body: RigidbodyHandle) -> ObjectHandle {
        self.owners[body.index()]
    }

    // === Positions ===

    #[inline]
    pub fn current_position(&self, body: RigidbodyHandle) -> Vec3 {
        self.current_positions[body.index()]
    }

    #[inline]
    pub fn current_position_mut(&mut self, body: RigidbodyHandle) -> &mut Vec3 {
        &mut self.current_positions[body.index()]
    }

    #[inline]
    pub fn previous_position(&self, body: RigidbodyHandle) -> Vec3 {
        self.previous_positions[body.index()]
    }

    /// Start the next interpolation segment from the current position
    #[inline]
    pub(crate) fn settle_previous(&mut self, body: RigidbodyHandle) {
        let i = body.index();
        self.previous_positions[i] = self.current_positions[i];
    }

    /// Move the body to `position` at rest: both positions snap, velocity and
    /// force are cleared. The caller updates the owning transform.
    pub fn reset(&mut self, body: RigidbodyHandle, position: Vec3) {
        let i = body.index();
        self.current_positions[i] = position;
        self.previous_positions[i] = position;
        self.velocities[i] = Vec3::zero();
        self.forces[i] = Vec3::zero();
    }

    // === Motion ===

    #[inline]
    pub fn velocity(&self, body: RigidbodyHandle) -> Vec3 {
        self.velocities[body.index()]
    }

    #[inline]
    pub fn velocity_mut(&mut self, body: RigidbodyHandle) -> &mut Vec3 {
        &mut self.velocities[body.index()]
    }

    pub fn set_velocity(&mut self, body: RigidbodyHandle, velocity: Vec3) {
        self.velocities[body.index()] = velocity;
    }

    #[inline]
    pub fn force(&self, body: RigidbodyHandle) -> Vec3 {
        self.forces[body.index()]
    }

    /// Replace the persistent force. Integration never clears it.
    pub fn set_force(&mut self, body: RigidbodyHandle, force: Vec3) {
        self.forces[body.index()] = force;
    }

    pub fn add_force(&mut self, body: RigidbodyHandle, force: Vec3) {
        self.forces[body.index()] += force;
    }

    // === Material ===

    #[inline]
    pub fn inverse_mass(&self, body: RigidbodyHandle) -> f32 {
        self.inv_masses[body.index()]
    }

    /// Infinite for immovable bodies
    pub fn mass(&self, body: RigidbodyHandle) -> f32 {
        let inv = self.inv_masses[body.index()];
        if inv != 0.0 {
            1.0 / inv
        } else {
            f32::INFINITY
        }
    }

    pub fn set_mass(&mut self, body: RigidbodyHandle, mass: f32) {
        self.inv_masses[body.index()] = inverse_mass_from(mass);
    }

    pub fn dynamic_friction(&self, body: RigidbodyHandle) -> f32 {
        self.dynamic_frictions[body.index()]
    }

    pub fn set_dynamic_friction(&mut self, body: RigidbodyHandle, value: f32) {
        self.dynamic_frictions[body.index()] = value;
    }

    pub fn static_friction(&self, body: RigidbodyHandle) -> f32 {
        self.static_frictions[body.index()]
    }

    pub fn set_static_friction(&mut self, body: RigidbodyHandle, value: f32) {
        self.static_frictions[body.index()] = value;
    }

    #[inline]
    pub fn restitution(&self, body: RigidbodyHandle) -> f32 {
        self.restitutions[body.index()]
    }

    pub fn set_restitution(&mut self, body: RigidbodyHandle, value: f32) {
        self.restitutions[body.index()] = value;
    }

    pub fn apply_material(&mut self, body: RigidbodyHandle, material: &Material) {
        self.set_mass(body, material.mass);
        self.set_dynamic_friction(body, material.dynamic_friction);
        self.set_static_friction(body, material.static_friction);
        self.set_restitution(body, material.restitution);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_round_trips_through_inverse() {
        let mut pool = RigidbodyPool::new(1);
        let body = pool.allocate(ObjectHandle::from_index(0), Vec3::zero()).unwrap();

        assert_eq!(pool.inverse_mass(body), 0.0);
        assert!(pool.mass(body).is_infinite());

        pool.set_mass(body, 4.0);
        assert_eq!(pool.inverse_mass(body), 0.25);
        assert_eq!(pool.mass(body), 4.0);

        pool.set_mass(body, 0.0);
        assert_eq!(pool.inverse_mass(body), 0.0);
        pool.set_mass(body, f32::INFINITY);
        assert_eq!(pool.inverse_mass(body), 0.0);
    }

    #[test]
    fn reset_snaps_and_stops() {
        let mut pool = RigidbodyPool::new(1);
        let body = pool.allocate(ObjectHandle::from_index(0), Vec3::zero()).unwrap();
        pool.set_velocity(body, Vec3::new(3.0, 1.0, 0.0));
        pool.set_force(body, Vec3::new(1.0, 0.0, 0.0));
        *pool.current_position_mut(body) = Vec3::new(5.0, 5.0, 0.0);

        pool.reset(body, Vec3::new(-1.0, 2.0, 0.5));
        assert_eq!(pool.current_position(body), Vec3::new(-1.0, 2.0, 0.5));
        assert_eq!(pool.previous_position(body), Vec3::new(-1.0, 2.0, 0.5));
        assert_eq!(pool.velocity(body), Vec3::zero());
        assert_eq!(pool.force(body), Vec3::zero());
    }

    #[test]
    fn add_force_accumulates() {
        let mut pool = RigidbodyPool::new(1);
        let body = pool.allocate(ObjectHandle::from_index(0), Vec3::zero()).unwrap();
        pool.add_force(body, Vec3::new(1.0, 0.0, 0.0));
        pool.add_force(body, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(pool.force(body), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn capacity_is_fixed() {
        let mut pool = RigidbodyPool::new(1);
        pool.allocate(ObjectHandle::from_index(0), Vec3::zero()).unwrap();
        assert!(pool.allocate(ObjectHandle::from_index(1), Vec3::zero()).is_err());
    }
}
