use crate::core::handle::RigidbodyHandle;
use crate::systems::rigid_body::RigidbodyPool;

use super::types::CollisionData;

/// Penetration tolerated before positional correction kicks in
pub const PENETRATION_SLACK: f32 = 0.01;
/// Share of the remaining penetration removed per contact
pub const CORRECTION_PERCENT: f32 = 0.2;

/// Apply impulse and positional correction for one contact.
///
/// `a`/`b` are the rigidbodies of `data.a`/`data.b`. Returns `false` when the
/// bodies are already separating (or both immovable) and nothing changed.
pub fn resolve_collision(
    bodies: &mut RigidbodyPool,
    a: RigidbodyHandle,
    b: RigidbodyHandle,
    data: &CollisionData,
) -> bool {
    let relative_velocity = bodies.velocity(b) - bodies.velocity(a);
    let vel_along_normal = relative_velocity.dot(data.normal);

    if vel_along_normal >= 0.0 {
        return false;
    }

    let inv_a = bodies.inverse_mass(a);
    let inv_b = bodies.inverse_mass(b);
    let inv_sum = inv_a + inv_b;
    if inv_sum <= 0.0 {
        return false;
    }

    let e = bodies.restitution(a).min(bodies.restitution(b));
    let j = -(1.0 + e) * vel_along_normal / inv_sum;
    let impulse = data.normal * j;

    *bodies.velocity_mut(a) -= impulse * inv_a;
    *bodies.velocity_mut(b) += impulse * inv_b;

    let slack = (data.penetration - PENETRATION_SLACK).max(0.0);
    let correction = data.normal * (slack / inv_sum * CORRECTION_PERCENT);
    *bodies.current_position_mut(a) -= correction * inv_a;
    *bodies.current_position_mut(b) += correction * inv_b;

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handle::ObjectHandle;
    use crate::core::math::Vec3;

    fn pair(mass_a: f32, mass_b: f32) -> (RigidbodyPool, RigidbodyHandle, RigidbodyHandle) {
        let mut pool = RigidbodyPool::new(2);
        let a = pool.allocate(ObjectHandle::from_index(0), Vec3::zero()).unwrap();
        let b = pool.allocate(ObjectHandle::from_index(1), Vec3::new(1.0, 0.0, 0.0)).unwrap();
        pool.set_mass(a, mass_a);
        pool.set_mass(b, mass_b);
        (pool, a, b)
    }

    fn contact(penetration: f32) -> CollisionData {
        CollisionData {
            a: ObjectHandle::from_index(0),
            b: ObjectHandle::from_index(1),
            normal: Vec3::new(1.0, 0.0, 0.0),
            penetration,
        }
    }

    fn kinetic(pool: &RigidbodyPool, body: RigidbodyHandle) -> f32 {
        0.5 * pool.mass(body) * pool.velocity(body).length_squared()
    }

    #[test]
    fn separating_bodies_are_left_alone() {
        let (mut pool, a, b) = pair(1.0, 1.0);
        pool.set_velocity(a, Vec3::new(-1.0, 0.0, 0.0));
        assert!(!resolve_collision(&mut pool, a, b, &contact(0.5)));
        assert_eq!(pool.velocity(a), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(pool.current_position(a), Vec3::zero());
    }

    #[test]
    fn elastic_bounce_off_immovable_body() {
        let (mut pool, a, b) = pair(1.0, 0.0);
        pool.set_restitution(a, 1.0);
        pool.set_restitution(b, 1.0);
        pool.set_velocity(a, Vec3::new(1.0, 0.0, 0.0));

        assert!(resolve_collision(&mut pool, a, b, &contact(0.0)));
        assert_eq!(pool.velocity(a), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(pool.velocity(b), Vec3::zero());
        assert_eq!(pool.current_position(b), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn immovable_body_ignores_any_partner() {
        let (mut pool, a, b) = pair(0.001, 0.0);
        pool.set_restitution(a, 0.9);
        pool.set_restitution(b, 0.9);
        pool.set_velocity(a, Vec3::new(50.0, 3.0, 0.0));

        resolve_collision(&mut pool, a, b, &contact(0.8));
        assert_eq!(pool.velocity(b), Vec3::zero());
        assert_eq!(pool.current_position(b), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn positional_correction_splits_by_inverse_mass() {
        let (mut pool, a, b) = pair(1.0, 1.0);
        pool.set_velocity(a, Vec3::new(1.0, 0.0, 0.0));

        resolve_collision(&mut pool, a, b, &contact(0.51));
        // slack 0.5 / 2 * 0.2 = 0.05 each way
        assert!((pool.current_position(a).x + 0.05).abs() < 1e-6);
        assert!((pool.current_position(b).x - 1.05).abs() < 1e-6);
    }

    #[test]
    fn shallow_contact_gets_no_correction() {
        let (mut pool, a, b) = pair(1.0, 1.0);
        pool.set_velocity(a, Vec3::new(1.0, 0.0, 0.0));
        resolve_collision(&mut pool, a, b, &contact(0.005));
        assert_eq!(pool.current_position(a), Vec3::zero());
    }

    #[test]
    fn inelastic_contact_never_adds_energy() {
        let cases = [
            (1.0, 1.0, 0.0, Vec3::new(2.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
            (2.0, 0.5, 0.5, Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
            (0.3, 5.0, 0.99, Vec3::new(4.0, -2.0, 0.0), Vec3::new(1.0, 0.5, 0.0)),
        ];
        for (mass_a, mass_b, e, va, vb) in cases {
            let (mut pool, a, b) = pair(mass_a, mass_b);
            pool.set_restitution(a, e);
            pool.set_restitution(b, 1.0);
            pool.set_velocity(a, va);
            pool.set_velocity(b, vb);

            let before = kinetic(&pool, a) + kinetic(&pool, b);
            resolve_collision(&mut pool, a, b, &contact(0.1));
            let after = kinetic(&pool, a) + kinetic(&pool, b);
            assert!(after <= before + 1e-4, "energy grew: {before} -> {after}");
        }
    }

    #[test]
    fn two_immovable_bodies_stay_put() {
        let (mut pool, a, b) = pair(0.0, 0.0);
        pool.set_velocity(a, Vec3::new(1.0, 0.0, 0.0));
        assert!(!resolve_collision(&mut pool, a, b, &contact(0.5)));
        assert_eq!(pool.velocity(a), Vec3::new(1.0, 0.0, 0.0));
    }
}
