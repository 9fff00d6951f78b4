use crate::core::math::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::RigidbodyPool;

/// Advance one body by `dt`: force, friction blend, then position.
#[inline(always)]
fn integrate_body(
    velocity: &mut Vec3,
    current: &mut Vec3,
    previous: &mut Vec3,
    force: Vec3,
    inv_mass: f32,
    dynamic_friction: f32,
    static_friction: f32,
    dt: f32,
) {
    *velocity += force * (inv_mass * dt);

    // Pushed bodies slide on dynamic friction, idle ones settle on static
    let modifier = force.length_squared().clamp(0.0, 1.0);
    let friction = modifier * dynamic_friction + (1.0 - modifier) * static_friction;
    *velocity -= *velocity * friction;

    *previous = *current;
    *current += *velocity * dt;
}

/// Integrate every rigidbody by one fixed tick.
///
/// Forces persist: integration reads them but never clears them.
pub fn integrate(bodies: &mut RigidbodyPool, dt: f32) {
    let RigidbodyPool {
        current_positions,
        previous_positions,
        velocities,
        forces,
        inv_masses,
        dynamic_frictions,
        static_frictions,
        ..
    } = bodies;

    #[cfg(feature = "parallel")]
    {
        (
            velocities.par_iter_mut(),
            current_positions.par_iter_mut(),
            previous_positions.par_iter_mut(),
            forces.par_iter(),
            inv_masses.par_iter(),
            dynamic_frictions.par_iter(),
            static_frictions.par_iter(),
        )
            .into_par_iter()
            .for_each(|(velocity, current, previous, force, inv_mass, dynamic, stat)| {
                integrate_body(velocity, current, previous, *force, *inv_mass, *dynamic, *stat, dt);
            });
    }
    #[cfg(not(feature = "parallel"))]
    {
        for i in 0..velocities.len() {
            integrate_body(
                &mut velocities[i],
                &mut current_positions[i],
                &mut previous_positions[i],
                forces[i],
                inv_masses[i],
                dynamic_frictions[i],
                static_frictions[i],
                dt,
            );
        }
    }
}
