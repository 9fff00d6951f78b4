use crate::core::handle::RigidbodyHandle;

use super::PhysicsWorld;

impl PhysicsWorld {
    /// Blend each object's transform between its last two simulated
    /// positions by the leftover fraction of a tick, then start the next
    /// segment from the current position.
    pub(super) fn interpolate(&mut self) {
        let alpha = self.accumulator / self.config.fixed_timestep;

        for i in 0..self.bodies.len() {
            let body = RigidbodyHandle::from_index(i);
            let current = self.bodies.current_position(body);
            let previous = self.bodies.previous_position(body);
            let transform = self.objects.transform(self.bodies.owner(body));

            self.transforms.set_position(transform, current.lerp_from(previous, alpha));
            self.bodies.settle_previous(body);
        }
    }
}
