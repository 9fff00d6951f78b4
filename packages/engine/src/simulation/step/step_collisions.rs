use crate::core::handle::ObjectHandle;
use crate::systems::collision::{evaluate_collision, resolve_collision, CollisionData};

use super::PhysicsWorld;

impl PhysicsWorld {
    /// Test every unordered object pair once (`i < j`) and resolve contacts
    /// immediately, so later pairs see earlier corrections.
    pub(super) fn collide_objects(&mut self) {
        let count = self.objects.len();
        let mut pairs = 0u32;
        let mut contacts = 0u32;
        let mut resolved = 0u32;

        for i in 0..count {
            let a = ObjectHandle::from_index(i);
            let body_a = self.objects.rigidbody(a);

            for j in (i + 1)..count {
                let b = ObjectHandle::from_index(j);
                let body_b = self.objects.rigidbody(b);
                pairs += 1;

                let contact = evaluate_collision(
                    self.objects.collider(a),
                    self.bodies.current_position(body_a),
                    self.objects.collider(b),
                    self.bodies.current_position(body_b),
                );
                let Some(contact) = contact else {
                    continue;
                };
                contacts += 1;

                let data = CollisionData::new(a, b, contact);
                if resolve_collision(&mut self.bodies, body_a, body_b, &data) {
                    resolved += 1;
                }
            }
        }

        if self.perf_enabled {
            self.perf_stats.pairs_tested += pairs;
            self.perf_stats.contacts += contacts;
            self.perf_stats.contacts_resolved += resolved;
        }
    }
}
