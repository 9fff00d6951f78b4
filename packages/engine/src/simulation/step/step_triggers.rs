use crate::core::handle::{ObjectHandle, TriggerHandle};
use crate::systems::object::ObjectMut;
use crate::systems::trigger::{intersects, TriggerState};

use super::PhysicsWorld;

impl PhysicsWorld {
    /// Classify every (object, trigger) pair against last tick and fire the
    /// matching callback.
    ///
    /// The trigger is placed at its transform; the object at its rigidbody's
    /// simulation position. Callbacks run synchronously and may mutate the
    /// object they receive; pairs visited later observe the change.
    pub(super) fn process_triggers(&mut self) {
        let PhysicsWorld {
            transforms,
            bodies,
            objects,
            triggers,
            history,
            perf_enabled,
            perf_stats,
            ..
        } = self;

        for o in 0..objects.len() {
            let object = ObjectHandle::from_index(o);

            for t in 0..triggers.len() {
                let trigger = TriggerHandle::from_index(t);

                let hit = intersects(
                    triggers.collider(trigger),
                    transforms.position(triggers.transform(trigger)),
                    objects.collider(object),
                    bodies.current_position(objects.rigidbody(object)),
                );
                let state = history.record(trigger, object, hit);
                if *perf_enabled {
                    perf_stats.count_trigger(state);
                }
                if state == TriggerState::None {
                    continue;
                }

                let mut view = ObjectMut::new(object, objects, transforms, bodies);
                triggers.dispatch(trigger, state, &mut view);
            }
        }
    }
}
