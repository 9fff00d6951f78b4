use crate::core::handle::{ObjectHandle, TriggerHandle};

use super::classify::TriggerState;

/// Double-buffered "was intersecting" table, one flag per (trigger, object).
///
/// Reads come from the front buffer, writes go to the back one; `swap` flips
/// them once per fixed tick after every pair was evaluated.
pub struct IntersectionHistory {
    object_capacity: usize,
    buffers: [Vec<bool>; 2],
    front: usize,
}

impl IntersectionHistory {
    pub fn new(trigger_capacity: usize, object_capacity: usize) -> Self {
        let len = trigger_capacity * object_capacity;
        Self {
            object_capacity,
            buffers: [vec![false; len], vec![false; len]],
            front: 0,
        }
    }

    #[inline]
    fn slot(&self, trigger: TriggerHandle, object: ObjectHandle) -> usize {
        trigger.index() * self.object_capacity + object.index()
    }

    /// Record this tick's result for the pair and classify the transition
    #[inline]
    pub fn record(&mut self, trigger: TriggerHandle, object: ObjectHandle, intersecting: bool) -> TriggerState {
        let slot = self.slot(trigger, object);
        let was_intersecting = self.buffers[self.front][slot];
        self.buffers[1 - self.front][slot] = intersecting;
        TriggerState::from_transition(intersecting, was_intersecting)
    }

    /// Result of the last completed tick for the pair
    pub fn was_intersecting(&self, trigger: TriggerHandle, object: ObjectHandle) -> bool {
        self.buffers[self.front][self.slot(trigger, object)]
    }

    pub fn swap(&mut self) {
        self.front = 1 - self.front;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_stay_exit_none_sequence() {
        let mut history = IntersectionHistory::new(2, 3);
        let t = TriggerHandle::from_index(1);
        let o = ObjectHandle::from_index(2);

        let mut run = |intersecting| {
            let state = history.record(t, o, intersecting);
            history.swap();
            state
        };

        assert_eq!(run(false), TriggerState::None);
        assert_eq!(run(true), TriggerState::Enter);
        assert_eq!(run(true), TriggerState::Stay);
        assert_eq!(run(true), TriggerState::Stay);
        assert_eq!(run(false), TriggerState::Exit);
        assert_eq!(run(false), TriggerState::None);
        assert_eq!(run(true), TriggerState::Enter);
    }

    #[test]
    fn pairs_do_not_share_slots() {
        // 2 triggers x 5 objects: the last trigger's slots must not alias the first's
        let mut history = IntersectionHistory::new(2, 5);
        for o in 0..5 {
            history.record(TriggerHandle::from_index(1), ObjectHandle::from_index(o), true);
        }
        history.swap();
        for o in 0..5 {
            assert!(!history.was_intersecting(TriggerHandle::from_index(0), ObjectHandle::from_index(o)));
            assert!(history.was_intersecting(TriggerHandle::from_index(1), ObjectHandle::from_index(o)));
        }
    }
}
