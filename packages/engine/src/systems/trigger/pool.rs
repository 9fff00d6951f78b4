use crate::core::handle::{PoolTag, TransformHandle, TriggerHandle};
use crate::domain::error::PhysicsError;
use crate::domain::shape::Collider;
use crate::systems::object::ObjectMut;

use super::classify::TriggerState;

/// Callback run when an object enters, stays in or exits a trigger
pub type TriggerCallback = Box<dyn FnMut(&mut ObjectMut<'_>)>;

#[derive(Default)]
struct Callbacks {
    enter: Option<TriggerCallback>,
    stay: Option<TriggerCallback>,
    exit: Option<TriggerCallback>,
}

/// Trigger volumes and their callbacks
pub struct TriggerPool {
    capacity: usize,
    transforms: Vec<TransformHandle>,
    colliders: Vec<Collider>,
    callbacks: Vec<Callbacks>,
}

impl TriggerPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            transforms: Vec::with_capacity(capacity),
            colliders: Vec::with_capacity(capacity),
            callbacks: Vec::with_capacity(capacity),
        }
    }

    pub fn allocate(&mut self, transform: TransformHandle, collider: Collider) -> Result<TriggerHandle, PhysicsError> {
        if self.transforms.len() >= self.capacity {
            return Err(PhysicsError::CapacityExceeded {
                pool: PoolTag::Trigger,
                limit: self.capacity,
            });
        }
        let handle = TriggerHandle::from_index(self.transforms.len());
        self.transforms.push(transform);
        self.colliders.push(collider);
        self.callbacks.push(Callbacks::default());
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
    pub fn transform(&self, trigger: TriggerHandle) -> TransformHandle {
        self.transforms[trigger.index()]
    }

    #[inline]
    pub fn collider(&self, trigger: TriggerHandle) -> &Collider {
        &self.colliders[trigger.index()]
    }

    pub fn handles(&self) -> impl Iterator<Item = TriggerHandle> {
        (0..self.len()).map(TriggerHandle::from_index)
    }

    pub fn set_enter_callback(&mut self, trigger: TriggerHandle, callback: TriggerCallback) {
        self.callbacks[trigger.index()].enter = Some(callback);
    }

    pub fn set_stay_callback(&mut self, trigger: TriggerHandle, callback: TriggerCallback) {
        self.callbacks[trigger.index()].stay = Some(callback);
    }

    pub fn set_exit_callback(&mut self, trigger: TriggerHandle, callback: TriggerCallback) {
        self.callbacks[trigger.index()].exit = Some(callback);
    }

    /// Run the callback matching `state`. Missing callbacks and `None` are no-ops.
    pub fn dispatch(&mut self, trigger: TriggerHandle, state: TriggerState, object: &mut ObjectMut<'_>) {
        let callbacks = &mut self.callbacks[trigger.index()];
        let callback = match state {
            TriggerState::None => return,
            TriggerState::Enter => callbacks.enter.as_mut(),
            TriggerState::Stay => callbacks.stay.as_mut(),
            TriggerState::Exit => callbacks.exit.as_mut(),
        };
        if let Some(callback) = callback {
            callback(object);
        }
    }
}
