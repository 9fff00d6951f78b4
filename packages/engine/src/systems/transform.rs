use crate::core::handle::{PoolTag, TransformHandle};
use crate::core::math::Vec3;
use crate::domain::error::PhysicsError;

/// Positions of every transform, render-authoritative for physics objects.
pub struct TransformPool {
    capacity: usize,
    positions: Vec<Vec3>,
}

impl TransformPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            positions: Vec::with_capacity(capacity),
        }
    }

    /// Claim the next slot
    pub fn allocate(&mut self, position: Vec3) -> Result<TransformHandle, PhysicsError> {
        if self.positions.len() >= self.capacity {
            return Err(PhysicsError::CapacityExceeded {
                pool: PoolTag::Transform,
                limit: self.capacity,
            });
        }
        let handle = TransformHandle::from_index(self.positions.len());
        self.positions.push(position);
        Ok(handle)
    }

    #[inline]
    pub fn position(&self, handle: TransformHandle) -> Vec3 {
        self.positions[handle.index()]
    }

    #[inline]
    pub fn position_mut(&mut self, handle: TransformHandle) -> &mut Vec3 {
        &mut self.positions[handle.index()]
    }

    #[inline]
    pub fn set_position(&mut self, handle: TransformHandle, position: Vec3) {
        self.positions[handle.index()] = position;
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_monotonic_indices_until_full() {
        let mut pool = TransformPool::new(2);
        let a = pool.allocate(Vec3::new(1.0, 0.0, 0.0)).unwrap();
        let b = pool.allocate(Vec3::new(2.0, 0.0, 0.0)).unwrap();
        assert_eq!((a.index(), b.index()), (0, 1));
        assert_eq!(pool.position(b).x, 2.0);

        let err = pool.allocate(Vec3::zero()).unwrap_err();
        assert_eq!(err, PhysicsError::CapacityExceeded { pool: PoolTag::Transform, limit: 2 });
        assert_eq!(pool.len(), 2);
    }
}
