//! Pool handles
//!
//! A handle is just the slot index of an entity in its pool. Copying one
//! copies the index: handles never own anything, many may alias one slot, and
//! since slots are never freed an index stays valid for the world's lifetime.
//! Each pool gets its own handle type, so the type doubles as the pool tag.

use std::fmt;

/// Identifies a pool in diagnostics and errors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoolTag {
    Transform,
    Rigidbody,
    Object,
    Trigger,
}

impl PoolTag {
    pub fn name(&self) -> &'static str {
        match self {
            PoolTag::Transform => "transform",
            PoolTag::Rigidbody => "rigidbody",
            PoolTag::Object => "object",
            PoolTag::Trigger => "trigger",
        }
    }
}

impl fmt::Display for PoolTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! pool_handle {
    ($(#[$meta:meta])* $name:ident => $tag:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            pub const POOL: PoolTag = $tag;

            #[inline]
            pub(crate) const fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            #[inline]
            pub const fn index(&self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", Self::POOL, self.0)
            }
        }
    };
}

pool_handle!(
    /// Position-only entity (render anchor, trigger anchor)
    TransformHandle => PoolTag::Transform
);
pool_handle!(
    /// Simulation state of one physics object
    RigidbodyHandle => PoolTag::Rigidbody
);
pool_handle!(
    /// Transform + collider + rigidbody, resolved physically
    ObjectHandle => PoolTag::Object
);
pool_handle!(
    /// Observation-only volume with enter/stay/exit callbacks
    TriggerHandle => PoolTag::Trigger
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_alias_by_index() {
        let a = ObjectHandle::from_index(3);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(b.index(), 3);
        assert_eq!(a.to_string(), "object#3");
    }
}
