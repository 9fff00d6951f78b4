use crate::core::math::Bounds;

/// Shape tag of a collider
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionShape {
    Aabb,
    Circle,
}

/// Collision geometry, positioned by its owner's transform/rigidbody.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    Aabb(Bounds),
    Circle { radius: f32 },
}

impl Collider {
    pub fn aabb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Collider::Aabb(Bounds::new(left, top, right, bottom))
    }

    pub fn circle(radius: f32) -> Self {
        Collider::Circle { radius }
    }

    pub fn shape(&self) -> CollisionShape {
        match self {
            Collider::Aabb(_) => CollisionShape::Aabb,
            Collider::Circle { .. } => CollisionShape::Circle,
        }
    }

    /// Local-space box enclosing the shape (used by the debug overlay)
    pub fn local_bounds(&self) -> Bounds {
        match *self {
            Collider::Aabb(bounds) => bounds,
            Collider::Circle { radius } => Bounds::from_half_extents(radius, radius),
        }
    }
}
