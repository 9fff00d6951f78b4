use crate::core::math::Bounds;
use crate::domain::shape::Collider;

use super::PhysicsWorld;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugShapeKind {
    Body,
    Trigger,
}

/// One collider outline in world space.
///
/// Circles are reported as their enclosing box plus `radius`, so a renderer
/// can draw either.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugShape {
    pub kind: DebugShapeKind,
    pub bounds: Bounds,
    pub radius: Option<f32>,
}

impl DebugShape {
    /// Packed `[kind, left, top, right, bottom]` for the JS overlay
    pub(crate) fn to_array(&self) -> [f32; 5] {
        let kind = match self.kind {
            DebugShapeKind::Body => 0.0,
            DebugShapeKind::Trigger => 1.0,
        };
        [kind, self.bounds.left, self.bounds.top, self.bounds.right, self.bounds.bottom]
    }
}

/// Objects are drawn where they render (their transform), triggers at their
/// transform.
pub(super) fn collect_debug_shapes(world: &PhysicsWorld) -> Vec<DebugShape> {
    let mut shapes = Vec::with_capacity(world.objects.len() + world.triggers.len());

    for object in world.objects.handles() {
        let collider = world.objects.collider(object);
        let position = world.transforms.position(world.objects.transform(object));
        shapes.push(DebugShape {
            kind: DebugShapeKind::Body,
            bounds: collider.local_bounds().translated(position),
            radius: collider_radius(collider),
        });
    }

    for trigger in world.triggers.handles() {
        let collider = world.triggers.collider(trigger);
        let position = world.transforms.position(world.triggers.transform(trigger));
        shapes.push(DebugShape {
            kind: DebugShapeKind::Trigger,
            bounds: collider.local_bounds().translated(position),
            radius: collider_radius(collider),
        });
    }

    shapes
}

fn collider_radius(collider: &Collider) -> Option<f32> {
    match *collider {
        Collider::Circle { radius } => Some(radius),
        Collider::Aabb(_) => None,
    }
}
