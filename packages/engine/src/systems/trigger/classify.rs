use crate::core::math::Vec3;
use crate::domain::shape::Collider;
use crate::systems::collision::{aabb_overlap, circle_distance_squared};

/// Per-pair transition, encoded as `2 * intersecting + was_intersecting`
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerState {
    None = 0,
    Exit = 1,
    Enter = 2,
    Stay = 3,
}

impl TriggerState {
    #[inline]
    pub fn from_transition(intersecting: bool, was_intersecting: bool) -> Self {
        match 2 * (intersecting as u8) + was_intersecting as u8 {
            0 => TriggerState::None,
            1 => TriggerState::Exit,
            2 => TriggerState::Enter,
            _ => TriggerState::Stay,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Intersection test between a trigger volume and an object.
///
/// Circles use an inclusive boundary (touching counts), unlike the
/// collision detector. Boxes need positive overlap on both axes.
///
/// # Panics
/// Mixed AABB/Circle pairs are not implemented.
pub fn intersects(trigger: &Collider, trigger_pos: Vec3, object: &Collider, object_pos: Vec3) -> bool {
    match (trigger, object) {
        (Collider::Circle { radius: rt }, Collider::Circle { radius: ro }) => {
            let r = rt + ro;
            circle_distance_squared(object_pos, trigger_pos) <= r * r
        }
        (Collider::Aabb(tb), Collider::Aabb(ob)) => {
            let trigger_world = tb.translated(trigger_pos);
            let object_world = ob.translated(object_pos);
            let (x, y) = aabb_overlap(&object_world, &trigger_world, trigger_pos - object_pos);
            x > 0.0 && y > 0.0
        }
        (Collider::Aabb(_), Collider::Circle { .. }) | (Collider::Circle { .. }, Collider::Aabb(_)) => {
            unimplemented!("AABB vs Circle trigger intersection is not implemented")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table() {
        assert_eq!(TriggerState::from_transition(false, false), TriggerState::None);
        assert_eq!(TriggerState::from_transition(false, true), TriggerState::Exit);
        assert_eq!(TriggerState::from_transition(true, false), TriggerState::Enter);
        assert_eq!(TriggerState::from_transition(true, true), TriggerState::Stay);
        assert_eq!(TriggerState::Stay.code(), 3);
    }

    #[test]
    fn circle_boundary_is_inclusive() {
        let c = Collider::circle(1.0);
        assert!(intersects(&c, Vec3::zero(), &c, Vec3::new(2.0, 0.0, 0.0)));
        assert!(!intersects(&c, Vec3::zero(), &c, Vec3::new(2.001, 0.0, 0.0)));
        // depth is ignored
        assert!(intersects(&c, Vec3::new(0.0, 0.0, -5.0), &c, Vec3::new(1.0, 0.0, 3.0)));
    }

    #[test]
    fn boxes_need_positive_overlap() {
        let water = Collider::aabb(-0.5, 1.0, 0.5, 0.0);
        let player = Collider::aabb(-0.25, 1.0, 0.25, 0.0);
        assert!(intersects(&water, Vec3::new(3.1, 0.0, 0.0), &player, Vec3::new(2.7, 0.0, 0.0)));
        // edges touch exactly at x = 0.5
        assert!(!intersects(&water, Vec3::new(0.75, 0.0, 0.0), &player, Vec3::zero()));
        assert!(!intersects(&water, Vec3::new(0.0, 1.0, 0.0), &player, Vec3::zero()));
    }

    #[test]
    #[should_panic(expected = "not implemented")]
    fn mixed_shapes_are_fatal() {
        intersects(&Collider::circle(1.0), Vec3::zero(), &Collider::aabb(-1.0, 1.0, 1.0, -1.0), Vec3::zero());
    }
}
