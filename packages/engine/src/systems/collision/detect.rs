use crate::core::math::{Bounds, Vec3};
use crate::domain::shape::Collider;

use super::types::Contact;

/// Planar squared distance between two centers
#[inline]
pub fn circle_distance_squared(a: Vec3, b: Vec3) -> f32 {
    (b - a).planar().length_squared()
}

/// Signed x/y overlap of two world-space boxes.
///
/// `delta` is `b_position - a_position`; its sign on each axis picks which
/// pair of opposing edges is compared. Negative means separated on that axis.
#[inline]
pub fn aabb_overlap(a: &Bounds, b: &Bounds, delta: Vec3) -> (f32, f32) {
    let x = if delta.x < 0.0 { b.right - a.left } else { a.right - b.left };
    let y = if delta.y < 0.0 { b.top - a.bottom } else { a.top - b.bottom };
    (x, y)
}

fn circle_vs_circle(a_pos: Vec3, a_radius: f32, b_pos: Vec3, b_radius: f32) -> Option<Contact> {
    let n = (b_pos - a_pos).planar();
    let r = a_radius + b_radius;

    if n.length_squared() >= r * r {
        return None;
    }

    let dist = n.length();
    if dist != 0.0 {
        Some(Contact { normal: n / dist, penetration: r - dist })
    } else {
        // Coincident centers: fixed normal, depth of the first radius
        Some(Contact { normal: Vec3::new(1.0, 0.0, 0.0), penetration: a_radius })
    }
}

fn aabb_vs_aabb(a_pos: Vec3, a_bounds: &Bounds, b_pos: Vec3, b_bounds: &Bounds) -> Option<Contact> {
    let a_world = a_bounds.translated(a_pos);
    let b_world = b_bounds.translated(b_pos);
    let n = b_pos - a_pos;

    let (x_overlap, y_overlap) = aabb_overlap(&a_world, &b_world, n);
    if x_overlap <= 0.0 || y_overlap <= 0.0 {
        return None;
    }

    // Least penetration axis, x on ties
    if x_overlap <= y_overlap {
        let sign = if n.x < 0.0 { -1.0 } else { 1.0 };
        Some(Contact { normal: Vec3::new(sign, 0.0, 0.0), penetration: x_overlap })
    } else {
        let sign = if n.y < 0.0 { -1.0 } else { 1.0 };
        Some(Contact { normal: Vec3::new(0.0, sign, 0.0), penetration: y_overlap })
    }
}

/// Narrow-phase test between two positioned colliders.
///
/// # Panics
/// Mixed AABB/Circle pairs are not implemented and abort the tick.
pub fn evaluate_collision(a: &Collider, a_pos: Vec3, b: &Collider, b_pos: Vec3) -> Option<Contact> {
    match (a, b) {
        (Collider::Circle { radius: ra }, Collider::Circle { radius: rb }) => {
            circle_vs_circle(a_pos, *ra, b_pos, *rb)
        }
        (Collider::Aabb(ba), Collider::Aabb(bb)) => aabb_vs_aabb(a_pos, ba, b_pos, bb),
        (Collider::Aabb(_), Collider::Circle { .. }) | (Collider::Circle { .. }, Collider::Aabb(_)) => {
            unimplemented!("AABB vs Circle collision is not implemented")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(r: f32) -> Collider {
        Collider::circle(r)
    }

    fn unit_box() -> Collider {
        Collider::aabb(-0.5, 0.5, 0.5, -0.5)
    }

    #[test]
    fn circles_separated_or_touching_do_not_collide() {
        let a = Vec3::zero();
        assert!(evaluate_collision(&circle(1.0), a, &circle(1.0), Vec3::new(3.0, 0.0, 0.0)).is_none());
        // Exactly touching: |d|^2 == r^2 is not a hit
        assert!(evaluate_collision(&circle(1.0), a, &circle(1.0), Vec3::new(2.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn overlapping_circles_report_unit_normal_and_depth() {
        let contact = evaluate_collision(
            &circle(1.0),
            Vec3::zero(),
            &circle(1.0),
            Vec3::new(0.0, 1.5, 7.0),
        )
        .expect("circles overlap");
        // z is ignored entirely
        assert_eq!(contact.normal, Vec3::new(0.0, 1.0, 0.0));
        assert!((contact.penetration - 0.5).abs() < 1e-6);
    }

    #[test]
    fn coincident_circles_use_fallback_normal() {
        let contact = evaluate_collision(&circle(2.0), Vec3::zero(), &circle(1.0), Vec3::zero())
            .expect("coincident circles collide");
        assert_eq!(contact.normal, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(contact.penetration, 2.0);
    }

    #[test]
    fn boxes_pick_least_penetration_axis() {
        // Overlap 0.2 on x, 0.9 on y
        let contact = evaluate_collision(&unit_box(), Vec3::zero(), &unit_box(), Vec3::new(0.8, 0.1, 0.0))
            .expect("boxes overlap");
        assert_eq!(contact.normal, Vec3::new(1.0, 0.0, 0.0));
        assert!((contact.penetration - 0.2).abs() < 1e-6);

        // b below a: normal points down
        let contact = evaluate_collision(&unit_box(), Vec3::zero(), &unit_box(), Vec3::new(0.0, -0.7, 0.0))
            .expect("boxes overlap");
        assert_eq!(contact.normal, Vec3::new(0.0, -1.0, 0.0));
        assert!((contact.penetration - 0.3).abs() < 1e-6);
    }

    #[test]
    fn box_ties_prefer_x_axis() {
        let contact = evaluate_collision(&unit_box(), Vec3::zero(), &unit_box(), Vec3::new(-0.5, 0.5, 0.0))
            .expect("boxes overlap");
        assert_eq!(contact.normal, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(contact.penetration, 0.5);
    }

    #[test]
    fn separated_boxes_do_not_collide() {
        assert!(evaluate_collision(&unit_box(), Vec3::zero(), &unit_box(), Vec3::new(1.5, 0.0, 0.0)).is_none());
        assert!(evaluate_collision(&unit_box(), Vec3::zero(), &unit_box(), Vec3::new(0.0, -1.01, 0.0)).is_none());
        // Touching edges carry no overlap
        assert!(evaluate_collision(&unit_box(), Vec3::zero(), &unit_box(), Vec3::new(1.0, 0.0, 0.0)).is_none());
    }

    #[test]
    #[should_panic(expected = "not implemented")]
    fn mixed_shapes_are_fatal() {
        evaluate_collision(&unit_box(), Vec3::zero(), &circle(1.0), Vec3::zero());
    }
}
