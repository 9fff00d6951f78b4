use crate::core::handle::ObjectHandle;
use crate::core::math::Vec3;

/// Geometric result of a narrow-phase test
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the first shape towards the second
    pub normal: Vec3,
    /// Overlap along `normal`, never negative
    pub penetration: f32,
}

/// A contact between two objects, valid for the tick that produced it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionData {
    pub a: ObjectHandle,
    pub b: ObjectHandle,
    pub normal: Vec3,
    pub penetration: f32,
}

impl CollisionData {
    pub fn new(a: ObjectHandle, b: ObjectHandle, contact: Contact) -> Self {
        Self {
            a,
            b,
            normal: contact.normal,
            penetration: contact.penetration,
        }
    }
}
