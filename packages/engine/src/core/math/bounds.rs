use super::Vec3;

/// Axis-aligned box stored as offsets from its owner's origin.
///
/// Y points up, so `top` is expected to be greater than `bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Box centered on the origin
    pub fn from_half_extents(half_width: f32, half_height: f32) -> Self {
        Self::new(-half_width, half_height, half_width, -half_height)
    }

    /// Shift the offsets to world space at `position` (z is ignored)
    #[inline]
    pub fn translated(&self, position: Vec3) -> Self {
        Self {
            left: self.left + position.x,
            top: self.top + position.y,
            right: self.right + position.x,
            bottom: self.bottom + position.y,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}
