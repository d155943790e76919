//! Visible area of the sandbox

use sandbox_math::Vec2;

/// Height of the ground slab in pixels
pub const GROUND_HEIGHT: f32 = 100.0;
/// Width of the ground slab in pixels (wide enough to never end on screen)
pub const GROUND_WIDTH: f32 = 100_000.0;
/// Vertical offset of the ground centre below the bottom edge
pub const GROUND_OFFSET: f32 = 25.0;

/// Viewport size in pixels; bounds are `[0, width] x [0, height]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a body at `position` should be culled
    ///
    /// Bodies are culled below the bottom edge or past either side. There is
    /// no top bound, so bodies thrown upward come back. NaN coordinates are
    /// never inside, so they are always culled.
    pub fn is_out_of_bounds(&self, position: Vec2) -> bool {
        let inside = position.x >= 0.0 && position.x <= self.width && position.y <= self.height;
        !inside
    }

    /// Where the ground is centred for this viewport
    pub fn ground_position(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height + GROUND_OFFSET)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}
