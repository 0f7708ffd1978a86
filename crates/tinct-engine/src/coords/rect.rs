use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// The unit square `(0, 0, 1, 1)`.
    #[inline]
    pub const fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Maps a fractional position (`0.0` = left/top, `1.0` = right/bottom)
    /// onto this rectangle.
    #[inline]
    pub fn point_at(self, fraction: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * fraction.x,
            self.origin.y + self.size.y * fraction.y,
        )
    }
}
