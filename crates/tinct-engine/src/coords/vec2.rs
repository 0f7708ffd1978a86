/// 2D point or vector.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True when both coordinates lie in the closed unit interval `[0, 1]`.
    #[inline]
    pub fn is_unit(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_bounds_are_inclusive() {
        assert!(Vec2::new(0.0, 0.0).is_unit());
        assert!(Vec2::new(1.0, 1.0).is_unit());
        assert!(Vec2::new(0.5, 0.0).is_unit());
    }

    #[test]
    fn outside_unit_square() {
        assert!(!Vec2::new(-0.1, 0.5).is_unit());
        assert!(!Vec2::new(0.5, 1.5).is_unit());
        assert!(!Vec2::new(f32::NAN, 0.5).is_unit());
    }
}
