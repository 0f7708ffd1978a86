use std::fmt;
use std::str::FromStr;

use crate::coords::{Rect, Vec2};

use super::Color;

/// Direction of a linear gradient across its bounding box.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientDirection {
    /// Top edge to bottom edge.
    Vertical,
    /// Left edge to right edge.
    Horizontal,
    DiagonalTopLeftToBottomRight,
    DiagonalBottomLeftToTopRight,
    DiagonalTopRightToBottomLeft,
    DiagonalBottomRightToTopLeft,
}

impl GradientDirection {
    pub const ALL: [GradientDirection; 6] = [
        GradientDirection::Vertical,
        GradientDirection::Horizontal,
        GradientDirection::DiagonalTopLeftToBottomRight,
        GradientDirection::DiagonalBottomLeftToTopRight,
        GradientDirection::DiagonalTopRightToBottomLeft,
        GradientDirection::DiagonalBottomRightToTopLeft,
    ];

    /// Start and end points in the unit square.
    pub const fn vector(self) -> GradientVector {
        let (start, end) = match self {
            GradientDirection::Vertical => ((0.5, 0.0), (0.5, 1.0)),
            GradientDirection::Horizontal => ((0.0, 0.5), (1.0, 0.5)),
            GradientDirection::DiagonalTopLeftToBottomRight => ((0.0, 0.0), (1.0, 1.0)),
            GradientDirection::DiagonalBottomLeftToTopRight => ((0.0, 1.0), (1.0, 0.0)),
            GradientDirection::DiagonalTopRightToBottomLeft => ((1.0, 0.0), (0.0, 1.0)),
            GradientDirection::DiagonalBottomRightToTopLeft => ((1.0, 1.0), (0.0, 0.0)),
        };
        GradientVector {
            start: Vec2::new(start.0, start.1),
            end: Vec2::new(end.0, end.1),
        }
    }

    /// The diagonal running the other way along the same axis.
    ///
    /// `Vertical` and `Horizontal` have no reversed variant and map to themselves.
    pub const fn opposite(self) -> Self {
        match self {
            GradientDirection::Vertical => GradientDirection::Vertical,
            GradientDirection::Horizontal => GradientDirection::Horizontal,
            GradientDirection::DiagonalTopLeftToBottomRight => {
                GradientDirection::DiagonalBottomRightToTopLeft
            }
            GradientDirection::DiagonalBottomRightToTopLeft => {
                GradientDirection::DiagonalTopLeftToBottomRight
            }
            GradientDirection::DiagonalBottomLeftToTopRight => {
                GradientDirection::DiagonalTopRightToBottomLeft
            }
            GradientDirection::DiagonalTopRightToBottomLeft => {
                GradientDirection::DiagonalBottomLeftToTopRight
            }
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            GradientDirection::Vertical => "vertical",
            GradientDirection::Horizontal => "horizontal",
            GradientDirection::DiagonalTopLeftToBottomRight => "top-left-to-bottom-right",
            GradientDirection::DiagonalBottomLeftToTopRight => "bottom-left-to-top-right",
            GradientDirection::DiagonalTopRightToBottomLeft => "top-right-to-bottom-left",
            GradientDirection::DiagonalBottomRightToTopLeft => "bottom-right-to-top-left",
        }
    }
}

/// Start and end points of a gradient for `direction`.
#[inline]
pub const fn compute_vector(direction: GradientDirection) -> GradientVector {
    direction.vector()
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unknown gradient direction name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gradient direction {:?}", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for GradientDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradientDirection::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDirection(s.to_owned()))
    }
}

/// Start/end points of a linear gradient axis.
///
/// Produced by [`GradientDirection::vector`] in the unit square; use
/// [`in_rect`](Self::in_rect) to move it into a concrete box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientVector {
    pub start: Vec2,
    pub end: Vec2,
}

impl GradientVector {
    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    #[inline]
    pub fn in_rect(self, bounds: Rect) -> Self {
        Self {
            start: bounds.point_at(self.start),
            end: bounds.point_at(self.end),
        }
    }
}

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition.
///
/// `start` and `end` are in the same coordinate space as the bounds the
/// gradient was built for.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Builds a gradient across `bounds` along `direction`, with `colors`
    /// spaced evenly from `t = 0` to `t = 1`.
    pub fn from_direction(colors: &[Color], direction: GradientDirection, bounds: Rect) -> Self {
        let GradientVector { start, end } = direction.vector().in_rect(bounds);

        let last = colors.len().saturating_sub(1);
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let t = if last == 0 { 0.0 } else { i as f32 / last as f32 };
                ColorStop::new(t, color)
            })
            .collect();

        log::debug!("built {direction} gradient with {} stops", colors.len());
        Self::new(start, end, stops, SpreadMode::Pad)
    }

    pub fn with_spread(mut self, spread: SpreadMode) -> Self {
        self.spread = spread;
        self
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite())
            && self.stops.len() >= 2
            && self.start != self.end
    }
}
