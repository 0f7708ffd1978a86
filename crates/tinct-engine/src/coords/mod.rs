//! Coordinate and geometry types.
//!
//! Conventions:
//! - Origin top-left
//! - +X right, +Y down
//!
//! Gradient vectors live in the unit square (`0.0` = left/top edge,
//! `1.0` = right/bottom edge) and are mapped onto a [`Rect`] when needed.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
