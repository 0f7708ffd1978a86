//! Paint model: colors, hex decoding and gradient geometry.
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod error;
pub mod gradient;
pub mod hex;

pub use color::Color;
pub use error::{InvalidFormatError, InvalidFormatKind};
pub use gradient::{
    ColorStop, GradientDirection, GradientVector, LinearGradient, SpreadMode, UnknownDirection,
    compute_vector,
};
pub use hex::{HexColorSpec, HexWidth, decode};
