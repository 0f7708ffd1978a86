//! Tinct engine crate.
//!
//! Framework-neutral color and gradient primitives: hex color decoding,
//! gradient direction geometry, and the small value types they produce.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod text;
