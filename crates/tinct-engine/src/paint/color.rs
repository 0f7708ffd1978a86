use std::fmt;
use std::str::FromStr;

use super::error::InvalidFormatError;
use super::hex::HexColorSpec;

/// Straight-alpha RGBA color with every channel normalized to `[0, 1]`.
///
/// Fields are private so the range invariant holds for every value; read
/// them through [`r`](Self::r), [`g`](Self::g), [`b`](Self::b), [`a`](Self::a).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        }
    }

    #[inline]
    pub const fn black() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }

    #[inline]
    pub const fn white() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 1.0,
        }
    }

    /// Creates a color from normalized components.
    ///
    /// Out-of-range values are clamped to `[0, 1]`; NaN becomes `0`.
    #[inline]
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Creates a color from red/green/blue components in `0.0`–`255.0` and
    /// an opacity in `0.0`–`1.0`.
    #[inline]
    pub fn from_rgb255(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        Self::from_rgba(r / 255.0, g / 255.0, b / 255.0, alpha)
    }

    /// Decodes a `#`-prefixed hex color string with an explicit opacity.
    ///
    /// Accepts 3, 4, 6 or 8 hex digits. The opacity always comes from
    /// `alpha`; see [`HexColorSpec::decode`] for the channel layout.
    pub fn from_hex(hex: &str, alpha: f32) -> Result<Self, InvalidFormatError> {
        Ok(HexColorSpec::parse(hex)?.decode(alpha))
    }

    #[inline]
    pub fn r(self) -> f32 {
        self.r
    }

    #[inline]
    pub fn g(self) -> f32 {
        self.g
    }

    #[inline]
    pub fn b(self) -> f32 {
        self.b
    }

    #[inline]
    pub fn a(self) -> f32 {
        self.a
    }

    /// Returns the same color with a different opacity.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: unit(alpha),
            ..self
        }
    }

    /// Returns `(r, g, b, a)`.
    #[inline]
    pub fn to_tuple(self) -> (f32, f32, f32, f32) {
        (self.r, self.g, self.b, self.a)
    }

    /// Quantizes every channel to 8 bits (round to nearest).
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Formats the color channels as `#rrggbb`. Opacity is not included.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({:.4}, {:.4}, {:.4}, {:.4})",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Parses a hex color string at full opacity.
impl FromStr for Color {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn from_rgb255_divides_by_255() {
        let c = Color::from_rgb255(255.0, 51.0, 0.0, 0.25);
        assert_eq!(c.to_tuple(), (1.0, 51.0 / 255.0, 0.0, 0.25));
    }

    #[test]
    fn from_rgba_clamps_out_of_range() {
        let c = Color::from_rgba(-0.5, 1.5, 0.5, 2.0);
        assert_eq!(c.to_tuple(), (0.0, 1.0, 0.5, 1.0));
    }

    #[test]
    fn from_rgba_maps_nan_to_zero() {
        let c = Color::from_rgba(f32::NAN, 0.0, 0.0, f32::NAN);
        assert_eq!(c.r(), 0.0);
        assert_eq!(c.a(), 0.0);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::white().with_alpha(0.3);
        assert_eq!(c.to_tuple(), (1.0, 1.0, 1.0, 0.3));
    }

    // ── quantization / formatting ─────────────────────────────────────────

    #[test]
    fn to_rgba8_rounds() {
        let c = Color::from_rgb255(128.0, 64.0, 1.0, 1.0);
        assert_eq!(c.to_rgba8(), [128, 64, 1, 255]);
    }

    #[test]
    fn to_hex_is_lowercase_rrggbb() {
        let c = Color::from_rgb255(171.0, 205.0, 239.0, 0.5);
        assert_eq!(c.to_hex(), "#abcdef");
    }

    #[test]
    fn from_str_uses_full_opacity() {
        let c: Color = "#00ff00".parse().unwrap();
        assert_eq!(c.to_tuple(), (0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn from_str_propagates_error() {
        assert!("00ff00".parse::<Color>().is_err());
    }
}
