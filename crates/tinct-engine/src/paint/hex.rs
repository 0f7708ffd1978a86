//! Hex color literal decoding.
//!
//! Accepted forms are `#` followed by 3, 4, 6 or 8 hex digits. The decoded
//! value never carries opacity: the caller supplies it separately.

use super::color::Color;
use super::error::{InvalidFormatError, InvalidFormatKind};

/// Digit count of a hex color literal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HexWidth {
    /// `#RGB`, 4 bits per channel.
    Three,
    /// `#xRGB`, 4 bits per channel; the leading nibble is ignored.
    Four,
    /// `#RRGGBB`, 8 bits per channel.
    Six,
    /// `#RRGGBBxx`, 8 bits per channel; the trailing byte is ignored.
    Eight,
}

impl HexWidth {
    fn from_digits(n: usize) -> Option<Self> {
        match n {
            3 => Some(HexWidth::Three),
            4 => Some(HexWidth::Four),
            6 => Some(HexWidth::Six),
            8 => Some(HexWidth::Eight),
            _ => None,
        }
    }

    #[inline]
    pub fn digits(self) -> usize {
        match self {
            HexWidth::Three => 3,
            HexWidth::Four => 4,
            HexWidth::Six => 6,
            HexWidth::Eight => 8,
        }
    }
}

/// A validated hex color literal.
///
/// Once parsed, [`decode`](Self::decode) cannot fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HexColorSpec {
    value: u32,
    width: HexWidth,
}

impl HexColorSpec {
    /// Validates `hex` and reads its digits.
    ///
    /// Checks, in order: leading `#`, digit count, digit charset.
    pub fn parse(hex: &str) -> Result<Self, InvalidFormatError> {
        let Some(digits) = hex.strip_prefix('#') else {
            log::trace!("rejecting hex color {hex:?}: missing '#'");
            return Err(InvalidFormatError::new(hex, InvalidFormatKind::MissingHash));
        };

        let count = digits.chars().count();
        let Some(width) = HexWidth::from_digits(count) else {
            log::trace!("rejecting hex color {hex:?}: {count} digits");
            return Err(InvalidFormatError::new(
                hex,
                InvalidFormatKind::InvalidLength(count),
            ));
        };

        // At most 8 digits, so the accumulated value fits in u32.
        let mut value = 0u32;
        for (index, ch) in digits.chars().enumerate() {
            let Some(nibble) = ch.to_digit(16) else {
                log::trace!("rejecting hex color {hex:?}: {ch:?} at {index}");
                return Err(InvalidFormatError::new(
                    hex,
                    InvalidFormatKind::InvalidDigit { ch, index },
                ));
            };
            value = (value << 4) | nibble;
        }

        Ok(Self { value, width })
    }

    #[inline]
    pub fn width(self) -> HexWidth {
        self.width
    }

    /// The raw integer value of the digits.
    #[inline]
    pub fn value(self) -> u32 {
        self.value
    }

    /// Red, green and blue as integers in the literal's native precision
    /// (`0..=15` for short forms, `0..=255` for long forms).
    pub fn channels(self) -> [u32; 3] {
        let v = self.value;
        match self.width {
            HexWidth::Three | HexWidth::Four => [(v >> 8) & 0xF, (v >> 4) & 0xF, v & 0xF],
            HexWidth::Six => [(v >> 16) & 0xFF, (v >> 8) & 0xFF, v & 0xFF],
            HexWidth::Eight => [(v >> 24) & 0xFF, (v >> 16) & 0xFF, (v >> 8) & 0xFF],
        }
    }

    /// Normalizes the channels and pairs them with `alpha`.
    ///
    /// Layouts:
    /// - 3 digits: red `[11:8]`, green `[7:4]`, blue `[3:0]`, each / 15
    /// - 4 digits: as 3 digits; bits `[15:12]` are ignored
    /// - 6 digits: red `[23:16]`, green `[15:8]`, blue `[7:0]`, each / 255
    /// - 8 digits: red `[31:24]`, green `[23:16]`, blue `[15:8]`, each / 255;
    ///   bits `[7:0]` are ignored
    ///
    /// The 4- and 8-digit forms nominally carry an alpha group, but opacity is
    /// always taken from `alpha`.
    pub fn decode(self, alpha: f32) -> Color {
        let max = match self.width {
            HexWidth::Three | HexWidth::Four => 15.0,
            HexWidth::Six | HexWidth::Eight => 255.0,
        };
        let [r, g, b] = self.channels();
        let color = Color::from_rgba(r as f32 / max, g as f32 / max, b as f32 / max, alpha);
        log::trace!("decoded {:?} to {}", self, color);
        color
    }
}

/// Decodes a hex color string with an explicit opacity.
///
/// Shorthand for [`HexColorSpec::parse`] followed by [`HexColorSpec::decode`].
pub fn decode(hex: &str, alpha: f32) -> Result<Color, InvalidFormatError> {
    Color::from_hex(hex, alpha)
}
