use std::fmt;

/// Why a hex color string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFormatKind {
    /// The string does not start with `#`.
    MissingHash,
    /// The number of characters after `#` is not 3, 4, 6 or 8.
    InvalidLength(usize),
    /// A character after `#` is not a hexadecimal digit.
    /// `index` is the 0-based character position after the `#`.
    InvalidDigit { ch: char, index: usize },
}

/// A malformed hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFormatError {
    pub input: String,
    pub kind: InvalidFormatKind,
}

impl InvalidFormatError {
    pub(crate) fn new(input: &str, kind: InvalidFormatKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            InvalidFormatKind::MissingHash => {
                write!(f, "invalid hex color {:?}: missing '#'", self.input)
            }
            InvalidFormatKind::InvalidLength(n) => write!(
                f,
                "invalid hex color {:?}: expected 3, 4, 6 or 8 digits after '#', got {}",
                self.input, n
            ),
            InvalidFormatKind::InvalidDigit { ch, index } => write!(
                f,
                "invalid hex color {:?}: {:?} at position {} is not a hex digit",
                self.input, ch, index
            ),
        }
    }
}

impl std::error::Error for InvalidFormatError {}
