//! Fixed-width numeric codes.
//!
//! Bounds enter and leave the pipeline as strings, but internally they are
//! [`Code`] values: a numeric value paired with the zero-padded width it must
//! render at. Carrying the width through the pipeline preserves leading
//! zeros ("00042" stays "00042" across parse, compare and format) and lets
//! the same reduction serve other fixed-width identifier schemes.

use std::fmt;

use serde::{Serialize, Serializer};

/// Largest supported width. Nine digits keep every value inside `u32`.
pub const MAX_WIDTH: u8 = 9;

/// A fixed-width numeric code, e.g. a five-digit postal code.
///
/// Ordering is numeric on the value; width only breaks ties so that codes of
/// mixed widths still sort deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    value: u32,
    width: u8,
}

impl Code {
    /// Builds a code from an already-parsed value. Returns `None` when the
    /// width is outside `1..=MAX_WIDTH` or the value does not fit in `width`
    /// digits.
    pub fn new(value: u32, width: u8) -> Option<Self> {
        if width == 0 || width > MAX_WIDTH {
            return None;
        }
        if value >= 10u32.pow(u32::from(width)) {
            return None;
        }
        Some(Self { value, width })
    }

    /// Parses a string of exactly `width` ASCII digits. Wrong lengths,
    /// signs, whitespace and other stray characters yield `None`; callers
    /// sanitize first via [`strip_non_digits`].
    pub fn parse(digits: &str, width: u8) -> Option<Self> {
        if width == 0 || width > MAX_WIDTH {
            return None;
        }
        if digits.len() != usize::from(width) {
            return None;
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value = digits.parse::<u32>().ok()?;
        Some(Self { value, width })
    }

    /// Numeric value of the code.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of digits the code renders at.
    pub fn width(&self) -> u8 {
        self.width
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = usize::from(self.width))
    }
}

// Codes are strings on the wire so leading zeros survive JSON round trips.
impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Drops every character that is not an ASCII digit. Whitespace, dashes,
/// grouping marks and any other noise disappear; the digits keep their
/// original order.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|ch| ch.is_ascii_digit()).collect()
}
