//! Closed ranges over fixed-width codes.

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::code::Code;

/// A closed range of codes: every value in `low..=high` is covered.
///
/// The constructor orders the bounds, so `low <= high` holds for every value
/// of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeRange {
    low: Code,
    high: Code,
}

impl CodeRange {
    /// Builds a range from two bounds given in either order.
    pub fn new(a: Code, b: Code) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Lower bound (inclusive).
    pub fn low(&self) -> Code {
        self.low
    }

    /// Upper bound (inclusive).
    pub fn high(&self) -> Code {
        self.high
    }

    /// True when the ranges share at least one value. Touching at a single
    /// boundary counts; integer adjacency does not, so `[94000, 94133]` and
    /// `[94134, 94299]` are disjoint.
    pub fn overlaps(&self, other: &CodeRange) -> bool {
        self.low.value().max(other.low.value()) <= self.high.value().min(other.high.value())
    }

    /// Smallest range covering both `self` and `other`.
    pub fn span(&self, other: &CodeRange) -> Self {
        Self {
            low: self.low.min(other.low),
            high: self.high.max(other.high),
        }
    }
}

// The wire shape is a two-element array of padded strings, `["94000","94133"]`.
impl Serialize for CodeRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.low)?;
        pair.serialize_element(&self.high)?;
        pair.end()
    }
}
