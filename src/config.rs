//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a reduction pass.
///
/// `width` is the digit count every bound must have once sanitized; postal
/// codes use the default of five. Out-of-range values are rejected by
/// [`reduce`](crate::reduce::reduce) rather than panicking, so a config can
/// be deserialized from untrusted sources and validated on use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Semantic version of the reduction configuration.
    pub version: u32,
    /// Required number of digits per bound after sanitization.
    pub width: u8,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self { version: 1, width: 5 }
    }
}

impl ReduceConfig {
    /// Current-version config for a non-default code width.
    pub fn with_width(width: u8) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}
