//! # zipfold
//!
//! zipfold reduces collections of fixed-width numeric code ranges, postal
//! codes by default, to the minimal set of closed ranges covering exactly
//! the same codes. Given restrictions like "no products ship to 94133-94299
//! or 94226-94399", it produces the equivalent non-redundant form a lookup
//! service can answer from.
//!
//! ## Core Responsibilities
//!
//! - **Sanitization**: Strips every non-digit character from each bound, so
//!   `" 94-133 "` and `"94133"` are the same code.
//! - **Validation**: Requires each sanitized bound to be exactly `width`
//!   ASCII digits (five for postal codes) and rejects the whole input
//!   otherwise. Leading zeros are significant and preserved.
//! - **Normalization**: Orients each range so the lower bound comes first
//!   and sorts the set by lower bound.
//! - **Deduplication**: Drops exact duplicate ranges, keeping the first.
//! - **Merging**: Folds ranges that share at least one value into their
//!   span. Integer-adjacent ranges stay separate: `[94000, 94133]` and
//!   `[94134, 94299]` do not merge.
//!
//! The pipeline is driven by [`ReduceConfig`] and entered through the pure
//! [`reduce`] function. The same input and config always produce the same
//! output, and the output covers exactly the codes the input covered.
//!
//! ## Example Usage
//!
//! ```
//! use zipfold::{ReduceConfig, reduce};
//!
//! let pairs = [
//!     ("94133", "94133"),
//!     ("94200", "94299"),
//!     ("94226", "94399"),
//! ];
//!
//! let ranges = reduce(&pairs, &ReduceConfig::default()).expect("bounds are valid");
//!
//! let rendered: Vec<String> = ranges
//!     .iter()
//!     .map(|r| format!("{}-{}", r.low(), r.high()))
//!     .collect();
//! assert_eq!(rendered, vec!["94133-94133", "94200-94399"]);
//! ```

pub mod code;
pub mod config;
pub mod range;
pub mod reduce;

pub use code::{Code, MAX_WIDTH, strip_non_digits};
pub use config::ReduceConfig;
pub use range::CodeRange;
pub use reduce::{InvalidInput, reduce};
