//! The reduction pipeline: sanitize, validate, order, deduplicate, merge.
//!
//! [`reduce`] is the single entry point. It takes raw bound pairs exactly as
//! they arrived from a caller, noise and all, and returns the minimal set of
//! disjoint ranges covering the same codes. The function is pure: no
//! interning, no caching, no shared state, so two calls with the same input
//! and config always produce the same output.

use std::collections::HashSet;
use std::time::Instant;

use thiserror::Error;
use tracing::{Level, info, warn};

use crate::code::{Code, MAX_WIDTH, strip_non_digits};
use crate::config::ReduceConfig;
use crate::range::CodeRange;

/// Errors that make an input set unreducible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The caller supplied no ranges at all.
    #[error("no ranges supplied")]
    Empty,
    /// A bound kept the wrong number of digits after sanitization.
    #[error("bound {raw:?} is not a {width}-digit code after sanitization")]
    Bound { raw: String, width: u8 },
    /// The configured width cannot be represented.
    #[error("unsupported code width {width}: must be 1..={max}", max = MAX_WIDTH)]
    UnsupportedWidth { width: u8 },
    /// Config version 0 is reserved and invalid.
    #[error("config version {version} is not supported: must be >= 1")]
    UnsupportedVersion { version: u32 },
}

/// Reduces raw bound pairs to the minimal covering set of ranges.
///
/// Each pair is sanitized (non-digits dropped), validated against the
/// configured width, and oriented so the lower bound comes first. The set is
/// then sorted by lower bound, stripped of exact duplicates, and folded so
/// that ranges sharing at least one value collapse into their span. The
/// result is sorted, pairwise disjoint, and covers exactly the codes the
/// input covered.
pub fn reduce<S>(pairs: &[(S, S)], cfg: &ReduceConfig) -> Result<Vec<CodeRange>, InvalidInput>
where
    S: AsRef<str>,
{
    let start = Instant::now();
    let span = tracing::span!(
        Level::DEBUG,
        "zipfold.reduce",
        ranges_in = pairs.len(),
        width = cfg.width
    );
    let _guard = span.enter();

    match reduce_inner(pairs, cfg) {
        Ok(ranges) => {
            info!(
                ranges_in = pairs.len(),
                ranges_out = ranges.len(),
                elapsed_micros = start.elapsed().as_micros(),
                "reduce_success"
            );
            Ok(ranges)
        }
        Err(err) => {
            warn!(ranges_in = pairs.len(), error = %err, "reduce_failure");
            Err(err)
        }
    }
}

fn reduce_inner<S>(pairs: &[(S, S)], cfg: &ReduceConfig) -> Result<Vec<CodeRange>, InvalidInput>
where
    S: AsRef<str>,
{
    // Config validation: version 0 is reserved and invalid.
    if cfg.version == 0 {
        return Err(InvalidInput::UnsupportedVersion {
            version: cfg.version,
        });
    }
    if cfg.width == 0 || cfg.width > MAX_WIDTH {
        return Err(InvalidInput::UnsupportedWidth { width: cfg.width });
    }
    if pairs.is_empty() {
        return Err(InvalidInput::Empty);
    }

    let mut ranges = parse_ranges(pairs, cfg.width)?;

    // Stable sort by lower bound; equal lows keep their input order so
    // deduplication is deterministic.
    ranges.sort_by_key(|range| range.low());

    let ranges = dedup(ranges);
    if ranges.len() == 1 {
        // A single survivor cannot merge with anything.
        return Ok(ranges);
    }
    Ok(merge(ranges))
}

/// Sanitizes and validates every bound, producing oriented ranges.
fn parse_ranges<S>(pairs: &[(S, S)], width: u8) -> Result<Vec<CodeRange>, InvalidInput>
where
    S: AsRef<str>,
{
    pairs
        .iter()
        .map(|(a, b)| {
            let low = parse_bound(a.as_ref(), width)?;
            let high = parse_bound(b.as_ref(), width)?;
            Ok(CodeRange::new(low, high))
        })
        .collect()
}

fn parse_bound(raw: &str, width: u8) -> Result<Code, InvalidInput> {
    let digits = strip_non_digits(raw);
    Code::parse(&digits, width).ok_or_else(|| InvalidInput::Bound {
        raw: raw.to_string(),
        width,
    })
}

/// Drops exact duplicates, keeping the first occurrence. Duplicates need not
/// be adjacent: the sort orders by lower bound only, so ranges with equal
/// lows but different highs can sit between two copies.
fn dedup(ranges: Vec<CodeRange>) -> Vec<CodeRange> {
    if ranges.len() <= 1 {
        return ranges;
    }
    let mut seen = HashSet::with_capacity(ranges.len());
    ranges
        .into_iter()
        .filter(|range| seen.insert(*range))
        .collect()
}

/// Folds sorted ranges into the minimal covering set. The accumulator grows
/// as it absorbs overlaps, so a chain like `[1,10] [2,3] [4,20]` collapses
/// into `[1,20]` even though the last link only touches the accumulated
/// span, not its immediate neighbour. Integer-adjacent ranges stay separate.
fn merge(ranges: Vec<CodeRange>) -> Vec<CodeRange> {
    let mut iter = ranges.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    let mut acc = first;
    for range in iter {
        if acc.overlaps(&range) {
            acc = acc.span(&range);
        } else {
            merged.push(acc);
            acc = range;
        }
    }
    merged.push(acc);
    merged
}
