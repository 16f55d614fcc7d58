//! ws_algo — Aggregation layer for ward-level categorical records.
//!
//! One pure pass turns a flat list of `(ward_number, category, value)`
//! records into a [`Summary`]: grand total, ranked per-category stats with
//! top-N + OTHER truncation, per-ward stats, Simpson diversity index, and
//! the dominant category. Depends only on `ws_core`.
//!
//! Contract:
//! - Inputs may be empty (well-defined zero state, not an error).
//! - No RNG, no I/O, no mutation of input; stable first-seen tie-breaks.
//! - The only error is a caller contract violation (`top_n < 1`).

#![forbid(unsafe_code)]

use core::fmt;

pub mod aggregate;
pub mod summary;

pub use aggregate::{aggregate, simpson_index, DEFAULT_TOP_N};
pub use summary::{CategoryStat, Summary, WardStat};

/// Re-export the synthetic bucket key so downstream crates don't need a
/// direct `ws_core::datasets` import.
pub use ws_core::OTHER_KEY;

/// Caller contract violations. Data-shaped problems (negative values, empty
/// input, missing labels) are normalized or soft-failed, never raised.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AggError {
    /// `top_n` must be at least 1; anything lower is a caller bug.
    InvalidTopN { top_n: usize },
}

impl fmt::Display for AggError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggError::InvalidTopN { top_n } => {
                write!(f, "invalid top_n: {top_n} (must be >= 1)")
            }
        }
    }
}

impl std::error::Error for AggError {}
