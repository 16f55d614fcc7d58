//! crates/ws_algo/src/summary.rs
//! Output model of one aggregation pass. Constructed once, read-only after;
//! every page load recomputes fresh from the current record set.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-category statistics over the whole municipality.
///
/// `rank` is 1-based and contiguous, descending by total, ties broken by
/// first-seen input order. `label` is the display string resolved through the
/// caller's label dictionary, falling back to the raw key on a miss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoryStat {
    pub category: String,
    pub total: f64,
    pub percentage_of_grand_total: f64,
    pub label: String,
    pub rank: usize,
}

/// Per-ward statistics.
///
/// `breakdown` holds the ward-local top-N categories plus the ward-local
/// OTHER bucket. A category absent from the map means "no record in this
/// ward", not "confirmed zero".
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WardStat {
    pub ward_number: u32,
    pub total: f64,
    pub breakdown: BTreeMap<String, f64>,
    pub dominant_category: String,
    pub dominant_share_percent: f64,
}

/// Aggregate root of one pass.
///
/// Invariants (enforced by construction, checked by property tests):
/// - `Σ categories[i].total == grand_total` (including OTHER)
/// - `Σ categories[i].percentage_of_grand_total ≈ 100` when `grand_total > 0`
/// - ranks are exactly `1..=categories.len()`
/// - `grand_total == 0` ⇒ every percentage is 0 and `dominant` is `None`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    pub grand_total: f64,
    /// Top-N plus a synthetic OTHER bucket (emitted only when its total > 0),
    /// in rank order.
    pub categories: Vec<CategoryStat>,
    /// Ascending by ward number, independent of input order.
    pub wards: Vec<WardStat>,
    /// Simpson's index `1 − Σ pᵢ²` over the **full** pre-truncation category
    /// set. 0 = fully concentrated; approaches 1 with even spread.
    pub diversity_index: f64,
    /// Global rank-1 category, `None` when `grand_total == 0`.
    pub dominant: Option<CategoryStat>,
}

impl Summary {
    /// The zero state produced for an empty record set.
    pub fn empty() -> Self {
        Self {
            grand_total: 0.0,
            categories: Vec::new(),
            wards: Vec::new(),
            diversity_index: 0.0,
            dominant: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.grand_total == 0.0
    }

    /// Stats ranked 2..=5, for the secondary-category narrative sentence.
    pub fn secondary_categories(&self) -> &[CategoryStat] {
        let end = self.categories.len().min(5);
        if end <= 1 {
            &[]
        } else {
            &self.categories[1..end]
        }
    }
}
