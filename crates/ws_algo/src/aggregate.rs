//! crates/ws_algo/src/aggregate.rs
//! Single-pass categorical aggregation.
//!
//! Ordering rules:
//! - Ranking is a stable sort on descending total; ties keep first-seen
//!   input order (global ranking uses global first-seen, ward rankings use
//!   ward-local first-seen).
//! - The diversity index is computed over the **full** category set before
//!   the top-N fold; truncating first would corrupt the squared shares.
//! - Wards are emitted ascending by ward number regardless of input order.

use std::collections::BTreeMap;

use ws_core::records::clamp_value;
use ws_core::{LabelSource, Record, OTHER_KEY};

use crate::summary::{CategoryStat, Summary, WardStat};
use crate::AggError;

/// Display ranking keeps at most this many categories before the OTHER fold.
pub const DEFAULT_TOP_N: usize = 10;

/// Tally accumulator preserving first-seen key order next to the sums.
#[derive(Default)]
struct Tally {
    order: Vec<String>,
    totals: BTreeMap<String, f64>,
}

impl Tally {
    fn add(&mut self, key: &str, value: f64) {
        match self.totals.get_mut(key) {
            Some(t) => *t += value,
            None => {
                self.order.push(key.to_string());
                self.totals.insert(key.to_string(), value);
            }
        }
    }

    /// `(key, total)` pairs, descending by total, first-seen tie-break.
    /// Stable sort over the first-seen order gives the tie-break for free.
    fn ranked(&self) -> Vec<(&str, f64)> {
        let mut out: Vec<(&str, f64)> = self
            .order
            .iter()
            .map(|k| (k.as_str(), self.totals[k]))
            .collect();
        out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(core::cmp::Ordering::Equal));
        out
    }

    fn grand_total(&self) -> f64 {
        self.totals.values().sum()
    }
}

/// Aggregate raw records into a [`Summary`].
///
/// Pure and deterministic: same input ⇒ same output, no mutation of input,
/// O(records + categories·log categories). Empty input yields the zero-state
/// summary. Values are re-clamped defensively (negative/NaN → 0) so malformed
/// upstream rows can never poison the totals.
///
/// # Errors
/// [`AggError::InvalidTopN`] when `top_n < 1` — a caller bug, not a data
/// condition.
pub fn aggregate(
    records: &[Record],
    labels: &dyn LabelSource,
    top_n: usize,
) -> Result<Summary, AggError> {
    if top_n < 1 {
        return Err(AggError::InvalidTopN { top_n });
    }

    let mut global = Tally::default();
    let mut per_ward: BTreeMap<u32, Tally> = BTreeMap::new();

    for r in records {
        let value = clamp_value(r.value);
        global.add(&r.category, value);
        per_ward.entry(r.ward_number).or_default().add(&r.category, value);
    }

    let grand_total = global.grand_total();

    // Full-set Simpson index, before any truncation.
    let diversity_index = simpson_index(global.totals.values().copied(), grand_total);

    let categories = fold_top_n(&global.ranked(), grand_total, top_n, labels);
    let dominant = if grand_total > 0.0 {
        categories.first().cloned()
    } else {
        None
    };

    let wards = per_ward
        .iter()
        .map(|(&ward_number, tally)| ward_stat(ward_number, tally, top_n))
        .collect();

    Ok(Summary {
        grand_total,
        categories,
        wards,
        diversity_index,
        dominant,
    })
}

/// Simpson's diversity index `1 − Σ pᵢ²` over category totals.
/// 0 when fully concentrated (or when there is no data at all).
pub fn simpson_index(totals: impl Iterator<Item = f64>, grand_total: f64) -> f64 {
    if grand_total <= 0.0 {
        return 0.0;
    }
    let sum_sq: f64 = totals
        .map(|t| {
            let p = t / grand_total;
            p * p
        })
        .sum();
    // Float noise can push `1 - sum_sq` a hair below zero for one category.
    (1.0 - sum_sq).max(0.0)
}

/// Keep the first `top_n` ranked categories and fold the remainder into the
/// synthetic OTHER bucket (emitted only when its total is positive). Ranks
/// are contiguous over whatever is emitted.
fn fold_top_n(
    ranked: &[(&str, f64)],
    grand_total: f64,
    top_n: usize,
    labels: &dyn LabelSource,
) -> Vec<CategoryStat> {
    let shown = ranked.len().min(top_n);
    let mut out: Vec<CategoryStat> = Vec::with_capacity(shown + 1);

    for (i, &(key, total)) in ranked[..shown].iter().enumerate() {
        out.push(CategoryStat {
            category: key.to_string(),
            total,
            percentage_of_grand_total: share_percent(total, grand_total),
            label: resolve_label(labels, key),
            rank: i + 1,
        });
    }

    let other_total: f64 = ranked[shown..].iter().map(|&(_, t)| t).sum();
    if other_total > 0.0 {
        out.push(CategoryStat {
            category: OTHER_KEY.to_string(),
            total: other_total,
            percentage_of_grand_total: share_percent(other_total, grand_total),
            label: resolve_label(labels, OTHER_KEY),
            rank: shown + 1,
        });
    }

    out
}

fn ward_stat(ward_number: u32, tally: &Tally, top_n: usize) -> WardStat {
    let ward_total = tally.grand_total();
    let ranked = tally.ranked();

    // Ward-local top-N + OTHER, independent of the global ranking.
    let shown = ranked.len().min(top_n);
    let mut breakdown: BTreeMap<String, f64> = ranked[..shown]
        .iter()
        .map(|&(k, t)| (k.to_string(), t))
        .collect();
    let other_total: f64 = ranked[shown..].iter().map(|&(_, t)| t).sum();
    if other_total > 0.0 {
        breakdown.insert(OTHER_KEY.to_string(), other_total);
    }

    // A ward only exists here because it had records, so `ranked` is
    // non-empty; with an all-zero ward the first-seen category wins at 0%.
    let (dominant_category, dominant_total) = ranked
        .first()
        .map(|&(k, t)| (k.to_string(), t))
        .unwrap_or_else(|| (String::new(), 0.0));

    WardStat {
        ward_number,
        total: ward_total,
        breakdown,
        dominant_category,
        dominant_share_percent: share_percent(dominant_total, ward_total),
    }
}

fn share_percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

fn resolve_label(labels: &dyn LabelSource, key: &str) -> String {
    labels.label(key).unwrap_or(key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ws_core::NoLabels;

    fn rec(ward: u32, cat: &str, value: f64) -> Record {
        Record::new(ward, cat, value).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn worked_example() {
        let records = vec![
            rec(1, "A", 60.0),
            rec(1, "B", 40.0),
            rec(2, "A", 10.0),
            rec(2, "B", 90.0),
        ];
        let s = aggregate(&records, &NoLabels, DEFAULT_TOP_N).unwrap();

        assert!(close(s.grand_total, 200.0));
        assert_eq!(s.categories.len(), 2);
        assert_eq!(s.categories[0].category, "B");
        assert_eq!(s.categories[0].rank, 1);
        assert!(close(s.categories[0].total, 130.0));
        assert!(close(s.categories[0].percentage_of_grand_total, 65.0));
        assert_eq!(s.categories[1].category, "A");
        assert!(close(s.categories[1].total, 70.0));
        assert!(close(s.categories[1].percentage_of_grand_total, 35.0));

        assert_eq!(s.wards.len(), 2);
        assert_eq!(s.wards[0].ward_number, 1);
        assert_eq!(s.wards[0].dominant_category, "A");
        assert!(close(s.wards[0].dominant_share_percent, 60.0));
        assert_eq!(s.wards[1].dominant_category, "B");
        assert!(close(s.wards[1].dominant_share_percent, 90.0));

        assert!(close(s.diversity_index, 1.0 - (0.35_f64.powi(2) + 0.65_f64.powi(2))));
        assert_eq!(s.dominant.as_ref().unwrap().category, "B");
    }

    #[test]
    fn empty_input_is_zero_state() {
        let s = aggregate(&[], &NoLabels, DEFAULT_TOP_N).unwrap();
        assert_eq!(s, Summary::empty());
        assert!(s.dominant.is_none());
    }

    #[test]
    fn top_n_zero_is_a_contract_violation() {
        let err = aggregate(&[], &NoLabels, 0).unwrap_err();
        assert_eq!(err, AggError::InvalidTopN { top_n: 0 });
    }

    #[test]
    fn truncation_folds_remainder_exactly() {
        let records = vec![
            rec(1, "A", 50.0),
            rec(1, "B", 30.0),
            rec(1, "C", 20.0),
        ];
        let s = aggregate(&records, &NoLabels, 2).unwrap();
        let keys: Vec<&str> = s.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(keys, vec!["A", "B", OTHER_KEY]);
        assert!(close(s.categories[2].total, 20.0));
        assert_eq!(s.categories[2].rank, 3);
    }

    #[test]
    fn other_bucket_omitted_when_empty() {
        let records = vec![rec(1, "A", 50.0), rec(1, "B", 30.0)];
        let s = aggregate(&records, &NoLabels, 2).unwrap();
        assert!(s.categories.iter().all(|c| c.category != OTHER_KEY));
    }

    #[test]
    fn duplicate_rows_are_summed_not_overwritten() {
        let records = vec![rec(1, "A", 10.0), rec(1, "A", 5.0)];
        let s = aggregate(&records, &NoLabels, DEFAULT_TOP_N).unwrap();
        assert!(close(s.categories[0].total, 15.0));
        assert!(close(s.wards[0].breakdown["A"], 15.0));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let records = vec![rec(1, "LATER", 10.0), rec(1, "EARLY", 10.0)];
        let s = aggregate(&records, &NoLabels, DEFAULT_TOP_N).unwrap();
        // "LATER" appeared first in the input, so it wins the tie.
        assert_eq!(s.categories[0].category, "LATER");
        assert_eq!(s.categories[1].category, "EARLY");
        assert_eq!(s.dominant.as_ref().unwrap().category, "LATER");
    }

    #[test]
    fn diversity_uses_full_set_not_truncated() {
        let records = vec![
            rec(1, "A", 50.0),
            rec(1, "B", 30.0),
            rec(1, "C", 10.0),
            rec(1, "D", 10.0),
        ];
        let truncated = aggregate(&records, &NoLabels, 1).unwrap();
        let full = aggregate(&records, &NoLabels, DEFAULT_TOP_N).unwrap();
        assert!(close(truncated.diversity_index, full.diversity_index));
        let expected = 1.0 - (0.5_f64.powi(2) + 0.3_f64.powi(2) + 0.1_f64.powi(2) + 0.1_f64.powi(2));
        assert!(close(full.diversity_index, expected));
    }

    #[test]
    fn ward_breakdown_uses_ward_local_ranking() {
        // Globally C dominates, but ward 1 never saw C; its breakdown and
        // dominant come from its own rows only.
        let records = vec![
            rec(1, "A", 5.0),
            rec(1, "B", 3.0),
            rec(2, "C", 100.0),
        ];
        let s = aggregate(&records, &NoLabels, 1).unwrap();
        let w1 = &s.wards[0];
        assert_eq!(w1.dominant_category, "A");
        assert!(w1.breakdown.contains_key("A"));
        assert!(!w1.breakdown.contains_key("C"));
        assert!(close(w1.breakdown[OTHER_KEY], 3.0));
    }

    #[test]
    fn absent_category_stays_absent_from_ward_map() {
        let records = vec![rec(1, "A", 5.0), rec(2, "B", 7.0), rec(2, "A", 0.0)];
        let s = aggregate(&records, &NoLabels, DEFAULT_TOP_N).unwrap();
        // Ward 1 has no B record at all: absent, not zero.
        assert!(!s.wards[0].breakdown.contains_key("B"));
        // Ward 2 has an explicit zero A record: present at 0.
        assert!(close(s.wards[1].breakdown["A"], 0.0));
    }

    #[test]
    fn labels_fall_back_to_raw_key() {
        use std::collections::BTreeMap;
        let mut dict = BTreeMap::new();
        dict.insert("A".to_string(), "Alpha".to_string());
        let records = vec![rec(1, "A", 1.0), rec(1, "UNLISTED", 1.0)];
        let s = aggregate(&records, &dict, DEFAULT_TOP_N).unwrap();
        let by_key = |k: &str| s.categories.iter().find(|c| c.category == k).unwrap();
        assert_eq!(by_key("A").label, "Alpha");
        assert_eq!(by_key("UNLISTED").label, "UNLISTED");
    }

    #[test]
    fn all_zero_records_behave_like_no_data() {
        let records = vec![rec(1, "A", 0.0), rec(2, "B", 0.0)];
        let s = aggregate(&records, &NoLabels, DEFAULT_TOP_N).unwrap();
        assert!(s.is_empty());
        assert!(s.dominant.is_none());
        assert!(s.categories.iter().all(|c| c.percentage_of_grand_total == 0.0));
        assert_eq!(s.diversity_index, 0.0);
        // Wards still exist with zero shares, deterministic dominant key.
        assert_eq!(s.wards[0].dominant_share_percent, 0.0);
    }
}
