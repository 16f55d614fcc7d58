//! crates/ws_core/src/format.rs
//! Localized numeral/percentage formatting helpers.
//!
//! Deterministic, pure string work: values are rendered through `format!`
//! once and then massaged textually (grouping, one-decimal truncation, digit
//! substitution). No locale data is loaded at runtime.

use crate::locale::Locale;

/// Devanagari digits indexed by their ASCII value.
const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Substitute ASCII digits for the locale's numerals. Non-digit characters
/// (separators, signs, the percent mark) pass through unchanged.
pub fn localize_digits(s: &str, locale: Locale) -> String {
    match locale {
        Locale::En => s.to_string(),
        Locale::Ne => s
            .chars()
            .map(|c| match c {
                '0'..='9' => DEVANAGARI_DIGITS[(c as usize) - ('0' as usize)],
                other => other,
            })
            .collect(),
    }
}

/// Render a count for prose/tables: integral values drop the decimal part,
/// digits are grouped in threes with commas, then localized.
///
/// Counts are non-negative by construction (`records::clamp_value`); a
/// negative input would only arise from a caller bug and is rendered as 0.
pub fn format_count(n: f64, locale: Locale) -> String {
    let n = if n.is_finite() && n > 0.0 { n } else { 0.0 };
    let rendered = if (n - n.round()).abs() < 1e-9 {
        group_thousands(&format!("{:.0}", n.round()))
    } else {
        // Non-integral totals exist in a few datasets (area, averages).
        let s = format!("{n:.1}");
        let (int_part, dec_part) = s.split_once('.').unwrap_or((s.as_str(), "0"));
        format!("{}.{}", group_thousands(int_part), dec_part)
    };
    localize_digits(&rendered, locale)
}

/// One-decimal percent string, e.g. `"६५.०%"` / `"65.0%"`.
pub fn format_percent_1dp(p: f64, locale: Locale) -> String {
    let p = if p.is_finite() { p } else { 0.0 };
    localize_digits(&format!("{p:.1}%"), locale)
}

/// Localized ward designation, e.g. `"वडा नं. ५"` / `"Ward No. 5"`.
pub fn format_ward(ward_number: u32, locale: Locale) -> String {
    let digits = localize_digits(&ward_number.to_string(), locale);
    match locale {
        Locale::Ne => format!("वडा नं. {digits}"),
        Locale::En => format!("Ward No. {digits}"),
    }
}

/// Group an unsigned integer string in threes with commas.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_substitution() {
        assert_eq!(localize_digits("1234567890", Locale::Ne), "१२३४५६७८९०");
        assert_eq!(localize_digits("42.5%", Locale::Ne), "४२.५%");
        assert_eq!(localize_digits("42.5%", Locale::En), "42.5%");
    }

    #[test]
    fn counts_group_and_localize() {
        assert_eq!(format_count(1234567.0, Locale::En), "1,234,567");
        assert_eq!(format_count(1234567.0, Locale::Ne), "१,२३४,५६७");
        assert_eq!(format_count(0.0, Locale::En), "0");
        assert_eq!(format_count(-3.0, Locale::En), "0");
    }

    #[test]
    fn fractional_counts_keep_one_decimal() {
        assert_eq!(format_count(12.34, Locale::En), "12.3");
        assert_eq!(format_count(1234.56, Locale::En), "1,234.6");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(format_percent_1dp(65.0, Locale::En), "65.0%");
        assert_eq!(format_percent_1dp(33.333333, Locale::En), "33.3%");
        assert_eq!(format_percent_1dp(90.0, Locale::Ne), "९०.०%");
    }

    #[test]
    fn ward_designation() {
        assert_eq!(format_ward(5, Locale::Ne), "वडा नं. ५");
        assert_eq!(format_ward(12, Locale::En), "Ward No. 12");
    }
}
