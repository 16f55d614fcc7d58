//! crates/ws_io/src/loader.rs
//! JSON file loaders: records, label dictionaries, template sets, indicator
//! values. Each loader stages read → parse → domain-check and reports
//! failures through [`IoError`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use ws_core::Record;

use crate::{looks_like_url_strict, IoError, IoResult};

/// Input files are small exports, not bulk dumps. The cap guards against a
/// mistaken path (e.g. a database file) being fed to the CLI.
pub const MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

/// Wire shape of one record row. `value` may be missing or null (treated as
/// 0 downstream); `ward` is validated as 1-based here so a bad export fails
/// loudly at load time, not deep in aggregation.
#[derive(Debug, Deserialize)]
struct RecordRow {
    ward: u32,
    category: String,
    #[serde(default)]
    value: Option<f64>,
}

fn read_checked(path: &Path) -> IoResult<String> {
    let display = path.display().to_string();
    if looks_like_url_strict(&display) {
        return Err(IoError::Invalid(format!("refusing URL-like path: {display}")));
    }
    let meta = fs::metadata(path)?;
    if meta.len() > MAX_INPUT_BYTES {
        return Err(IoError::Invalid(format!(
            "input file too large: {} bytes (max {MAX_INPUT_BYTES})",
            meta.len()
        )));
    }
    Ok(fs::read_to_string(path)?)
}

/// Load ward records from a JSON array of `{ "ward": n, "category": "KEY",
/// "value": x }` rows.
pub fn load_records(path: &Path) -> IoResult<Vec<Record>> {
    let text = read_checked(path)?;
    let rows: Vec<RecordRow> = serde_json::from_str(&text)?;
    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let record = Record::new(row.ward, row.category, row.value.unwrap_or(0.0))
            .map_err(|e| IoError::Invalid(format!("/{i}/ward: {e}")))?;
        out.push(record);
    }
    Ok(out)
}

/// Load a `category key → display label` dictionary from a JSON object.
pub fn load_labels(path: &Path) -> IoResult<BTreeMap<String, String>> {
    let text = read_checked(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Load a template set (slot key → template string) from a JSON object.
/// Callers overlay this on the built-in defaults.
pub fn load_templates(path: &Path) -> IoResult<BTreeMap<String, String>> {
    let text = read_checked(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Wire shape of one indicator paragraph: a template slot name plus
/// precomputed substitution values.
#[derive(Debug, Deserialize)]
struct IndicatorRow {
    template: String,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Load indicator paragraphs from a JSON array of
/// `{ "template": "slot", "values": { ... } }` entries.
pub fn load_indicators(path: &Path) -> IoResult<Vec<(String, BTreeMap<String, String>)>> {
    let text = read_checked(path)?;
    let rows: Vec<IndicatorRow> = serde_json::from_str(&text)?;
    Ok(rows.into_iter().map(|r| (r.template, r.values)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn temp_json(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn records_load_with_clamping_and_defaults() {
        let f = temp_json(
            r#"[
                {"ward": 1, "category": "HINDU", "value": 120},
                {"ward": 1, "category": "BUDDHIST", "value": -3},
                {"ward": 2, "category": "HINDU"}
            ]"#,
        );
        let records = load_records(f.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].value, 120.0);
        assert_eq!(records[1].value, 0.0, "negative clamps to zero");
        assert_eq!(records[2].value, 0.0, "missing value reads as zero");
    }

    #[test]
    fn ward_zero_is_rejected_at_load_time() {
        let f = temp_json(r#"[{"ward": 0, "category": "X", "value": 1}]"#);
        let err = load_records(f.path()).unwrap_err();
        assert!(matches!(err, IoError::Invalid(_)), "{err}");
    }

    #[test]
    fn malformed_json_reports_json_error() {
        let f = temp_json("[{");
        let err = load_records(f.path()).unwrap_err();
        assert!(matches!(err, IoError::Json { .. }), "{err}");
    }

    #[test]
    fn url_paths_are_refused() {
        let err = load_records(Path::new("https://example.com/records.json")).unwrap_err();
        assert!(matches!(err, IoError::Invalid(_)), "{err}");
    }

    #[test]
    fn labels_and_templates_load_as_maps() {
        let f = temp_json(r#"{"HINDU": "हिन्दू", "OTHER": "अन्य"}"#);
        let labels = load_labels(f.path()).unwrap();
        assert_eq!(labels["HINDU"], "हिन्दू");

        let t = temp_json(r#"{"closing": "Custom closing."}"#);
        let templates = load_templates(t.path()).unwrap();
        assert_eq!(templates["closing"], "Custom closing.");
    }

    #[test]
    fn indicators_load_with_values() {
        let f = temp_json(
            r#"[{"template": "indicator_disease_split", "values": {"disease": "70.0%"}}]"#,
        );
        let inds = load_indicators(f.path()).unwrap();
        assert_eq!(inds.len(), 1);
        assert_eq!(inds[0].0, "indicator_disease_split");
        assert_eq!(inds[0].1["disease"], "70.0%");
    }
}
