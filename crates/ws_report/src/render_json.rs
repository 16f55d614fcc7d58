//! crates/ws_report/src/render_json.rs
//! JSON artifact renderer for the summary (stable field order courtesy of
//! struct layout; ward breakdowns are BTreeMaps, so key order is stable too).

use ws_algo::Summary;

use crate::ReportError;

/// Serialize the summary artifact as JSON.
pub fn render_json(summary: &Summary) -> Result<String, ReportError> {
    serde_json::to_string_pretty(summary).map_err(|e| ReportError::Render(format!("json: {e}")))
}
