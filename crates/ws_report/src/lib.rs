//! ws_report — Pure offline narrator for aggregation summaries.
//!
//! Determinism rules:
//! - No network, no I/O here. Callers supply the [`ws_algo::Summary`] and a
//!   template set already in-memory.
//! - Paragraph order is fixed: overall → dominance → secondary categories →
//!   ward variation → caller-supplied indicators → closing.
//! - Number/percent tokens are formatted by `ws_core::format` *before*
//!   template substitution; templates only place text.
//!
//! Template substitution uses minijinja; template sets are configuration
//! (built-in defaults per locale, overridable per dataset).

#![forbid(unsafe_code)]

use core::fmt;

pub mod narrate;
pub mod templates;

#[cfg(feature = "render_json")]
pub mod render_json;

pub use narrate::{describe, DominanceTier, IndicatorParagraph};
#[cfg(feature = "render_json")]
pub use render_json::render_json;
pub use templates::TemplateSet;

/// Narration errors. Missing category labels never reach this layer (they
/// are resolved to raw keys during aggregation); what can fail here is the
/// template configuration itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReportError {
    /// A required template key is absent from the supplied set.
    MissingTemplate(String),
    /// Template syntax/substitution failure (bad configuration).
    Render(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::MissingTemplate(key) => write!(f, "missing template: {key}"),
            ReportError::Render(msg) => write!(f, "template render error: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}
