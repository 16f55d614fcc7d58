//! crates/ws_cli/src/args.rs
//! CLI argument surface + post-parse validation.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use ws_algo::DEFAULT_TOP_N;
use ws_core::Locale;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputKind {
    /// Narrative prose (paragraphs separated by blank lines).
    Text,
    /// Summary artifact as JSON.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "wardstats",
    about = "Aggregate ward-level categorical records and render summary statistics with localized narrative text.",
    version
)]
pub struct Args {
    /// Records file: JSON array of { "ward", "category", "value" } rows.
    #[arg(long, value_name = "FILE")]
    pub records: PathBuf,

    /// Label dictionary: JSON object of category key → display string.
    #[arg(long, value_name = "FILE")]
    pub labels: Option<PathBuf>,

    /// Template overrides: JSON object of slot key → template string,
    /// overlaid on the built-in set for the locale.
    #[arg(long, value_name = "FILE")]
    pub templates: Option<PathBuf>,

    /// Indicator paragraphs: JSON array of { "template", "values" } entries.
    #[arg(long, value_name = "FILE")]
    pub indicators: Option<PathBuf>,

    /// Output locale (digits, prose, built-in templates).
    #[arg(long, default_value = "ne")]
    pub locale: Locale,

    /// Categories to keep before folding the remainder into OTHER.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Output form.
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputKind,

    /// Suppress non-essential stderr notes.
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Parse argv and apply the validations clap can't express.
pub fn parse_and_validate() -> Result<Args, String> {
    let args = Args::parse();
    if args.top_n < 1 {
        return Err(format!("--top-n must be >= 1 (got {})", args.top_n));
    }
    Ok(args)
}
