// crates/ws_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, CLI parsing, and the
// load → aggregate → narrate run path. Everything below the argument layer
// is pure; the only side effects are file reads and stdout/stderr.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Bad arguments or input that fails shape/domain validation.
    pub const VALIDATION: i32 = 2;
    /// Filesystem-level failures.
    pub const IO: i32 = 4;
}

use std::collections::BTreeMap;
use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args, OutputKind};

use ws_algo::aggregate;
use ws_core::{LabelSource, NoLabels};
use ws_report::{describe, render_json, IndicatorParagraph, TemplateSet};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Validation(String),
    Io(String),
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("wardstats: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            match &e {
                MainError::Validation(msg) => eprintln!("wardstats: invalid input: {msg}"),
                MainError::Io(msg) => eprintln!("wardstats: io error: {msg}"),
            }
            map_error(&e)
        }
    };

    ExitCode::from(rc as u8)
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Io(_) => IO,
    }
}

/// Translate ws_io::IoError into MainError buckets for exit-code mapping.
fn map_wsio_err(e: ws_io::IoError) -> MainError {
    use ws_io::IoError::*;
    match e {
        Json { pointer, msg } => MainError::Validation(format!("json {pointer}: {msg}")),
        Invalid(m) => MainError::Validation(m),
        Read(m) => MainError::Io(m),
    }
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let records = ws_io::load_records(&args.records).map_err(map_wsio_err)?;

    let labels: Option<BTreeMap<String, String>> = match &args.labels {
        Some(path) => Some(ws_io::load_labels(path).map_err(map_wsio_err)?),
        None => None,
    };
    let label_source: &dyn LabelSource = match &labels {
        Some(dict) => dict,
        None => &NoLabels,
    };

    let summary = aggregate(&records, label_source, args.top_n)
        .map_err(|e| MainError::Validation(e.to_string()))?;

    if !args.quiet && summary.is_empty() {
        eprintln!("wardstats: note: input sums to zero; emitting the no-data sentence");
    }

    match args.output {
        OutputKind::Json => {
            let json = render_json(&summary).map_err(|e| MainError::Validation(e.to_string()))?;
            println!("{json}");
        }
        OutputKind::Text => {
            let mut templates = TemplateSet::builtin(args.locale);
            if let Some(path) = &args.templates {
                let overrides = ws_io::load_templates(path).map_err(map_wsio_err)?;
                templates = templates.merged_with(&TemplateSet::from_map(overrides));
            }

            let indicators: Vec<IndicatorParagraph> = match &args.indicators {
                Some(path) => ws_io::load_indicators(path)
                    .map_err(map_wsio_err)?
                    .into_iter()
                    .map(|(template, values)| IndicatorParagraph { template, values })
                    .collect(),
                None => Vec::new(),
            };

            let text = describe(&summary, &templates, args.locale, &indicators)
                .map_err(|e| MainError::Validation(e.to_string()))?;
            println!("{text}");
        }
    }

    Ok(())
}
