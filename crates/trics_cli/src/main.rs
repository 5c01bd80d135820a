//! CLI smoke entry point.
//!
//! # Responsibility
//! - Bootstrap a `trics_core` session from an optional JSON settings file.
//! - Print a deterministic summary of what was loaded.
//!
//! Usage: `trics_cli [settings.json] [absolute-log-dir]`

use std::process::ExitCode;
use trics_core::{CoreContext, CoreSettings, LoadError, LoadSummary};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match load_settings(&path) {
            Ok(settings) => settings,
            Err(message) => {
                eprintln!("{message}");
                return ExitCode::FAILURE;
            }
        },
        None => CoreSettings::default(),
    };

    if let Some(log_dir) = args.next() {
        if let Err(err) = trics_core::init_logging(settings.effective_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("trics_core version={}", trics_core::core_version());
    let (context, report) = CoreContext::bootstrap(settings);
    println!("preferences {}", describe(&report.preferences));
    match &report.language {
        Some(outcome) => println!("language {}", describe(outcome)),
        None => println!("language skipped"),
    }
    println!(
        "preference_groups={}",
        context.preferences().group_ids().join(",")
    );
    ExitCode::SUCCESS
}

fn load_settings(path: &str) -> Result<CoreSettings, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read settings `{path}`: {err}"))?;
    CoreSettings::from_json_str(&raw).map_err(|err| format!("invalid settings `{path}`: {err}"))
}

fn describe(outcome: &Result<LoadSummary, LoadError>) -> String {
    match outcome {
        Ok(summary) => format!("ok entries={} skipped={}", summary.entries, summary.skipped),
        Err(err) => format!("error code={} details={err}", err.code()),
    }
}
