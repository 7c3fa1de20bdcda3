//! CLI command handling
//!
//! Resolves configuration, runs the report pipeline and prints the result.

use std::path::{Path, PathBuf};

use chrono::Utc;
use colored::Colorize;

use crate::commands::{Commands, GenerateArgs, InspectArgs};
use crate::common::config::Config;
use crate::common::Result;
use crate::report::{self, Synthesis};
use crate::results::load_results;

/// Dispatch a CLI command
pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Generate(args) => generate(args),
        Commands::Inspect(args) => inspect(args),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let input = args.input.unwrap_or(config.paths.input);
    let output = args.output.unwrap_or(config.paths.output);
    let strict = args.strict || config.report.strict;

    tracing::debug!(input = %input.display(), output = %output.display(), strict, "generating report");

    let synthesis = report::synthesize_loaded(load_results(&input)?, &config.fallbacks);

    let (report, parse_error) = match synthesis {
        Synthesis::NothingToReport => {
            println!("No test results found. Using default report.");
            return Ok(());
        }
        Synthesis::Report(report) => (report, None),
        Synthesis::Degraded { report, error } => {
            tracing::error!("{error}");
            (report, Some(error))
        }
    };

    let text = report::render(&report, &source_name(&input), Utc::now());
    report::write_report(&output, &text)?;

    if args.stdout {
        print!("{text}");
    }

    match parse_error {
        Some(error) if strict => Err(error),
        _ => {
            println!("{}", "Email report generated successfully".green());
            Ok(())
        }
    }
}

fn inspect(args: InspectArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let input = args.input.unwrap_or(config.paths.input);

    match report::synthesize_loaded(load_results(&input)?, &config.fallbacks) {
        Synthesis::NothingToReport => {
            println!("No test results found at {}", input.display());
            Ok(())
        }
        Synthesis::Report(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Synthesis::Degraded { error, .. } => Err(error),
    }
}

/// Name of the results file as shown in the fixed failure reports
fn source_name(input: &Path) -> String {
    input
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| input.to_path_buf())
        .display()
        .to_string()
}
