//! CLI command definitions
//!
//! Defines the clap commands for the report generator.

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the email report from the test results (default)
    Generate(GenerateArgs),

    /// Print the parsed scenario records as JSON without writing a report
    Inspect(InspectArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate(GenerateArgs::default())
    }
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Test results document (default: test-results.json)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Report file to write (default: email-body.txt)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Configuration file (default: platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fail after writing the report if the results cannot be parsed
    #[arg(long)]
    pub strict: bool,

    /// Also print the report to stdout
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args, Default)]
pub struct InspectArgs {
    /// Test results document (default: test-results.json)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Configuration file (default: platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
