//! quote-report - email summary for shipping-quote end-to-end test runs
//!
//! Reads the test runner's JSON results and writes a plain-text summary of
//! each quote scenario for the CI job to send.

use clap::Parser;
use quote_report::common::logging;
use quote_report::{cli, commands::Commands};

#[derive(Parser)]
#[command(name = "quote-report", about = "Shipping-quote test report generator")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command.unwrap_or_default()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
