//! CLI entry point for the knapsack thread-scaling benchmark

use clap::Parser;
use knapsweep::io::cli::{BenchmarkRunner, Cli, exit_code, usage_exit_code};
use knapsweep::io::report::Reporter;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Allow print for fatal errors reported before or outside the reporter
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(usage_exit_code(&error));
        }
    };

    let runner = BenchmarkRunner::new(cli);
    let mut reporter = Reporter::new(std::io::stdout().lock(), std::io::stderr());

    match runner.run(&mut reporter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(exit_code(&error))
        }
    }
}
