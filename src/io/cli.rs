//! Command-line interface for sweeping an instance list across thread counts

use crate::algorithm::solver::ALGORITHM_FAMILY;
use crate::algorithm::table::SolutionTable;
use crate::benchmark::sweep::ThreadSweep;
use crate::io::configuration::{
    ALGORITHM_NAME, DEFAULT_MAX_THREADS, DEFAULT_MIN_THREADS, DEFAULT_REPETITIONS, EXIT_MANIFEST,
    EXIT_USAGE,
};
use crate::io::error::{AlgorithmError, Result};
use crate::io::kplib::read_kplib;
use crate::io::manifest::load_manifest;
use crate::io::progress::ProgressManager;
use crate::io::report::{Reporter, RunSummary};
use clap::Parser;
use clap::error::ErrorKind;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "knapsweep")]
#[command(
    author,
    version,
    about = "Benchmark a row-parallel dynamic programming knapsack solver across thread counts"
)]
/// Command-line arguments for the benchmark tool
pub struct Cli {
    /// Instance list: `<path> <bnb> <dyn> <tl> <optimum>` tuples
    #[arg(value_name = "INSTANCE_LIST")]
    pub instance_list: PathBuf,

    /// Solves per thread count
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    pub repetitions: usize,

    /// First thread count of the sweep
    #[arg(long, default_value_t = DEFAULT_MIN_THREADS)]
    pub min_threads: usize,

    /// Largest thread count of the sweep (counts double from the minimum)
    #[arg(long, default_value_t = DEFAULT_MAX_THREADS)]
    pub max_threads: usize,

    /// Remove items that cannot affect the optimum before filling the table
    #[arg(short, long)]
    pub prune: bool,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the progress bar should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the validated sweep described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the sweep parameters are inconsistent
    pub fn sweep(&self) -> Result<ThreadSweep> {
        ThreadSweep::new(self.repetitions, self.min_threads, self.max_threads)
            .map(|sweep| sweep.with_pruning(self.prune))
    }
}

/// Exit code for an argument parsing failure
///
/// Help and version requests are not failures.
pub fn usage_exit_code(error: &clap::Error) -> u8 {
    match error.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => EXIT_USAGE,
    }
}

/// Exit code for an error that aborted the run
pub const fn exit_code(error: &AlgorithmError) -> u8 {
    match error {
        AlgorithmError::ManifestUnavailable { .. } => EXIT_MANIFEST,
        _ => EXIT_USAGE,
    }
}

/// Drives a whole benchmark run: instance list, per-instance sweeps, summary
pub struct BenchmarkRunner {
    cli: Cli,
    progress: ProgressManager,
}

impl BenchmarkRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self { cli, progress }
    }

    /// Run every applicable instance of the list and report the results
    ///
    /// Unreadable or malformed instances and instances whose table is not
    /// addressable are skipped with a warning. Incorrect solutions are
    /// reported. Neither aborts the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the instance list
    /// cannot be opened, a solver cannot be built or output fails
    pub fn run<O: Write, D: Write>(&self, reporter: &mut Reporter<O, D>) -> Result<RunSummary> {
        let sweep = self.cli.sweep()?;
        let entries = load_manifest(&self.cli.instance_list, ALGORITHM_FAMILY)?;
        let thread_counts = sweep.thread_counts().count();

        reporter.header(ALGORITHM_NAME, ALGORITHM_FAMILY, entries.len())?;
        self.progress.initialize(entries.len(), thread_counts);

        let mut summary = RunSummary::default();
        for entry in &entries {
            // Oversized tables are known before anything is allocated
            let loaded = read_kplib(&entry.path).and_then(|instance| {
                SolutionTable::check_dimensions(instance.item_count(), instance.capacity)
                    .map(|_| instance)
            });
            let instance = match loaded {
                Ok(instance) => instance,
                Err(error) => {
                    self.progress
                        .suspend(|| reporter.skipped(&entry.path, &error))?;
                    self.progress.skip_instance(thread_counts);
                    continue;
                }
            };

            summary.instances += 1;
            let number = summary.instances;
            self.progress.start_instance(&entry.path);
            self.progress.suspend(|| reporter.instance_started(number))?;

            let outcome = sweep.run(
                &entry.path,
                &instance,
                entry.expected_value,
                |record| {
                    self.progress.record_done();
                    reporter.record(record)
                },
            )?;

            if outcome.correct {
                summary.correct += 1;
            }
            summary.total_duration += outcome.total_duration;
            self.progress
                .suspend(|| reporter.instance_finished(number, outcome.correct))?;
        }

        self.progress.finish();
        reporter.summary(&summary)?;
        Ok(summary)
    }
}
