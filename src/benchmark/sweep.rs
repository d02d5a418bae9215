//! Thread sweep driver: repeated solves over a geometric sequence of thread counts

use crate::algorithm::checker::check_correctness;
use crate::algorithm::solver::{DynamicProgramming, SolverConfig};
use crate::io::configuration::{DEFAULT_MAX_THREADS, DEFAULT_MIN_THREADS, DEFAULT_REPETITIONS};
use crate::io::error::{Result, invalid_parameter};
use crate::model::{ProblemInstance, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Timing and correctness for one (instance, thread count) pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkRecord {
    /// Instance file the record belongs to
    pub instance_path: PathBuf,
    /// Whether every repetition produced a correct solution
    pub correct: bool,
    /// Number of items in the instance
    pub item_count: usize,
    /// Worker count used for the fill
    pub thread_count: usize,
    /// Mean wall-clock solve time over all repetitions
    pub average_duration: Duration,
}

impl BenchmarkRecord {
    /// Mean solve time in whole milliseconds
    pub fn average_duration_ms(&self) -> u128 {
        self.average_duration.as_millis()
    }
}

/// Aggregate result of sweeping one instance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    /// True only if all repetitions at all thread counts were correct
    pub correct: bool,
    /// Sum of all timed solves
    pub total_duration: Duration,
}

/// Sweep parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreadSweep {
    repetitions: usize,
    min_threads: usize,
    max_threads: usize,
    prune_dominated: bool,
}

impl Default for ThreadSweep {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            min_threads: DEFAULT_MIN_THREADS,
            max_threads: DEFAULT_MAX_THREADS,
            prune_dominated: false,
        }
    }
}

impl ThreadSweep {
    /// Create a validated sweep
    ///
    /// # Errors
    ///
    /// Returns an error if `repetitions` or `min_threads` is zero,
    /// `repetitions` does not fit in `u32`, or `min_threads` exceeds
    /// `max_threads`
    pub fn new(repetitions: usize, min_threads: usize, max_threads: usize) -> Result<Self> {
        if repetitions == 0 {
            return Err(invalid_parameter(
                "repetitions",
                &repetitions,
                &"must be at least 1",
            ));
        }
        if u32::try_from(repetitions).is_err() {
            return Err(invalid_parameter(
                "repetitions",
                &repetitions,
                &format!("must not exceed {}", u32::MAX),
            ));
        }
        if min_threads == 0 {
            return Err(invalid_parameter(
                "min_threads",
                &min_threads,
                &"must be at least 1",
            ));
        }
        if min_threads > max_threads {
            return Err(invalid_parameter(
                "max_threads",
                &max_threads,
                &format!("must not be below min_threads ({min_threads})"),
            ));
        }

        Ok(Self {
            repetitions,
            min_threads,
            max_threads,
            prune_dominated: false,
        })
    }

    /// Enable or disable dominance pruning for every solve
    #[must_use]
    pub const fn with_pruning(mut self, prune_dominated: bool) -> Self {
        self.prune_dominated = prune_dominated;
        self
    }

    /// Repetitions per thread count
    pub const fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Thread counts `min, 2·min, 4·min, …` up to and including `max`
    pub fn thread_counts(&self) -> impl Iterator<Item = usize> + use<> {
        let max = self.max_threads;
        std::iter::successors(Some(self.min_threads), |&threads| threads.checked_mul(2))
            .take_while(move |&threads| threads <= max)
    }

    /// Run the sweep on one instance
    ///
    /// Every repetition builds a fresh engine for its thread count; engine
    /// construction is outside the timed section. `on_record` receives one
    /// record per thread count as soon as that thread count is finished.
    ///
    /// # Errors
    ///
    /// Returns an error if an engine cannot be built or a table cannot be
    /// allocated
    pub fn run<F>(
        &self,
        path: &Path,
        instance: &ProblemInstance,
        expected: Value,
        mut on_record: F,
    ) -> Result<SweepOutcome>
    where
        F: FnMut(&BenchmarkRecord) -> Result<()>,
    {
        let mut outcome = SweepOutcome {
            correct: true,
            total_duration: Duration::ZERO,
        };

        for threads in self.thread_counts() {
            let mut correct = true;
            let mut elapsed = Duration::ZERO;

            for repetition in 0..self.repetitions {
                let engine = DynamicProgramming::new(SolverConfig {
                    threads,
                    prune_dominated: self.prune_dominated,
                })?;
                let (solution, duration) = engine.run_timed(instance)?;

                if !check_correctness(instance, expected, &solution) {
                    debug!(threads, repetition, "incorrect solution");
                    correct = false;
                }
                elapsed += duration;
            }

            outcome.correct &= correct;
            outcome.total_duration += elapsed;

            let record = BenchmarkRecord {
                instance_path: path.to_path_buf(),
                correct,
                item_count: instance.item_count(),
                thread_count: threads,
                average_duration: u32::try_from(self.repetitions)
                    .ok()
                    .and_then(|repetitions| elapsed.checked_div(repetitions))
                    .unwrap_or_default(),
            };
            debug!(
                threads,
                correct,
                average_ms = record.average_duration_ms() as u64,
                "thread count finished"
            );
            on_record(&record)?;
        }

        Ok(outcome)
    }
}
