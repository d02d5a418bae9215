//! Record stream and diagnostic stream output
//!
//! Records go to one sink as CSV-like lines; progress text, warnings and the
//! run summary go to a separate diagnostic sink so the two never interleave.

use crate::algorithm::solver::AlgorithmFamily;
use crate::benchmark::sweep::BenchmarkRecord;
use crate::io::configuration::{CSV_COLUMNS, CSV_SEPARATOR};
use crate::io::error::{AlgorithmError, Result};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Totals over a whole run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Instances that were loaded and swept
    pub instances: usize,
    /// Instances whose every solve was correct
    pub correct: usize,
    /// Sum of all timed solves
    pub total_duration: Duration,
}

/// Writes benchmark output to a record sink and a diagnostic sink
pub struct Reporter<O: Write, D: Write> {
    records: O,
    diagnostics: D,
}

impl<O: Write, D: Write> Reporter<O, D> {
    /// Create a reporter over the two sinks
    pub const fn new(records: O, diagnostics: D) -> Self {
        Self {
            records,
            diagnostics,
        }
    }

    /// Consume the reporter, returning both sinks
    pub fn into_inner(self) -> (O, D) {
        (self.records, self.diagnostics)
    }

    /// Write the banner comment and the column header
    ///
    /// # Errors
    ///
    /// Returns an error if the record sink fails
    pub fn header(&mut self, name: &str, family: AlgorithmFamily, instances: usize) -> Result<()> {
        writeln!(self.records, "# {name} {family} {instances}")?;
        writeln!(
            self.records,
            "{}",
            CSV_COLUMNS.join(CSV_SEPARATOR.to_string().as_str())
        )?;
        Ok(())
    }

    /// Write one record line
    ///
    /// # Errors
    ///
    /// Returns an error if the record sink fails
    pub fn record(&mut self, record: &BenchmarkRecord) -> Result<()> {
        let sep = CSV_SEPARATOR;
        writeln!(
            self.records,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            record.instance_path.display(),
            u8::from(record.correct),
            record.item_count,
            record.thread_count,
            record.average_duration_ms(),
        )?;
        Ok(())
    }

    /// Announce the start of the `number`-th loaded instance (1-based)
    ///
    /// # Errors
    ///
    /// Returns an error if the diagnostic sink fails
    pub fn instance_started(&mut self, number: usize) -> Result<()> {
        writeln!(self.diagnostics, "Running Instance {number} ... ")?;
        Ok(())
    }

    /// Report the aggregated verdict of one instance
    ///
    /// # Errors
    ///
    /// Returns an error if the diagnostic sink fails
    pub fn instance_finished(&mut self, number: usize, correct: bool) -> Result<()> {
        let verdict = if correct { "Correct" } else { "Wrong" };
        writeln!(self.diagnostics, "{verdict} solution for instance {number}")?;
        Ok(())
    }

    /// Warn about an instance that could not be loaded
    ///
    /// # Errors
    ///
    /// Returns an error if the diagnostic sink fails
    pub fn skipped(&mut self, path: &Path, reason: &AlgorithmError) -> Result<()> {
        writeln!(
            self.diagnostics,
            "Warning: Skipping invalid kplib instance: {} ({reason})",
            path.display()
        )?;
        Ok(())
    }

    /// Flush records and write the run totals
    ///
    /// # Errors
    ///
    /// Returns an error if either sink fails
    pub fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        self.records.flush()?;
        writeln!(
            self.diagnostics,
            "Solved {} out of {} correct",
            summary.correct, summary.instances
        )?;
        writeln!(
            self.diagnostics,
            "Total time for all runs: {} ms",
            summary.total_duration.as_millis()
        )?;
        self.diagnostics.flush()?;
        Ok(())
    }
}
