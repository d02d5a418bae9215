//! Benchmark constants and runtime configuration defaults

// Thread sweep defaults
/// Repetitions per thread count
pub const DEFAULT_REPETITIONS: usize = 5;
/// First thread count of the sweep
pub const DEFAULT_MIN_THREADS: usize = 1;
/// Upper bound of the sweep (inclusive)
pub const DEFAULT_MAX_THREADS: usize = 32;

// Record stream format
/// Field separator of the record stream
pub const CSV_SEPARATOR: char = ',';
/// Column names of the record stream header
pub const CSV_COLUMNS: [&str; 5] = ["inst", "correct", "n", "p", "t"];

/// Algorithm name reported in the record stream banner (no whitespace)
pub const ALGORITHM_NAME: &str = "RowParallelDP(rayon)";

// Process exit codes
/// No or invalid arguments given
pub const EXIT_USAGE: u8 = 1;
/// Instance list could not be opened
pub const EXIT_MANIFEST: u8 = 2;

// Random instance generation defaults
/// Fixed seed for reproducible instance generation
pub const DEFAULT_SEED: u64 = 42;
/// Largest generated item weight
pub const DEFAULT_MAX_WEIGHT: u64 = 100;
/// Largest generated item value
pub const DEFAULT_MAX_VALUE: u64 = 100;

/// Progress bar width in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
