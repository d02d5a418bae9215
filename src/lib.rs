//! Exact 0/1 knapsack solving with a row-parallel dynamic programming table
//!
//! The solution table is filled one row at a time; all columns of a row are
//! computed concurrently on a dedicated thread pool. A benchmark driver sweeps
//! a geometric sequence of thread counts over a list of instances and checks
//! every produced solution against a known optimum.

#![forbid(unsafe_code)]

/// Solution table, fill strategies, engine, pruning and correctness checking
pub mod algorithm;
/// Thread sweep driver and instance generation
pub mod benchmark;
/// Input/output operations and error handling
pub mod io;
/// Items, instances and solutions
pub mod model;

pub use io::error::{AlgorithmError, Result};
