//! Benchmarking of the solver across thread counts

/// Random instance generation
pub mod generator;
/// Thread sweep driver and benchmark records
pub mod sweep;
