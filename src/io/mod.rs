/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// kplib instance file loader
pub mod kplib;
/// Instance list loader
pub mod manifest;
/// Terminal progress display
pub mod progress;
/// Record and diagnostic stream output
pub mod report;
