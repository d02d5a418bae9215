//! Error types for loading, solving and benchmarking

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver and benchmark operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Instance list could not be opened or read
    ManifestUnavailable {
        /// Path to the instance list
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Instance file is structurally invalid
    ///
    /// Occurs on premature end of input or a token that is not a
    /// non-negative integer.
    InvalidInstance {
        /// Path to the instance file
        path: PathBuf,
        /// Description of what's wrong with the file
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Solution table dimensions exceed the addressable size
    TableTooLarge {
        /// Requested row count
        rows: usize,
        /// Requested column count (capacity + 1)
        columns: u64,
    },

    /// Worker pool for the row-parallel fill could not be created
    ThreadPool {
        /// Requested worker count
        threads: usize,
        /// Underlying pool construction error
        source: rayon::ThreadPoolBuildError,
    },

    /// Writing to the record or diagnostic stream failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ManifestUnavailable { path, source } => {
                write!(f, "Unable to open instance list '{}': {source}", path.display())
            }
            Self::InvalidInstance { path, reason } => {
                write!(f, "Invalid instance '{}': {reason}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TableTooLarge { rows, columns } => {
                write!(f, "Solution table of {rows}x{columns} cells cannot be allocated")
            }
            Self::ThreadPool { threads, source } => {
                write!(f, "Failed to build pool with {threads} threads: {source}")
            }
            Self::Output { source } => {
                write!(f, "Failed to write output: {source}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. }
            | Self::ManifestUnavailable { source, .. }
            | Self::Output { source } => Some(source),
            Self::ThreadPool { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid instance error
pub fn invalid_instance(path: impl Into<PathBuf>, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidInstance {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> AlgorithmError {
    AlgorithmError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
