//! Loader for instance lists
//!
//! An instance list is a whitespace-separated sequence of 5-tuples
//! `<path> <bnb:0|1> <dyn:0|1> <tl:0|1> <expected optimum>`. Parsing stops at
//! the first incomplete or malformed tuple; everything before it is kept.

use crate::algorithm::solver::AlgorithmFamily;
use crate::io::error::{AlgorithmError, Result};
use crate::model::Value;
use std::path::{Path, PathBuf};

/// Which algorithm families an instance is marked for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Applicability {
    /// Instance is suitable for branch and bound
    pub branch_and_bound: bool,
    /// Instance is suitable for dynamic programming
    pub dynamic_programming: bool,
    /// Instance is suitable for the two-list algorithm
    pub two_list: bool,
}

impl Applicability {
    /// Test whether the given family should run this instance
    pub const fn allows(&self, family: AlgorithmFamily) -> bool {
        match family {
            AlgorithmFamily::BranchAndBound => self.branch_and_bound,
            AlgorithmFamily::DynamicProgramming => self.dynamic_programming,
            AlgorithmFamily::TwoList => self.two_list,
        }
    }
}

/// One instance list entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path to the kplib instance file
    pub path: PathBuf,
    /// Families the instance is marked for
    pub applicability: Applicability,
    /// Known optimal value of the instance
    pub expected_value: Value,
}

/// Parse every well-formed tuple up to the first malformed one
pub fn parse_manifest(text: &str) -> Vec<ManifestEntry> {
    let mut tokens = text.split_ascii_whitespace();
    let mut entries = Vec::new();

    while let Some(entry) = next_entry(&mut tokens) {
        entries.push(entry);
    }

    entries
}

fn next_entry<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<ManifestEntry> {
    let path = PathBuf::from(tokens.next()?);
    let applicability = Applicability {
        branch_and_bound: parse_flag(tokens.next()?)?,
        dynamic_programming: parse_flag(tokens.next()?)?,
        two_list: parse_flag(tokens.next()?)?,
    };
    let expected_value = tokens.next()?.parse().ok()?;

    Some(ManifestEntry {
        path,
        applicability,
        expected_value,
    })
}

fn parse_flag(token: &str) -> Option<bool> {
    match token {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

/// Load the entries of an instance list that apply to `family`
///
/// # Errors
///
/// Returns an error only if the file cannot be opened or read
pub fn load_manifest(path: &Path, family: AlgorithmFamily) -> Result<Vec<ManifestEntry>> {
    let bytes = std::fs::read(path).map_err(|source| AlgorithmError::ManifestUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    // Invalid UTF-8 only spoils the tuple it appears in
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_manifest(&text)
        .into_iter()
        .filter(|entry| entry.applicability.allows(family))
        .collect())
}
