//! Loader for kplib-style instance files
//!
//! Layout: item count `n`, capacity, then `n` pairs of `value weight`, all
//! whitespace separated. Tokens after the last pair are ignored.

use crate::io::error::{Result, file_system, invalid_instance};
use crate::model::{Item, ProblemInstance};
use std::path::Path;
use std::str::SplitAsciiWhitespace;

/// Read and parse an instance file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid instance
pub fn read_kplib(path: &Path) -> Result<ProblemInstance> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| file_system(path, "read instance", source))?;
    parse_kplib(&text, path)
}

/// Parse instance text; `path` is only used for error reporting
///
/// # Errors
///
/// Returns an error on premature end of input or a token that is not a
/// non-negative integer
pub fn parse_kplib(text: &str, path: &Path) -> Result<ProblemInstance> {
    let mut tokens = Tokens {
        inner: text.split_ascii_whitespace(),
        path,
    };

    let item_count: usize = tokens.next_number("item count")?;
    let capacity = tokens.next_number("capacity")?;

    // The declared count is untrusted; never reserve more than the text holds
    let mut items = Vec::with_capacity(item_count.min(text.len() / 4));
    for index in 0..item_count {
        let value = tokens.next_number_at("value", index)?;
        let weight = tokens.next_number_at("weight", index)?;
        items.push(Item::new(weight, value));
    }

    Ok(ProblemInstance::new(items, capacity))
}

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    path: &'a Path,
}

impl Tokens<'_> {
    fn next_number<T: std::str::FromStr>(&mut self, field: &str) -> Result<T> {
        let token = self.inner.next().ok_or_else(|| {
            invalid_instance(self.path, &format!("unexpected end of input reading {field}"))
        })?;
        token.parse().ok().ok_or_else(|| {
            invalid_instance(self.path, &format!("{field} '{token}' is not a non-negative integer"))
        })
    }

    fn next_number_at<T: std::str::FromStr>(&mut self, field: &str, index: usize) -> Result<T> {
        self.next_number(&format!("{field} of item {index}"))
    }
}
