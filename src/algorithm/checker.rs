//! Validation of candidate solutions against a known optimum

use crate::model::{ProblemInstance, Solution, Value};

/// Check a candidate solution against the instance and the expected optimum
///
/// Fails if the solution has more entries than items, references an item out
/// of range, exceeds the capacity, misses the expected value or contains an
/// index twice.
pub fn check_correctness(instance: &ProblemInstance, expected: Value, solution: &Solution) -> bool {
    if solution.len() > instance.item_count() {
        return false;
    }

    if solution
        .indices()
        .iter()
        .any(|&index| index >= instance.item_count())
    {
        return false;
    }

    match solution.total_weight(instance) {
        Some(weight) if weight <= instance.capacity => {}
        _ => return false,
    }

    if solution.total_value(instance) != Some(expected) {
        return false;
    }

    let mut sorted = solution.indices().to_vec();
    sorted.sort_unstable();
    !sorted.windows(2).any(|pair| pair.first() == pair.get(1))
}
