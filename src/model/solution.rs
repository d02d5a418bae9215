use crate::model::item::{ProblemInstance, Value, Weight};

/// Set of chosen item indices into the instance's item sequence
///
/// Indices are kept in ascending order once produced by the solver. Totals are
/// computed against an instance on demand, so a solution can be checked
/// against any instance it claims to solve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    indices: Vec<usize>,
}

impl Solution {
    /// Create an empty solution
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Wrap chosen indices as given, without sorting or deduplication
    pub const fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Chosen item indices
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Consume the solution into its index vector
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// Number of chosen items
    pub const fn len(&self) -> usize {
        self.indices.len()
    }

    /// Test whether no item was chosen
    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Add an item index
    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Test whether an item index was chosen
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Sort indices ascending
    pub fn sort(&mut self) {
        self.indices.sort_unstable();
    }

    /// Total weight of the chosen items
    ///
    /// Returns `None` if an index is out of range or the sum overflows.
    pub fn total_weight(&self, instance: &ProblemInstance) -> Option<Weight> {
        self.indices.iter().try_fold(0, |total: Weight, &index| {
            total.checked_add(instance.item(index)?.weight)
        })
    }

    /// Total value of the chosen items
    ///
    /// Returns `None` if an index is out of range or the sum overflows.
    pub fn total_value(&self, instance: &ProblemInstance) -> Option<Value> {
        self.indices.iter().try_fold(0, |total: Value, &index| {
            total.checked_add(instance.item(index)?.value)
        })
    }
}
