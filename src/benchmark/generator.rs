//! Seeded random instance generation for tests and benchmarks

use crate::io::configuration::{DEFAULT_MAX_VALUE, DEFAULT_MAX_WEIGHT, DEFAULT_SEED};
use crate::model::{Item, ProblemInstance, Value, Weight};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Reproducible source of random knapsack instances
///
/// Weights are drawn from `1..=max_weight` and values from `0..=max_value`.
pub struct InstanceGenerator {
    rng: StdRng,
    max_weight: Weight,
    max_value: Value,
}

impl Default for InstanceGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl InstanceGenerator {
    /// Create a generator with default item bounds
    pub fn new(seed: u64) -> Self {
        Self::with_bounds(seed, DEFAULT_MAX_WEIGHT, DEFAULT_MAX_VALUE)
    }

    /// Create a generator with explicit item bounds
    ///
    /// A `max_weight` of zero is raised to one.
    pub fn with_bounds(seed: u64, max_weight: Weight, max_value: Value) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_weight: max_weight.max(1),
            max_value,
        }
    }

    /// Draw one item
    pub fn item(&mut self) -> Item {
        Item::new(
            self.rng.random_range(1..=self.max_weight),
            self.rng.random_range(0..=self.max_value),
        )
    }

    /// Draw an instance with `item_count` items and a fixed capacity
    pub fn instance(&mut self, item_count: usize, capacity: Weight) -> ProblemInstance {
        let items = (0..item_count).map(|_| self.item()).collect();
        ProblemInstance::new(items, capacity)
    }

    /// Draw an instance whose capacity is a fraction of the total weight
    ///
    /// `ratio` is clamped to `0.0..=1.0`.
    pub fn instance_with_ratio(&mut self, item_count: usize, ratio: f64) -> ProblemInstance {
        let items: Vec<Item> = (0..item_count).map(|_| self.item()).collect();
        let total: Weight = items.iter().map(|item| item.weight).sum();
        let capacity = (total as f64 * ratio.clamp(0.0, 1.0)).floor() as Weight;
        ProblemInstance::new(items, capacity)
    }
}
