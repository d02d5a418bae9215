//! Knapsack problem data shared by the solver, loaders and checker

/// Items and problem instances
pub mod item;
/// Chosen item sets
pub mod solution;

pub use item::{Item, ProblemInstance, Value, Weight};
pub use solution::Solution;
