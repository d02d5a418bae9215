/// Correctness checking of produced solutions
pub mod checker;
/// Value-preserving item pruning
pub mod dominance;
/// Dynamic programming engine and its configuration
pub mod solver;
/// Row fill strategies (thread pool fork/join and sequential)
pub mod strategy;
/// Dense solution table with fill and backtracking
pub mod table;
