//! Exact dynamic programming engine

use crate::algorithm::dominance;
use crate::algorithm::strategy::{FillStrategy, ThreadPoolFill};
use crate::algorithm::table::SolutionTable;
use crate::io::error::Result;
use crate::model::{Item, ProblemInstance, Solution, Weight};
use std::borrow::Cow;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Algorithm families an instance list can mark instances for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// Branch and bound search
    BranchAndBound,
    /// Exact dynamic programming over a capacity table
    DynamicProgramming,
    /// Two-list (meet in the middle) enumeration
    TwoList,
}

impl AlgorithmFamily {
    /// Short tag used in the record stream banner
    pub const fn tag(self) -> &'static str {
        match self {
            Self::BranchAndBound => "bnb",
            Self::DynamicProgramming => "dyn",
            Self::TwoList => "tl",
        }
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Family the engine in this module belongs to
pub const ALGORITHM_FAMILY: AlgorithmFamily = AlgorithmFamily::DynamicProgramming;

/// Per-engine settings, fixed for the lifetime of one engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Workers used for each row fill
    pub threads: usize,
    /// Drop items that cannot affect the optimum before filling
    pub prune_dominated: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threads: 1,
            prune_dominated: false,
        }
    }
}

impl SolverConfig {
    /// Settings for the given worker count, without pruning
    pub const fn with_threads(threads: usize) -> Self {
        Self {
            threads,
            prune_dominated: false,
        }
    }
}

/// Solves 0/1 knapsack instances with a row-parallel table fill
///
/// Each solve allocates a fresh table that is dropped before `solve`
/// returns; nothing is cached between solves.
pub struct DynamicProgramming<S = ThreadPoolFill> {
    strategy: S,
    prune_dominated: bool,
}

impl DynamicProgramming<ThreadPoolFill> {
    /// Create an engine with its own pool of `config.threads` workers
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be built
    pub fn new(config: SolverConfig) -> Result<Self> {
        Ok(Self {
            strategy: ThreadPoolFill::new(config.threads)?,
            prune_dominated: config.prune_dominated,
        })
    }
}

impl<S: FillStrategy> DynamicProgramming<S> {
    /// Create an engine around an explicit fill strategy
    pub const fn with_strategy(strategy: S, prune_dominated: bool) -> Self {
        Self {
            strategy,
            prune_dominated,
        }
    }

    /// Fill strategy used by this engine
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Allocate and fill the table for the instance's items as given
    ///
    /// # Errors
    ///
    /// Returns an error if the table dimensions are not addressable
    pub fn table(&self, items: &[Item], capacity: Weight) -> Result<SolutionTable> {
        let mut table = SolutionTable::allocate(items.len(), capacity)?;
        table.fill(items, &self.strategy);
        Ok(table)
    }

    /// Compute an optimal item set
    ///
    /// # Errors
    ///
    /// Returns an error if the table dimensions are not addressable
    pub fn solve(&self, instance: &ProblemInstance) -> Result<Solution> {
        let kept = self
            .prune_dominated
            .then(|| dominance::prune(&instance.items, instance.capacity));

        let items: Cow<'_, [Item]> = match &kept {
            Some(kept) => kept
                .iter()
                .filter_map(|&index| instance.item(index).copied())
                .collect(),
            None => Cow::Borrowed(instance.items.as_slice()),
        };

        debug!(
            event = "solve_start",
            rows = items.len(),
            columns = instance.capacity.saturating_add(1),
            threads = self.strategy.threads(),
            pruned = instance.item_count() - items.len(),
        );

        let table = self.table(&items, instance.capacity)?;
        let solution = table.backtrack(&items);

        debug!(event = "solve_end", optimum = table.optimum(), chosen = solution.len());

        Ok(match kept {
            Some(kept) => Solution::from_indices(
                solution
                    .into_indices()
                    .into_iter()
                    .filter_map(|index| kept.get(index).copied())
                    .collect(),
            ),
            None => solution,
        })
    }

    /// Compute an optimal item set and measure the wall-clock solve time
    ///
    /// # Errors
    ///
    /// Returns an error if the table dimensions are not addressable
    pub fn run_timed(&self, instance: &ProblemInstance) -> Result<(Solution, Duration)> {
        let start = Instant::now();
        let solution = self.solve(instance)?;
        Ok((solution, start.elapsed()))
    }
}
