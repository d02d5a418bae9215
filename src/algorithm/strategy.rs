//! Row fill strategies for the solution table
//!
//! A strategy computes one full table row from the completed previous row.
//! Every column of a row reads only the previous row and writes exactly one
//! cell of the current row, so columns can be computed in any order.

use crate::io::error::{AlgorithmError, Result};
use crate::model::{Item, Value};
use ndarray::{ArrayView1, ArrayViewMut1, Zip};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Computes a single table row from the row above it
pub trait FillStrategy {
    /// Fill `current` for `item` given the completed `previous` row
    ///
    /// `previous` is `None` for row 0. Both rows span columns
    /// `0..=capacity`. The call must not return before every cell of
    /// `current` is written.
    fn fill_row(
        &self,
        item: Item,
        previous: Option<ArrayView1<'_, Value>>,
        current: ArrayViewMut1<'_, Value>,
    );

    /// Number of workers used per row
    fn threads(&self) -> usize;
}

/// Value of one cell under the row recurrence
///
/// Taking the item only wins on strict improvement, which keeps the table
/// independent of scheduling.
#[inline]
pub fn cell_value(item: Item, previous: Option<&ArrayView1<'_, Value>>, column: usize) -> Value {
    match previous {
        None => {
            if item.fits(column as u64) {
                item.value
            } else {
                0
            }
        }
        Some(row) => {
            let inherited = row.get(column).copied().unwrap_or(0);
            let taken = usize::try_from(item.weight)
                .ok()
                .and_then(|weight| column.checked_sub(weight))
                .and_then(|remaining| row.get(remaining).copied())
                .map(|rest| rest.saturating_add(item.value));
            match taken {
                Some(taken) if taken > inherited => taken,
                _ => inherited,
            }
        }
    }
}

/// Fork/join fill on a dedicated rayon pool
///
/// The pool is sized at construction and owned by the strategy, so the
/// thread count never leaks into process-wide state. Each row is one
/// parallel phase: `fill_row` returns only after all columns are written,
/// which is the barrier between rows.
pub struct ThreadPoolFill {
    pool: ThreadPool,
    threads: usize,
}

impl ThreadPoolFill {
    /// Build a pool with exactly `threads` workers
    ///
    /// # Errors
    ///
    /// Returns an error if `threads` is zero or the pool cannot be spawned
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(crate::io::error::invalid_parameter(
                "threads",
                &threads,
                &"must be at least 1",
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("knapsweep-fill-{index}"))
            .build()
            .map_err(|source| AlgorithmError::ThreadPool { threads, source })?;

        Ok(Self { pool, threads })
    }
}

impl FillStrategy for ThreadPoolFill {
    fn fill_row(
        &self,
        item: Item,
        previous: Option<ArrayView1<'_, Value>>,
        current: ArrayViewMut1<'_, Value>,
    ) {
        self.pool.install(|| {
            Zip::indexed(current).par_for_each(|column, cell| {
                *cell = cell_value(item, previous.as_ref(), column);
            });
        });
    }

    fn threads(&self) -> usize {
        self.threads
    }
}

/// Single-threaded reference fill
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialFill;

impl FillStrategy for SequentialFill {
    fn fill_row(
        &self,
        item: Item,
        previous: Option<ArrayView1<'_, Value>>,
        current: ArrayViewMut1<'_, Value>,
    ) {
        Zip::indexed(current).for_each(|column, cell| {
            *cell = cell_value(item, previous.as_ref(), column);
        });
    }

    fn threads(&self) -> usize {
        1
    }
}
