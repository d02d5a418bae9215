//! Dense dynamic programming table with row-by-row fill and backtracking

use crate::algorithm::strategy::FillStrategy;
use crate::io::error::{AlgorithmError, Result};
use crate::model::{Item, Solution, Value, Weight};
use ndarray::{Array2, ArrayView1, Axis};

/// Best achievable value per item prefix and capacity bound
///
/// Cell `(i, c)` holds the optimum over items `0..=i` with capacity `c`.
/// Stored as one contiguous row-major arena of `item_count` rows by
/// `capacity + 1` columns.
#[derive(Clone, Debug)]
pub struct SolutionTable {
    cells: Array2<Value>,
}

impl SolutionTable {
    /// Check that a table for `rows` items and the given capacity is addressable
    ///
    /// Returns the column count. Nothing is allocated.
    ///
    /// # Errors
    ///
    /// Returns an error if the column count or the total table size does not
    /// fit in the address space
    pub fn check_dimensions(rows: usize, capacity: Weight) -> Result<usize> {
        let too_large = || AlgorithmError::TableTooLarge {
            rows,
            columns: capacity.saturating_add(1),
        };

        let columns = capacity
            .checked_add(1)
            .and_then(|columns| usize::try_from(columns).ok())
            .ok_or_else(too_large)?;

        // Array2::zeros panics on overflow, so the size is checked up front
        rows.checked_mul(columns)
            .and_then(|cells| cells.checked_mul(size_of::<Value>()))
            .filter(|&bytes| isize::try_from(bytes).is_ok())
            .ok_or_else(too_large)?;

        Ok(columns)
    }

    /// Allocate a zeroed table for `rows` items and the given capacity
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions fail [`Self::check_dimensions`]
    pub fn allocate(rows: usize, capacity: Weight) -> Result<Self> {
        let columns = Self::check_dimensions(rows, capacity)?;
        Ok(Self {
            cells: Array2::zeros((rows, columns)),
        })
    }

    /// Number of rows (items)
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns (capacity + 1)
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Read one cell
    pub fn value(&self, row: usize, column: usize) -> Option<Value> {
        self.cells.get((row, column)).copied()
    }

    /// Read one full row
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, Value>> {
        (row < self.rows()).then(|| self.cells.row(row))
    }

    /// Optimal value for all items at full capacity
    ///
    /// Zero for a table without rows.
    pub fn optimum(&self) -> Value {
        match (self.rows().checked_sub(1), self.columns().checked_sub(1)) {
            (Some(row), Some(column)) => self.value(row, column).unwrap_or(0),
            _ => 0,
        }
    }

    /// Fill every row in index order using the given strategy
    ///
    /// Row `i` is handed to the strategy only after row `i - 1` is complete;
    /// the previous row is borrowed immutably while the current one is
    /// written.
    pub fn fill<S: FillStrategy + ?Sized>(&mut self, items: &[Item], strategy: &S) {
        for (row, &item) in items.iter().enumerate().take(self.rows()) {
            let (done, mut pending) = self.cells.view_mut().split_at(Axis(0), row);
            let current = pending.index_axis_mut(Axis(0), 0);
            let previous = row.checked_sub(1).map(|above| done.index_axis(Axis(0), above));
            strategy.fill_row(item, previous, current);
        }
    }

    /// Reconstruct the chosen items from a filled table
    ///
    /// Walks from the final cell toward row 0. A row whose value differs from
    /// the row above took its item; row 0 took its item exactly when its cell
    /// is non-zero. Indices are returned ascending.
    pub fn backtrack(&self, items: &[Item]) -> Solution {
        let mut solution = Solution::new();
        let Some(mut column) = self.columns().checked_sub(1) else {
            return solution;
        };

        for row in (0..self.rows().min(items.len())).rev() {
            let Some(current) = self.value(row, column) else {
                break;
            };
            let above = match row.checked_sub(1) {
                Some(previous) => self.value(previous, column).unwrap_or(0),
                None => 0,
            };

            if current != above {
                solution.push(row);
                if let Some(item) = items.get(row) {
                    column = usize::try_from(item.weight)
                        .map_or(0, |weight| column.saturating_sub(weight));
                }
            }
        }

        solution.sort();
        solution
    }
}
