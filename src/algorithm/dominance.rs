//! Value-preserving item pruning ahead of the table fill
//!
//! An item `y` dominates `x` when it is no heavier and no less valuable;
//! identical items are ordered by index so the relation stays acyclic. In the
//! 0/1 setting a dominated item can still be needed, so `x` is only dropped
//! when `x` together with all of its dominators cannot fit: then every
//! solution taking `x` leaves some dominator out, and swapping it in never
//! loses value.

use crate::model::{Item, Weight};
use bitvec::prelude::*;

/// Whether `y` (at `y_index`) dominates `x` (at `x_index`)
pub const fn dominates(y: &Item, y_index: usize, x: &Item, x_index: usize) -> bool {
    if y.weight > x.weight || y.value < x.value {
        return false;
    }
    if y.weight == x.weight && y.value == x.value {
        return y_index < x_index;
    }
    true
}

/// Mark every item that can be removed without lowering the optimum
///
/// Applies to every capacity up to `capacity`. Besides dominated items this
/// removes items heavier than the capacity and items of zero value.
pub fn removable_items(items: &[Item], capacity: Weight) -> BitVec {
    let mut removable = bitvec![0; items.len()];

    for (x_index, x) in items.iter().enumerate() {
        if x.value == 0 || !x.fits(capacity) {
            removable.set(x_index, true);
            continue;
        }

        let mut load = x.weight;
        for (y_index, y) in items.iter().enumerate() {
            if y_index != x_index && dominates(y, y_index, x, x_index) {
                load = load.saturating_add(y.weight);
                if load > capacity {
                    removable.set(x_index, true);
                    break;
                }
            }
        }
    }

    removable
}

/// Indices of the items kept after pruning, in original order
pub fn prune(items: &[Item], capacity: Weight) -> Vec<usize> {
    removable_items(items, capacity).iter_zeros().collect()
}
