/// Item weight and capacity unit
pub type Weight = u64;

/// Item value and table cell unit
pub type Value = u64;

/// A single weighted, valued item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Item {
    /// Capacity consumed when the item is taken
    pub weight: Weight,
    /// Value gained when the item is taken
    pub value: Value,
}

impl Item {
    /// Create an item from its weight and value
    pub const fn new(weight: Weight, value: Value) -> Self {
        Self { weight, value }
    }

    /// Test whether the item fits into the given remaining capacity
    pub const fn fits(&self, capacity: Weight) -> bool {
        self.weight <= capacity
    }
}

/// A capacity bound plus an ordered item sequence
///
/// Item order is the processing order of the solution table: row `i` of the
/// table corresponds to `items[i]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemInstance {
    /// Items in processing order
    pub items: Vec<Item>,
    /// Maximum total weight of a solution
    pub capacity: Weight,
}

impl ProblemInstance {
    /// Create an instance from items and a capacity bound
    pub const fn new(items: Vec<Item>, capacity: Weight) -> Self {
        Self { items, capacity }
    }

    /// Number of items
    pub const fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Test whether the instance has no items
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by index
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }
}
