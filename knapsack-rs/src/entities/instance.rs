use crate::entities::Item;
use crate::error::KnapsackError;

/// A knapsack problem instance: an ordered sequence of items and a capacity.
///
/// The order of the items is preserved, it determines the decision order of the
/// dynamic programming solver. Items are validated on construction (see [`Item::new`]),
/// so every instance only contains strictly positive costs.
#[derive(Clone, Debug)]
pub struct Instance {
    items: Vec<Item>,
    capacity: f64,
}

impl Instance {
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Instance, KnapsackError> {
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(KnapsackError::InvalidCapacity { capacity });
        }
        Ok(Instance { items, capacity })
    }

    /// Builds an instance directly from `(id, cost, value)` records
    pub fn from_records<S: Into<String>>(
        records: impl IntoIterator<Item = (S, f64, f64)>,
        capacity: f64,
    ) -> Result<Instance, KnapsackError> {
        let items = records
            .into_iter()
            .map(|(id, cost, value)| Item::new(id, cost, value))
            .collect::<Result<Vec<Item>, KnapsackError>>()?;
        Instance::new(items, capacity)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Sum of the costs of all items
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|i| i.cost()).sum()
    }

    /// Sum of the values of all items
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|i| i.value()).sum()
    }
}
