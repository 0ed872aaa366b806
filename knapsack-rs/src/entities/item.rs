use crate::error::KnapsackError;

/// Item which can be selected into a knapsack.
/// Immutable once constructed, use [`Item::new`] to create one.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    id: String,
    cost: f64,
    value: f64,
}

impl Item {
    /// Creates a new item, rejecting a cost which is not strictly positive
    /// and a value which is negative. Non-finite numbers are rejected as well.
    pub fn new(id: impl Into<String>, cost: f64, value: f64) -> Result<Item, KnapsackError> {
        let id = id.into();
        let cost_ok = cost.is_finite() && cost > 0.0;
        let value_ok = value.is_finite() && value >= 0.0;
        match cost_ok && value_ok {
            true => Ok(Item { id, cost, value }),
            false => Err(KnapsackError::InvalidItem { id, cost, value }),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value per unit of cost
    pub fn ratio(&self) -> f64 {
        self.value / self.cost
    }
}
