use serde::{Deserialize, Serialize};

use crate::solvers::Strategy;

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: String,
    /// Cost of selecting the item, strictly positive
    pub cost: f64,
    /// Value of selecting the item, non-negative
    pub value: f64,
}

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    /// Capacity of the knapsack.
    /// A default is supplied on import if not specified.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub capacity: Option<f64>,
    /// The items, in order
    pub items: Vec<ExtItem>,
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Strategy used to obtain the solution
    pub strategy: Strategy,
    /// Total value of the selected items
    pub value: f64,
    /// Total cost of the selected items
    pub cost: f64,
    /// Capacity the solution was computed for
    pub capacity: f64,
    /// Whether the solution is guaranteed to be optimal
    pub proven_optimal: bool,
    /// The selected items
    pub items: Vec<ExtItem>,
    /// Milliseconds between the epoch and the creation of the solution
    pub run_time_ms: u64,
}
