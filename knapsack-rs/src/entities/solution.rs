use std::time::Instant;

use crate::entities::Item;
use crate::solvers::Strategy;

/// Selected subset of items returned by a solver, together with the objective value it achieves.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Strategy which produced the solution
    pub strategy: Strategy,
    /// The selected items, in the order they were decided on (not semantically meaningful)
    pub selection: Vec<Item>,
    /// Total value of the selected items
    pub value: f64,
    /// Whether the solver proved this solution to be optimal
    pub proven_optimal: bool,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    pub fn new(strategy: Strategy, selection: Vec<Item>, value: f64, proven_optimal: bool) -> Self {
        Solution {
            strategy,
            selection,
            value,
            proven_optimal,
            time_stamp: Instant::now(),
        }
    }

    /// Total cost of the selected items
    pub fn cost(&self) -> f64 {
        self.selection.iter().map(|i| i.cost()).sum()
    }

    /// Ids of the selected items, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = self.selection.iter().map(|i| i.id()).collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    pub fn n_items(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }
}
