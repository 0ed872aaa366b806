use std::collections::HashSet;

use float_cmp::approx_eq;
use log::error;

use crate::entities::{Instance, Item, Solution};
use crate::util::VALUE_EPSILON;

//Various checks to verify correctness of the solvers' output
//Used in debug_assert!() blocks and tests

/// Total cost of the selection does not exceed the capacity
pub fn selection_is_feasible(selection: &[Item], capacity: f64) -> bool {
    let cost = selection.iter().map(|i| i.cost()).sum::<f64>();
    // absorbs differences in summation order
    let feasible = cost <= capacity + VALUE_EPSILON;
    if !feasible {
        error!("selection with cost {cost} exceeds capacity {capacity}");
    }
    feasible
}

/// The reported value equals the sum of the values of the selection
pub fn value_matches_selection(solution: &Solution) -> bool {
    let sum = solution.selection.iter().map(|i| i.value()).sum::<f64>();
    approx_eq!(f64, sum, solution.value, epsilon = VALUE_EPSILON)
}

/// Every selected item is an item of the instance, and none is selected twice
pub fn selection_is_subset(instance: &Instance, selection: &[Item]) -> bool {
    let mut available = instance.items().iter().collect::<Vec<_>>();
    selection.iter().all(|item| {
        match available.iter().position(|candidate| *candidate == item) {
            Some(pos) => {
                available.swap_remove(pos);
                true
            }
            None => false,
        }
    })
}

/// All checks combined
pub fn solution_is_valid(instance: &Instance, solution: &Solution) -> bool {
    selection_is_feasible(&solution.selection, instance.capacity())
        && value_matches_selection(solution)
        && selection_is_subset(instance, &solution.selection)
}

pub fn item_ids_unique(items: &[Item]) -> bool {
    let mut seen = HashSet::new();
    items.iter().all(|i| seen.insert(i.id()))
}
