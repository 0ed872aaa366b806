use std::time::Instant;

use crate::entities::{Instance, Item, Solution};
use crate::io::ext_repr::{ExtItem, ExtSolution};

/// Exports a solution out of the library
pub fn export(instance: &Instance, solution: &Solution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        strategy: solution.strategy,
        value: solution.value,
        cost: solution.cost(),
        capacity: instance.capacity(),
        proven_optimal: solution.proven_optimal,
        items: solution.selection.iter().map(export_item).collect(),
        run_time_ms: solution.time_stamp.duration_since(epoch).as_millis() as u64,
    }
}

fn export_item(item: &Item) -> ExtItem {
    ExtItem {
        id: item.id().to_string(),
        cost: item.cost(),
        value: item.value(),
    }
}
