use std::time::Instant;

use log::{debug, info};

use crate::entities::{Instance, Solution};
use crate::error::KnapsackError;
use crate::solvers::{Solver, Strategy, ratio_order};
use crate::util::assertions;

/// Single pass over the items in order of descending value/cost ratio,
/// adding every item which still fits. Items which do not fit are skipped, not a reason to stop.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl Solver for GreedySolver {
    fn strategy(&self) -> Strategy {
        Strategy::Greedy
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, KnapsackError> {
        let start = Instant::now();
        let capacity = instance.capacity();

        let mut total_cost = 0.0;
        let mut total_value = 0.0;
        let mut selection = vec![];

        for item in ratio_order(instance.items()) {
            if total_cost + item.cost() <= capacity {
                total_cost += item.cost();
                total_value += item.value();
                selection.push(item.clone());
            } else {
                debug!(
                    "[GREEDY] skipping {} ({:.3} > {:.3} remaining)",
                    item.id(),
                    item.cost(),
                    capacity - total_cost
                );
            }
        }

        let solution = Solution::new(Strategy::Greedy, selection, total_value, false);
        debug_assert!(assertions::solution_is_valid(instance, &solution));

        info!(
            "[GREEDY] selected {}/{} items with value {:.3} (cost {:.3}/{:.3}) in {:.3}ms",
            solution.n_items(),
            instance.n_items(),
            solution.value,
            total_cost,
            capacity,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(solution)
    }
}
