use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use ndarray::Array2;
use thousands::Separable;

use crate::entities::{Instance, Item, Solution};
use crate::error::KnapsackError;
use crate::solvers::{Solver, Strategy};
use crate::util::{DPConfig, GridRounding, VALUE_EPSILON, assertions};

/// Scaled quantities this close to a grid line are snapped onto it (absorbs `0.29 * 100 = 28.999...`)
const GRID_SNAP: f64 = 1e-6;

/// Exact solver using the classic 0/1 knapsack table over a discretized capacity.
///
/// Capacity and costs are scaled by [`DPConfig::scale`] and mapped onto an integer grid.
/// The capacity is always floored, costs are rounded according to [`DPConfig::rounding`].
/// Time and memory are O(n·W), with W the capacity in grid cells: a capacity of 6 at scale 100 gives W = 600.
/// W is capped at the total grid cost of the items which fit, so a generous capacity costs nothing.
/// W grows linearly with both the capacity and the scale, which makes it the scaling limit of this solver.
#[derive(Debug, Clone, Copy)]
pub struct DPSolver {
    pub config: DPConfig,
}

impl DPSolver {
    pub fn new(config: DPConfig) -> Self {
        Self { config }
    }
}

impl Default for DPSolver {
    fn default() -> Self {
        DPSolver::new(DPConfig::default())
    }
}

impl Solver for DPSolver {
    fn strategy(&self) -> Strategy {
        Strategy::DynamicProgramming
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, KnapsackError> {
        let start = Instant::now();
        let DPConfig {
            scale,
            rounding,
            max_table_cells,
        } = self.config;
        let items = instance.items();
        let capacity = instance.capacity();
        let n = items.len();
        if scale == 0 {
            return Err(KnapsackError::InvalidGridScale { scale });
        }

        let costs = grid_costs(items, capacity, scale, rounding);
        // columns beyond the total cost of the items which fit can never differ from it
        let reachable = costs
            .iter()
            .filter(|&&c| c != usize::MAX)
            .fold(0usize, |acc, &c| acc.saturating_add(c));
        let w_max = to_grid(capacity, scale, GridRounding::Floor).min(reachable);
        let n_cells = (n + 1)
            .checked_mul(w_max.saturating_add(1))
            .unwrap_or(usize::MAX);
        if n_cells > max_table_cells {
            return Err(KnapsackError::TableTooLarge {
                cells: n_cells,
                limit: max_table_cells,
            });
        }

        let table = fill_table(items, &costs, w_max);
        let selection = backtrack(&table, items, &costs, w_max);
        let value = table[[n, w_max]];

        let solution = Solution::new(Strategy::DynamicProgramming, selection, value, true);
        debug_assert!(assertions::value_matches_selection(&solution));
        debug_assert!(assertions::selection_is_subset(instance, &solution.selection));

        if solution.cost() > capacity + VALUE_EPSILON {
            warn!(
                "[DP] selection costs {:.4} which exceeds the capacity {:.4} due to flooring off-grid costs, consider rounding up",
                solution.cost(),
                capacity
            );
        }

        info!(
            "[DP] selected {}/{} items with value {:.3} (cost {:.3}/{:.3}, {} table cells) in {:.3}ms",
            solution.n_items(),
            n,
            solution.value,
            solution.cost(),
            capacity,
            n_cells.separate_with_commas(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(solution)
    }
}

/// Maps a non-negative quantity onto the grid with `scale` cells per unit.
pub fn to_grid(x: f64, scale: u32, rounding: GridRounding) -> usize {
    let scaled = x * scale as f64;
    let nearest = scaled.round();
    let cells = if (scaled - nearest).abs() < GRID_SNAP {
        nearest
    } else {
        match rounding {
            GridRounding::Floor => scaled.floor(),
            GridRounding::Ceil => scaled.ceil(),
        }
    };
    // saturating conversion
    cells as usize
}

fn is_on_grid(x: f64, scale: u32) -> bool {
    let scaled = x * scale as f64;
    (scaled - scaled.round()).abs() < GRID_SNAP
}

/// Cost of every item in grid cells.
/// Items which do not fit on their own are given an infinite cost, so rounding can never make them fit.
fn grid_costs(items: &[Item], capacity: f64, scale: u32, rounding: GridRounding) -> Vec<usize> {
    let off_grid = items
        .iter()
        .filter(|item| !is_on_grid(item.cost(), scale))
        .map(|item| item.id())
        .collect_vec();
    if !off_grid.is_empty() {
        warn!(
            "[DP] {} item costs are not multiples of the grid width {}, rounding them {:?}: {:?}",
            off_grid.len(),
            1.0 / scale as f64,
            rounding,
            off_grid
        );
    }
    if !is_on_grid(capacity, scale) {
        debug!("[DP] capacity {capacity} is not on the grid, flooring it");
    }

    items
        .iter()
        .map(|item| match item.cost() > capacity {
            true => usize::MAX,
            false => to_grid(item.cost(), scale, rounding),
        })
        .collect()
}

/// `table[[i, w]]` is the best value using the first `i` items within `w` grid cells.
fn fill_table(items: &[Item], costs: &[usize], w_max: usize) -> Array2<f64> {
    let n = items.len();
    let mut table = Array2::<f64>::zeros((n + 1, w_max + 1));

    for i in 1..=n {
        let (cost, value) = (costs[i - 1], items[i - 1].value());
        for w in 0..=w_max {
            let skip = table[[i - 1, w]];
            table[[i, w]] = match cost <= w {
                true => {
                    let take = table[[i - 1, w - cost]] + value;
                    if take > skip { take } else { skip }
                }
                false => skip,
            };
        }
    }
    table
}

/// Walks the table back from `(n, w_max)` to recover the selected items.
/// A row differing from the one above means the item of that row was taken.
fn backtrack(table: &Array2<f64>, items: &[Item], costs: &[usize], w_max: usize) -> Vec<Item> {
    let mut w = w_max;
    let mut selection = vec![];
    for i in (1..=items.len()).rev() {
        if table[[i, w]] != table[[i - 1, w]] {
            selection.push(items[i - 1].clone());
            w -= costs[i - 1];
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::FPA;
    use test_case::test_case;

    fn solve(records: &[(&str, f64, f64)], capacity: f64, config: DPConfig) -> Solution {
        let instance = Instance::from_records(records.iter().copied(), capacity).unwrap();
        DPSolver::new(config).solve(&instance).unwrap()
    }

    #[test_case(0.29, 100, 29; "representation error snaps")]
    #[test_case(6.0, 100, 600; "whole units")]
    #[test_case(1.234, 100, 123; "floored")]
    #[test_case(1.234, 1000, 1234; "finer grid")]
    fn test_to_grid_floor(x: f64, scale: u32, expected: usize) {
        assert_eq!(to_grid(x, scale, GridRounding::Floor), expected);
    }

    #[test]
    fn test_to_grid_ceil() {
        assert_eq!(to_grid(1.231, 100, GridRounding::Ceil), 124);
        assert_eq!(to_grid(0.29, 100, GridRounding::Ceil), 29);
    }

    #[test]
    fn test_study_scenario() {
        let solution = solve(
            &[("A", 2.0, 10.0), ("B", 3.0, 15.0), ("C", 4.0, 12.0)],
            5.0,
            DPConfig::default(),
        );
        assert_eq!(solution.ids(), vec!["A", "B"]);
        assert_eq!(FPA(solution.value), FPA(25.0));
        assert!(solution.proven_optimal);
    }

    #[test]
    fn test_fractional_hours() {
        let solution = solve(
            &[("graphs", 1.5, 7.0), ("trees", 2.25, 9.0), ("sorting", 0.75, 4.0), ("dp", 3.5, 12.0)],
            6.0,
            DPConfig::default(),
        );
        // 1.5 + 0.75 + 3.5 = 5.75 for 23.0 beats 1.5 + 2.25 + 0.75 = 4.5 for 20.0
        assert_eq!(solution.ids(), vec!["dp", "graphs", "sorting"]);
        assert_eq!(FPA(solution.value), FPA(23.0));
    }

    #[test]
    fn test_floor_is_lossy_and_ceil_is_feasible() {
        let records = [("P", 1.009, 5.0), ("Q", 1.009, 5.0)];

        let floored = solve(&records, 2.01, DPConfig::default());
        assert_eq!(floored.n_items(), 2);
        assert!(floored.cost() > 2.01);

        let ceiled = solve(
            &records,
            2.01,
            DPConfig {
                rounding: GridRounding::Ceil,
                ..DPConfig::default()
            },
        );
        assert_eq!(ceiled.n_items(), 1);
        assert!(ceiled.cost() <= 2.01);
    }

    #[test]
    fn test_sub_grid_item_never_fits_zero_capacity() {
        let solution = solve(&[("tiny", 0.001, 100.0)], 0.0, DPConfig::default());
        assert!(solution.is_empty());
        assert_eq!(solution.value, 0.0);
    }

    #[test]
    fn test_table_limit() {
        let instance =
            Instance::from_records([("A", 1000.0, 1.0), ("B", 1000.0, 1.0)], 1_000_000.0).unwrap();
        let err = DPSolver::new(DPConfig {
            max_table_cells: 1_000,
            ..DPConfig::default()
        })
        .solve(&instance)
        .unwrap_err();
        assert!(matches!(err, KnapsackError::TableTooLarge { limit: 1_000, .. }));
    }

    #[test_case(&[]; "no items")]
    #[test_case(&[("A", 1.0, 1.0)]; "single item")]
    #[test_case(&[("A", 1.0, 1.0), ("B", 2.5, 3.0), ("C", 0.75, 2.0)]; "few items")]
    fn test_large_capacity_few_items(records: &[(&str, f64, f64)]) {
        // the full grid would span 10^8 columns
        let solution = solve(records, 1_000_000.0, DPConfig::default());
        assert_eq!(solution.n_items(), records.len());
        let total = records.iter().map(|(_, _, value)| value).sum::<f64>();
        assert_eq!(FPA(solution.value), FPA(total));
    }

    #[test]
    fn test_capacity_between_item_totals() {
        // only the table columns up to the total item cost are needed, B must still be excluded
        let solution = solve(
            &[("A", 2.0, 10.0), ("B", 3.0, 4.0), ("C", 1.5, 6.0)],
            4.0,
            DPConfig::default(),
        );
        assert_eq!(solution.ids(), vec!["A", "C"]);
        assert_eq!(FPA(solution.value), FPA(16.0));
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let instance = Instance::from_records([("A", 1.0, 1.0)], 2.0).unwrap();
        let err = DPSolver::new(DPConfig {
            scale: 0,
            ..DPConfig::default()
        })
        .solve(&instance)
        .unwrap_err();
        assert_eq!(err, KnapsackError::InvalidGridScale { scale: 0 });
    }

    #[test]
    fn test_backtrack_prefers_skipping_on_ties() {
        // both items are worth the same and only one fits: the first one is kept
        let solution = solve(&[("first", 2.0, 5.0), ("second", 2.0, 5.0)], 3.0, DPConfig::default());
        assert_eq!(solution.ids(), vec!["first"]);
    }
}
