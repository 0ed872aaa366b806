mod node;
mod stats;

use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};

use crate::entities::{Instance, Item, Solution};
use crate::error::KnapsackError;
use crate::solvers::{Solver, Strategy, ratio_order};
use crate::util::{BnBConfig, assertions};

#[doc(inline)]
pub use node::{DecisionArena, SearchNode};
#[doc(inline)]
pub use stats::{BnBStats, Termination};

/// Exact solver using best-first branch-and-bound.
///
/// Items are decided on in order of descending value/cost ratio. Every node of the search tree
/// is a prefix of take/skip decisions, and the frontier always expands the node with the highest
/// fractional-relaxation bound first. Subtrees whose bound cannot beat the incumbent are pruned.
/// Worst case exponential in the number of items, near linear when the bounds prune aggressively.
#[derive(Debug, Clone, Copy, Default)]
pub struct BnBSolver {
    pub config: BnBConfig,
}

impl BnBSolver {
    pub fn new(config: BnBConfig) -> Self {
        Self { config }
    }

    /// Solves the instance, also returning the statistics of the search.
    /// If a limit of [`BnBConfig`] is hit, the incumbent is returned and not marked as proven optimal.
    pub fn solve_with_stats(&self, instance: &Instance) -> (Solution, BnBStats) {
        let start = Instant::now();
        let time_limit = self.config.time_limit_ms.map(Duration::from_millis);
        let capacity = instance.capacity();
        let items = ratio_order(instance.items());
        let n = items.len();

        let mut stats = BnBStats::default();
        let mut arena = DecisionArena::default();
        let mut frontier = BinaryHeap::new();

        // incumbent
        let mut max_profit = 0.0;
        let mut best_chain = None;

        let root = SearchNode::root(bound(&items, capacity, 0, 0.0, 0.0));
        stats.root_bound = root.bound;
        frontier.push(root);
        stats.on_node_pushed(frontier.len());

        stats.termination = loop {
            let Some(node) = frontier.pop() else {
                break Termination::OptimalityProven;
            };
            if node.bound <= max_profit {
                // the popped node has the highest bound of the frontier, no node left can improve
                stats.on_pruning_bound(frontier.len() + 1);
                break Termination::OptimalityProven;
            }
            if self.config.node_limit.is_some_and(|l| stats.nodes_explored >= l) {
                break Termination::NodeLimit;
            }
            if time_limit.is_some_and(|l| start.elapsed() >= l) {
                break Termination::TimeLimit;
            }

            stats.on_node_explored(node.depth);
            if node.depth == n {
                continue;
            }

            let item = items[node.depth];
            let depth = node.depth + 1;

            // take the next item
            let weight = node.weight + item.cost();
            if weight <= capacity {
                let profit = node.profit + item.value();
                let child_bound = bound(&items, capacity, depth, profit, weight);
                let improves = profit > max_profit;
                if improves || child_bound > max_profit {
                    let chain = Some(arena.take(node.depth, node.chain));
                    if improves {
                        max_profit = profit;
                        best_chain = chain;
                        stats.on_incumbent_update();
                        trace!("[BnB] new incumbent with profit {profit:.3} at depth {depth}");
                    }
                    if child_bound > max_profit {
                        frontier.push(SearchNode {
                            depth,
                            profit,
                            weight,
                            bound: child_bound,
                            chain,
                        });
                        stats.on_node_pushed(frontier.len());
                    } else {
                        stats.on_pruning_bound(1);
                    }
                } else {
                    stats.on_pruning_bound(1);
                }
            } else {
                stats.on_pruning_infeasible();
            }

            // skip the next item
            let child_bound = bound(&items, capacity, depth, node.profit, node.weight);
            if child_bound > max_profit {
                frontier.push(SearchNode {
                    depth,
                    bound: child_bound,
                    ..node
                });
                stats.on_node_pushed(frontier.len());
            } else {
                stats.on_pruning_bound(1);
            }
        };
        stats.time_total = start.elapsed();

        let proven_optimal = stats.termination == Termination::OptimalityProven;
        if !proven_optimal {
            warn!(
                "[BnB] search stopped by {:?} with {} open nodes, returning the incumbent",
                stats.termination,
                frontier.len()
            );
        }

        let selection = arena
            .materialize(best_chain)
            .into_iter()
            .map(|i| items[i].clone())
            .collect::<Vec<Item>>();
        let solution = Solution::new(Strategy::BranchAndBound, selection, max_profit, proven_optimal);
        debug_assert!(assertions::solution_is_valid(instance, &solution));

        debug!("[BnB] {stats} ({} take decisions recorded)", arena.len());
        info!(
            "[BnB] selected {}/{} items with value {:.3} (cost {:.3}/{:.3}) in {:.3}ms",
            solution.n_items(),
            n,
            solution.value,
            solution.cost(),
            capacity,
            stats.time_total.as_secs_f64() * 1000.0
        );
        (solution, stats)
    }
}

impl Solver for BnBSolver {
    fn strategy(&self) -> Strategy {
        Strategy::BranchAndBound
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, KnapsackError> {
        Ok(self.solve_with_stats(instance).0)
    }
}

/// Upper bound on the profit reachable from a node which decided the first `depth` items (in ratio order).
///
/// Fills the remaining capacity with whole items in ratio order and adds the fractional part of the
/// first item which does not fit entirely. This is the optimum of the continuous relaxation, so it never
/// underestimates the best reachable profit. A node which has no capacity left has bound 0.
pub fn bound(items: &[&Item], capacity: f64, depth: usize, profit: f64, weight: f64) -> f64 {
    if weight >= capacity {
        return 0.0;
    }

    let mut profit_bound = profit;
    let mut total_weight = weight;
    let mut j = depth;

    while j < items.len() && total_weight + items[j].cost() <= capacity {
        total_weight += items[j].cost();
        profit_bound += items[j].value();
        j += 1;
    }

    if j < items.len() {
        profit_bound += (capacity - total_weight) * items[j].value() / items[j].cost();
    }

    profit_bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::FPA;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};

    fn instance(records: &[(&str, f64, f64)], capacity: f64) -> Instance {
        Instance::from_records(records.iter().copied(), capacity).unwrap()
    }

    const XYZ: [(&str, f64, f64); 3] = [("X", 10.0, 60.0), ("Y", 20.0, 100.0), ("Z", 30.0, 120.0)];

    #[test]
    fn test_bound_is_fractional_relaxation() {
        let instance = instance(&XYZ, 50.0);
        let items = ratio_order(instance.items());
        // X and Y fit whole, 20 of the 30 units of Z fit: 60 + 100 + 20 * 4
        assert_eq!(bound(&items, 50.0, 0, 0.0, 0.0), 240.0);
        // after skipping X: Y whole and the full Z fit
        assert_eq!(bound(&items, 50.0, 1, 0.0, 0.0), 220.0);
        // no capacity left
        assert_eq!(bound(&items, 50.0, 2, 160.0, 50.0), 0.0);
    }

    #[test]
    fn test_fractional_bound_scenario() {
        let instance = instance(&XYZ, 50.0);
        let (solution, stats) = BnBSolver::default().solve_with_stats(&instance);
        assert_eq!(solution.ids(), vec!["Y", "Z"]);
        assert_eq!(FPA(solution.value), FPA(220.0));
        assert!(solution.proven_optimal);
        assert_eq!(stats.termination, Termination::OptimalityProven);
        assert_eq!(stats.root_bound, 240.0);
        assert!(stats.incumbent_updates >= 1);
    }

    #[test]
    fn test_selection_in_decision_order() {
        let instance = instance(&[("C", 4.0, 12.0), ("B", 3.0, 15.0), ("A", 2.0, 10.0)], 5.0);
        let solution = BnBSolver::default().solve(&instance).unwrap();
        // ratio order with ties kept stable: B (5.0), A (5.0), C (3.0)
        let order = solution.selection.iter().map(|i| i.id()).collect::<Vec<_>>();
        assert_eq!(order, vec!["B", "A"]);
        assert_eq!(FPA(solution.value), FPA(25.0));
    }

    #[test]
    fn test_zero_capacity_never_expands() {
        let instance = instance(&XYZ, 0.0);
        let (solution, stats) = BnBSolver::default().solve_with_stats(&instance);
        assert!(solution.is_empty());
        assert_eq!(solution.value, 0.0);
        assert_eq!(stats.nodes_explored, 0);
    }

    #[test]
    fn test_node_limit_returns_incumbent() {
        let instance = instance(&XYZ, 50.0);
        let config = BnBConfig {
            node_limit: Some(1),
            ..BnBConfig::default()
        };
        let (solution, stats) = BnBSolver::new(config).solve_with_stats(&instance);
        assert_eq!(stats.termination, Termination::NodeLimit);
        assert_eq!(stats.nodes_explored, 1);
        assert!(!solution.proven_optimal);
        // only the root was expanded: taking X is the incumbent
        assert_eq!(solution.ids(), vec!["X"]);
        assert!(assertions::solution_is_valid(&instance, &solution));
    }

    #[test]
    fn test_time_limit_zero() {
        let instance = instance(&XYZ, 50.0);
        let config = BnBConfig {
            time_limit_ms: Some(0),
            ..BnBConfig::default()
        };
        let solution = BnBSolver::new(config).solve(&instance).unwrap();
        assert!(!solution.proven_optimal);
        assert!(solution.is_empty());
    }

    #[test]
    fn test_matches_exhaustive_search() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            let n_items: usize = rng.random_range(0..=10);
            let records = (0..n_items)
                .map(|i| {
                    let cost = rng.random_range(1..=20) as f64;
                    let value = rng.random_range(0..=30) as f64;
                    (format!("{i}"), cost, value)
                })
                .collect::<Vec<_>>();
            let capacity = rng.random_range(0..=60) as f64;
            let instance = Instance::from_records(records, capacity).unwrap();

            let optimum = (0..1usize << n_items)
                .map(|mask| {
                    let chosen = instance
                        .items()
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| (mask >> i) & 1 == 1);
                    let (cost, value) = chosen.fold((0.0, 0.0), |(c, v), (_, item)| {
                        (c + item.cost(), v + item.value())
                    });
                    if cost <= capacity { value } else { 0.0 }
                })
                .fold(0.0, f64::max);

            let solution = BnBSolver::default().solve(&instance).unwrap();
            assert_eq!(FPA(solution.value), FPA(optimum));
            assert!(assertions::solution_is_valid(&instance, &solution));
        }
    }

    #[test]
    fn test_zero_value_items() {
        let instance = instance(&[("idle", 1.0, 0.0), ("rest", 2.0, 0.0)], 5.0);
        let solution = BnBSolver::default().solve(&instance).unwrap();
        assert_eq!(solution.value, 0.0);
        assert!(solution.proven_optimal);
    }
}
