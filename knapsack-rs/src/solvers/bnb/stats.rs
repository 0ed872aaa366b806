use std::fmt::{Display, Formatter};
use std::time::Duration;

use thousands::Separable;

/// Why the branch-and-bound search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Termination {
    /// The frontier held no node able to beat the incumbent
    #[default]
    OptimalityProven,
    /// The configured node limit was reached
    NodeLimit,
    /// The configured time limit was reached
    TimeLimit,
}

/// Statistics collected during a branch-and-bound search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BnBStats {
    /// Nodes taken from the frontier and expanded
    pub nodes_explored: u64,
    /// Nodes pushed onto the frontier (including the root)
    pub nodes_pushed: u64,
    /// Nodes discarded because their bound could not beat the incumbent
    pub prunings_bound: u64,
    /// Take branches discarded because the item did not fit
    pub prunings_infeasible: u64,
    /// Number of times a better incumbent was found
    pub incumbent_updates: u64,
    /// Deepest node expanded
    pub max_depth: usize,
    /// Largest size the frontier reached
    pub peak_frontier: usize,
    /// Bound of the root node
    pub root_bound: f64,
    pub termination: Termination,
    pub time_total: Duration,
}

impl BnBStats {
    #[inline]
    pub fn on_node_explored(&mut self, depth: usize) {
        self.nodes_explored += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_node_pushed(&mut self, frontier_len: usize) {
        self.nodes_pushed += 1;
        self.peak_frontier = self.peak_frontier.max(frontier_len);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self, n_nodes: usize) {
        self.prunings_bound += n_nodes as u64;
    }

    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible += 1;
    }

    #[inline]
    pub fn on_incumbent_update(&mut self) {
        self.incumbent_updates += 1;
    }
}

impl Display for BnBStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes explored, {} pushed, {} pruned by bound, {} infeasible, {} incumbent updates, max depth {}, peak frontier {}, root bound {:.3}, {:?} after {:.3}ms",
            self.nodes_explored.separate_with_commas(),
            self.nodes_pushed.separate_with_commas(),
            self.prunings_bound.separate_with_commas(),
            self.prunings_infeasible.separate_with_commas(),
            self.incumbent_updates,
            self.max_depth,
            self.peak_frontier.separate_with_commas(),
            self.root_bound,
            self.termination,
            self.time_total.as_secs_f64() * 1000.0
        )
    }
}
