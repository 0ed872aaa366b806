use std::cmp::Reverse;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::entities::{Instance, Item, Solution};
use crate::error::KnapsackError;
use crate::util::SolverConfig;

/// Best-first branch-and-bound with a fractional-relaxation bound
pub mod bnb;

/// Dynamic programming over a discretized capacity
pub mod dp;

/// Greedy heuristic on descending value/cost ratio
pub mod greedy;

#[doc(inline)]
pub use bnb::BnBSolver;
#[doc(inline)]
pub use dp::DPSolver;
#[doc(inline)]
pub use greedy::GreedySolver;

/// The available solving strategies
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Exact, O(n·W) in time and memory with W the discretized capacity
    #[default]
    #[serde(alias = "dp")]
    DynamicProgramming,
    /// Exact, exponential in the worst case
    #[serde(alias = "bnb")]
    BranchAndBound,
    /// Approximate, O(n log n)
    Greedy,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::DynamicProgramming,
        Strategy::BranchAndBound,
        Strategy::Greedy,
    ];

    /// Whether the strategy guarantees an optimal solution
    pub fn is_exact(&self) -> bool {
        match self {
            Strategy::DynamicProgramming | Strategy::BranchAndBound => true,
            Strategy::Greedy => false,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Strategy::DynamicProgramming => "dynamic_programming",
            Strategy::BranchAndBound => "branch_and_bound",
            Strategy::Greedy => "greedy",
        }
    }
}

impl FromStr for Strategy {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dynamic_programming" | "dp" => Ok(Strategy::DynamicProgramming),
            "branch_and_bound" | "bnb" => Ok(Strategy::BranchAndBound),
            "greedy" => Ok(Strategy::Greedy),
            other => Err(KnapsackError::UnknownStrategy {
                token: other.to_string(),
            }),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Common interface of all solvers.
/// Solvers only read the instance, every call works on its own private state.
pub trait Solver {
    fn strategy(&self) -> Strategy;

    fn solve(&self, instance: &Instance) -> Result<Solution, KnapsackError>;
}

/// Solves the instance with the requested strategy.
pub fn solve(
    instance: &Instance,
    strategy: Strategy,
    config: &SolverConfig,
) -> Result<Solution, KnapsackError> {
    match strategy {
        Strategy::DynamicProgramming => DPSolver::new(config.dp).solve(instance),
        Strategy::BranchAndBound => BnBSolver::new(config.bnb).solve(instance),
        Strategy::Greedy => GreedySolver.solve(instance),
    }
}

/// Solves the instance with the strategy named by `token`.
/// Fails with [`KnapsackError::UnknownStrategy`] before any solver runs if the token is not recognized.
pub fn solve_by_token(
    instance: &Instance,
    token: &str,
    config: &SolverConfig,
) -> Result<Solution, KnapsackError> {
    let strategy = token.parse::<Strategy>()?;
    solve(instance, strategy, config)
}

/// Items in order of descending value/cost ratio.
/// The sort is stable: items with equal ratios keep their input order.
pub fn ratio_order(items: &[Item]) -> Vec<&Item> {
    items
        .iter()
        .sorted_by_key(|item| Reverse(OrderedFloat(item.ratio())))
        .collect_vec()
}
