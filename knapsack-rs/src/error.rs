use std::fmt::{Display, Formatter};

/// Everything that can go wrong while building an instance or solving it.
#[derive(Debug, Clone, PartialEq)]
pub enum KnapsackError {
    /// An item with a non-positive (or non-finite) cost, or a negative (or non-finite) value.
    InvalidItem { id: String, cost: f64, value: f64 },
    /// A negative (or non-finite) capacity.
    InvalidCapacity { capacity: f64 },
    /// A strategy token that does not name any of the solvers.
    UnknownStrategy { token: String },
    /// The dynamic programming table would exceed the configured number of cells.
    TableTooLarge { cells: usize, limit: usize },
    /// A dynamic programming grid with zero cells per unit of capacity.
    InvalidGridScale { scale: u32 },
}

impl Display for KnapsackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KnapsackError::InvalidItem { id, cost, value } => write!(
                f,
                "invalid item '{id}': cost must be positive and finite, value non-negative and finite (cost: {cost}, value: {value})"
            ),
            KnapsackError::InvalidCapacity { capacity } => {
                write!(f, "invalid capacity {capacity}: must be non-negative and finite")
            }
            KnapsackError::UnknownStrategy { token } => write!(
                f,
                "unknown strategy '{token}', expected one of: dynamic_programming, branch_and_bound, greedy"
            ),
            KnapsackError::TableTooLarge { cells, limit } => write!(
                f,
                "dynamic programming table of {cells} cells exceeds the limit of {limit} cells"
            ),
            KnapsackError::InvalidGridScale { scale } => {
                write!(f, "invalid grid scale {scale}: must be at least one cell per unit")
            }
        }
    }
}

impl std::error::Error for KnapsackError {}
