//! Exact and heuristic solvers for the 0/1 knapsack problem.
//!
//! Three interchangeable strategies share a single item/solution model:
//! exact dynamic programming over a discretized capacity, exact best-first
//! branch-and-bound with a fractional-relaxation bound, and a greedy
//! ratio heuristic. [`solvers::solve`] dispatches between them.

/// Entities to model the 0/1 knapsack problem
pub mod entities;

/// Error type shared by all entities and solvers
pub mod error;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// The solving strategies and the facade dispatching between them
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::KnapsackError;
