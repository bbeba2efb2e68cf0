//! Constructive heuristics for building CVRP solutions.
//!
//! - [`nearest_neighbour`] — Greedy nearest-neighbour route building, O(n²)
//! - [`savings`] — Savings-based merging of singleton routes (Clarke & Wright, 1964), O(n² log n)

mod nearest_neighbour;
mod savings;

pub use nearest_neighbour::{nearest_neighbour, NearestNeighbour, Step};
pub use savings::{compute_savings, savings, MergeRule, Saving, SavingsConfig, SavingsPairing};
