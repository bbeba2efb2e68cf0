//! Capacity feasibility, route distance and solution validation.

mod capacity;
mod evaluator;

pub use capacity::is_total_capacity_valid;
pub use evaluator::{total_distance, SolutionEvaluator};
