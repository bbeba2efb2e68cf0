//! # cvrp-construct
//!
//! Construction heuristics for the Capacitated Vehicle Routing Problem.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Instance, Route, Solution, instance generator)
//! - [`distance`] — Euclidean distance matrix
//! - [`evaluation`] — Capacity feasibility, route distance and solution validation
//! - [`constructive`] — Constructive heuristics (Nearest Neighbour, Savings)
//!
//! ## Example
//!
//! ```
//! use cvrp_construct::constructive::{nearest_neighbour, savings, SavingsConfig};
//! use cvrp_construct::distance::DistanceMatrix;
//! use cvrp_construct::evaluation::total_distance;
//! use cvrp_construct::models::Instance;
//!
//! let instance = Instance::from_coordinates(
//!     &[0.0, 1.0, 2.0, 0.0, 0.0],
//!     &[0.0, 0.0, 0.0, 1.0, 2.0],
//!     &[0, 1, 1, 1, 1],
//!     2,
//!     0,
//! )
//! .unwrap();
//! let dm = DistanceMatrix::from_instance(&instance);
//!
//! let nn = nearest_neighbour(&instance, &dm).unwrap();
//! assert_eq!(nn.to_nested(), vec![vec![1, 2], vec![3, 4]]);
//! assert!((total_distance(&instance, &dm, &nn).unwrap() - 8.0).abs() < 1e-10);
//!
//! let sv = savings(&instance, &dm, &SavingsConfig::default()).unwrap();
//! assert_eq!(sv.num_served(), 4);
//! ```

pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod models;

pub use error::{Error, Result};
