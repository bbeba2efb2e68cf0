//! Domain model types for capacitated vehicle routing.
//!
//! Provides nodes with coordinates and demand, a validated instance that
//! fixes the depot and vehicle capacity, routes as ordered customer
//! sequences, and solutions as sets of routes.

mod generator;
mod instance;
mod node;
mod route;
mod solution;

pub use generator::{generate_instance, GeneratorConfig};
pub use instance::Instance;
pub use node::Node;
pub use route::Route;
pub use solution::Solution;
