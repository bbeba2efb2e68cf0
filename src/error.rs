//! Error type shared by every constructor and evaluator.

use thiserror::Error as ThisError;

/// Errors raised while validating inputs, constructing or evaluating solutions.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Vehicle capacity is zero or negative.
    #[error("vehicle capacity must be positive, got {capacity}")]
    InvalidCapacity { capacity: i32 },

    /// Depot index does not address a node.
    #[error("depot index {depot} out of range for {num_nodes} nodes")]
    InvalidDepot { depot: usize, num_nodes: usize },

    /// A node whose demand alone exceeds vehicle capacity.
    #[error("node {node} has demand {demand} exceeding vehicle capacity {capacity}")]
    InfeasibleNode {
        node: usize,
        demand: i32,
        capacity: i32,
    },

    /// An empty route was found in a solution.
    #[error("route {route_index} is empty")]
    InvalidRoute { route_index: usize },

    /// The routes do not visit every customer exactly once.
    #[error(
        "solution does not partition the customers: missing {missing:?}, \
         duplicated {duplicated:?}, foreign {foreign:?}"
    )]
    DuplicateOrMissingNode {
        missing: Vec<usize>,
        duplicated: Vec<usize>,
        foreign: Vec<usize>,
    },

    /// A route carries more demand than the vehicle capacity.
    #[error("route {route_index} carries load {load} over capacity {capacity}")]
    CapacityExceeded {
        route_index: usize,
        load: i64,
        capacity: i32,
    },

    /// A node with negative demand.
    #[error("node {node} has negative demand {demand}")]
    InvalidDemand { node: usize, demand: i32 },

    /// Parallel input sequences or matrices of inconsistent size.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
