//! Euclidean distances between nodes.
//!
//! Provides a dense distance matrix computed from node coordinates.

mod matrix;

pub use matrix::DistanceMatrix;
