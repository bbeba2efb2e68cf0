//! Node type: a customer or the depot.

use serde::{Deserialize, Serialize};

/// A location in a routing instance.
///
/// Nodes are identified by their position in the instance's node list.
/// One of them is the depot, conventionally with zero demand.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Node;
///
/// let depot = Node::depot(35.0, 35.0);
/// assert_eq!(depot.demand(), 0);
///
/// let c = Node::new(41.0, 49.0, 10);
/// assert_eq!(c.demand(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    x: f64,
    y: f64,
    demand: i32,
}

impl Node {
    /// Creates a node at `(x, y)` with the given demand.
    pub fn new(x: f64, y: f64, demand: i32) -> Self {
        Self { x, y, demand }
    }

    /// Creates a zero-demand node at the given coordinates.
    pub fn depot(x: f64, y: f64) -> Self {
        Self::new(x, y, 0)
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Units consumed against vehicle capacity when visited.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
