//! Validated CVRP instance.

use serde::{Deserialize, Serialize};

use super::Node;
use crate::{Error, Result};

/// A capacitated vehicle routing instance: nodes, one depot and a capacity
/// shared by every vehicle.
///
/// Construction validates capacity, depot range and demands, so the
/// constructors can trust an `Instance` without re-checking.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::{Instance, Node};
///
/// let instance = Instance::new(
///     vec![Node::depot(0.0, 0.0), Node::new(3.0, 4.0, 10), Node::new(6.0, 8.0, 20)],
///     100,
///     0,
/// )
/// .unwrap();
/// assert_eq!(instance.num_nodes(), 3);
/// assert_eq!(instance.customers(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    nodes: Vec<Node>,
    capacity: i32,
    depot: usize,
}

#[derive(Deserialize)]
struct RawInstance {
    nodes: Vec<Node>,
    capacity: i32,
    depot: usize,
}

impl TryFrom<RawInstance> for Instance {
    type Error = Error;

    fn try_from(raw: RawInstance) -> Result<Self> {
        Instance::new(raw.nodes, raw.capacity, raw.depot)
    }
}

impl Instance {
    /// Creates an instance after checking capacity, depot and demands.
    pub fn new(nodes: Vec<Node>, capacity: i32, depot: usize) -> Result<Self> {
        if capacity <= 0 {
            return Err(Error::InvalidCapacity { capacity });
        }
        if depot >= nodes.len() {
            return Err(Error::InvalidDepot {
                depot,
                num_nodes: nodes.len(),
            });
        }
        if let Some((node, n)) = nodes.iter().enumerate().find(|(_, n)| n.demand() < 0) {
            return Err(Error::InvalidDemand {
                node,
                demand: n.demand(),
            });
        }
        Ok(Self {
            nodes,
            capacity,
            depot,
        })
    }

    /// Creates an instance from parallel coordinate and demand sequences, the
    /// shape produced by instance-file loaders.
    pub fn from_coordinates(
        xs: &[f64],
        ys: &[f64],
        demand: &[i32],
        capacity: i32,
        depot: usize,
    ) -> Result<Self> {
        for len in [ys.len(), demand.len()] {
            if len != xs.len() {
                return Err(Error::DimensionMismatch {
                    expected: xs.len(),
                    actual: len,
                });
            }
        }
        let nodes = xs
            .iter()
            .zip(ys)
            .zip(demand)
            .map(|((&x, &y), &d)| Node::new(x, y, d))
            .collect();
        Self::new(nodes, capacity, depot)
    }

    /// All nodes, depot included.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn node(&self, i: usize) -> &Node {
        &self.nodes[i]
    }

    /// Total number of nodes, depot included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of customers (nodes other than the depot).
    pub fn num_customers(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Depot index.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Demand of node `i`.
    pub fn demand(&self, i: usize) -> i32 {
        self.nodes[i].demand()
    }

    /// Demand table indexed by node.
    pub fn demands(&self) -> Vec<i32> {
        self.nodes.iter().map(Node::demand).collect()
    }

    /// Customer indices in ascending order.
    pub fn customers(&self) -> Vec<usize> {
        (0..self.nodes.len()).filter(|&i| i != self.depot).collect()
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> i64 {
        self.customers().iter().map(|&i| i64::from(self.demand(i))).sum()
    }
}
