//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of customer indices served by one vehicle.
///
/// The depot is not stored: every route implicitly starts and ends there.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Route;
///
/// let mut route = Route::new();
/// route.push(3);
/// route.push(1);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.nodes(), &[3, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    nodes: Vec<usize>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a customer to the end of this route.
    pub fn push(&mut self, node: usize) {
        self.nodes.push(node);
    }

    /// Moves every customer of `other` to the end of this route, keeping
    /// their order.
    pub fn append(&mut self, other: &mut Route) {
        self.nodes.append(&mut other.nodes);
    }

    /// Reverses the visit order in place.
    pub fn reverse(&mut self) {
        self.nodes.reverse();
    }

    /// Customer indices in visit order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// First customer, if any.
    pub fn first(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Last customer, if any.
    pub fn last(&self) -> Option<usize> {
        self.nodes.last().copied()
    }

    /// Returns `true` if `node` is visited by this route.
    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(&node)
    }

    /// Number of customers (excluding depot).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if this route visits no customer.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total demand of this route's customers.
    pub fn load(&self, demand: &[i32]) -> i64 {
        self.nodes.iter().map(|&i| i64::from(demand[i])).sum()
    }

    /// Consumes the route and returns its customer indices.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }
}

impl From<Vec<usize>> for Route {
    fn from(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.first(), None);
        assert_eq!(r.last(), None);
    }

    #[test]
    fn test_route_append_keeps_order() {
        let mut a = Route::from(vec![1, 4]);
        let mut b = Route::from(vec![3, 2]);
        a.append(&mut b);
        assert_eq!(a.nodes(), &[1, 4, 3, 2]);
        assert!(b.is_empty());
        assert_eq!(a.first(), Some(1));
        assert_eq!(a.last(), Some(2));
    }

    #[test]
    fn test_route_load() {
        let demand = [0, 5, 7, 11];
        let r = Route::from(vec![3, 1]);
        assert_eq!(r.load(&demand), 16);
        assert!(r.contains(3));
        assert!(!r.contains(2));
    }

    #[test]
    fn test_route_serializes_as_sequence() {
        let r = Route::from(vec![2, 1]);
        assert_eq!(serde_json::to_string(&r).expect("serialize"), "[2,1]");
    }
}
