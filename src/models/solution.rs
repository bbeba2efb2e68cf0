//! Solution type.

use serde::{Deserialize, Serialize};

use super::Route;

/// A set of routes produced by a constructor or loaded as a reference
/// solution.
///
/// Serializes as a plain list of lists, e.g. `[[1,2],[3,4]]`.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Solution;
///
/// let sol = Solution::from_routes(vec![vec![1, 2], vec![3]]);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 3);
/// assert_eq!(sol.to_nested(), vec![vec![1, 2], vec![3]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Builds a solution from nested customer sequences.
    pub fn from_routes(routes: Vec<Vec<usize>>) -> Self {
        Self {
            routes: routes.into_iter().map(Route::from).collect(),
        }
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Copies the routes into nested vectors, as consumed by plotting tools.
    pub fn to_nested(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(|r| r.nodes().to_vec()).collect()
    }

    /// Returns a copy with every route's visit order reversed.
    pub fn reversed(&self) -> Self {
        let routes = self
            .routes
            .iter()
            .map(|r| {
                let mut r = r.clone();
                r.reverse();
                r
            })
            .collect();
        Self { routes }
    }
}

impl From<Vec<Route>> for Solution {
    fn from(routes: Vec<Route>) -> Self {
        Self { routes }
    }
}
