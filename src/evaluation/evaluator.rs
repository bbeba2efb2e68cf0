//! Solution distance and invariant checks.

use crate::distance::DistanceMatrix;
use crate::models::{Instance, Route, Solution};
use crate::{Error, Result};

use super::is_total_capacity_valid;

/// Computes travel distance of routes and checks that a solution is a
/// capacity-feasible partition of the instance's customers.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::{Instance, Node, Solution};
/// use cvrp_construct::distance::DistanceMatrix;
/// use cvrp_construct::evaluation::SolutionEvaluator;
///
/// let instance = Instance::new(
///     vec![Node::depot(0.0, 0.0), Node::new(3.0, 4.0, 10), Node::new(6.0, 8.0, 20)],
///     100,
///     0,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// let evaluator = SolutionEvaluator::new(&instance, &dm).unwrap();
///
/// let sol = Solution::from_routes(vec![vec![1, 2]]);
/// assert!(evaluator.validate(&sol).is_ok());
/// assert!((evaluator.total_distance(&sol).unwrap() - 20.0).abs() < 1e-10);
/// ```
pub struct SolutionEvaluator<'a> {
    instance: &'a Instance,
    distances: &'a DistanceMatrix,
}

impl<'a> SolutionEvaluator<'a> {
    /// Creates an evaluator; the matrix must cover the instance's nodes.
    pub fn new(instance: &'a Instance, distances: &'a DistanceMatrix) -> Result<Self> {
        distances.check_covers(instance)?;
        Ok(Self {
            instance,
            distances,
        })
    }

    /// Distance of one route, depot legs included.
    ///
    /// Returns `None` for an empty route.
    pub fn route_distance(&self, route: &Route) -> Option<f64> {
        let depot = self.instance.depot();
        let (first, last) = (route.first()?, route.last()?);
        let inner: f64 = route
            .nodes()
            .windows(2)
            .map(|w| self.distances.get(w[0], w[1]))
            .sum();
        Some(self.distances.get(depot, first) + inner + self.distances.get(last, depot))
    }

    /// Total distance of all routes.
    ///
    /// Fails with [`Error::InvalidRoute`] if any route is empty.
    pub fn total_distance(&self, solution: &Solution) -> Result<f64> {
        solution
            .routes()
            .iter()
            .enumerate()
            .map(|(route_index, r)| {
                self.route_distance(r)
                    .ok_or(Error::InvalidRoute { route_index })
            })
            .sum()
    }

    /// Checks that every route is non-empty and within capacity, and that
    /// the routes visit each customer exactly once.
    pub fn validate(&self, solution: &Solution) -> Result<()> {
        let n = self.instance.num_nodes();
        let depot = self.instance.depot();
        let demand = self.instance.demands();
        let capacity = self.instance.capacity();

        let mut seen = vec![0u32; n];
        let mut duplicated = Vec::new();
        let mut foreign = Vec::new();

        for (route_index, route) in solution.routes().iter().enumerate() {
            if route.is_empty() {
                return Err(Error::InvalidRoute { route_index });
            }
            for &node in route.nodes() {
                if node >= n || node == depot {
                    foreign.push(node);
                    continue;
                }
                seen[node] += 1;
                if seen[node] == 2 {
                    duplicated.push(node);
                }
            }
        }

        let missing: Vec<usize> = (0..n)
            .filter(|&i| i != depot && seen[i] == 0)
            .collect();
        if !missing.is_empty() || !duplicated.is_empty() || !foreign.is_empty() {
            return Err(Error::DuplicateOrMissingNode {
                missing,
                duplicated,
                foreign,
            });
        }

        for (route_index, route) in solution.routes().iter().enumerate() {
            if !is_total_capacity_valid([route], &demand, capacity) {
                return Err(Error::CapacityExceeded {
                    route_index,
                    load: route.load(&demand),
                    capacity,
                });
            }
        }

        Ok(())
    }
}

/// Total distance of `solution` on `instance`.
///
/// Convenience wrapper around [`SolutionEvaluator::total_distance`].
pub fn total_distance(
    instance: &Instance,
    distances: &DistanceMatrix,
    solution: &Solution,
) -> Result<f64> {
    SolutionEvaluator::new(instance, distances)?.total_distance(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;

    fn setup() -> (Instance, DistanceMatrix) {
        let instance = Instance::new(
            vec![
                Node::depot(0.0, 0.0),
                Node::new(3.0, 4.0, 10),
                Node::new(6.0, 8.0, 20),
                Node::new(0.0, 10.0, 15),
            ],
            30,
            0,
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&instance);
        (instance, dm)
    }

    #[test]
    fn test_route_distance_single() {
        let (inst, dm) = setup();
        let eval = SolutionEvaluator::new(&inst, &dm).expect("sizes match");
        // depot->1 = 5.0, 1->depot = 5.0
        let d = eval.route_distance(&Route::from(vec![1])).expect("non-empty");
        assert!((d - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_distance_empty() {
        let (inst, dm) = setup();
        let eval = SolutionEvaluator::new(&inst, &dm).expect("sizes match");
        assert_eq!(eval.route_distance(&Route::new()), None);
    }

    #[test]
    fn test_total_distance_rejects_empty_route() {
        let (inst, dm) = setup();
        let sol = Solution::from_routes(vec![vec![1], vec![]]);
        assert_eq!(
            total_distance(&inst, &dm, &sol),
            Err(Error::InvalidRoute { route_index: 1 })
        );
    }

    #[test]
    fn test_total_distance_sums_routes() {
        let (inst, dm) = setup();
        let sol = Solution::from_routes(vec![vec![1, 2], vec![3]]);
        // (5 + 5 + 10) + (10 + 10)
        let d = total_distance(&inst, &dm, &sol).expect("valid routes");
        assert!((d - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_evaluator_rejects_wrong_matrix() {
        let (inst, _) = setup();
        let dm = DistanceMatrix::new(2);
        assert!(matches!(
            SolutionEvaluator::new(&inst, &dm),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_ok() {
        let (inst, dm) = setup();
        let eval = SolutionEvaluator::new(&inst, &dm).expect("sizes match");
        let sol = Solution::from_routes(vec![vec![2, 1], vec![3]]);
        assert!(eval.validate(&sol).is_ok());
    }

    #[test]
    fn test_validate_missing_duplicate_foreign() {
        let (inst, dm) = setup();
        let eval = SolutionEvaluator::new(&inst, &dm).expect("sizes match");
        let sol = Solution::from_routes(vec![vec![1, 0], vec![1, 7]]);
        assert_eq!(
            eval.validate(&sol),
            Err(Error::DuplicateOrMissingNode {
                missing: vec![2, 3],
                duplicated: vec![1],
                foreign: vec![0, 7],
            })
        );
    }

    #[test]
    fn test_validate_capacity() {
        let (inst, dm) = setup();
        let eval = SolutionEvaluator::new(&inst, &dm).expect("sizes match");
        let sol = Solution::from_routes(vec![vec![1], vec![2, 3]]);
        assert_eq!(
            eval.validate(&sol),
            Err(Error::CapacityExceeded {
                route_index: 1,
                load: 35,
                capacity: 30,
            })
        );
    }

    #[test]
    fn test_validate_empty_route() {
        let (inst, dm) = setup();
        let eval = SolutionEvaluator::new(&inst, &dm).expect("sizes match");
        let sol = Solution::from_routes(vec![vec![1, 2, 3], vec![]]);
        assert_eq!(
            eval.validate(&sol),
            Err(Error::InvalidRoute { route_index: 1 })
        );
    }
}
