//! Nearest-neighbour constructive heuristic.
//!
//! Builds routes greedily: starting from the depot, always visit the nearest
//! unrouted customer whose demand still fits. A route closes when its load
//! reaches capacity exactly or when no remaining customer fits; the next
//! route starts again from the depot.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.
//!
//! # Tie-breaking
//!
//! The unrouted pool is kept in ascending index order and a candidate only
//! replaces the incumbent when strictly closer, so equidistant candidates
//! resolve to the lowest index.

use log::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::evaluation::SolutionEvaluator;
use crate::models::{Instance, Route, Solution};
use crate::{Error, Result};

/// Outcome of a single [`NearestNeighbour::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// `node` was appended to the current route, `distance` away from the
    /// previous position. `closed` is set when this brought the load to
    /// exactly the vehicle capacity and the route was closed.
    Visited {
        node: usize,
        distance: f64,
        closed: bool,
    },
    /// No remaining customer fits; the current route was closed.
    Closed,
    /// Every customer is routed and the last route is flushed.
    Finished,
}

/// Incremental nearest-neighbour construction.
///
/// Holds the unrouted pool, the route under construction, its load and the
/// current position, and advances them one decision at a time.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::{Instance, Node};
/// use cvrp_construct::distance::DistanceMatrix;
/// use cvrp_construct::constructive::{NearestNeighbour, Step};
///
/// let instance = Instance::new(
///     vec![Node::depot(0.0, 0.0), Node::new(1.0, 0.0, 1), Node::new(2.0, 0.0, 1)],
///     5,
///     0,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// let mut nn = NearestNeighbour::new(&instance, &dm).unwrap();
///
/// assert_eq!(
///     nn.step().unwrap(),
///     Step::Visited { node: 1, distance: 1.0, closed: false }
/// );
/// assert_eq!(nn.position(), 1);
/// assert_eq!(nn.load(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NearestNeighbour<'a> {
    instance: &'a Instance,
    distances: &'a DistanceMatrix,
    unrouted: Vec<usize>,
    routes: Vec<Route>,
    route: Route,
    load: i32,
    position: usize,
}

impl<'a> NearestNeighbour<'a> {
    /// Starts construction with every customer unrouted and an empty route
    /// at the depot.
    pub fn new(instance: &'a Instance, distances: &'a DistanceMatrix) -> Result<Self> {
        distances.check_covers(instance)?;
        Ok(Self {
            instance,
            distances,
            unrouted: instance.customers(),
            routes: Vec::new(),
            route: Route::new(),
            load: 0,
            position: instance.depot(),
        })
    }

    /// Customers not yet placed on a route, ascending.
    pub fn unrouted(&self) -> &[usize] {
        &self.unrouted
    }

    /// Routes closed so far.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The route under construction.
    pub fn current_route(&self) -> &Route {
        &self.route
    }

    /// Load of the route under construction.
    pub fn load(&self) -> i32 {
        self.load
    }

    /// Last visited node, or the depot at the start of a route.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Nearest unrouted customer that fits the remaining capacity.
    fn nearest_feasible(&self) -> Option<(usize, f64)> {
        let remaining = self.instance.capacity() - self.load;
        let candidates = self
            .unrouted
            .iter()
            .copied()
            .filter(|&i| self.instance.demand(i) <= remaining);
        self.distances.nearest_neighbour(self.position, candidates)
    }

    fn close_route(&mut self) {
        let route = std::mem::take(&mut self.route);
        trace!(
            "nn: close route #{} len={} load={}",
            self.routes.len(),
            route.len(),
            self.load
        );
        self.routes.push(route);
        self.load = 0;
        self.position = self.instance.depot();
    }

    /// Performs one decision of the construction.
    ///
    /// Fails with [`Error::InfeasibleNode`] when no customer fits an empty
    /// route, i.e. every remaining customer's demand exceeds capacity.
    pub fn step(&mut self) -> Result<Step> {
        if self.unrouted.is_empty() {
            if self.route.is_empty() {
                return Ok(Step::Finished);
            }
            self.close_route();
            return Ok(Step::Closed);
        }

        match self.nearest_feasible() {
            Some((node, distance)) => {
                if let Ok(pos) = self.unrouted.binary_search(&node) {
                    self.unrouted.remove(pos);
                }
                self.route.push(node);
                self.load += self.instance.demand(node);
                self.position = node;
                trace!("nn: visit node={node} dist={distance:.3} load={}", self.load);

                let closed = self.load == self.instance.capacity();
                if closed {
                    self.close_route();
                }
                Ok(Step::Visited {
                    node,
                    distance,
                    closed,
                })
            }
            None if self.route.is_empty() => {
                let node = self.unrouted[0];
                Err(Error::InfeasibleNode {
                    node,
                    demand: self.instance.demand(node),
                    capacity: self.instance.capacity(),
                })
            }
            None => {
                self.close_route();
                Ok(Step::Closed)
            }
        }
    }

    /// Steps until every customer is routed and returns the routes.
    pub fn run(mut self) -> Result<Solution> {
        while self.step()? != Step::Finished {}
        Ok(Solution::from(self.routes))
    }
}

/// Constructs a CVRP solution using the nearest-neighbour heuristic.
///
/// The returned solution is checked to partition the customers into
/// capacity-feasible routes.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::{Instance, Node};
/// use cvrp_construct::distance::DistanceMatrix;
/// use cvrp_construct::constructive::nearest_neighbour;
///
/// let instance = Instance::new(
///     vec![
///         Node::depot(0.0, 0.0),
///         Node::new(1.0, 0.0, 10),
///         Node::new(2.0, 0.0, 10),
///         Node::new(3.0, 0.0, 10),
///     ],
///     30,
///     0,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
///
/// let solution = nearest_neighbour(&instance, &dm).unwrap();
/// assert_eq!(solution.to_nested(), vec![vec![1, 2, 3]]);
/// ```
pub fn nearest_neighbour(instance: &Instance, distances: &DistanceMatrix) -> Result<Solution> {
    debug!(
        "nn: start customers={} capacity={}",
        instance.num_customers(),
        instance.capacity()
    );
    let solution = NearestNeighbour::new(instance, distances)?.run()?;
    SolutionEvaluator::new(instance, distances)?.validate(&solution)?;
    debug!("nn: done routes={}", solution.num_routes());
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::total_distance;
    use crate::models::Node;

    fn line_instance(capacity: i32) -> (Instance, DistanceMatrix) {
        let instance = Instance::new(
            vec![
                Node::depot(0.0, 0.0),
                Node::new(1.0, 0.0, 10),
                Node::new(2.0, 0.0, 10),
                Node::new(3.0, 0.0, 10),
            ],
            capacity,
            0,
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&instance);
        (instance, dm)
    }

    fn cross_instance() -> (Instance, DistanceMatrix) {
        let instance = Instance::new(
            vec![
                Node::depot(0.0, 0.0),
                Node::new(1.0, 0.0, 1),
                Node::new(2.0, 0.0, 1),
                Node::new(0.0, 1.0, 1),
                Node::new(0.0, 2.0, 1),
            ],
            2,
            0,
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&instance);
        (instance, dm)
    }

    #[test]
    fn test_nn_all_on_one_route() {
        let (inst, dm) = line_instance(100);
        let sol = nearest_neighbour(&inst, &dm).expect("feasible");
        assert_eq!(sol.to_nested(), vec![vec![1, 2, 3]]);
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
        let d = total_distance(&inst, &dm, &sol).expect("valid");
        assert!((d - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_split_routes() {
        let (inst, dm) = line_instance(20);
        let sol = nearest_neighbour(&inst, &dm).expect("feasible");
        // Capacity 20: first route takes 1, 2 (load 20 closes it), second takes 3
        assert_eq!(sol.to_nested(), vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_nn_cross_scenario() {
        let (inst, dm) = cross_instance();
        let sol = nearest_neighbour(&inst, &dm).expect("feasible");
        assert_eq!(sol.to_nested(), vec![vec![1, 2], vec![3, 4]]);
        let d = total_distance(&inst, &dm, &sol).expect("valid");
        assert!((d - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_step_trace() {
        let (inst, dm) = cross_instance();
        let mut nn = NearestNeighbour::new(&inst, &dm).expect("sizes match");
        assert_eq!(nn.unrouted(), &[1, 2, 3, 4]);
        assert_eq!(nn.position(), 0);

        assert_eq!(
            nn.step().expect("step"),
            Step::Visited {
                node: 1,
                distance: 1.0,
                closed: false
            }
        );
        assert_eq!(nn.current_route().nodes(), &[1]);
        assert_eq!(
            nn.step().expect("step"),
            Step::Visited {
                node: 2,
                distance: 1.0,
                closed: true
            }
        );
        assert!(nn.current_route().is_empty());
        assert_eq!(nn.load(), 0);
        assert_eq!(nn.position(), 0);
        assert_eq!(nn.routes().len(), 1);
        assert_eq!(nn.unrouted(), &[3, 4]);
    }

    #[test]
    fn test_nn_closes_when_nothing_fits() {
        let instance = Instance::new(
            vec![
                Node::depot(0.0, 0.0),
                Node::new(1.0, 0.0, 3),
                Node::new(2.0, 0.0, 3),
            ],
            4,
            0,
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&instance);
        let mut nn = NearestNeighbour::new(&instance, &dm).expect("sizes match");
        assert!(matches!(
            nn.step().expect("step"),
            Step::Visited { node: 1, closed: false, .. }
        ));
        // Load 3, node 2 needs 3 more but only 1 remains
        assert_eq!(nn.step().expect("step"), Step::Closed);
        assert!(matches!(
            nn.step().expect("step"),
            Step::Visited { node: 2, .. }
        ));
        // Pool exhausted: flush the in-progress route
        assert_eq!(nn.step().expect("step"), Step::Closed);
        assert_eq!(nn.step().expect("step"), Step::Finished);
        assert_eq!(nn.routes().len(), 2);
    }

    #[test]
    fn test_nn_tie_breaks_by_lowest_index() {
        let instance = Instance::new(
            vec![
                Node::depot(0.0, 0.0),
                Node::new(0.0, 1.0, 1),
                Node::new(1.0, 0.0, 1),
                Node::new(-1.0, 0.0, 1),
            ],
            1,
            0,
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&instance);
        let sol = nearest_neighbour(&instance, &dm).expect("feasible");
        assert_eq!(sol.to_nested(), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_nn_infeasible_node() {
        let instance = Instance::new(
            vec![
                Node::depot(0.0, 0.0),
                Node::new(1.0, 0.0, 2),
                Node::new(5.0, 0.0, 11),
            ],
            10,
            0,
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&instance);
        assert_eq!(
            nearest_neighbour(&instance, &dm),
            Err(Error::InfeasibleNode {
                node: 2,
                demand: 11,
                capacity: 10
            })
        );
    }

    #[test]
    fn test_nn_empty() {
        let instance = Instance::new(vec![Node::depot(0.0, 0.0)], 100, 0).expect("valid");
        let dm = DistanceMatrix::from_instance(&instance);
        let sol = nearest_neighbour(&instance, &dm).expect("feasible");
        assert_eq!(sol.num_routes(), 0);
    }

    #[test]
    fn test_nn_depot_not_first() {
        let instance = Instance::new(
            vec![
                Node::new(1.0, 0.0, 1),
                Node::new(5.0, 0.0, 1),
                Node::depot(0.0, 0.0),
            ],
            10,
            2,
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&instance);
        let sol = nearest_neighbour(&instance, &dm).expect("feasible");
        assert_eq!(sol.to_nested(), vec![vec![0, 1]]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let instance = Instance::new(
            vec![
                Node::depot(0.0, 0.0),
                Node::new(10.0, 0.0, 5),
                Node::new(1.0, 0.0, 5),
            ],
            100,
            0,
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&instance);
        let sol = nearest_neighbour(&instance, &dm).expect("feasible");
        assert_eq!(sol.to_nested(), vec![vec![2, 1]]);
    }

    #[test]
    fn test_nn_rejects_wrong_matrix() {
        let (inst, _) = line_instance(10);
        let dm = DistanceMatrix::new(3);
        assert!(matches!(
            nearest_neighbour(&inst, &dm),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
