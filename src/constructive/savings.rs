//! Savings-based route merging.
//!
//! # Algorithm
//!
//! Every customer starts on its own route (depot → customer → depot). For a
//! pair of customers the saving of serving both on one route is
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! Savings are sorted in decreasing order (stable, so equal savings keep
//! their generation order) and, for each pair on different routes whose
//! combined demand fits, the route holding `j` is merged into the route
//! holding `i`.
//!
//! # Variants
//!
//! [`SavingsConfig`] selects which pairs are scored and how routes are
//! joined. The defaults score only pairs that straddle the middle of the
//! initial route list and append the second route to the tail of the first
//! without looking at endpoints. [`SavingsPairing::AllPairs`] and
//! [`MergeRule::EndpointLink`] give the textbook formulation, where a merge
//! links the route end holding `i` to the route end holding `j`.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of customers (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::evaluation::{is_total_capacity_valid, SolutionEvaluator};
use crate::models::{Instance, Route, Solution};
use crate::{Error, Result};

/// Which customer pairs get a saving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsPairing {
    /// Customers in the first half of the initial route list paired with
    /// those in the second half.
    #[default]
    CrossHalf,
    /// Every unordered pair of distinct customers.
    AllPairs,
}

/// How two routes are joined once a merge is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeRule {
    /// Append the route holding `j`, in its current order, after the route
    /// holding `i`.
    #[default]
    TailAppend,
    /// Only merge when `i` and `j` are route endpoints; orient the routes so
    /// that `i` ends the first and `j` starts the second, then join them.
    EndpointLink,
}

/// Options for [`savings`].
///
/// # Examples
///
/// ```
/// use cvrp_construct::constructive::{MergeRule, SavingsConfig, SavingsPairing};
///
/// let classic = SavingsConfig::default()
///     .with_pairing(SavingsPairing::AllPairs)
///     .with_merge(MergeRule::EndpointLink)
///     .with_positive_only(true);
/// assert_ne!(classic, SavingsConfig::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsConfig {
    pub pairing: SavingsPairing,
    pub merge: MergeRule,
    /// Drop savings that are not strictly positive.
    pub positive_only: bool,
}

impl SavingsConfig {
    pub fn with_pairing(mut self, pairing: SavingsPairing) -> Self {
        self.pairing = pairing;
        self
    }

    pub fn with_merge(mut self, merge: MergeRule) -> Self {
        self.merge = merge;
        self
    }

    pub fn with_positive_only(mut self, positive_only: bool) -> Self {
        self.positive_only = positive_only;
        self
    }
}

/// A savings value for merging the routes of customers `i` and `j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    pub i: usize,
    pub j: usize,
    pub value: f64,
}

/// Computes savings for the pairs selected by `pairing`, in generation
/// order (unsorted).
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::{Instance, Node};
/// use cvrp_construct::distance::DistanceMatrix;
/// use cvrp_construct::constructive::{compute_savings, SavingsPairing};
///
/// let instance = Instance::new(
///     vec![Node::depot(0.0, 0.0), Node::new(3.0, 0.0, 5), Node::new(4.0, 0.0, 5)],
///     100,
///     0,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
///
/// let s = compute_savings(&instance, &dm, SavingsPairing::CrossHalf);
/// assert_eq!(s.len(), 1);
/// assert_eq!((s[0].i, s[0].j), (1, 2));
/// assert!((s[0].value - 6.0).abs() < 1e-10);
/// ```
pub fn compute_savings(
    instance: &Instance,
    distances: &DistanceMatrix,
    pairing: SavingsPairing,
) -> Vec<Saving> {
    let depot = instance.depot();
    let customers = instance.customers();
    let m = customers.len();
    let saving = |i: usize, j: usize| Saving {
        i,
        j,
        value: distances.get(depot, i) + distances.get(depot, j) - distances.get(i, j),
    };

    match pairing {
        SavingsPairing::CrossHalf => {
            let (first, second) = customers.split_at(m / 2);
            let mut out = Vec::with_capacity(first.len() * second.len());
            for &i in first {
                for &j in second {
                    out.push(saving(i, j));
                }
            }
            out
        }
        SavingsPairing::AllPairs => {
            let mut out = Vec::with_capacity(m * m.saturating_sub(1) / 2);
            for (p, &i) in customers.iter().enumerate() {
                for &j in &customers[p + 1..] {
                    out.push(saving(i, j));
                }
            }
            out
        }
    }
}

/// Where `node` sits in `route` relative to the joining end.
///
/// Returns `Some(false)` when already at that end, `Some(true)` when at the
/// opposite end (route must be reversed), `None` for an interior node.
fn orientation(route: &Route, node: usize, at_tail: bool) -> Option<bool> {
    let (near, far) = if at_tail {
        (route.last(), route.first())
    } else {
        (route.first(), route.last())
    };
    if near == Some(node) {
        Some(false)
    } else if far == Some(node) {
        Some(true)
    } else {
        None
    }
}

/// Constructs a CVRP solution by savings-based merging.
///
/// Starts with one route per customer in ascending index order, then merges
/// routes in order of decreasing savings while the combined demand fits the
/// vehicle capacity. Routes that survive keep their position in that list.
///
/// Fails with [`Error::InfeasibleNode`] if any customer's demand alone
/// exceeds capacity.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::{Instance, Node};
/// use cvrp_construct::distance::DistanceMatrix;
/// use cvrp_construct::constructive::{savings, SavingsConfig};
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
/// let solution = savings(&instance, &dm, &SavingsConfig::default()).unwrap();
/// assert_eq!(solution.num_served(), 3);
/// ```
pub fn savings(
    instance: &Instance,
    distances: &DistanceMatrix,
    config: &SavingsConfig,
) -> Result<Solution> {
    distances.check_covers(instance)?;
    let capacity = instance.capacity();
    let demand = instance.demands();
    let customers = instance.customers();

    if let Some(&node) = customers.iter().find(|&&i| demand[i] > capacity) {
        return Err(Error::InfeasibleNode {
            node,
            demand: demand[node],
            capacity,
        });
    }

    debug!(
        "savings: start customers={} capacity={} config={config:?}",
        customers.len(),
        capacity
    );

    let mut list = compute_savings(instance, distances, config.pairing);
    if config.positive_only {
        list.retain(|s| s.value > 0.0);
    }
    list.sort_by(|a, b| b.value.total_cmp(&a.value));

    // slots[k] is the k-th initial route, `None` once merged away;
    // route_of[node] is the slot currently holding `node`.
    let mut slots: Vec<Option<Route>> = customers
        .iter()
        .map(|&c| Some(Route::from(vec![c])))
        .collect();
    let mut route_of = vec![0usize; instance.num_nodes()];
    for (slot, &c) in customers.iter().enumerate() {
        route_of[c] = slot;
    }

    let mut merges = 0usize;
    for s in &list {
        let (si, sj) = (route_of[s.i], route_of[s.j]);
        if si == sj {
            continue;
        }
        let (Some(ri), Some(rj)) = (slots[si].as_ref(), slots[sj].as_ref()) else {
            continue;
        };
        if !is_total_capacity_valid([ri, rj], &demand, capacity) {
            trace!("savings: reject i={} j={} capacity", s.i, s.j);
            continue;
        }

        let (reverse_i, reverse_j) = match config.merge {
            MergeRule::TailAppend => (false, false),
            MergeRule::EndpointLink => {
                match (orientation(ri, s.i, true), orientation(rj, s.j, false)) {
                    (Some(a), Some(b)) => (a, b),
                    _ => {
                        trace!("savings: reject i={} j={} interior", s.i, s.j);
                        continue;
                    }
                }
            }
        };

        let Some(mut moved) = slots[sj].take() else {
            continue;
        };
        if reverse_j {
            moved.reverse();
        }
        for &node in moved.nodes() {
            route_of[node] = si;
        }
        if let Some(target) = slots[si].as_mut() {
            if reverse_i {
                target.reverse();
            }
            target.append(&mut moved);
        }
        merges += 1;
        trace!("savings: merge i={} j={} value={:.3}", s.i, s.j, s.value);
    }

    let solution = Solution::from(slots.into_iter().flatten().collect::<Vec<_>>());
    SolutionEvaluator::new(instance, distances)?.validate(&solution)?;
    debug!(
        "savings: done savings={} merges={merges} routes={}",
        list.len(),
        solution.num_routes()
    );
    Ok(solution)
}
