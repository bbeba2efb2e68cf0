//! Dense distance matrix.

use crate::models::{Instance, Node};
use crate::{Error, Result};

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per instance so the constructors' O(n²) distance lookups
/// are plain reads.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Node;
/// use cvrp_construct::distance::DistanceMatrix;
///
/// let nodes = vec![
///     Node::depot(0.0, 0.0),
///     Node::new(3.0, 4.0, 10),
///     Node::new(6.0, 8.0, 20),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Euclidean distance matrix of the given nodes.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let n = nodes.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = nodes[i].distance_to(&nodes[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes the Euclidean distance matrix of an instance's nodes.
    pub fn from_instance(instance: &Instance) -> Self {
        Self::from_nodes(instance.nodes())
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Fails with [`Error::DimensionMismatch`] unless this matrix covers
    /// exactly the instance's nodes.
    pub fn check_covers(&self, instance: &Instance) -> Result<()> {
        if self.size != instance.num_nodes() {
            return Err(Error::DimensionMismatch {
                expected: instance.num_nodes(),
                actual: self.size,
            });
        }
        Ok(())
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate closest to `from`, with its distance.
    ///
    /// Ties keep the candidate that comes first, so iterating candidates in
    /// ascending order breaks ties by lowest index. Returns `None` if there
    /// are no candidates.
    pub fn nearest_neighbour<I>(&self, from: usize, candidates: I) -> Option<(usize, f64)>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut best: Option<(usize, f64)> = None;
        for c in candidates {
            let d = self.get(from, c);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((c, d)),
            }
        }
        best
    }
}
