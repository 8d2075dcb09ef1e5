//! Immutable weighted undirected graph.
//!
//! A [`Graph`] owns a validated edge list plus an adjacency index built once at
//! construction. Both MST engines borrow it read-only, so a single instance can
//! be handed to each engine in turn without cloning.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::{EdgeDefect, GraphError};

/// A weighted undirected edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    pub(crate) const fn canonical(left: usize, right: usize, weight: f64) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the endpoints as a `(source, target)` pair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (usize, usize) { (self.source, self.target) }
}

impl Eq for Edge {}

/// Orders by weight, then lower endpoint, then higher endpoint.
///
/// Weights are compared with [`f64::total_cmp`]; in a simple graph the
/// endpoint pair is unique, so the order is total and reproducible.
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A vertex adjacent to some other vertex, with the connecting edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    node: usize,
    weight: f64,
    edge: usize,
}

impl Neighbour {
    /// Returns the adjacent vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node(&self) -> usize { self.node }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the index of the connecting edge in [`Graph::edges`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_index(&self) -> usize { self.edge }
}

/// A simple weighted undirected graph over vertices `0..node_count`.
///
/// # Examples
/// ```
/// use spanforest_core::Graph;
///
/// let graph = Graph::new(3, [(0, 1, 1.5), (2, 1, 0.5)]).expect("graph is valid");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.edges()[1].endpoints(), (1, 2));
/// assert_eq!(graph.neighbours(1).len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Neighbour>>,
}

impl Graph {
    /// Builds a graph from `(u, v, weight)` triples.
    ///
    /// Endpoints are canonicalised to `(min, max)`; edge order is preserved.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `node_count == 0`,
    /// [`GraphError::InvalidEdge`] for self-loops or endpoints outside
    /// `0..node_count`, [`GraphError::DuplicateEdge`] when an unordered pair
    /// repeats, and [`GraphError::InvalidWeight`] for negative or non-finite
    /// weights.
    pub fn new(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self, GraphError> {
        if node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let edges = edges.into_iter();
        let mut accepted = Vec::with_capacity(edges.size_hint().0);
        let mut seen = HashSet::with_capacity(edges.size_hint().0);
        for (left, right, weight) in edges {
            let edge = validate_edge(left, right, weight, node_count)?;
            if !seen.insert(edge.endpoints()) {
                return Err(GraphError::DuplicateEdge {
                    left: edge.source,
                    right: edge.target,
                });
            }
            accepted.push(edge);
        }

        Ok(Self::from_edges(node_count, accepted))
    }

    fn from_edges(node_count: usize, edges: Vec<Edge>) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for (index, edge) in edges.iter().enumerate() {
            adjacency[edge.source].push(Neighbour {
                node: edge.target,
                weight: edge.weight,
                edge: index,
            });
            adjacency[edge.target].push(Neighbour {
                node: edge.source,
                weight: edge.weight,
                edge: index,
            });
        }
        Self {
            node_count,
            edges,
            adjacency,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in construction order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the vertices adjacent to `node` in edge-discovery order.
    ///
    /// Unknown vertex ids yield an empty slice.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[Neighbour] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Returns the edge at `index` in [`Graph::edges`], if any.
    #[must_use]
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Returns `true` when the unordered pair `{left, right}` is an edge.
    #[must_use]
    pub fn contains_edge(&self, left: usize, right: usize) -> bool {
        self.neighbours(left)
            .iter()
            .any(|neighbour| neighbour.node == right)
    }

    /// Returns the maximum number of edges a simple graph on `node_count`
    /// vertices can hold, or `None` when `n(n-1)/2` overflows.
    #[must_use]
    pub const fn max_edges(node_count: usize) -> Option<usize> {
        let below = node_count.saturating_sub(1);
        // One of n and n - 1 is even, so halve that one before multiplying.
        if node_count % 2 == 0 {
            (node_count / 2).checked_mul(below)
        } else {
            node_count.checked_mul(below / 2)
        }
    }

    /// Counts connected components; isolated vertices count individually.
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut sets = crate::union_find::DisjointSet::make_set(self.node_count);
        for edge in &self.edges {
            sets.union(edge.source, edge.target);
        }
        sets.components()
    }
}

fn validate_edge(
    left: usize,
    right: usize,
    weight: f64,
    node_count: usize,
) -> Result<Edge, GraphError> {
    if left >= node_count || right >= node_count {
        return Err(GraphError::InvalidEdge {
            left,
            right,
            node_count,
            defect: EdgeDefect::OutOfBounds,
        });
    }
    if left == right {
        return Err(GraphError::InvalidEdge {
            left,
            right,
            node_count,
            defect: EdgeDefect::SelfLoop,
        });
    }
    if !weight.is_finite() || weight < 0.0 {
        return Err(GraphError::InvalidWeight {
            left,
            right,
            weight,
        });
    }
    Ok(Edge::canonical(left, right, weight))
}
