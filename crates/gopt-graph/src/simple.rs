use std::collections::BTreeSet;

use gopt_core::errors::{ErrorInfo, GoptError};
use serde::{Deserialize, Serialize};

/// Undirected simple graph over nodes `0..n-1`.
///
/// Built from an adjacency matrix or an explicit edge list. Self-loops are
/// ignored and parallel edges collapse; the stored edge list keeps `u < v`
/// pairs in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleGraph {
    n: usize,
    edges: Vec<(usize, usize)>,
    adjacency: Vec<BTreeSet<usize>>,
}

impl SimpleGraph {
    /// Builds a graph from an n×n 0/1 adjacency matrix.
    ///
    /// The diagonal is ignored and only the upper triangle is read, so an
    /// asymmetric matrix resolves in favor of its `i < j` entries. Non-square
    /// matrices and entries other than 0/1 are rejected before any model is
    /// built.
    pub fn from_adjacency_matrix(matrix: &[Vec<u8>]) -> Result<Self, GoptError> {
        let n = matrix.len();
        for (row_idx, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(input_error("non-square-matrix", "adjacency matrix must be square")
                    .with_row(row_idx, row.len(), n));
            }
            if let Some(col_idx) = row.iter().position(|value| *value > 1) {
                return Err(input_error(
                    "non-binary-entry",
                    "adjacency matrix entries must be 0 or 1",
                )
                .with_entry(row_idx, col_idx, row[col_idx]));
            }
        }
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if matrix[i][j] == 1 {
                    edges.push((i, j));
                }
            }
        }
        Ok(Self::from_sorted_edges(n, edges))
    }

    /// Builds a graph from an explicit edge list over `0..n-1`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GoptError> {
        let mut canonical = BTreeSet::new();
        for (u, v) in edges.iter().copied() {
            if u >= n || v >= n {
                return Err(input_error("node-out-of-range", "edge endpoint exceeds node count")
                    .with_edge(u, v, n));
            }
            if u == v {
                continue;
            }
            canonical.insert((u.min(v), u.max(v)));
        }
        Ok(Self::from_sorted_edges(n, canonical.into_iter().collect()))
    }

    fn from_sorted_edges(n: usize, edges: Vec<(usize, usize)>) -> Self {
        let mut adjacency = vec![BTreeSet::new(); n];
        for (u, v) in edges.iter().copied() {
            adjacency[u].insert(v);
            adjacency[v].insert(u);
        }
        Self { n, edges, adjacency }
    }

    /// Returns the number of nodes.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns whether the graph has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns the canonical `u < v` edge list in ascending order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the neighbors of a node in ascending order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Returns the degree of a node.
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency.get(node).map(BTreeSet::len).unwrap_or(0)
    }

    /// Returns the maximum degree over all nodes (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }
}

fn input_error(code: impl Into<String>, message: impl Into<String>) -> GoptError {
    GoptError::Input(ErrorInfo::new(code, message))
}

trait MatrixContextExt {
    fn with_row(self, row: usize, width: usize, expected: usize) -> GoptError;
    fn with_entry(self, row: usize, col: usize, value: u8) -> GoptError;
    fn with_edge(self, u: usize, v: usize, n: usize) -> GoptError;
}

impl MatrixContextExt for GoptError {
    fn with_row(self, row: usize, width: usize, expected: usize) -> GoptError {
        match self {
            GoptError::Input(info) => GoptError::Input(
                info.with_context("row", row)
                    .with_context("width", width)
                    .with_context("expected", expected),
            ),
            other => other,
        }
    }

    fn with_entry(self, row: usize, col: usize, value: u8) -> GoptError {
        match self {
            GoptError::Input(info) => GoptError::Input(
                info.with_context("row", row)
                    .with_context("col", col)
                    .with_context("value", value),
            ),
            other => other,
        }
    }

    fn with_edge(self, u: usize, v: usize, n: usize) -> GoptError {
        match self {
            GoptError::Input(info) => GoptError::Input(
                info.with_context("u", u)
                    .with_context("v", v)
                    .with_context("nodes", n),
            ),
            other => other,
        }
    }
}
