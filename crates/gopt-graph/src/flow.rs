use std::collections::{BTreeMap, BTreeSet};

use gopt_core::errors::{ErrorInfo, GoptError};
use gopt_core::NodeId;
use serde::{Deserialize, Serialize};

/// Directed arc of a flow network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlowArc {
    /// Tail node the arc leaves.
    pub from: NodeId,
    /// Head node the arc enters.
    pub to: NodeId,
}

impl FlowArc {
    /// Creates an arc from raw node identifiers.
    pub fn from_raw(from: u64, to: u64) -> Self {
        Self {
            from: NodeId::from_raw(from),
            to: NodeId::from_raw(to),
        }
    }
}

/// Capacitated directed graph with a designated source and sink.
///
/// Construction validates that arcs and capacities describe the same arc
/// set, that capacities are finite and non-negative, and that no arc is
/// listed twice. Arc order is preserved so downstream variable layouts stay
/// deterministic. The network is request-scoped working state; the wire
/// representation lives at the API boundary, so it carries no serde form of
/// its own.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNetwork {
    arcs: Vec<FlowArc>,
    capacities: BTreeMap<FlowArc, f64>,
    source: NodeId,
    sink: NodeId,
}

impl FlowNetwork {
    /// Builds a network from an ordered arc list and an arc-keyed capacity
    /// map.
    pub fn new(
        arcs: Vec<FlowArc>,
        capacities: BTreeMap<FlowArc, f64>,
        source: NodeId,
        sink: NodeId,
    ) -> Result<Self, GoptError> {
        let mut seen = BTreeSet::new();
        for arc in &arcs {
            if !seen.insert(*arc) {
                return Err(graph_error("duplicate-arc", "arc listed more than once")
                    .with_arc(*arc));
            }
            match capacities.get(arc) {
                None => {
                    return Err(graph_error("missing-capacity", "arc has no capacity entry")
                        .with_arc(*arc));
                }
                Some(capacity) if !capacity.is_finite() || *capacity < 0.0 => {
                    return Err(graph_error(
                        "invalid-capacity",
                        "capacities must be finite and non-negative",
                    )
                    .with_arc(*arc));
                }
                Some(_) => {}
            }
        }
        for arc in capacities.keys() {
            if !seen.contains(arc) {
                return Err(graph_error(
                    "unknown-arc-capacity",
                    "capacity entry does not match any listed arc",
                )
                .with_arc(*arc));
            }
        }
        Ok(Self {
            arcs,
            capacities,
            source,
            sink,
        })
    }

    /// Returns the arcs in their original order.
    pub fn arcs(&self) -> &[FlowArc] {
        &self.arcs
    }

    /// Returns the number of arcs.
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// Returns the capacity of the provided arc.
    pub fn capacity(&self, arc: FlowArc) -> Option<f64> {
        self.capacities.get(&arc).copied()
    }

    /// Returns the designated source node.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the designated sink node.
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// Returns every node referenced by an arc, in ascending order.
    ///
    /// The source and sink are not implicitly included: a network whose
    /// endpoints never appear in an arc simply has no flow through them.
    pub fn nodes(&self) -> BTreeSet<NodeId> {
        self.arcs
            .iter()
            .flat_map(|arc| [arc.from, arc.to])
            .collect()
    }

    /// Returns the arcs leaving the provided node, in listing order.
    pub fn arcs_from(&self, node: NodeId) -> impl Iterator<Item = FlowArc> + '_ {
        self.arcs.iter().copied().filter(move |arc| arc.from == node)
    }

    /// Returns the arcs entering the provided node, in listing order.
    pub fn arcs_into(&self, node: NodeId) -> impl Iterator<Item = FlowArc> + '_ {
        self.arcs.iter().copied().filter(move |arc| arc.to == node)
    }
}

fn graph_error(code: impl Into<String>, message: impl Into<String>) -> GoptError {
    GoptError::Graph(ErrorInfo::new(code, message))
}

trait ArcContextExt {
    fn with_arc(self, arc: FlowArc) -> GoptError;
}

impl ArcContextExt for GoptError {
    fn with_arc(self, arc: FlowArc) -> GoptError {
        match self {
            GoptError::Graph(info) => GoptError::Graph(
                info.with_context("from", arc.from.as_raw())
                    .with_context("to", arc.to.as_raw()),
            ),
            other => other,
        }
    }
}
