use std::collections::BTreeMap;

use gopt_core::errors::{ErrorInfo, GoptError};
use gopt_graph::FlowArc;
use serde::{Deserialize, Serialize};

/// Max-flow request as it arrives over the wire.
///
/// Capacities are keyed `"i,j"`; [`parse_arc_key`] turns them into
/// structured arcs before any model is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxFlowRequest {
    /// Directed arc list as `[from, to]` pairs.
    pub graph: Vec<(u64, u64)>,
    /// Capacity per arc, keyed `"from,to"`.
    pub capacities: BTreeMap<String, f64>,
    /// Source node.
    pub source: u64,
    /// Sink node.
    pub sink: u64,
}

/// Max-flow response mirrored back with `"i,j"` keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxFlowResponse {
    /// Total flow delivered from source to sink.
    pub max_flow: f64,
    /// Flow routed over each arc.
    pub flows: BTreeMap<String, f64>,
}

/// Graph-coloring request: an n×n 0/1 adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoringRequest {
    /// Adjacency matrix; the diagonal is ignored.
    pub adjacency_matrix: Vec<Vec<u8>>,
}

/// Graph-coloring response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoringResponse {
    /// The chromatic number of the graph.
    pub chromatic_number: usize,
    /// Color per node, indexed by node id.
    pub colored_graph: Vec<Option<usize>>,
}

/// Wire form of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable failure description.
    pub error: String,
}

/// Liveness probe payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Fixed service banner.
    pub status: String,
    /// Name of the solver backend in use.
    pub backend: String,
}

/// Parses an `"i,j"` capacity key into a structured arc.
pub fn parse_arc_key(key: &str) -> Result<FlowArc, GoptError> {
    let mut parts = key.split(',');
    if let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) {
        let from = from.trim().parse::<u64>();
        let to = to.trim().parse::<u64>();
        if let (Ok(from), Ok(to)) = (from, to) {
            return Ok(FlowArc::from_raw(from, to));
        }
    }
    Err(GoptError::Input(
        ErrorInfo::new("invalid-arc-key", "capacity keys must look like \"from,to\"")
            .with_context("key", key),
    ))
}

/// Formats a structured arc back into its `"i,j"` wire key.
pub fn format_arc_key(arc: FlowArc) -> String {
    format!("{},{}", arc.from.as_raw(), arc.to.as_raw())
}
