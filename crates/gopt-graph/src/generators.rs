use std::collections::BTreeMap;

use gopt_core::errors::{ErrorInfo, GoptError};
use gopt_core::rng::RngHandle;
use gopt_core::NodeId;
use rand::Rng;

use crate::flow::{FlowArc, FlowNetwork};
use crate::simple::SimpleGraph;

/// Generates a G(n, p) undirected graph with deterministic randomness.
pub fn gen_gnp(n_nodes: usize, edge_probability: f64, rng: &mut RngHandle) -> Result<SimpleGraph, GoptError> {
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(GoptError::Input(
            ErrorInfo::new("invalid-probability", "edge probability must lie in [0, 1]")
                .with_context("p", edge_probability),
        ));
    }
    let mut edges = Vec::new();
    for u in 0..n_nodes {
        for v in (u + 1)..n_nodes {
            if rng.inner_mut().gen_bool(edge_probability) {
                edges.push((u, v));
            }
        }
    }
    SimpleGraph::from_edges(n_nodes, &edges)
}

/// Generates a layered flow network: `layers` ranks of `width` nodes between
/// a single source and sink, fully connected rank to rank with random
/// integer capacities in `1..=capacity_max`.
pub fn gen_layered_network(
    layers: usize,
    width: usize,
    capacity_max: u32,
    rng: &mut RngHandle,
) -> Result<FlowNetwork, GoptError> {
    if layers == 0 || width == 0 || capacity_max == 0 {
        return Err(GoptError::Input(
            ErrorInfo::new(
                "degenerate-network",
                "layered networks need at least one layer, one node per layer and positive capacities",
            )
            .with_context("layers", layers)
            .with_context("width", width),
        ));
    }
    let node = |layer: usize, slot: usize| NodeId::from_raw(1 + (layer * width + slot) as u64);
    let source = NodeId::from_raw(0);
    let sink = NodeId::from_raw(1 + (layers * width) as u64);

    let mut arcs = Vec::new();
    let mut capacities = BTreeMap::new();
    let mut push = |arcs: &mut Vec<FlowArc>, from: NodeId, to: NodeId, rng: &mut RngHandle| {
        let arc = FlowArc { from, to };
        arcs.push(arc);
        capacities.insert(arc, f64::from(rng.inner_mut().gen_range(1..=capacity_max)));
    };

    for slot in 0..width {
        push(&mut arcs, source, node(0, slot), rng);
    }
    for layer in 0..layers.saturating_sub(1) {
        for from_slot in 0..width {
            for to_slot in 0..width {
                push(&mut arcs, node(layer, from_slot), node(layer + 1, to_slot), rng);
            }
        }
    }
    for slot in 0..width {
        push(&mut arcs, node(layers - 1, slot), sink, rng);
    }

    FlowNetwork::new(arcs, capacities, source, sink)
}
