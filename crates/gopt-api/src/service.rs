use std::collections::BTreeMap;
use std::sync::Arc;

use gopt_color::{solve_chromatic_number, SearchConfig};
use gopt_core::errors::{ErrorInfo, GoptError};
use gopt_core::{NodeId, SolveOptions, SolverBackend};
use gopt_flow::solve_max_flow;
use gopt_graph::{FlowArc, FlowNetwork, SimpleGraph};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dto::{
    format_arc_key, parse_arc_key, ColoringRequest, ColoringResponse, ErrorResponse,
    HealthResponse, MaxFlowRequest, MaxFlowResponse,
};
use crate::hash::stable_hash_string;

/// Service-level configuration, one section per pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Options for the single max-flow solve.
    #[serde(default)]
    pub flow_solve: SolveOptions,
    /// Chromatic search tunables.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Failure class the transport layer maps onto a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorClass {
    /// The request itself is malformed (a 400-equivalent signal).
    BadRequest,
    /// The service failed to produce an answer (a 500-equivalent signal).
    Internal,
}

/// Failure returned by the service façade.
///
/// Internal failures carry a generic message: engine detail is logged, not
/// leaked into the response contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ServiceError {
    /// Status-code class for the transport layer.
    pub class: ErrorClass,
    /// Response-safe failure description.
    pub message: String,
}

impl From<GoptError> for ServiceError {
    fn from(err: GoptError) -> Self {
        if err.is_caller_fault() {
            return Self {
                class: ErrorClass::BadRequest,
                message: err.to_string(),
            };
        }
        log::error!("request failed: {err}");
        let message = match err {
            GoptError::Backend(_) => "no optimal solution found",
            _ => "internal service error",
        };
        Self {
            class: ErrorClass::Internal,
            message: message.to_string(),
        }
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        Self {
            error: err.message.clone(),
        }
    }
}

/// Stateless façade over both optimization pipelines.
///
/// Holds only the shared backend and configuration; every request builds
/// fresh model state, so one instance serves concurrent callers without
/// locking.
pub struct GraphOptService {
    backend: Arc<dyn SolverBackend>,
    config: ServiceConfig,
}

impl GraphOptService {
    /// Creates a service over the provided backend and configuration.
    pub fn new(backend: Arc<dyn SolverBackend>, config: ServiceConfig) -> Self {
        Self { backend, config }
    }

    /// Creates a service with default configuration.
    pub fn with_defaults(backend: Arc<dyn SolverBackend>) -> Self {
        Self::new(backend, ServiceConfig::default())
    }

    /// Computes the maximum flow for a wire-format request.
    pub fn max_flow(&self, request: &MaxFlowRequest) -> Result<MaxFlowResponse, ServiceError> {
        log::info!(
            "maxflow request {}: arcs={}",
            fingerprint(request),
            request.graph.len()
        );
        let network = flow_network_from_request(request)?;
        let solution = solve_max_flow(&network, self.backend.as_ref(), &self.config.flow_solve)?;
        Ok(MaxFlowResponse {
            max_flow: solution.value,
            flows: solution
                .flows
                .into_iter()
                .map(|(arc, flow)| (format_arc_key(arc), flow))
                .collect(),
        })
    }

    /// Computes the chromatic number for a wire-format request.
    pub fn color_graph(
        &self,
        request: &ColoringRequest,
    ) -> Result<ColoringResponse, ServiceError> {
        log::info!(
            "coloring request {}: nodes={}",
            fingerprint(request),
            request.adjacency_matrix.len()
        );
        let graph = SimpleGraph::from_adjacency_matrix(&request.adjacency_matrix)?;
        let solution = solve_chromatic_number(&graph, self.backend.as_ref(), &self.config.search)?;
        Ok(ColoringResponse {
            chromatic_number: solution.chromatic_number,
            colored_graph: solution.coloring.into_iter().map(Some).collect(),
        })
    }

    /// Liveness probe.
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "graph-opt service is running".to_string(),
            backend: self.backend.name().to_string(),
        }
    }
}

fn fingerprint<T: serde::Serialize>(request: &T) -> String {
    stable_hash_string(request).unwrap_or_else(|_| "unavailable".to_string())
}

fn flow_network_from_request(request: &MaxFlowRequest) -> Result<FlowNetwork, GoptError> {
    let arcs: Vec<FlowArc> = request
        .graph
        .iter()
        .map(|(from, to)| FlowArc::from_raw(*from, *to))
        .collect();
    let mut capacities = BTreeMap::new();
    for (key, capacity) in &request.capacities {
        let arc = parse_arc_key(key)?;
        if capacities.insert(arc, *capacity).is_some() {
            return Err(GoptError::Input(
                ErrorInfo::new("duplicate-capacity", "two capacity keys name the same arc")
                    .with_context("key", key),
            ));
        }
    }
    FlowNetwork::new(
        arcs,
        capacities,
        NodeId::from_raw(request.source),
        NodeId::from_raw(request.sink),
    )
}
