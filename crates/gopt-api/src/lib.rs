#![deny(missing_docs)]

//! Service boundary for the graph-opt pipelines: wire-format DTOs, request
//! validation, and the stateless façade an HTTP layer dispatches into.

mod dto;
mod hash;
mod service;

pub use dto::{
    format_arc_key, parse_arc_key, ColoringRequest, ColoringResponse, ErrorResponse,
    HealthResponse, MaxFlowRequest, MaxFlowResponse,
};
pub use hash::stable_hash_string;
pub use service::{ErrorClass, GraphOptService, ServiceConfig, ServiceError};
