#![deny(missing_docs)]

//! Flow network modeler: translates a capacitated directed graph into the
//! max-flow linear program and extracts the optimal assignment.

mod model;

pub use model::{build_max_flow_model, conservation_residuals, solve_max_flow, MaxFlowSolution};
