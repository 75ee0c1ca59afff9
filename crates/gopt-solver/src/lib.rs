#![deny(missing_docs)]

//! Concrete [`SolverBackend`] adapters for the graph-opt services.
//!
//! [`MicrolpBackend`] is the default engine; [`HighsBackend`] is available
//! behind the `highs` cargo feature for deployments that can carry the
//! native library.

use std::sync::Arc;

use gopt_core::SolverBackend;

#[cfg(feature = "highs")]
mod highs;
mod microlp;

#[cfg(feature = "highs")]
pub use crate::highs::HighsBackend;
pub use crate::microlp::MicrolpBackend;

/// Returns the default shared backend for service construction.
pub fn default_backend() -> Arc<dyn SolverBackend> {
    Arc::new(MicrolpBackend::new())
}
