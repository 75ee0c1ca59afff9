#![deny(missing_docs)]
#![doc = "Core traits and data types for the graph-opt solver services."]

use serde::{Deserialize, Serialize};

pub mod errors;
mod backend;
mod model;
pub mod rng;

pub use backend::{OptimalSolution, SolveOptions, SolveOutcome, SolverBackend};
pub use errors::{ErrorInfo, GoptError};
pub use model::{Constraint, LinearExpr, ModelSpec, Relation, Sense, VarId, VarKind};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a node within a flow network.
///
/// The wire format addresses flow nodes by integers; the raw representation
/// is kept opaque so callers cannot confuse node identifiers with variable
/// indices or color indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}
