use serde::{Deserialize, Serialize};

use crate::errors::GoptError;
use crate::model::{ModelSpec, VarId};

/// Per-solve options forwarded to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SolveOptions {
    /// Wall-clock limit for a single solve, in seconds. Backends without
    /// interruption support may ignore it; a limit that fires is reported as
    /// [`SolveOutcome::TimedOut`], never as infeasibility.
    #[serde(default)]
    pub time_limit_secs: Option<f64>,
}

/// Variable assignment returned for an optimally solved model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalSolution {
    /// Objective value at the optimum (zero for pure feasibility models).
    pub objective: f64,
    /// Variable values indexed by [`VarId::as_index`].
    pub values: Vec<f64>,
}

impl OptimalSolution {
    /// Returns the value assigned to the provided variable.
    pub fn value(&self, var: VarId) -> Option<f64> {
        self.values.get(var.as_index()).copied()
    }
}

/// Terminal status of a backend solve.
///
/// `Infeasible` is a proven result and a normal value for feasibility
/// queries. `TimedOut` means feasibility is unknown; callers must not narrow
/// search bounds from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// The backend proved optimality (or feasibility, absent an objective).
    Optimal(OptimalSolution),
    /// The backend proved that no assignment satisfies the constraints.
    Infeasible,
    /// The configured time limit fired before a proof was found.
    TimedOut,
}

/// Capability contract for LP/MILP solving engines.
///
/// Implementations receive a complete [`ModelSpec`] and return a terminal
/// [`SolveOutcome`]; engine-internal failures surface as
/// [`GoptError::Backend`]. Implementations must be stateless across calls so
/// concurrent requests can share one backend behind an `Arc`.
pub trait SolverBackend: Send + Sync {
    /// Returns the backend name for diagnostics.
    fn name(&self) -> &str;

    /// Solves the model, honoring `options` on a best-effort basis.
    fn solve(&self, model: &ModelSpec, options: &SolveOptions)
        -> Result<SolveOutcome, GoptError>;
}
