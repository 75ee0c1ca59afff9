use gopt_core::errors::{ErrorInfo, GoptError};
use gopt_core::{
    ModelSpec, OptimalSolution, Relation, Sense, SolveOptions, SolveOutcome, SolverBackend,
    VarKind,
};
use microlp::{ComparisonOp, OptimizationDirection, Problem};

/// Pure-Rust simplex + branch-and-bound backend.
///
/// Carries no native dependencies, which makes it the default engine. Two
/// advisory inputs are not supported and are ignored with a debug record:
/// warm-start hints and the per-solve time limit.
#[derive(Debug, Default, Clone, Copy)]
pub struct MicrolpBackend;

impl MicrolpBackend {
    /// Creates the backend.
    pub fn new() -> Self {
        Self
    }
}

impl SolverBackend for MicrolpBackend {
    fn name(&self) -> &str {
        "microlp"
    }

    fn solve(
        &self,
        model: &ModelSpec,
        options: &SolveOptions,
    ) -> Result<SolveOutcome, GoptError> {
        if options.time_limit_secs.is_some() {
            log::debug!("microlp cannot interrupt a solve; time limit ignored");
        }
        if !model.hints().is_empty() {
            log::debug!(
                "microlp has no warm-start support; {} hints ignored",
                model.hints().len()
            );
        }

        let direction = match model.objective() {
            Some((_, Sense::Maximize)) => OptimizationDirection::Maximize,
            _ => OptimizationDirection::Minimize,
        };

        let mut objective_coefficients = vec![0.0; model.num_vars()];
        if let Some((expr, _)) = model.objective() {
            for (var, coefficient) in expr.terms() {
                objective_coefficients[var.as_index()] += coefficient;
            }
        }

        let mut problem = Problem::new(direction);
        let vars: Vec<microlp::Variable> = model
            .vars()
            .iter()
            .enumerate()
            .map(|(idx, kind)| match kind {
                VarKind::Continuous { lower, upper } => {
                    problem.add_var(objective_coefficients[idx], (*lower, *upper))
                }
                VarKind::Binary => problem.add_integer_var(objective_coefficients[idx], (0, 1)),
            })
            .collect();

        for constraint in model.constraints() {
            let terms: Vec<(microlp::Variable, f64)> = constraint
                .expr
                .terms()
                .iter()
                .map(|(var, coefficient)| (vars[var.as_index()], *coefficient))
                .collect();
            let op = match constraint.relation {
                Relation::Eq => ComparisonOp::Eq,
                Relation::Le => ComparisonOp::Le,
                Relation::Ge => ComparisonOp::Ge,
            };
            problem.add_constraint(terms, op, constraint.rhs);
        }

        match problem.solve() {
            Ok(solution) => {
                let values = vars.iter().map(|var| solution[*var]).collect();
                Ok(SolveOutcome::Optimal(OptimalSolution {
                    objective: solution.objective(),
                    values,
                }))
            }
            Err(microlp::Error::Infeasible) => Ok(SolveOutcome::Infeasible),
            Err(err) => Err(GoptError::Backend(
                ErrorInfo::new("engine-failure", "microlp failed to solve the model")
                    .with_context("model", model.name())
                    .with_hint(err.to_string()),
            )),
        }
    }
}
