use gopt_core::errors::{ErrorInfo, GoptError};
use gopt_core::{
    ModelSpec, OptimalSolution, Relation, Sense, SolveOptions, SolveOutcome, SolverBackend,
    VarKind,
};
use highs::{HighsModelStatus, RowProblem};

/// HiGHS backend: branch-and-cut over the native HiGHS library.
///
/// Honors the per-solve time limit. Warm-start hints are ignored (the safe
/// HiGHS bindings expose no MIP start), which is allowed: hints are advisory.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighsBackend;

impl HighsBackend {
    /// Creates the backend.
    pub fn new() -> Self {
        Self
    }
}

impl SolverBackend for HighsBackend {
    fn name(&self) -> &str {
        "highs"
    }

    fn solve(
        &self,
        model: &ModelSpec,
        options: &SolveOptions,
    ) -> Result<SolveOutcome, GoptError> {
        if !model.hints().is_empty() {
            log::debug!(
                "highs adapter has no MIP-start plumbing; {} hints ignored",
                model.hints().len()
            );
        }

        let mut objective_coefficients = vec![0.0; model.num_vars()];
        let mut sense = highs::Sense::Minimise;
        if let Some((expr, direction)) = model.objective() {
            if direction == Sense::Maximize {
                sense = highs::Sense::Maximise;
            }
            for (var, coefficient) in expr.terms() {
                objective_coefficients[var.as_index()] += coefficient;
            }
        }

        let mut problem = RowProblem::default();
        let cols: Vec<highs::Col> = model
            .vars()
            .iter()
            .enumerate()
            .map(|(idx, kind)| match kind {
                VarKind::Continuous { lower, upper } => {
                    problem.add_column(objective_coefficients[idx], *lower..=*upper)
                }
                VarKind::Binary => {
                    problem.add_integer_column(objective_coefficients[idx], 0.0..=1.0)
                }
            })
            .collect();

        for constraint in model.constraints() {
            let factors: Vec<(highs::Col, f64)> = constraint
                .expr
                .terms()
                .iter()
                .map(|(var, coefficient)| (cols[var.as_index()], *coefficient))
                .collect();
            match constraint.relation {
                Relation::Eq => problem.add_row(constraint.rhs..=constraint.rhs, &factors),
                Relation::Le => problem.add_row(..=constraint.rhs, &factors),
                Relation::Ge => problem.add_row(constraint.rhs.., &factors),
            };
        }

        let mut engine = problem.optimise(sense);
        if let Some(limit) = options.time_limit_secs {
            engine.set_option("time_limit", limit);
        }
        let solved = engine.solve();

        match solved.status() {
            HighsModelStatus::Optimal => {
                let values: Vec<f64> = solved.get_solution().columns().to_vec();
                let objective = objective_coefficients
                    .iter()
                    .zip(values.iter())
                    .map(|(coefficient, value)| coefficient * value)
                    .sum();
                Ok(SolveOutcome::Optimal(OptimalSolution { objective, values }))
            }
            HighsModelStatus::Infeasible => Ok(SolveOutcome::Infeasible),
            HighsModelStatus::ReachedTimeLimit => Ok(SolveOutcome::TimedOut),
            status => Err(GoptError::Backend(
                ErrorInfo::new("engine-failure", "highs terminated without a usable status")
                    .with_context("model", model.name())
                    .with_context("status", format!("{status:?}")),
            )),
        }
    }
}
