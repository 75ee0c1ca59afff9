use gopt_core::{
    GoptError, LinearExpr, ModelSpec, OptimalSolution, Relation, Sense, SolveOptions,
    SolveOutcome, SolverBackend,
};

/// Minimal backend that reports every model as optimal with all-zero values.
#[derive(Default)]
struct ZeroBackend;

impl SolverBackend for ZeroBackend {
    fn name(&self) -> &str {
        "zero"
    }

    fn solve(
        &self,
        model: &ModelSpec,
        _options: &SolveOptions,
    ) -> Result<SolveOutcome, GoptError> {
        Ok(SolveOutcome::Optimal(OptimalSolution {
            objective: 0.0,
            values: vec![0.0; model.num_vars()],
        }))
    }
}

fn accepts_trait_object(backend: &dyn SolverBackend) -> SolveOutcome {
    let mut model = ModelSpec::new("contract");
    let x = model.add_continuous_var(0.0, 1.0).unwrap();
    model
        .add_constraint(LinearExpr::sum([x]), Relation::Le, 1.0)
        .unwrap();
    model
        .set_objective(LinearExpr::sum([x]), Sense::Maximize)
        .unwrap();
    backend.solve(&model, &SolveOptions::default()).unwrap()
}

#[test]
fn backend_trait_is_object_safe() {
    let backend: Box<dyn SolverBackend> = Box::new(ZeroBackend::default());
    match accepts_trait_object(&*backend) {
        SolveOutcome::Optimal(solution) => assert_eq!(solution.values.len(), 1),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn optimal_solution_lookup_by_var() {
    let mut model = ModelSpec::new("lookup");
    let x = model.add_binary_var();
    let solution = OptimalSolution {
        objective: 1.0,
        values: vec![1.0],
    };
    assert_eq!(solution.value(x), Some(1.0));
}

#[test]
fn solve_options_default_has_no_limit() {
    assert_eq!(SolveOptions::default().time_limit_secs, None);
}
