use std::collections::BTreeMap;

use gopt_core::errors::{ErrorInfo, GoptError};
use gopt_core::{
    LinearExpr, ModelSpec, NodeId, Relation, Sense, SolveOptions, SolveOutcome, SolverBackend,
    VarId,
};
use gopt_graph::{FlowArc, FlowNetwork};

/// Optimal flow assignment for a network.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlowSolution {
    /// Total flow delivered from the source to the sink.
    pub value: f64,
    /// Flow routed over each arc, within `[0, capacity]`.
    pub flows: BTreeMap<FlowArc, f64>,
}

/// Builds the max-flow linear program for a network.
///
/// One continuous variable per arc bounded by its capacity; arcs entering
/// the source are pinned to zero regardless of whether the input lists any;
/// every node other than source and sink conserves flow; the objective
/// maximizes the total flow leaving the source. Variables are laid out in
/// arc listing order.
pub fn build_max_flow_model(network: &FlowNetwork) -> Result<ModelSpec, GoptError> {
    let mut model = ModelSpec::new("max-flow");
    let mut vars: Vec<VarId> = Vec::with_capacity(network.num_arcs());
    for arc in network.arcs() {
        let capacity = network.capacity(*arc).ok_or_else(|| {
            GoptError::Graph(
                ErrorInfo::new("missing-capacity", "arc has no capacity entry")
                    .with_context("from", arc.from.as_raw())
                    .with_context("to", arc.to.as_raw()),
            )
        })?;
        vars.push(model.add_continuous_var(0.0, capacity)?);
    }

    for (idx, arc) in network.arcs().iter().enumerate() {
        if arc.to == network.source() {
            model.add_constraint(LinearExpr::sum([vars[idx]]), Relation::Eq, 0.0)?;
        }
    }

    for node in network.nodes() {
        if node == network.source() || node == network.sink() {
            continue;
        }
        let expr = balance_expr(network, &vars, node);
        if !expr.is_empty() {
            model.add_constraint(expr, Relation::Eq, 0.0)?;
        }
    }

    let mut objective = LinearExpr::empty();
    for (idx, arc) in network.arcs().iter().enumerate() {
        if arc.from == network.source() {
            objective.add_term(vars[idx], 1.0);
        }
    }
    model.set_objective(objective, Sense::Maximize)?;
    Ok(model)
}

/// Net inflow expression for a node; self-loops cancel to nothing.
fn balance_expr(network: &FlowNetwork, vars: &[VarId], node: NodeId) -> LinearExpr {
    let mut coefficients: BTreeMap<VarId, f64> = BTreeMap::new();
    for (idx, arc) in network.arcs().iter().enumerate() {
        if arc.to == node {
            *coefficients.entry(vars[idx]).or_insert(0.0) += 1.0;
        }
        if arc.from == node {
            *coefficients.entry(vars[idx]).or_insert(0.0) -= 1.0;
        }
    }
    let mut expr = LinearExpr::empty();
    for (var, coefficient) in coefficients {
        if coefficient != 0.0 {
            expr.add_term(var, coefficient);
        }
    }
    expr
}

/// Computes the maximum flow of a network through the provided backend.
///
/// A network with no arcs short-circuits to zero flow. Any backend outcome
/// other than optimal is terminal for the request: the linear relaxation is
/// always feasible (the zero flow), so a non-optimal answer means the
/// engine failed, not the network.
pub fn solve_max_flow(
    network: &FlowNetwork,
    backend: &dyn SolverBackend,
    options: &SolveOptions,
) -> Result<MaxFlowSolution, GoptError> {
    if network.num_arcs() == 0 {
        return Ok(MaxFlowSolution {
            value: 0.0,
            flows: BTreeMap::new(),
        });
    }

    let model = build_max_flow_model(network)?;
    log::debug!(
        "max-flow model built: arcs={} constraints={}",
        network.num_arcs(),
        model.num_constraints()
    );

    match backend.solve(&model, options)? {
        SolveOutcome::Optimal(solution) => {
            if solution.values.len() != network.num_arcs() {
                return Err(GoptError::Backend(
                    ErrorInfo::new("short-solution", "backend returned too few variable values")
                        .with_context("expected", network.num_arcs())
                        .with_context("got", solution.values.len()),
                ));
            }
            let flows = network
                .arcs()
                .iter()
                .copied()
                .zip(solution.values.iter().copied())
                .collect();
            Ok(MaxFlowSolution {
                value: solution.objective,
                flows,
            })
        }
        SolveOutcome::Infeasible => Err(GoptError::Backend(
            ErrorInfo::new("no-optimal-solution", "no optimal flow was found")
                .with_hint("the zero flow is always feasible; this indicates an engine failure"),
        )),
        SolveOutcome::TimedOut => Err(GoptError::Backend(ErrorInfo::new(
            "solve-timeout",
            "time limit reached before an optimal flow was proven",
        ))),
    }
}

/// Returns the net inflow (inflow minus outflow) at every node other than
/// the source and sink. A conservative assignment has all-zero residuals.
pub fn conservation_residuals(
    network: &FlowNetwork,
    flows: &BTreeMap<FlowArc, f64>,
) -> BTreeMap<NodeId, f64> {
    let mut residuals = BTreeMap::new();
    for node in network.nodes() {
        if node == network.source() || node == network.sink() {
            continue;
        }
        let inflow: f64 = network
            .arcs_into(node)
            .map(|arc| flows.get(&arc).copied().unwrap_or(0.0))
            .sum();
        let outflow: f64 = network
            .arcs_from(node)
            .map(|arc| flows.get(&arc).copied().unwrap_or(0.0))
            .sum();
        residuals.insert(node, inflow - outflow);
    }
    residuals
}
