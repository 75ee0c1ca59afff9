use gopt_core::errors::{ErrorInfo, GoptError};
use gopt_core::{LinearExpr, ModelSpec, OptimalSolution, Relation, VarId};
use gopt_graph::SimpleGraph;

/// Variable layout of a k-coloring feasibility model.
///
/// Variables are laid out vertex-major: `x[v][j]` sits at index `v * k + j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringVars {
    n: usize,
    k: usize,
    vars: Vec<VarId>,
}

impl ColoringVars {
    /// Returns the variable standing for "vertex `v` takes color `j`".
    pub fn var(&self, v: usize, j: usize) -> VarId {
        self.vars[v * self.k + j]
    }

    /// Returns the number of color classes in the model.
    pub fn k(&self) -> usize {
        self.k
    }
}

/// Builds the k-coloring feasibility model for a graph.
///
/// One binary variable per (vertex, color) pair; each vertex takes exactly
/// one color; adjacent vertices never share a color class. No objective is
/// set: the query is pure feasibility.
pub fn build_k_coloring_model(
    graph: &SimpleGraph,
    k: usize,
) -> Result<(ModelSpec, ColoringVars), GoptError> {
    if k == 0 {
        return Err(GoptError::Model(ErrorInfo::new(
            "no-color-classes",
            "a feasibility model needs at least one color class",
        )));
    }
    let n = graph.n();
    let mut model = ModelSpec::new(format!("k-coloring-{k}"));
    let vars: Vec<VarId> = (0..n * k).map(|_| model.add_binary_var()).collect();
    let layout = ColoringVars { n, k, vars };

    for v in 0..n {
        let exactly_one = LinearExpr::sum((0..k).map(|j| layout.var(v, j)));
        model.add_constraint(exactly_one, Relation::Eq, 1.0)?;
    }
    for (u, v) in graph.edges().iter().copied() {
        for j in 0..k {
            let conflict = LinearExpr::sum([layout.var(u, j), layout.var(v, j)]);
            model.add_constraint(conflict, Relation::Le, 1.0)?;
        }
    }

    Ok((model, layout))
}

/// Reads a coloring out of a feasible assignment.
///
/// A vertex's color is the first class whose indicator exceeds 0.5; exactly
/// one such class exists for any assignment that satisfies the model, so a
/// vertex without one means the backend returned garbage.
pub fn extract_coloring(
    layout: &ColoringVars,
    solution: &OptimalSolution,
) -> Result<Vec<usize>, GoptError> {
    let mut coloring = Vec::with_capacity(layout.n);
    for v in 0..layout.n {
        let color = (0..layout.k).find(|j| {
            solution
                .value(layout.var(v, *j))
                .is_some_and(|value| value > 0.5)
        });
        match color {
            Some(color) => coloring.push(color),
            None => {
                return Err(GoptError::Backend(
                    ErrorInfo::new("unassigned-vertex", "vertex has no selected color class")
                        .with_context("vertex", v)
                        .with_context("k", layout.k),
                ));
            }
        }
    }
    Ok(coloring)
}
