use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, GoptError};

/// Identifier for a decision variable within a [`ModelSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VarId(usize);

impl VarId {
    /// Returns the position of the variable in the model's value vector.
    pub fn as_index(&self) -> usize {
        self.0
    }
}

/// Kind and bounds of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VarKind {
    /// Continuous variable constrained to `[lower, upper]`.
    Continuous {
        /// Lower bound (finite).
        lower: f64,
        /// Upper bound (finite, `>= lower`).
        upper: f64,
    },
    /// 0/1 integer variable.
    Binary,
}

/// Sparse linear expression over model variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
}

impl LinearExpr {
    /// Creates an expression with no terms.
    pub fn empty() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates an expression with unit coefficients over the given variables.
    pub fn sum(vars: impl IntoIterator<Item = VarId>) -> Self {
        Self {
            terms: vars.into_iter().map(|var| (var, 1.0)).collect(),
        }
    }

    /// Appends a term to the expression.
    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        self.terms.push((var, coefficient));
    }

    /// Returns the terms in insertion order.
    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    /// Returns whether the expression has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Relation between a linear expression and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Expression equals the right-hand side.
    Eq,
    /// Expression is at most the right-hand side.
    Le,
    /// Expression is at least the right-hand side.
    Ge,
}

/// Optimization direction for the model objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sense {
    /// Maximize the objective expression.
    Maximize,
    /// Minimize the objective expression.
    Minimize,
}

/// Single linear constraint of a [`ModelSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Left-hand side expression.
    pub expr: LinearExpr,
    /// Relation to the right-hand side.
    pub relation: Relation,
    /// Right-hand side constant.
    pub rhs: f64,
}

/// Complete description of an LP/MILP problem handed to a backend.
///
/// A model with no objective is a pure feasibility query; backends treat it
/// as minimizing the constant zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    name: String,
    vars: Vec<VarKind>,
    constraints: Vec<Constraint>,
    objective: Option<(LinearExpr, Sense)>,
    hints: Vec<(VarId, f64)>,
}

impl ModelSpec {
    /// Creates an empty model with the provided diagnostic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: Vec::new(),
            constraints: Vec::new(),
            objective: None,
            hints: Vec::new(),
        }
    }

    /// Returns the diagnostic name of the model.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a continuous variable bounded to `[lower, upper]`.
    pub fn add_continuous_var(&mut self, lower: f64, upper: f64) -> Result<VarId, GoptError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(model_error("non-finite-bound", "variable bounds must be finite")
                .with_bounds(lower, upper));
        }
        if lower > upper {
            return Err(model_error("inverted-bounds", "lower bound exceeds upper bound")
                .with_bounds(lower, upper));
        }
        let id = VarId(self.vars.len());
        self.vars.push(VarKind::Continuous { lower, upper });
        Ok(id)
    }

    /// Adds a 0/1 integer variable.
    pub fn add_binary_var(&mut self) -> VarId {
        let id = VarId(self.vars.len());
        self.vars.push(VarKind::Binary);
        id
    }

    /// Adds a linear constraint `expr <relation> rhs`.
    pub fn add_constraint(
        &mut self,
        expr: LinearExpr,
        relation: Relation,
        rhs: f64,
    ) -> Result<(), GoptError> {
        self.check_expr(&expr)?;
        if !rhs.is_finite() {
            return Err(model_error(
                "non-finite-rhs",
                "constraint right-hand side must be finite",
            ));
        }
        self.constraints.push(Constraint {
            expr,
            relation,
            rhs,
        });
        Ok(())
    }

    /// Sets the objective expression and direction, replacing any previous
    /// objective.
    pub fn set_objective(&mut self, expr: LinearExpr, sense: Sense) -> Result<(), GoptError> {
        self.check_expr(&expr)?;
        self.objective = Some((expr, sense));
        Ok(())
    }

    /// Records an advisory warm-start hint for a variable. Backends are free
    /// to ignore hints; they must never be required for correctness.
    pub fn set_hint(&mut self, var: VarId, value: f64) -> Result<(), GoptError> {
        self.check_var(var)?;
        if !value.is_finite() {
            return Err(model_error("non-finite-hint", "hint values must be finite")
                .with_context_var(var));
        }
        match self.hints.iter().position(|(existing, _)| *existing == var) {
            Some(idx) => self.hints[idx].1 = value,
            None => self.hints.push((var, value)),
        }
        Ok(())
    }

    /// Returns the kinds of all variables, indexed by [`VarId::as_index`].
    pub fn vars(&self) -> &[VarKind] {
        &self.vars
    }

    /// Returns the number of variables in the model.
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Returns the constraints in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns the number of constraints in the model.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Returns the objective expression and sense, if one was set.
    pub fn objective(&self) -> Option<(&LinearExpr, Sense)> {
        self.objective.as_ref().map(|(expr, sense)| (expr, *sense))
    }

    /// Returns the recorded warm-start hints.
    pub fn hints(&self) -> &[(VarId, f64)] {
        &self.hints
    }

    fn check_var(&self, var: VarId) -> Result<(), GoptError> {
        if var.as_index() >= self.vars.len() {
            return Err(model_error("unknown-variable", "variable does not belong to this model")
                .with_context_var(var));
        }
        Ok(())
    }

    fn check_expr(&self, expr: &LinearExpr) -> Result<(), GoptError> {
        for (var, coefficient) in expr.terms() {
            self.check_var(*var)?;
            if !coefficient.is_finite() {
                return Err(model_error(
                    "non-finite-coefficient",
                    "expression coefficients must be finite",
                )
                .with_context_var(*var));
            }
        }
        Ok(())
    }
}

fn model_error(code: impl Into<String>, message: impl Into<String>) -> GoptError {
    GoptError::Model(ErrorInfo::new(code, message))
}

trait ModelContextExt {
    fn with_bounds(self, lower: f64, upper: f64) -> GoptError;
    fn with_context_var(self, var: VarId) -> GoptError;
}

impl ModelContextExt for GoptError {
    fn with_bounds(self, lower: f64, upper: f64) -> GoptError {
        match self {
            GoptError::Model(info) => GoptError::Model(
                info.with_context("lower", lower).with_context("upper", upper),
            ),
            other => other,
        }
    }

    fn with_context_var(self, var: VarId) -> GoptError {
        match self {
            GoptError::Model(info) => {
                GoptError::Model(info.with_context("variable", var.as_index()))
            }
            other => other,
        }
    }
}
