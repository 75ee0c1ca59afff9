//! Structured error types shared across graph-opt crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`GoptError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the graph-opt services.
///
/// Intermediate solver infeasibility is not an error; it is reported through
/// [`crate::SolveOutcome::Infeasible`] and drives the chromatic search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GoptError {
    /// Malformed request payloads, rejected before any model is built.
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Structural graph violations (inconsistent capacities, bad matrices).
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Linear model construction misuse (bad bounds, unknown variables).
    #[error("model error: {0}")]
    Model(ErrorInfo),
    /// Solver backend failures: engine errors, timeouts, resource limits.
    #[error("backend error: {0}")]
    Backend(ErrorInfo),
    /// Search-engine invariant violations (bound range exhausted).
    #[error("search error: {0}")]
    Search(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl GoptError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GoptError::Input(info)
            | GoptError::Graph(info)
            | GoptError::Model(info)
            | GoptError::Backend(info)
            | GoptError::Search(info)
            | GoptError::Serde(info) => info,
        }
    }

    /// Returns whether the error was caused by the request rather than the
    /// service (a 400-class failure at the API boundary).
    pub fn is_caller_fault(&self) -> bool {
        matches!(self, GoptError::Input(_) | GoptError::Graph(_))
    }
}
