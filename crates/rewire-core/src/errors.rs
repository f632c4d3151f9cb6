//! Structured error types shared across rewiring crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to most [`RewireError`] variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (shapes, indices, etc.).
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
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
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

/// Counters reported when a run runs out of attempts before reaching its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// Successful double edge swaps performed before the budget ran out.
    pub achieved: u64,
    /// Successful swaps the run needed.
    pub required: u64,
    /// Attempts rejected because the constraint values did not match.
    pub constraint_skipped: u64,
    /// Attempts consumed, successful or not.
    pub attempts: u64,
    /// Attempt ceiling in force for the run.
    pub max_attempts: u64,
}

impl Display for BudgetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} rewires done ({} skipped due to constraints) after {} of {} attempts",
            self.achieved, self.required, self.constraint_skipped, self.attempts, self.max_attempts
        )
    }
}

/// Canonical error type for the rewiring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum RewireError {
    /// Matrix shape violations (non-square graph, mismatched constraint).
    #[error("shape error: {0}")]
    Shape(ErrorInfo),
    /// Wrong number of positional inputs handed to the host adapter.
    #[error("argument count error: {0}")]
    ArgumentCount(ErrorInfo),
    /// Positional input of the wrong kind or value.
    #[error("argument type error: {0}")]
    ArgumentType(ErrorInfo),
    /// Attempt budget reached before the required number of rewires.
    #[error("rewire budget exhausted: {0}")]
    BudgetExhausted(BudgetReport),
    /// Edge list and matrix disagree.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Invalid run configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization, parsing and I/O errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl RewireError {
    /// Returns the structured payload, if the variant carries one.
    pub fn info(&self) -> Option<&ErrorInfo> {
        match self {
            RewireError::Shape(info)
            | RewireError::ArgumentCount(info)
            | RewireError::ArgumentType(info)
            | RewireError::Graph(info)
            | RewireError::Config(info)
            | RewireError::Serde(info) => Some(info),
            RewireError::BudgetExhausted(_) => None,
        }
    }

    /// Returns the stable error code of the variant.
    pub fn code(&self) -> &str {
        match self {
            RewireError::BudgetExhausted(_) => "budget-exhausted",
            other => other.info().map(|info| info.code.as_str()).unwrap_or(""),
        }
    }

    /// Returns the budget counters when the run ran out of attempts.
    pub fn budget_report(&self) -> Option<&BudgetReport> {
        match self {
            RewireError::BudgetExhausted(report) => Some(report),
            _ => None,
        }
    }
}
