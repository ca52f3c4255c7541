//! Root-finding error types.
//!
//! ┌ [`ErrorKind`]        : outcome taxonomy shared by reports and errors
//! │   ├ invalid bracket
//! │   ├ singular derivative
//! │   └ not converged (reported on the `Ok` path)
//! │
//! ├ [`RootFindingError`] : fatal failures of a single call
//! │   ├ bracket without sign change
//! │   ├ vanishing derivative (partial trace kept)
//! │   ├ non-finite f or f' evaluation (partial trace kept)
//! │   ├ non-finite starting data
//! │   └ method / parameter mismatch from `solve`
//! │
//! └ [`ConfigError`]      : invalid `tol` or `max_iter`

use serde::Serialize;
use thiserror::Error;

use super::algorithms::Method;
use super::trace::IterationRecord;


/// Outcome kinds a caller may need to render.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidBracket,
    SingularDerivative,
    NotConverged,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::InvalidBracket     => "invalid bracket",
            ErrorKind::SingularDerivative => "singular derivative",
            ErrorKind::NotConverged       => "not converged",
        };
        f.write_str(s)
    }
}


/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid `tol`: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Root-finding runtime errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no sign change on [{a}, {b}]: f(a)={f_a}, f(b)={f_b}")]
    InvalidBracket { a: f64, b: f64, f_a: f64, f_b: f64 },

    #[error("derivative vanished at x={x}, f'(x)={df_x}")]
    SingularDerivative { x: f64, df_x: f64, trace: Vec<IterationRecord> },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64, trace: Vec<IterationRecord> },

    #[error("derivative non-finite at x={x}, f'(x)={df_x}")]
    NonFiniteDerivative { x: f64, df_x: f64, trace: Vec<IterationRecord> },

    #[error("invalid `{name}`: must be finite. got {value}")]
    InvalidInput { name: &'static str, value: f64 },

    #[error("parameters incompatible with method {method}")]
    IncompatibleParams { method: Method },

    #[error("method {method} requires a derivative")]
    MissingDerivative { method: Method },
}

impl RootFindingError {
    /// Maps the error onto the [`ErrorKind`] taxonomy, if it belongs to it.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            RootFindingError::InvalidBracket { .. }     => Some(ErrorKind::InvalidBracket),
            RootFindingError::SingularDerivative { .. } => Some(ErrorKind::SingularDerivative),
            _ => None,
        }
    }

    /// Records collected before the failure. Empty for errors raised
    /// before the first pass.
    pub fn trace(&self) -> &[IterationRecord] {
        match self {
            RootFindingError::SingularDerivative  { trace, .. }
            | RootFindingError::NonFiniteEvaluation { trace, .. }
            | RootFindingError::NonFiniteDerivative { trace, .. } => trace,
            _ => &[],
        }
    }

    /// Attaches the records completed before an evaluation failed.
    pub(crate) fn with_trace(self, records: Vec<IterationRecord>) -> Self {
        match self {
            RootFindingError::NonFiniteEvaluation { x, fx, .. } =>
                RootFindingError::NonFiniteEvaluation { x, fx, trace: records },
            RootFindingError::NonFiniteDerivative { x, df_x, .. } =>
                RootFindingError::NonFiniteDerivative { x, df_x, trace: records },
            other => other,
        }
    }
}
