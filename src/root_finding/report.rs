//! Defines the [`RootReport`] struct returned by all root-finding methods.

use serde::Serialize;

use super::algorithms::Method;
use super::errors::ErrorKind;
use super::trace::IterationRecord;


/// Reasons a root-finding method may terminate without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    ToleranceReached,
    IterationLimit,
}


/// Which stopping test was satisfied (or not).
/// - [`ToleranceReason::Residual`]
///     - All methods
///     - |f(x)| < tol
/// - [`ToleranceReason::HalfWidth`]
///     - Bisection
///     - |b - a| / 2 < tol
/// - [`ToleranceReason::StepSize`]
///     - Newton-Raphson
///     - |x_next - x| < tol
/// - [`ToleranceReason::NotReached`]
///     - All methods, alongside [`Termination::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceReason {
    Residual,
    HalfWidth,
    StepSize,
    NotReached,
}


/// Final report returned by all root-finding methods.
///
/// [`RootReport`]
/// - `method`      : method that produced the report
/// - `root`        : root estimate (best effort when not converged)
/// - `residual`    : f(`root`)
/// - `iterations`  : loop passes executed, equal to `trace.len()`
/// - `evaluations` : evaluations of f and f' combined
/// - `converged`   : `true` iff a stopping test was met
/// - `error`       : `Some(ErrorKind::NotConverged)` when `max_iter` ran out
/// - `termination` : why the loop stopped ([`Termination`])
/// - `tolerance`   : which test was met ([`ToleranceReason`])
/// - `trace`       : one [`IterationRecord`] per pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootReport {
    pub method      : Method,
    pub root        : f64,
    pub residual    : f64,
    pub iterations  : usize,
    pub evaluations : usize,
    pub converged   : bool,
    pub error       : Option<ErrorKind>,
    pub termination : Termination,
    pub tolerance   : ToleranceReason,
    pub trace       : Vec<IterationRecord>,
}

impl RootReport {
    pub fn trace(&self) -> &[IterationRecord] {
        &self.trace
    }

    /// Last record of the trace.
    pub fn last_record(&self) -> Option<&IterationRecord> {
        self.trace.last()
    }
}

/// One-line summary: root to 6 decimals, residual in scientific notation.
impl std::fmt::Display for RootReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: root ≈ {:.6} | f(root) = {:.6e} | iterations = {}",
            self.method, self.root, self.residual, self.iterations
        )?;
        if let Some(kind) = self.error {
            write!(f, " ({kind})")?;
        }
        Ok(())
    }
}
