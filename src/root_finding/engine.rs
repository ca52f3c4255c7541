//! Shared convergence loop.
//!
//! Every method implements [`RootStrategy`] ("evaluate-and-step"); [`run`]
//! owns the loop, the iteration cap and the trace, and assembles the
//! [`RootReport`]. [`solve`] selects a strategy from a runtime [`Method`].

use tracing::{debug, debug_span, trace, warn};

use super::algorithms::{Method, Params};
use super::bisection::bisection;
use super::config::SolverCfg;
use super::errors::{ErrorKind, RootFindingError};
use super::false_position::false_position;
use super::newton::newton;
use super::report::{RootReport, Termination, ToleranceReason};
use super::trace::IterationRecord;


/// Upper bound on the trace capacity reserved up front.
const TRACE_PREALLOC: usize = 128;


/// What a single pass decided.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StepOutcome {
    Continue,
    Converged(ToleranceReason),
    /// |f'(x)| fell below the singularity threshold; no step was taken.
    SingularDerivative { x: f64, df_x: f64 },
}


/// Result of one pass: the record to append and the decision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Step {
    pub record:  IterationRecord,
    pub outcome: StepOutcome,
}


/// Capability shared by all methods.
///
/// ┌ `prepare`     : validate starting data, perform initial evaluations
/// ├ `step`        : one pass; evaluates, records, tests convergence, updates
/// ├ `estimate`    : current best root estimate
/// ├ `residual`    : f(`estimate`), cached or freshly evaluated
/// └ `evaluations` : evaluations of f and f' so far
pub trait RootStrategy {
    fn method(&self) -> Method;

    fn prepare(&mut self) -> Result<(), RootFindingError>;

    fn step(&mut self, index: usize, tol: f64) -> Result<Step, RootFindingError>;

    fn estimate(&self) -> f64;

    fn residual(&mut self) -> Result<f64, RootFindingError>;

    fn evaluations(&self) -> usize;
}


/// Counting evaluator that rejects non-finite values.
pub(crate) struct Evaluator<F> {
    func:  F,
    evals: usize,
}

impl<F> Evaluator<F>
where F: FnMut(f64) -> f64 {
    pub(crate) fn new(func: F) -> Self {
        Self { func, evals: 0 }
    }

    pub(crate) fn evals(&self) -> usize { self.evals }

    /// Evaluates `f(x)`.
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> {
        let fx = self.call(x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx, trace: Vec::new() });
        }
        Ok(fx)
    }

    /// Evaluates `f'(x)`.
    pub(crate) fn eval_derivative(&mut self, x: f64) -> Result<f64, RootFindingError> {
        let dfx = self.call(x);
        if !dfx.is_finite() {
            return Err(RootFindingError::NonFiniteDerivative { x, df_x: dfx, trace: Vec::new() });
        }
        Ok(dfx)
    }

    /// Evaluates `f(x)` without the finiteness check.
    #[inline]
    pub(crate) fn call(&mut self, x: f64) -> f64 {
        self.evals += 1;
        (self.func)(x)
    }
}


/// Rejects NaN/inf starting data.
pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<(), RootFindingError> {
    if !value.is_finite() {
        return Err(RootFindingError::InvalidInput { name, value });
    }
    Ok(())
}


/// Drives `strategy` for at most `cfg.max_iter()` passes.
///
/// # Returns
/// ├ `Ok(report)` with `converged = true` once a stopping test is met
/// └ `Ok(report)` with `error = Some(ErrorKind::NotConverged)` when the cap is hit
///
/// # Errors
/// ├ anything [`RootStrategy::prepare`] rejects (empty trace)
/// ├ [`RootFindingError::SingularDerivative`] with the trace up to the failing pass
/// └ non-finite evaluations, with the trace of completed passes
pub fn run<S>(mut strategy: S, cfg: SolverCfg) -> Result<RootReport, RootFindingError>
where S: RootStrategy {
    let method   = strategy.method();
    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    let _span = debug_span!("root_finding", %method, tol, max_iter).entered();

    strategy.prepare()?;

    let mut trace: Vec<IterationRecord> = Vec::with_capacity(max_iter.min(TRACE_PREALLOC));
    let mut tolerance = ToleranceReason::NotReached;

    for index in 1..=max_iter {
        let step = match strategy.step(index, tol) {
            Ok(step) => step,
            Err(err) => return Err(err.with_trace(trace)),
        };
        trace!(record = ?step.record, "iteration");
        trace.push(step.record);

        match step.outcome {
            StepOutcome::Continue => {}
            StepOutcome::Converged(reason) => {
                tolerance = reason;
                break;
            }
            StepOutcome::SingularDerivative { x, df_x } => {
                warn!(x, df_x, index, "derivative vanished; stopping");
                return Err(RootFindingError::SingularDerivative { x, df_x, trace });
            }
        }
    }

    let residual = match strategy.residual() {
        Ok(r)    => r,
        Err(err) => return Err(err.with_trace(trace)),
    };

    let converged = tolerance != ToleranceReason::NotReached;
    let root      = strategy.estimate();

    if converged {
        debug!(root, residual, iterations = trace.len(), ?tolerance, "converged");
    } else {
        warn!(root, residual, max_iter, "iteration limit reached without convergence");
    }

    Ok(RootReport {
        method,
        root,
        residual,
        iterations  : trace.len(),
        evaluations : strategy.evaluations(),
        converged,
        error       : (!converged).then_some(ErrorKind::NotConverged),
        termination : if converged { Termination::ToleranceReached } else { Termination::IterationLimit },
        tolerance,
        trace,
    })
}


/// Finds a root of `f` with the method selected at runtime.
///
/// # Arguments
/// ┌ `method` - which method to run
/// ├ `f`      - function whose root is sought
/// ├ `df`     - derivative of `f`; required for [`Method::NewtonRaphson`], ignored otherwise
/// ├ `params` - [`Params::Bracket`] for bracket methods, [`Params::Guess`] for Newton
/// └ `cfg`    - tolerance and iteration cap, see [`SolverCfg`]
///
/// # Errors
/// ├ [`RootFindingError::IncompatibleParams`] - `params` variant does not fit `method`
/// ├ [`RootFindingError::MissingDerivative`]  - Newton requested without `df`
/// └ anything the selected method returns
pub fn solve<F, G>(
    method: Method,
    f: F,
    df: Option<G>,
    params: Params,
    cfg: SolverCfg,
) -> Result<RootReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let compatible = match params {
        Params::Bracket { .. } => method.is_bracketing(),
        Params::Guess { .. }   => !method.is_bracketing(),
    };
    if !compatible {
        return Err(RootFindingError::IncompatibleParams { method });
    }
    if method.needs_derivative() && df.is_none() {
        return Err(RootFindingError::MissingDerivative { method });
    }

    match (method, params, df) {
        (Method::Bisection, Params::Bracket { a, b }, _)     => bisection(f, a, b, cfg),
        (Method::FalsePosition, Params::Bracket { a, b }, _) => false_position(f, a, b, cfg),
        (Method::NewtonRaphson, Params::Guess { x0 }, Some(df)) => newton(f, df, x0, cfg),
        (method, ..) => Err(RootFindingError::IncompatibleParams { method }),
    }
}
