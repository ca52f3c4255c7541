//! Newton-Raphson method

use tracing::warn;

use super::algorithms::Method;
use super::config::SolverCfg;
use super::engine::{check_finite, run, Evaluator, RootStrategy, Step, StepOutcome};
use super::errors::RootFindingError;
use super::report::{RootReport, ToleranceReason};
use super::trace::IterationRecord;


/// Absolute bound on |f'(x)| below which no tangent step is taken.
/// Independent of the stopping tolerance.
pub const SINGULAR_DERIVATIVE_THRESHOLD: f64 = 1e-12;


/// Newton state: the current iterate, the last evaluated f value and
/// whether a stopping test has been met.
pub struct NewtonRaphson<F, G> {
    f:         Evaluator<F>,
    df:        Evaluator<G>,
    x:         f64,
    fx_last:   f64,
    converged: bool,
}

impl<F, G> NewtonRaphson<F, G>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    pub fn new(func: F, dfunc: G, x0: f64) -> Self {
        Self {
            f:         Evaluator::new(func),
            df:        Evaluator::new(dfunc),
            x:         x0,
            fx_last:   f64::NAN,
            converged: false,
        }
    }
}

impl<F, G> RootStrategy for NewtonRaphson<F, G>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    fn method(&self) -> Method { Method::NewtonRaphson }

    fn prepare(&mut self) -> Result<(), RootFindingError> {
        check_finite("x0", self.x)
    }

    fn step(&mut self, index: usize, tol: f64) -> Result<Step, RootFindingError> {
        let x   = self.x;
        let fx  = self.f.eval(x)?;
        let dfx = self.df.eval_derivative(x)?;

        if dfx.abs() < SINGULAR_DERIVATIVE_THRESHOLD {
            return Ok(Step {
                record  : IterationRecord::Open { index, x, f_x: fx, df_x: dfx, x_next: None },
                outcome : StepOutcome::SingularDerivative { x, df_x: dfx },
            });
        }

        let x_next = x - fx / dfx;
        self.x       = x_next;
        self.fx_last = fx;

        let outcome = if fx.abs() < tol {
            StepOutcome::Converged(ToleranceReason::Residual)
        } else if (x_next - x).abs() < tol {
            StepOutcome::Converged(ToleranceReason::StepSize)
        } else {
            StepOutcome::Continue
        };
        self.converged = outcome != StepOutcome::Continue;

        Ok(Step {
            record: IterationRecord::Open { index, x, f_x: fx, df_x: dfx, x_next: Some(x_next) },
            outcome,
        })
    }

    fn estimate(&self) -> f64 { self.x }

    /// Converged: `f` re-evaluated at the accepted iterate, unchecked, so a
    /// non-finite value is reported rather than discarding the root.
    /// Exhausted: the cached `f` of the last pass, no further evaluation.
    fn residual(&mut self) -> Result<f64, RootFindingError> {
        if !self.converged {
            return Ok(self.fx_last);
        }
        let fx = self.f.call(self.x);
        if !fx.is_finite() {
            warn!(x = self.x, fx, "residual non-finite at accepted root");
        }
        Ok(fx)
    }

    fn evaluations(&self) -> usize { self.f.evals() + self.df.evals() }
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : analytic derivative of `func`
/// - `x0`    : finite initial guess
/// - `cfg`   : [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`RootReport`] with one [`IterationRecord::Open`] per pass.
/// - Converged when |f(x)| < tol or |x_next - x| < tol; `root = x_next` and
///   `residual = f(x_next)`.
///   The residual is not checked for finiteness; a NaN/inf `f(x_next)` is
///   returned in the report, not as an error.
/// - Otherwise the last `x_next` with `error = Some(ErrorKind::NotConverged)`
///   and `residual = f(x)` of the last pass (the value that produced `x_next`).
///
/// # Errors
/// - [`RootFindingError::InvalidInput`]        : `x0` non-finite
/// - [`RootFindingError::SingularDerivative`]  : |f'(x)| < [`SINGULAR_DERIVATIVE_THRESHOLD`];
///   the trace includes the failing pass
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::NonFiniteDerivative`] : `f'(x)` produced NaN/inf
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0` and
///   smoothness of `f`. For guaranteed convergence use a bracket method.
/// - `f` and `f'` are evaluated once each per pass, so an exhausted run makes
///   exactly `max_iter` evaluations of each. A converged run makes one more
///   evaluation of `f` for the residual at the accepted root.
pub fn newton<F, G>(
    func: F,
    dfunc: G,
    x0: f64,
    cfg: SolverCfg,
) -> Result<RootReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    run(NewtonRaphson::new(func, dfunc, x0), cfg)
}
