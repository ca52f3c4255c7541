//! Bisection method.

use tracing::debug;

use super::algorithms::Method;
use super::config::SolverCfg;
use super::engine::{check_finite, run, Evaluator, RootStrategy, Step, StepOutcome};
use super::errors::RootFindingError;
use super::report::{RootReport, ToleranceReason};
use super::signs::straddles;
use super::trace::IterationRecord;


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}


/// Bisection state: the current bracket with cached endpoint values and
/// the latest midpoint.
pub struct Bisection<F> {
    eval: Evaluator<F>,
    a:    f64,
    b:    f64,
    fa:   f64,
    fb:   f64,
    c:    f64,
    fc:   f64,
}

impl<F> Bisection<F>
where F: FnMut(f64) -> f64 {
    pub fn new(func: F, a: f64, b: f64) -> Self {
        Self {
            eval: Evaluator::new(func),
            a,
            b,
            fa: f64::NAN,
            fb: f64::NAN,
            c:  a,
            fc: f64::NAN,
        }
    }
}

impl<F> RootStrategy for Bisection<F>
where F: FnMut(f64) -> f64 {
    fn method(&self) -> Method { Method::Bisection }

    fn prepare(&mut self) -> Result<(), RootFindingError> {
        check_finite("a", self.a)?;
        check_finite("b", self.b)?;

        self.fa = self.eval.eval(self.a)?;
        self.fb = self.eval.eval(self.b)?;

        if !straddles(self.fa, self.fb) {
            debug!(a = self.a, b = self.b, fa = self.fa, fb = self.fb, "no sign change");
            return Err(RootFindingError::InvalidBracket {
                a: self.a, b: self.b, f_a: self.fa, f_b: self.fb,
            });
        }
        Ok(())
    }

    fn step(&mut self, index: usize, tol: f64) -> Result<Step, RootFindingError> {
        let (a, b, fa, fb) = (self.a, self.b, self.fa, self.fb);

        let c  = calculate_bisection(a, b);
        let fc = self.eval.eval(c)?;
        self.c  = c;
        self.fc = fc;

        let record = IterationRecord::Bracket { index, a, b, c, f_a: fa, f_b: fb, f_c: fc };

        let outcome = if fc.abs() < tol {
            StepOutcome::Converged(ToleranceReason::Residual)
        } else if (b - a).abs() / 2.0 < tol {
            StepOutcome::Converged(ToleranceReason::HalfWidth)
        } else {
            // shrink interval; an exact root at `a` keeps the left half
            if straddles(fa, fc) {
                self.b  = c;
                self.fb = fc;
            } else {
                self.a  = c;
                self.fa = fc;
            }
            StepOutcome::Continue
        };

        Ok(Step { record, outcome })
    }

    fn estimate(&self) -> f64 { self.c }

    fn residual(&mut self) -> Result<f64, RootFindingError> { Ok(self.fc) }

    fn evaluations(&self) -> usize { self.eval.evals() }
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` do not share a strict sign, guaranteeing a root
/// exists within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval. Must be finite.
/// ├ `b`    - Other end of the search interval. Must be finite.
/// └ `cfg`  - Tolerance and iteration cap. See [`SolverCfg`]
///    Defaults:
///    ├ cfg.tol      = 1e-6
///    └ cfg.max_iter = 100
///
/// # Returns
///
/// A [`RootReport`] whose trace holds one [`IterationRecord::Bracket`] per pass.
/// ├ Converged when |f(c)| < tol or |b - a| / 2 < tol; `root = c`, `residual = f(c)`.
/// └ Otherwise the last midpoint with `error = Some(ErrorKind::NotConverged)`.
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidInput`]        - `a` or `b` is NaN/inf.
/// ├ [`RootFindingError::InvalidBracket`]      - `f(a) * f(b) > 0`. No iterations run.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN or inf.
///
/// # Notes
/// ├ `func` is evaluated twice up front and once per pass; endpoint values are cached.
/// └ Each pass halves the bracket exactly.
pub fn bisection<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: SolverCfg,
) -> Result<RootReport, RootFindingError>
where F: FnMut(f64) -> f64 {
    run(Bisection::new(func, a, b), cfg)
}
