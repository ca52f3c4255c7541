//! False position (regula falsi) method, classical form.

use tracing::debug;

use super::algorithms::Method;
use super::config::SolverCfg;
use super::engine::{check_finite, run, Evaluator, RootStrategy, Step, StepOutcome};
use super::errors::RootFindingError;
use super::report::{RootReport, ToleranceReason};
use super::signs::strictly_apart;
use super::trace::IterationRecord;


/// Calculates the secant intersection point for the line
/// connecting `(a, fa)` and `(b, fb)`
///
/// # Arguments
/// ├ `(a, fa)` - left endpoint and function value
/// └ `(b, fb)` - right endpoint and function value
///
/// `fa` and `fb` have strictly opposite signs, so `fb - fa` never vanishes.
#[inline]
fn calculate_secant_x_intercept((a, fa): (f64, f64), (b, fb): (f64, f64)) -> f64 {
    (a * fb - b * fa) / (fb - fa)
}


/// False position state: the current bracket with cached endpoint values
/// and the latest secant estimate.
pub struct FalsePosition<F> {
    eval: Evaluator<F>,
    a:    f64,
    b:    f64,
    fa:   f64,
    fb:   f64,
    c:    f64,
    fc:   f64,
}

impl<F> FalsePosition<F>
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

impl<F> RootStrategy for FalsePosition<F>
where F: FnMut(f64) -> f64 {
    fn method(&self) -> Method { Method::FalsePosition }

    fn prepare(&mut self) -> Result<(), RootFindingError> {
        check_finite("a", self.a)?;
        check_finite("b", self.b)?;

        self.fa = self.eval.eval(self.a)?;
        self.fb = self.eval.eval(self.b)?;

        if !strictly_apart(self.fa, self.fb) {
            debug!(a = self.a, b = self.b, fa = self.fa, fb = self.fb, "no strict sign change");
            return Err(RootFindingError::InvalidBracket {
                a: self.a, b: self.b, f_a: self.fa, f_b: self.fb,
            });
        }
        Ok(())
    }

    fn step(&mut self, index: usize, tol: f64) -> Result<Step, RootFindingError> {
        let (a, b, fa, fb) = (self.a, self.b, self.fa, self.fb);

        let c  = calculate_secant_x_intercept((a, fa), (b, fb));
        let fc = self.eval.eval(c)?;
        self.c  = c;
        self.fc = fc;

        let record = IterationRecord::Bracket { index, a, b, c, f_a: fa, f_b: fb, f_c: fc };

        // residual is the only stopping test
        if fc.abs() < tol {
            return Ok(Step { record, outcome: StepOutcome::Converged(ToleranceReason::Residual) });
        }

        if strictly_apart(fa, fc) {
            self.b  = c;
            self.fb = fc;
        } else {
            self.a  = c;
            self.fa = fc;
        }

        Ok(Step { record, outcome: StepOutcome::Continue })
    }

    fn estimate(&self) -> f64 { self.c }

    fn residual(&mut self) -> Result<f64, RootFindingError> { Ok(self.fc) }

    fn evaluations(&self) -> usize { self.eval.evals() }
}


/// Finds a root of a function using the classical
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval. Must be finite.
/// ├ `b`    - Other end of the search interval. Must be finite.
/// └ `cfg`  - Tolerance and iteration cap. See [`SolverCfg`]
///
/// # Returns
///
/// A [`RootReport`] whose trace holds one [`IterationRecord::Bracket`] per pass.
/// ├ Converged only when |f(c)| < tol; there is no interval-width test.
/// └ Otherwise the last estimate with `error = Some(ErrorKind::NotConverged)`,
///   even if the bracket has become very narrow.
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidInput`]        - `a` or `b` is NaN/inf.
/// ├ [`RootFindingError::InvalidBracket`]      - `f(a) * f(b) >= 0`. No iterations run.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN or inf.
///
/// # Warning
/// └ No Illinois / Anderson-Björck rescaling is applied, so one endpoint can stay
///   fixed on convex or concave functions and convergence becomes linear.
pub fn false_position<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: SolverCfg,
) -> Result<RootReport, RootFindingError>
where F: FnMut(f64) -> f64 {
    run(FalsePosition::new(func, a, b), cfg)
}
