//! Per-iteration records produced by every method.
//!
//! ┌ [`IterationRecord::Bracket`] : bisection, false position
//! └ [`IterationRecord::Open`]    : newton-raphson
//!
//! The ordered `Vec<IterationRecord>` held by a report is the convergence
//! trace. Indices start at 1 and increase by one per loop pass.

use serde::Serialize;


#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IterationRecord {
    /// Bracket state at the start of the pass and the new estimate `c`.
    Bracket {
        index: usize,
        a:     f64,
        b:     f64,
        c:     f64,
        f_a:   f64,
        f_b:   f64,
        f_c:   f64,
    },

    /// Iterate `x` and the tangent step taken from it. `x_next` is `None`
    /// when the derivative was too small to step.
    Open {
        index:  usize,
        x:      f64,
        f_x:    f64,
        df_x:   f64,
        x_next: Option<f64>,
    },
}

impl IterationRecord {
    pub fn index(&self) -> usize {
        match self {
            IterationRecord::Bracket { index, .. } => *index,
            IterationRecord::Open    { index, .. } => *index,
        }
    }

    /// Estimate produced by this pass (`c`, or `x_next` for open records).
    pub fn estimate(&self) -> Option<f64> {
        match self {
            IterationRecord::Bracket { c, .. }      => Some(*c),
            IterationRecord::Open    { x_next, .. } => *x_next,
        }
    }

    /// Bracket `[a, b]` the pass started from, if any.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            IterationRecord::Bracket { a, b, .. } => Some((*a, *b)),
            IterationRecord::Open { .. }          => None,
        }
    }
}
