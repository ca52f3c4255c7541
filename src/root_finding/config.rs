//! Shared configuration for root-finding methods.
//!
//! [`SolverCfg`] — universal fields
//! ├ `tol`      : stopping tolerance (residual, half-width or step)
//! └ `max_iter` : hard cap on loop passes
//!
//! [`SolverCfg::new`] initializes configuration with default values.
//! Setters validate their input, so a constructed [`SolverCfg`] is always
//! usable as-is.

use super::errors::ConfigError;


pub const DEFAULT_TOL      : f64   = 1e-6;
pub const DEFAULT_MAX_ITER : usize = 100;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverCfg {
    tol:      f64,
    max_iter: usize,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tol      : DEFAULT_TOL,
            max_iter : DEFAULT_MAX_ITER,
        }
    }

    // getters
    #[inline] #[must_use] pub fn tol(&self)      -> f64   { self.tol }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }

    /// Sets the stopping tolerance.
    ///
    /// # Errors
    /// └ [`ConfigError::InvalidTolerance`] if `v` is non-finite or `<= 0`.
    pub fn set_tol(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: v });
        }
        self.tol = v;
        Ok(self)
    }

    /// Sets the iteration cap.
    ///
    /// # Errors
    /// └ [`ConfigError::InvalidMaxIter`] if `v == 0`.
    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
}

impl Default for SolverCfg {
    fn default() -> Self { Self::new() }
}
