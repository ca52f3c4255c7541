// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod trace;
pub mod engine;
pub(crate) mod config;
pub(crate) mod signs;

// methods
pub mod bisection;
pub mod newton;
pub mod false_position;

pub use config::{SolverCfg, DEFAULT_MAX_ITER, DEFAULT_TOL};
