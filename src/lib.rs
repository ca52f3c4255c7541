//! Real roots of scalar functions by bisection, Newton-Raphson and
//! false position, with a full iteration trace for every call.
//!
//! ```
//! use rootfinder::{bisection, SolverCfg};
//!
//! let report = bisection(|x: f64| x * x - 4.0, 0.0, 3.0, SolverCfg::new()).unwrap();
//! assert!(report.converged);
//! assert!((report.root - 2.0).abs() < 1e-5);
//! ```

pub mod root_finding;

pub use root_finding::algorithms::{Method, Params};
pub use root_finding::bisection::bisection;
pub use root_finding::engine::{run, solve, RootStrategy, Step, StepOutcome};
pub use root_finding::errors::{ConfigError, ErrorKind, RootFindingError};
pub use root_finding::false_position::false_position;
pub use root_finding::newton::{newton, SINGULAR_DERIVATIVE_THRESHOLD};
pub use root_finding::report::{RootReport, Termination, ToleranceReason};
pub use root_finding::trace::IterationRecord;
pub use root_finding::SolverCfg;
