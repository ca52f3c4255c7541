//! Root-finding method definitions.
//!
//! Provides the [`Method`] enum, which tags every supported method, and
//! [`Params`], the starting data handed to [`super::engine::solve`].

use serde::Serialize;


/// Root-finding method variants.
/// - [`Method::Bisection`]     : bracket method, midpoint update
/// - [`Method::NewtonRaphson`] : open method, tangent-line update
/// - [`Method::FalsePosition`] : bracket method, secant x-intercept update
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Bisection,
    NewtonRaphson,
    FalsePosition,
}

impl Method {
    /// Every method, in the order a caller would typically offer them.
    pub const ALL: [Method; 3] = [
        Method::Bisection,
        Method::NewtonRaphson,
        Method::FalsePosition,
    ];

    pub const fn method_name(self) -> &'static str {
        match self {
            Method::Bisection     => "bisection",
            Method::NewtonRaphson => "newton_raphson",
            Method::FalsePosition => "false_position",
        }
    }

    /// `true` for methods that need a sign-changing interval `[a, b]`.
    pub const fn is_bracketing(self) -> bool {
        matches!(self, Method::Bisection | Method::FalsePosition)
    }

    /// `true` for methods that need the derivative `f'`.
    pub const fn needs_derivative(self) -> bool {
        matches!(self, Method::NewtonRaphson)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}


/// Starting data for a solve.
/// - [`Params::Bracket`] : interval endpoints for bracket methods
/// - [`Params::Guess`]   : initial iterate for open methods
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Params {
    Bracket { a: f64, b: f64 },
    Guess   { x0: f64 },
}
