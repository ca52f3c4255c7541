//! tests for runtime method selection and the shared report
use rstest::rstest;
use tracing_subscriber::EnvFilter;

use rootfinder::root_finding::bisection::Bisection;
use rootfinder::{
    bisection, run, solve, ConfigError, ErrorKind, Method, Params, RootFindingError, RootReport,
    SolverCfg,
};

type TestResult = Result<(), RootFindingError>;

fn parabola(x: f64) -> f64 { x * x - 4.0 }
fn parabola_prime(x: f64) -> f64 { 2.0 * x }

fn params_for(method: Method) -> Params {
    match method {
        Method::NewtonRaphson => Params::Guess { x0: 3.0 },
        _                     => Params::Bracket { a: 0.0, b: 3.0 },
    }
}

fn solve_parabola(method: Method, cfg: SolverCfg) -> Result<RootReport, RootFindingError> {
    solve(method, parabola, Some(parabola_prime), params_for(method), cfg)
}

#[rstest]
#[case(Method::Bisection)]
#[case(Method::NewtonRaphson)]
#[case(Method::FalsePosition)]
fn every_method_finds_2(#[case] method: Method) -> TestResult {
    let res = solve_parabola(method, SolverCfg::new())?;

    assert_eq!(res.method, method);
    assert!(res.converged);
    assert!((res.root - 2.0).abs() < 1e-5);
    assert_eq!(res.iterations, res.trace.len());
    Ok(())
}

#[rstest]
#[case(Method::Bisection)]
#[case(Method::NewtonRaphson)]
#[case(Method::FalsePosition)]
fn repeated_calls_are_bit_identical(#[case] method: Method) -> TestResult {
    let first  = solve_parabola(method, SolverCfg::new())?;
    let second = solve_parabola(method, SolverCfg::new())?;

    assert_eq!(first, second);
    assert_eq!(first.root.to_bits(), second.root.to_bits());
    assert_eq!(first.residual.to_bits(), second.residual.to_bits());
    Ok(())
}

#[rstest]
#[case(Method::Bisection)]
#[case(Method::NewtonRaphson)]
#[case(Method::FalsePosition)]
fn trace_never_exceeds_max_iter(#[case] method: Method) -> TestResult {
    for max_iter in [1, 2, 3, 5] {
        let cfg = SolverCfg::new().set_tol(1e-15)?.set_max_iter(max_iter)?;
        let res = solve_parabola(method, cfg)?;
        assert!(res.trace.len() <= max_iter);
        assert_eq!(res.converged, res.error.is_none());
    }
    Ok(())
}

#[test]
fn dispatch_matches_direct_call() -> TestResult {
    let via_solve = solve_parabola(Method::Bisection, SolverCfg::new())?;
    let direct    = bisection(parabola, 0.0, 3.0, SolverCfg::new())?;
    let via_run   = run(Bisection::new(parabola, 0.0, 3.0), SolverCfg::new())?;

    assert_eq!(via_solve, direct);
    assert_eq!(via_run, direct);
    Ok(())
}

#[rstest]
#[case(Method::Bisection,     Params::Guess { x0: 1.0 })]
#[case(Method::FalsePosition, Params::Guess { x0: 1.0 })]
#[case(Method::NewtonRaphson, Params::Bracket { a: 0.0, b: 3.0 })]
fn rejects_mismatched_params(#[case] method: Method, #[case] params: Params) {
    let err = solve(method, parabola, Some(parabola_prime), params, SolverCfg::new()).unwrap_err();

    assert_eq!(err, RootFindingError::IncompatibleParams { method });
}

#[rstest]
fn validation_follows_method_queries(
    #[values(Method::Bisection, Method::NewtonRaphson, Method::FalsePosition)] method: Method,
    #[values(Params::Guess { x0: 3.0 }, Params::Bracket { a: 0.0, b: 3.0 })] params: Params,
) {
    let fits = matches!(params, Params::Bracket { .. }) == method.is_bracketing();
    let res  = solve(method, parabola, None::<fn(f64) -> f64>, params, SolverCfg::new());

    match res {
        Err(RootFindingError::IncompatibleParams { method: m }) => {
            assert!(!fits);
            assert_eq!(m, method);
        }
        Err(RootFindingError::MissingDerivative { method: m }) => {
            assert!(fits && method.needs_derivative());
            assert_eq!(m, method);
        }
        Ok(report) => {
            assert!(fits && !method.needs_derivative());
            assert!(report.converged);
        }
        Err(other) => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn newton_requires_derivative() {
    let err = solve(
        Method::NewtonRaphson,
        parabola,
        None::<fn(f64) -> f64>,
        Params::Guess { x0: 3.0 },
        SolverCfg::new(),
    )
    .unwrap_err();

    assert_eq!(err, RootFindingError::MissingDerivative { method: Method::NewtonRaphson });
}

#[test]
fn bracket_methods_ignore_derivative() -> TestResult {
    let res = solve(
        Method::FalsePosition,
        parabola,
        None::<fn(f64) -> f64>,
        Params::Bracket { a: 0.0, b: 3.0 },
        SolverCfg::new(),
    )?;

    assert!(res.converged);
    Ok(())
}

#[test]
fn config_errors_convert() {
    let err: RootFindingError = SolverCfg::new().set_tol(0.0).unwrap_err().into();

    assert_eq!(err, RootFindingError::Config(ConfigError::InvalidTolerance { got: 0.0 }));
    assert_eq!(err.kind(), None);
}

#[test]
fn method_metadata() {
    assert!(Method::Bisection.is_bracketing());
    assert!(Method::FalsePosition.is_bracketing());
    assert!(!Method::NewtonRaphson.is_bracketing());
    assert!(Method::NewtonRaphson.needs_derivative());
    assert_eq!(Method::ALL.len(), 3);
    assert_eq!(Method::FalsePosition.to_string(), "false_position");
}

#[test]
fn summary_line_formats_root_and_residual() -> TestResult {
    let res  = bisection(parabola, 0.0, 3.0, SolverCfg::new())?;
    let line = res.to_string();

    assert!(line.starts_with("bisection: root ≈ 2.000000 | f(root) = "));
    assert!(line.contains("e-7"));
    assert!(line.ends_with(&format!("iterations = {}", res.iterations)));

    let cfg  = SolverCfg::new().set_max_iter(1)?;
    let line = bisection(parabola, 0.0, 3.0, cfg)?.to_string();
    assert!(line.ends_with("(not converged)"));
    Ok(())
}

#[test]
fn error_messages_name_the_failure() {
    let err = bisection(|x: f64| x * x + 1.0, -1.0, 1.0, SolverCfg::new()).unwrap_err();
    assert_eq!(err.to_string(), "no sign change on [-1, 1]: f(a)=2, f(b)=2");
    assert_eq!(ErrorKind::NotConverged.to_string(), "not converged");
}

#[test]
fn report_serializes_for_export() -> TestResult {
    let cfg  = SolverCfg::new().set_max_iter(2)?;
    let res  = solve_parabola(Method::NewtonRaphson, cfg)?;
    let json = serde_json::to_value(&res).expect("report serializes");

    assert_eq!(json["method"], "newton_raphson");
    assert_eq!(json["error"], "not_converged");
    assert_eq!(json["trace"][0]["kind"], "open");
    assert_eq!(json["trace"][0]["index"], 1);
    assert_eq!(json["trace"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn runs_under_a_trace_subscriber() -> TestResult {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("rootfinder=trace"))
        .with_test_writer()
        .try_init();

    for method in Method::ALL {
        solve_parabola(method, SolverCfg::new())?;
    }
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let res = solve_parabola(Method::FalsePosition, cfg)?;
    assert_eq!(res.error, Some(ErrorKind::NotConverged));
    Ok(())
}
