//! tests for the newton-raphson root finding algorithm
use rootwalk::root_finding::newton::{newton, NewtonCfg, NewtonError};
use rootwalk::root_finding::report::TerminationReason;

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_sqrt_2_with_analytic_derivative() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let res = newton(f, Some(df), 2.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-6);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn finds_sqrt_2_with_finite_difference() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = newton(f, None::<fn(f64) -> f64>, 2.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-6);
    Ok(())
}

#[test]
fn vanishing_derivative_is_fatal() {
    let f   = |x: f64| x * x + 1.0;
    let df  = |_x: f64| 0.0;
    let err = newton(f, Some(df), 1.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::DerivativeTooSmall { .. }));
}

#[test]
fn rootless_function_runs_to_iteration_limit() -> TestResult {
    // x^2 + 1 has no real root; no divergence detection exists, so the
    // loop runs out and hands back whatever iterate it ended on
    let f   = |x: f64| x * x + 1.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_max_iter(8);
    let res = newton(f, Some(df), 0.5, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 8);
    assert!(res.f_root >= 1.0);
    Ok(())
}

#[test]
fn max_iter_zero_returns_guess() -> TestResult {
    let mut evals = 0;
    let res = newton(
        |x: f64| { evals += 1; x - 1.0 },
        None::<fn(f64) -> f64>,
        5.0,
        NewtonCfg::new().set_max_iter(0),
    )?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.root, 5.0);
    assert_eq!(evals, 1);
    Ok(())
}

#[test]
fn deterministic_for_identical_inputs() -> TestResult {
    let f  = |x: f64| x.cos() - x;
    let df = |x: f64| -x.sin() - 1.0;
    let r1 = newton(f, Some(df), 1.0, NewtonCfg::new())?;
    let r2 = newton(f, Some(df), 1.0, NewtonCfg::new())?;

    assert_eq!(r1.root.to_bits(), r2.root.to_bits());
    assert_eq!(r1.iterations, r2.iterations);
    assert_eq!(r1.evaluations, r2.evaluations);
    Ok(())
}

#[test]
fn overflowing_step_is_fatal() {
    let f   = |_x: f64| 1.0e308;
    let df  = |_x: f64| 1.0;
    let err = newton(f, Some(df), -9.0e307, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::StepNotFinite { .. }));
}

#[test]
fn non_finite_guess_is_invalid() {
    let f   = |x: f64| x;
    let err = newton(f, None::<fn(f64) -> f64>, f64::NAN, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { .. }));
}
