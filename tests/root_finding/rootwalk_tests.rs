//! tests for the rootwalk interval scanner
use approx::assert_relative_eq;
use rootwalk::root_finding::errors::RootFindingError;
use rootwalk::root_finding::report::ScanTermination;
use rootwalk::root_finding::rootwalk::{rootwalk, RootwalkCfg, RootwalkError};
use std::f64::consts::PI;

type TestResult = Result<(), RootwalkError>;

#[test]
fn finds_three_roots_of_sine_in_order() -> TestResult {
    let cfg = RootwalkCfg::new().set_roots(3);
    let res = rootwalk(|x: f64| x.sin(), 0.5, 10.0, cfg)?;

    assert_eq!(res.termination, ScanTermination::AllRootsFound);
    assert_eq!(res.found, 3);
    assert!(res.is_complete());
    assert_relative_eq!(res.roots[0], PI, epsilon = 1e-4);
    assert_relative_eq!(res.roots[1], 2.0 * PI, epsilon = 1e-4);
    assert_relative_eq!(res.roots[2], 3.0 * PI, epsilon = 1e-4);
    assert!(res.roots.iter().all(|r| !r.is_nan()));
    Ok(())
}

#[test]
fn pads_missing_roots_with_nan() -> TestResult {
    let cfg = RootwalkCfg::new().set_roots(3);
    let res = rootwalk(|x: f64| x * x - 1.0, -2.0, 2.0, cfg)?;

    assert_eq!(res.termination, ScanTermination::IntervalExhausted);
    assert_eq!(res.found, 2);
    assert!(!res.is_complete());
    assert_relative_eq!(res.roots[0], -1.0, epsilon = 1e-4);
    assert_relative_eq!(res.roots[1], 1.0, epsilon = 1e-4);
    assert!(res.roots[2].is_nan());
    Ok(())
}

#[test]
fn asymptote_subinterval_is_skipped() -> TestResult {
    // tan has a pole at pi/2 and a root at pi: the pole sub-interval is
    // diagnosed as an asymptote and skipped, the scan carries on
    let res = rootwalk(|x: f64| x.tan(), 0.5, 4.5, RootwalkCfg::new())?;

    assert_eq!(res.termination, ScanTermination::AllRootsFound);
    assert_eq!(res.asymptotes, 1);
    assert_relative_eq!(res.roots[0], PI, epsilon = 1e-4);
    Ok(())
}

#[test]
fn stops_scanning_once_requested_roots_found() -> TestResult {
    let res = rootwalk(|x: f64| x - 1.0, 0.0, 100.0, RootwalkCfg::new())?;

    assert_eq!(res.termination, ScanTermination::AllRootsFound);
    assert!(res.steps < 20);
    assert_relative_eq!(res.roots[0], 1.0, epsilon = 1e-4);
    Ok(())
}

#[test]
fn exact_boundary_root_relies_on_strict_sign_change() -> TestResult {
    // the root at 0 sits exactly on a sample point: the product test
    // sees f(x) * f(x + dx) == 0 on both sides and flags neither
    let cfg = RootwalkCfg::new().set_samples(4);
    let res = rootwalk(|x: f64| x, -2.0, 2.0, cfg)?;

    assert_eq!(res.termination, ScanTermination::IntervalExhausted);
    assert_eq!(res.found, 0);
    assert!(res.roots[0].is_nan());
    Ok(())
}

#[test]
fn zero_requested_roots_is_trivially_complete() -> TestResult {
    let mut evals = 0;
    let res = rootwalk(
        |x: f64| { evals += 1; x },
        -1.0,
        1.0,
        RootwalkCfg::new().set_roots(0),
    )?;

    assert_eq!(res.termination, ScanTermination::AllRootsFound);
    assert!(res.roots.is_empty());
    assert!(res.is_complete());
    assert_eq!(evals, 0);
    Ok(())
}

#[test]
fn zero_samples_skips_the_walk() -> TestResult {
    let mut evals = 0;
    let res = rootwalk(
        |x: f64| { evals += 1; x },
        -1.0,
        1.0,
        RootwalkCfg::new().set_samples(0),
    )?;

    assert_eq!(res.termination, ScanTermination::IntervalExhausted);
    assert_eq!(res.found, 0);
    assert!(res.roots[0].is_nan());
    assert_eq!(evals, 0);
    Ok(())
}

#[test]
fn non_finite_eval_inside_subinterval_is_fatal() {
    // finite at both sample points, NaN at the first bisection midpoint;
    // the fault surfaces in the same shape as a sample-point fault
    let f   = |x: f64| x / x.abs();
    let cfg = RootwalkCfg::new().set_samples(1);
    let err = rootwalk(f, -1.0, 1.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        RootwalkError::Common(RootFindingError::NonFiniteEvaluation { x, .. })
        if x == 0.0
    ));
}

#[test]
fn non_finite_sample_is_fatal() {
    let f   = |x: f64| (x - 0.5).ln();
    let err = rootwalk(f, 0.0, 1.0, RootwalkCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootwalkError::Common(RootFindingError::NonFiniteEvaluation { .. })
    ));
}

#[test]
fn detects_invalid_bounds() {
    let err = rootwalk(|x: f64| x, 1.0, 1.0, RootwalkCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        RootwalkError::Common(RootFindingError::InvalidBounds { .. })
    ));
}
