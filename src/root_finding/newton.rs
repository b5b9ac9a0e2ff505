//! Newton-Raphson method.

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::diagnostics;
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, Stencil, TerminationReason};
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Newton.algorithm_name();


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("step non-finite from vanishing derivative at x={x}, f'(x)={dfx}")]
    DerivativeTooSmall { x: f64, dfx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("step non-finite at x={x}, step={step}; x - step not representable")]
    StepNotFinite { x: f64, step: f64 },
}


/// Newton configuration.
///
/// # Defaults
/// ├ `eps`      = 1e-6
/// └ `max_iter` = 100
///
/// Setters come from `impl_common_cfg!`: [`NewtonCfg::set_eps`]
/// (validated) and [`NewtonCfg::set_max_iter`].
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


/// Helpers
/// - `eval_fx`           : evaluates `f(x)` with finite-check
/// - `eval_dfx_analytic` : evaluates user-supplied derivative `df(x)`
/// - `eval_dfx_fd`       : central finite-difference fallback
#[inline]
fn eval_fx<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize,
) -> Result<f64, NewtonError>
where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }
    Ok(fx)
}

#[inline]
fn eval_dfx_analytic<G>(
    df: &mut G,
    x: f64,
    evals: &mut usize,
) -> Result<f64, NewtonError>
where G: FnMut(f64) -> f64 {
    let dfx = { *evals += 1; df(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }
    Ok(dfx)
}

#[inline]
fn eval_dfx_fd<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize,
) -> Result<f64, NewtonError>
where F: FnMut(f64) -> f64 {
    // central finite-difference
    let h   = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let fxp = eval_fx(f, x + h, evals)?;
    let fxm = eval_fx(f, x - h, evals)?;
    let dfx = (fxp - fxm) / (2.0 * h);
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }
    Ok(dfx)
}


fn newton_loop<F, G>(
    mut f: F,
    mut df: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let eps      = cfg.common.eps();
    let max_iter = cfg.common.max_iter();

    let mut evals: usize = 0;

    let mut x      = x0;
    let mut prev_x = x0;
    let mut fx     = eval_fx(&mut f, x, &mut evals)?;

    for iter in 1..=max_iter {
        let dfx = match df.as_mut() {
            Some(g) => eval_dfx_analytic(g, x, &mut evals)?,
            None    => eval_dfx_fd(&mut f, x, &mut evals)?,
        };

        // raw Newton step
        let step = fx / dfx;
        if !step.is_finite() {
            return Err(NewtonError::DerivativeTooSmall { x, dfx });
        }

        let x_next = x - step;
        if !x_next.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }

        let fx_next = eval_fx(&mut f, x_next, &mut evals)?;
        prev_x = x;
        x      = x_next;
        fx     = fx_next;

        // root found within error margin
        if fx.abs() < eps {
            return Ok(RootFindingReport {
                root               : x,
                f_root             : fx,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : Stencil::Open { x: prev_x },
                algorithm_name     : ALGORITHM,
            });
        }
    }

    diagnostics::convergence_shortfall(ALGORITHM, eps, max_iter, x, fx);
    Ok(RootFindingReport {
        root               : x,
        f_root             : fx,
        iterations         : max_iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : Stencil::Open { x: prev_x },
        algorithm_name     : ALGORITHM,
    })
}


/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method).
/// Supports an analytic derivative or a central finite-difference fallback.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : optional analytic derivative; if `None`, a central
///   finite-difference with `h = eps_machine^(1/3) * max(|x|, 1)` is used
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (error margin `eps`, iteration cap `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`               : final iterate
/// - `f_root`             : function value at `root`
/// - `termination_reason` : [`TerminationReason::ToleranceReached`] if
///   `|f(root)| < eps`, otherwise [`TerminationReason::IterationLimit`]
///   (best-effort value; a convergence shortfall is logged at warn level)
/// - `stencil`            : previous iterate used to form the last step
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]         : `x0` non-finite
/// - [`NewtonError::DerivativeTooSmall`]   : `f/f'` non-finite (vanishing derivative)
/// - [`NewtonError::DerivativeNotFinite`]  : derivative evaluated to NaN/inf
/// - [`NewtonError::StepNotFinite`]        : `x - step` overflowed
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
///
/// # Behavior
/// - Each iteration updates `x <- x - f(x)/f'(x)` first, then checks
///   `|f(x)| < eps` for an early return. `max_iter = 0` therefore returns
///   `x0` unchanged with a shortfall warning after a single report-filling
///   evaluation.
/// - There is deliberately no divergence or stagnation detection: a bad
///   guess simply runs to `max_iter` and returns the final iterate with a
///   shortfall warning. A vanishing derivative is the one fatal case.
/// - Convergence is local only. For guaranteed convergence on a bracket,
///   prefer [`bisection`].
///
/// [`bisection`]: super::bisection::bisection
pub fn newton<F, G>(
    func: F,
    dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    newton_loop(func, dfunc, x0, cfg)
}
