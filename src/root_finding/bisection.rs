//! Bisection method.

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::diagnostics;
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, Stencil, TerminationReason};
use super::signs::sign_change;
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Bisection.algorithm_name();


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    /// The bracket closed in on a vertical asymptote instead of a root:
    /// after `max_iter` iterations the boundary values are large and of
    /// opposite sign (`-f(a) * f(b) > 1/eps`).
    #[error(
        "asymptote at x={x:.3e}. f(a)={fa:.3e} and f(b)={fb:.3e} for [a, b]=[{a:.3e}, {b:.3e}]"
    )]
    Asymptote { x: f64, a: f64, b: f64, fa: f64, fb: f64 },
}


/// Bisection configuration.
///
/// # Defaults
/// ├ `eps`      = 1e-6
/// └ `max_iter` = 100
///
/// Setters come from `impl_common_cfg!`: [`BisectionCfg::set_eps`]
/// (validated) and [`BisectionCfg::set_max_iter`].
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    /// Used by `rootwalk` to forward its own `eps`/`max_iter` into each
    /// sub-interval bisection.
    pub(crate) fn from_common(common: CommonCfg) -> Self {
        Self { common }
    }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);


/// Finds a root of `func` on `[a, b]` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `func` is continuous on `[a, b]` and that `func(a)` and
/// `func(b)` have opposite signs. The sign-change precondition is the
/// caller's responsibility and is NOT checked: if it is violated the
/// interval still narrows toward the midpoint and the result is
/// meaningless, but no error is raised.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : lower bound; finite, `a < b`
/// - `b`    : upper bound; finite
/// - `cfg`  : [`BisectionCfg`] (error margin `eps`, iteration cap `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`               : last computed midpoint
/// - `f_root`             : function value at `root`
/// - `termination_reason` : [`TerminationReason::ToleranceReached`] if
///   `|f(root)| < eps`, otherwise [`TerminationReason::IterationLimit`]
///   (best-effort value; a convergence shortfall is logged at warn level)
/// - `stencil`            : final `[a, b]` bracket
///
/// # Errors
/// - [`BisectionError::Asymptote`] : `max_iter` exhausted with
///   `-f(a) * f(b) > 1/eps`, the signature of a vertical asymptote
///   rather than a root
/// - [`RootFindingError::InvalidBounds`]       : `a` or `b` NaN/inf, or `a >= b`
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
///
/// # Notes
/// - `max_iter = 0` runs no iterations: the asymptote test still uses
///   `f(a)` and `f(b)`, and the initial midpoint is evaluated once only
///   to fill the report.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RootFindingError::InvalidBounds { a, b }.into());
    }

    let eps      = cfg.common.eps();
    let max_iter = cfg.common.max_iter();

    // number of function evaluations
    let mut evals = 0;

    // closure function, checks finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    let mut fa = eval(a)?;
    let mut fb = eval(b)?;

    // last midpoint and its function value, None until an iteration runs
    let mut last: Option<(f64, f64)> = None;
    for iter in 1..=max_iter {
        let midpoint = a + (b - a) * 0.5;
        let fm       = eval(midpoint)?;

        // root found within error margin
        if fm.abs() < eps {
            return Ok(RootFindingReport {
                root               : midpoint,
                f_root             : fm,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : Stencil::Bracket { bounds: [a, b] },
                algorithm_name     : ALGORITHM,
            });
        }

        // keep the half that retains the sign change
        if sign_change(fa, fm) {
            b  = midpoint;
            fb = fm;
        } else {
            a  = midpoint;
            fa = fm;
        }
        last = Some((midpoint, fm));
    }

    // iteration budget exhausted. large opposite boundary values mean the
    // bracket closed in on a vertical asymptote, not a root
    let midpoint = match last {
        Some((m, _)) => m,
        None         => a + (b - a) * 0.5,
    };
    if -fa * fb > 1.0 / eps {
        return Err(BisectionError::Asymptote { x: midpoint, a, b, fa, fb });
    }

    let fm = match last {
        Some((_, v)) => v,
        None         => eval(midpoint)?,   // report-only evaluation
    };
    diagnostics::convergence_shortfall(ALGORITHM, eps, max_iter, midpoint, fm);
    Ok(RootFindingReport {
        root               : midpoint,
        f_root             : fm,
        iterations         : max_iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : Stencil::Bracket { bounds: [a, b] },
        algorithm_name     : ALGORITHM,
    })
}
