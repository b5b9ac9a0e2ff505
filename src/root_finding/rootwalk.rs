//! Interval scan for multiple roots.
//!
//! Walks `[a, b]` in `samples` equal steps, flags sub-intervals whose
//! endpoint values pass the strict sign-change test, and hands each
//! flagged sub-interval to [`bisection`].

use super::algorithms::Algorithm;
use super::bisection::{bisection, BisectionCfg, BisectionError};
use super::config::{impl_common_cfg, CommonCfg};
use super::diagnostics;
use super::errors::{RootFindingError, ToleranceError};
use super::report::{ScanReport, ScanTermination};
use super::signs::sign_change;
use log::debug;
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Rootwalk.algorithm_name();


/// Asymptotes inside a sub-interval bisection are swallowed and counted,
/// never surfaced; its remaining failure modes are unwrapped into the
/// shared variants so callers match one shape regardless of whether a
/// fault occurred at a sample point or inside a bisection.
#[derive(Debug, Error)]
pub enum RootwalkError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}


/// Rootwalk configuration.
///
/// # Defaults
/// ├ `eps`      = 1e-6   (forwarded to each sub-interval bisection)
/// ├ `max_iter` = 100    (forwarded to each sub-interval bisection)
/// ├ `samples`  = 1000   (number of equal sub-intervals)
/// └ `roots`    = 1      (number of roots to collect)
#[derive(Debug, Copy, Clone)]
pub struct RootwalkCfg {
    common:  CommonCfg,
    samples: usize,
    roots:   usize,
}
impl RootwalkCfg {
    pub const DEFAULT_SAMPLES : usize = 1000;
    pub const DEFAULT_ROOTS   : usize = 1;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common  : CommonCfg::new(),
            samples : Self::DEFAULT_SAMPLES,
            roots   : Self::DEFAULT_ROOTS,
        }
    }

    /// `0` is allowed: the walk is skipped entirely and the scan reports
    /// an incomplete solution set.
    #[must_use]
    pub fn set_samples(mut self, v: usize) -> Self { self.samples = v; self }

    #[must_use]
    pub fn set_roots(mut self, v: usize) -> Self { self.roots = v; self }

    pub fn samples(&self) -> usize { self.samples }
    pub fn roots(&self)   -> usize { self.roots }
}
impl Default for RootwalkCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(RootwalkCfg);


#[inline]
fn eval_sample<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize,
) -> Result<f64, RootwalkError>
where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }
    Ok(fx)
}


/// Walks along `func` over `[a, b]` to find several roots with the
/// bisection method.
///
/// The interval is divided into `samples` equal sub-intervals of width
/// `dx = (b - a) / samples`. A sub-interval whose endpoint values pass
/// the strict sign-change test `f(x) * f(x + dx) < 0` is handed to
/// [`bisection`] with the scan's `eps` and `max_iter`. The walk stops as
/// soon as `roots` roots are collected.
///
/// # Arguments
/// - `func` : function whose roots are sought
/// - `a`    : lower bound; finite, `a < b`
/// - `b`    : upper bound; finite
/// - `cfg`  : [`RootwalkCfg`]
///
/// # Returns
/// [`ScanReport`] with
/// - `roots`       : found roots in scan order, NaN-padded to `requested`
/// - `termination` : [`ScanTermination::AllRootsFound`] or
///   [`ScanTermination::IntervalExhausted`] (the latter also logs an
///   incomplete-solution warning)
/// - `asymptotes`  : sub-intervals skipped after an asymptote diagnosis
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a` or `b` NaN/inf, or `a >= b`
/// - [`RootFindingError::NonFiniteEvaluation`] : `func` non-finite at a sample
///   point or inside a sub-interval bisection
///
/// # Notes
/// - A sub-interval diagnosed as an asymptote ([`BisectionError::Asymptote`])
///   is counted, logged at debug level and skipped; it never aborts the scan.
/// - A root that falls exactly on a sample point gives `f(x) = 0` and a
///   zero product, which the strict test does not flag. Such a root is only
///   caught through the neighbouring sub-interval.
/// - `samples = 0` skips the walk and takes the incomplete path without
///   evaluating `func`. `roots = 0` returns an empty, trivially complete
///   report, also without evaluating `func`.
pub fn rootwalk<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: RootwalkCfg,
) -> Result<ScanReport, RootwalkError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RootFindingError::InvalidBounds { a, b }.into());
    }

    let samples   = cfg.samples;
    let requested = cfg.roots;

    let mut roots = vec![f64::NAN; requested];
    let mut found = 0;
    let mut evals = 0;
    let mut asymptotes = 0;

    if requested == 0 {
        return Ok(ScanReport {
            roots,
            found,
            requested,
            steps       : 0,
            evaluations : 0,
            asymptotes,
            termination : ScanTermination::AllRootsFound,
        });
    }

    let sub_cfg = BisectionCfg::from_common(cfg.common);

    let dx    = (b - a) / samples as f64;
    let mut x = a;
    for step in 0..samples {
        let fx  = eval_sample(&mut func, x, &mut evals)?;
        let fx2 = eval_sample(&mut func, x + dx, &mut evals)?;

        if sign_change(fx, fx2) {
            match bisection(&mut func, x, x + dx, sub_cfg) {
                Ok(report) => {
                    evals += report.evaluations;
                    roots[found] = report.root;
                    found += 1;
                }
                // one pathological sub-interval must not abort the scan
                Err(BisectionError::Asymptote { x: at, .. }) => {
                    asymptotes += 1;
                    debug!(
                        "{}: skipping asymptote at x={:.3e} in [{:.3e}, {:.3e}]",
                        ALGORITHM, at, x, x + dx
                    );
                }
                Err(BisectionError::Common(err))    => return Err(err.into()),
                Err(BisectionError::Tolerance(err)) => return Err(err.into()),
            }
        }

        if found == requested {
            return Ok(ScanReport {
                roots,
                found,
                requested,
                steps       : step + 1,
                evaluations : evals,
                asymptotes,
                termination : ScanTermination::AllRootsFound,
            });
        }

        x += dx;
    }

    diagnostics::incomplete_scan(a, b, found, requested);
    Ok(ScanReport {
        roots,
        found,
        requested,
        steps       : samples,
        evaluations : evals,
        asymptotes,
        termination : ScanTermination::IntervalExhausted,
    })
}
