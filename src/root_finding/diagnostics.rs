//! Non-fatal notifications.
//!
//! Degraded-but-usable outcomes (iteration-limit shortfalls, incomplete
//! scans) are reported on the [`log`] facade and never interrupt control
//! flow. The structured payloads live on the reports themselves; the text
//! here is for humans watching the log.

use log::warn;

/// `max_iter` exhausted without meeting `eps`. A best-effort value is
/// still returned to the caller.
pub(crate) fn convergence_shortfall(
    algorithm: &'static str,
    eps: f64,
    max_iter: usize,
    x: f64,
    fx: f64,
) {
    warn!(
        "{}: could not converge within error margin `eps={:.2e}` \
         for maximum number of iterations `max_iter={}` [x={:.2e}, error={:.2e}]",
        algorithm, eps, max_iter, x, fx
    );
}

/// Scan exhausted the whole interval with fewer roots than requested.
pub(crate) fn incomplete_scan(a: f64, b: f64, found: usize, requested: usize) {
    warn!(
        "rootwalk: could not find all roots within interval `[{:.3e}, {:.3e}]` \
         [{}/{} roots found]",
        a, b, found, requested
    );
}
