//! Scalar root finding.
//!
//! Three composable methods:
//! - [`root_finding::bisection`] : one root in a bracketing interval with a sign change
//! - [`root_finding::newton`]    : one root from an initial guess, derivative-driven
//! - [`root_finding::rootwalk`]  : sweep an interval in equal steps and collect several roots
//!
//! Degraded-but-usable outcomes (iteration-limit shortfalls, incomplete
//! scans) are returned as ordinary reports and logged at warn level on the
//! [`log`] facade. Only asymptote divergence, non-finite evaluations and
//! invalid inputs surface as errors.

pub mod root_finding;
