//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ non-finite function evaluation
//! │   └ invalid interval bounds
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     └ invalid `eps` error margin
//!
//! Each algorithm wraps these in its own error enum (e.g.
//! `BisectionError`) via `#[error(transparent)]`, alongside its
//! method-specific failure modes.


use thiserror::Error;


/// Root-finding runtime errors.
///
/// ┌ Non-finite function evaluation
/// └ Invalid interval bounds
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}


/// Tolerance configuration errors.
///
/// `max_iter` is deliberately unvalidated: `0` is meaningful and sends
/// an algorithm straight to its shortfall path.
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `eps` margin: must be finite and > 0. got {got}")]
    InvalidEps { got: f64 },
}
