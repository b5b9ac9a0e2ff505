//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! used for report tagging and diagnostics.


/// Root-finding algorithm variants.
/// - [`Algorithm::Bisection`] : bracketing method, one root per call
/// - [`Algorithm::Newton`]    : open method, one root per call
/// - [`Algorithm::Rootwalk`]  : interval scan collecting several roots
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bisection,
    Newton,
    Rootwalk,
}

impl Algorithm {
    /// Algorithm names for the [`RootFindingReport::algorithm_name`] field
    /// and log messages.
    ///
    /// [`RootFindingReport::algorithm_name`]: super::report::RootFindingReport
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection => "bisection",
            Algorithm::Newton    => "newton",
            Algorithm::Rootwalk  => "rootwalk",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
