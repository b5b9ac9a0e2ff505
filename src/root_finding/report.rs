//! Report types returned by the root-finding algorithms.

/// Reasons a single-root algorithm may terminate.
/// - [`TerminationReason::ToleranceReached`] : `|f(root)| < eps`
/// - [`TerminationReason::IterationLimit`]   : `max_iter` exhausted; the
///   report still carries the best estimate and a convergence shortfall
///   is logged at warn level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`] : bisection — final `[a, b]` bounds
/// - [`Stencil::Open`]    : newton — previous iterate
#[derive(Debug, Copy, Clone)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: f64 },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x }         => std::slice::from_ref(x),
        }
    }
}


/// Final report returned by [`bisection`] and [`newton`].
///
/// - `root`               : best root estimate
/// - `f_root`             : function value at `root`
/// - `iterations`         : total iterations
/// - `evaluations`        : total function (and derivative) evaluations
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])
/// - `stencil`            : last set of points used in the update formula
/// - `algorithm_name`     : algorithm name (e.g. `"bisection"`)
///
/// [`bisection`]: super::bisection::bisection
/// [`newton`]: super::newton::newton
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport {
    pub root               : f64,
    pub f_root             : f64,
    pub iterations         : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub stencil            : Stencil,
    pub algorithm_name     : &'static str,
}


/// How a [`rootwalk`] scan ended.
/// - [`ScanTermination::AllRootsFound`]     : every requested root was
///   collected; the remainder of the interval was not scanned
/// - [`ScanTermination::IntervalExhausted`] : the whole interval was
///   walked and fewer roots were found; an incomplete-solution warning
///   is logged
///
/// [`rootwalk`]: super::rootwalk::rootwalk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanTermination {
    AllRootsFound,
    IntervalExhausted,
}


/// Final report returned by [`rootwalk`].
///
/// [`rootwalk`]: super::rootwalk::rootwalk
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Found roots in scan order, padded to `requested` length with
    /// `f64::NAN` sentinels. Never reordered or deduplicated.
    pub roots       : Vec<f64>,
    /// Number of roots actually found.
    pub found       : usize,
    /// Number of roots asked for.
    pub requested   : usize,
    /// Sub-intervals examined before the scan stopped.
    pub steps       : usize,
    /// Total function evaluations, including those spent inside
    /// sub-interval bisections.
    pub evaluations : usize,
    /// Sub-intervals skipped after an asymptote diagnosis.
    pub asymptotes  : usize,
    pub termination : ScanTermination,
}

impl ScanReport {
    /// `true` if every requested root slot was filled.
    pub fn is_complete(&self) -> bool {
        self.found == self.requested
    }
}
