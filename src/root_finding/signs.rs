//! Sign-change test for root-finding algorithms.

/// Returns `true` if `u` and `v` straddle zero, via the strict product
/// test `u * v < 0`.
///
/// An exact zero on either side does NOT count as a sign change: a root
/// sitting exactly on a sample point is only caught through the adjacent
/// sub-interval. Overflow of the product to `-inf` still compares as a
/// change.
#[inline]
pub(crate) fn sign_change(u: f64, v: f64) -> bool {
    u * v < 0.0
}
