//! Floating point tolerance shared by every "is zero" and equality check.

/// Absolute tolerance used for float comparisons throughout the crate.
pub const EPSILON: f64 = 1e-9;

/// Returns true when `a` and `b` differ by no more than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Returns true when `value` is within [`EPSILON`] of zero.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() <= EPSILON
}

/// Like [`approx_eq`] but with a caller supplied tolerance.
#[inline]
pub fn approx_eq_within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
