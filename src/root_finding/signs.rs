//! Sign utilities for bracket methods.
//! - `straddles`      : `true` if `u * v <= 0` (sign change or exact root)
//! - `strictly_apart` : `true` if `u * v < 0`
//!
//! Both compare signs rather than multiplying, so products that would
//! underflow to zero are still classified correctly.

/// Returns `true` if `u` and `v` do not share a strict sign.
#[inline]
pub(crate) fn straddles(u: f64, v: f64) -> bool {
    u == 0.0 || v == 0.0 || strictly_apart(u, v)
}


/// Returns `true` if `u` and `v` are non-zero with opposite signs.
#[inline]
pub(crate) fn strictly_apart(u: f64, v: f64) -> bool {
    (u < 0.0 && v > 0.0) || (u > 0.0 && v < 0.0)
}
