// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Approximate float comparison and divisor guards.
//!
//! The comparator combines an absolute threshold with a relative one: two
//! values are "close" when either test passes. The absolute arm dominates
//! near zero, the relative arm for large magnitudes.

/// Absolute/relative thresholds for [`Tolerance::approx_eq`].
///
/// The default (`abs = 0.005`, `rel = 1e-5`) is the comparator used by the
/// geometry kernel for boundary tests and tie-breaks.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerance {
    /// Maximum absolute difference treated as equal.
    pub abs: f32,
    /// Maximum difference relative to the larger magnitude.
    pub rel: f32,
}

impl Tolerance {
    /// Kernel default: `abs = 0.005`, `rel = 1e-5`.
    pub const DEFAULT: Self = Self {
        abs: 0.005,
        rel: 1e-5,
    };

    /// Creates a tolerance from explicit thresholds.
    pub const fn new(abs: f32, rel: f32) -> Self {
        Self { abs, rel }
    }

    /// Reports whether `a` and `b` are within this tolerance.
    pub fn approx_eq(&self, a: f32, b: f32) -> bool {
        let diff = (a - b).abs();
        if diff <= self.abs {
            return true;
        }
        let largest = a.abs().max(b.abs());
        diff <= largest * self.rel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reports whether `a` and `b` are close under [`Tolerance::DEFAULT`].
pub fn approx_eq(a: f32, b: f32) -> bool {
    Tolerance::DEFAULT.approx_eq(a, b)
}

/// Returns `v` if it is non-zero, otherwise the smallest positive subnormal
/// `f32` (bit pattern `1`) with the sign of `v`, so `-0.0` maps to its
/// negative.
///
/// Used to keep slab divisions finite in sign-aware form when a direction
/// component vanishes.
#[allow(clippy::float_cmp)]
pub fn nonzero(v: f32) -> f32 {
    if v != 0.0 {
        return v;
    }
    f32::from_bits(1).copysign(v)
}
