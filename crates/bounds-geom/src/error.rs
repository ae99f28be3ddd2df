// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Invalid input rejected by the checked (`try_new`) constructors.
///
/// The unchecked constructors assume callers uphold these invariants and
/// only `debug_assert!` them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A half-size component was negative.
    #[error("half-size component {axis} is negative ({value})")]
    NegativeHalfSize {
        /// Axis index (`0 = x`, `1 = y`, `2 = z`).
        axis: usize,
        /// Offending value.
        value: f32,
    },
    /// A sphere radius was negative.
    #[error("sphere radius is negative ({0})")]
    NegativeRadius(f32),
    /// An input contained NaN or infinity.
    #[error("{0} is not finite")]
    NonFinite(&'static str),
    /// A direction, normal, or orientation had (near) zero length.
    #[error("{0} has zero length")]
    ZeroLength(&'static str),
}
