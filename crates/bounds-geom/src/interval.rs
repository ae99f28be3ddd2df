// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Closed 1-D range `[min, max]`, typically a shape projected onto an axis.
///
/// Invariant: `min <= max`. A degenerate interval (`min == max`) is valid.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    min: f32,
    max: f32,
}

impl Interval {
    /// Builds the interval spanning `a` and `b` in either order.
    #[must_use]
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Degenerate interval containing only `value`.
    #[must_use]
    pub const fn point(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// `max - min`.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.max - self.min
    }

    /// Grows the interval to include `value`.
    #[must_use]
    pub fn expand(self, value: f32) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Returns `true` if `value` lies in `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if the intervals share at least one point.
    ///
    /// Closed on both ends: touching endpoints count as overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        other.min <= self.max && self.min <= other.max
    }

    /// Length of the shared range, or `0` when the intervals are disjoint.
    #[must_use]
    pub fn overlap_amount(&self, other: &Self) -> f32 {
        if !self.overlaps(other) {
            return 0.0;
        }
        self.max.min(other.max) - self.min.max(other.min)
    }
}
