// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::Vec3;

/// Finite line segment from `start` to `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line3 {
    start: Vec3,
    end: Vec3,
}

impl Line3 {
    /// Segment between two points.
    #[must_use]
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// First endpoint.
    #[must_use]
    pub const fn start(&self) -> Vec3 {
        self.start
    }

    /// Second endpoint.
    #[must_use]
    pub const fn end(&self) -> Vec3 {
        self.end
    }

    /// `end - start`, not normalized.
    #[must_use]
    pub fn delta(&self) -> Vec3 {
        self.end.sub(&self.start)
    }

    /// Distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.delta().length()
    }
}
