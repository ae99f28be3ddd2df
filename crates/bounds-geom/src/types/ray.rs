// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::{Vec3, EPSILON};

use crate::error::GeomError;

/// Ray starting at `origin` and extending infinitely along `direction`.
///
/// A ray is a half-line: points behind the origin are never hit.
/// `direction` is always unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray3 {
    origin: Vec3,
    direction: Vec3,
}

impl Ray3 {
    /// Creates a ray, normalizing `direction`.
    ///
    /// A zero-length direction yields a zero direction (see
    /// [`Vec3::normalize`]); use [`Ray3::try_new`] to reject it instead.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Checked constructor: rejects non-finite input and zero directions.
    pub fn try_new(origin: Vec3, direction: Vec3) -> Result<Self, GeomError> {
        if !origin.is_finite() {
            return Err(GeomError::NonFinite("ray origin"));
        }
        if !direction.is_finite() {
            return Err(GeomError::NonFinite("ray direction"));
        }
        if direction.length() <= EPSILON {
            return Err(GeomError::ZeroLength("ray direction"));
        }
        Ok(Self::new(origin, direction))
    }

    /// Origin of the ray.
    #[must_use]
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit direction of the ray.
    #[must_use]
    pub const fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point at distance `t` from the origin.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin.add(&self.direction.scale(t))
    }

    /// Point on the ray closest to `p`, clamped to the origin.
    #[must_use]
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        let t = p.sub(&self.origin).dot(&self.direction).max(0.0);
        self.point_at(t)
    }

    /// Same origin, opposite direction.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            origin: self.origin,
            direction: -self.direction,
        }
    }

    /// Approximate equality of origin and direction.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.origin.approx_eq(&other.origin) && self.direction.approx_eq(&other.direction)
    }
}
