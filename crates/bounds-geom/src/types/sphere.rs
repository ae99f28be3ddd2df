// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::Vec3;

use crate::error::GeomError;

/// Sphere of `radius` centred at `position`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    position: Vec3,
    radius: f32,
}

impl Sphere {
    /// Creates a sphere. A negative radius is a caller bug (debug-checked).
    #[must_use]
    pub fn new(position: Vec3, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "invalid sphere: negative radius {radius}");
        Self { position, radius }
    }

    /// Checked constructor: rejects non-finite input and negative radii.
    pub fn try_new(position: Vec3, radius: f32) -> Result<Self, GeomError> {
        if !position.is_finite() {
            return Err(GeomError::NonFinite("sphere position"));
        }
        if !radius.is_finite() {
            return Err(GeomError::NonFinite("sphere radius"));
        }
        if radius < 0.0 {
            return Err(GeomError::NegativeRadius(radius));
        }
        Ok(Self::new(position, radius))
    }

    /// Centre of the sphere.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Radius of the sphere.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns `true` if `point` lies strictly inside the sphere.
    ///
    /// Points on the surface are not contained.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.distance_squared(&self.position) < self.radius * self.radius
    }

    /// Point on the surface closest to `point`.
    ///
    /// For `point == position` the direction is undefined and the centre is
    /// returned.
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let dir = point.sub(&self.position).normalize();
        self.position.add(&dir.scale(self.radius))
    }
}
