// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::{Tolerance, Vec3, EPSILON};

use crate::error::GeomError;

/// Infinite plane `{x | normal · x = distance}`.
///
/// `distance` is the signed offset of the plane from the world origin along
/// `normal`. Only the side the normal points to is the front face; raycasts
/// approaching from behind miss.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vec3,
    distance: f32,
}

impl Plane {
    /// Creates a plane, normalizing `normal`.
    #[must_use]
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalize(),
            distance,
        }
    }

    /// Checked constructor: rejects non-finite input and zero normals.
    pub fn try_new(normal: Vec3, distance: f32) -> Result<Self, GeomError> {
        if !normal.is_finite() || !distance.is_finite() {
            return Err(GeomError::NonFinite("plane"));
        }
        if normal.length() <= EPSILON {
            return Err(GeomError::ZeroLength("plane normal"));
        }
        Ok(Self::new(normal, distance))
    }

    /// Plane through three points; counter-clockwise `a, b, c` faces the
    /// viewer.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Result<Self, GeomError> {
        let normal = b.sub(&a).cross(&c.sub(&a));
        if normal.length() <= EPSILON {
            return Err(GeomError::ZeroLength("plane normal"));
        }
        let normal = normal.normalize();
        Ok(Self {
            normal,
            distance: normal.dot(&a),
        })
    }

    /// Unit normal.
    #[must_use]
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed offset from the origin along the normal.
    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Signed distance of `point` from the plane (positive in front).
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) - self.distance
    }

    /// Returns `true` if `point` lies on the plane within the default
    /// comparator tolerance.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.contains_point_with(point, &Tolerance::DEFAULT)
    }

    /// [`Plane::contains_point`] with an explicit tolerance.
    #[must_use]
    pub fn contains_point_with(&self, point: Vec3, tolerance: &Tolerance) -> bool {
        tolerance.approx_eq(self.signed_distance(point), 0.0)
    }

    /// Orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.sub(&self.normal.scale(self.signed_distance(point)))
    }
}
