// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::{Quat, Vec3, EPSILON};

use crate::error::GeomError;
use crate::interval::Interval;
use crate::types::aabb::{self, Aabb, CORNER_SIGNS, FACE_NORMALS};

/// Oriented bounding box: a box of `half_size` centred at `position`,
/// rotated by the unit quaternion `orientation`.
///
/// When `orientation` is exactly the identity rotation every query takes
/// the [`Aabb`] code path, so an unrotated OBB is bit-for-bit equivalent to
/// the AABB with the same centre and half-size. The identity test is exact
/// (see [`Quat::is_identity`]); an orientation that has drifted away from
/// identity through repeated normalization takes the rotated path.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb {
    position: Vec3,
    half_size: Vec3,
    orientation: Quat,
}

impl Obb {
    /// Creates an OBB; `orientation` is normalized.
    #[must_use]
    pub fn new(position: Vec3, half_size: Vec3, orientation: Quat) -> Self {
        debug_assert!(
            half_size.to_array().iter().all(|h| *h >= 0.0),
            "invalid OBB: negative half-size {half_size:?}"
        );
        Self {
            position,
            half_size,
            orientation: orientation.normalize(),
        }
    }

    /// Checked constructor: rejects non-finite input, negative half-sizes,
    /// and zero-length orientations.
    pub fn try_new(position: Vec3, half_size: Vec3, orientation: Quat) -> Result<Self, GeomError> {
        aabb::validate_box(position, half_size)?;
        if !orientation.is_finite() {
            return Err(GeomError::NonFinite("orientation"));
        }
        if orientation.length() <= EPSILON {
            return Err(GeomError::ZeroLength("orientation"));
        }
        Ok(Self::new(position, half_size, orientation))
    }

    /// Unrotated OBB covering exactly `aabb`.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            position: aabb.position(),
            half_size: aabb.half_size(),
            orientation: Quat::identity(),
        }
    }

    /// Centre of the box.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Half-extents along the box's local axes.
    #[must_use]
    pub const fn half_size(&self) -> Vec3 {
        self.half_size
    }

    /// Unit orientation.
    #[must_use]
    pub const fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Returns the equivalent AABB when the orientation is exactly identity.
    #[must_use]
    pub fn as_aabb(&self) -> Option<Aabb> {
        self.orientation
            .is_identity()
            .then(|| Aabb::new(self.position, self.half_size))
    }

    /// Local X, Y, Z axes expressed in world space.
    #[must_use]
    pub fn axes(&self) -> [Vec3; 3] {
        if let Some(a) = self.as_aabb() {
            return a.axes();
        }
        Vec3::BASIS.map(|axis| self.orientation.rotate(&axis).normalize())
    }

    /// The eight corners, rotated about the box centre.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        if let Some(a) = self.as_aabb() {
            return a.corners();
        }
        CORNER_SIGNS.map(|s| {
            self.position
                .add(&self.orientation.rotate(&s.mul_elem(&self.half_size)))
        })
    }

    /// Outward face normals in local `-x, +x, -y, +y, -z, +z` order.
    #[must_use]
    pub fn normals(&self) -> [Vec3; 6] {
        if let Some(a) = self.as_aabb() {
            return a.normals();
        }
        FACE_NORMALS.map(|n| self.orientation.rotate(&n).normalize())
    }

    /// Interval spanned by the corners projected onto `axis`.
    #[must_use]
    pub fn project_onto_axis(&self, axis: &Vec3) -> Interval {
        if let Some(a) = self.as_aabb() {
            return a.project_onto_axis(axis);
        }
        aabb::project_corners(&self.corners(), axis)
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        if let Some(a) = self.as_aabb() {
            return a.contains_point(point);
        }
        let dir = point.sub(&self.position);
        self.axes().iter().enumerate().all(|(i, axis)| {
            let distance = dir.dot(axis);
            let h = self.half_size.component(i);
            -h <= distance && distance <= h
        })
    }

    /// Point inside the box closest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        if let Some(a) = self.as_aabb() {
            return a.closest_point(point);
        }
        let dir = point.sub(&self.position);
        self.axes()
            .iter()
            .enumerate()
            .fold(self.position, |acc, (i, axis)| {
                let h = self.half_size.component(i);
                acc.add(&axis.scale(dir.dot(axis).clamp(-h, h)))
            })
    }
}
