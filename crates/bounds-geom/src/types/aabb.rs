// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::Vec3;
use tracing::debug;

use crate::error::GeomError;
use crate::interval::Interval;
use crate::queries::mtv;
use crate::types::obb::Obb;
use crate::types::transform::Transform;

/// Sign pattern of the eight box corners relative to the centre.
///
/// Index bits `zyx`: bit 2 selects +x, bit 1 +y, bit 0 +z.
pub(crate) const CORNER_SIGNS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
];

/// Outward face normals in `-x, +x, -y, +y, -z, +z` order.
pub(crate) const FACE_NORMALS: [Vec3; 6] = [
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(0.0, 0.0, 1.0),
];

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `half_size` components are non-negative (extent from the centre to each
///   face, so the full width is twice the half-size).
/// - Values are `f32` and represent meters in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    position: Vec3,
    half_size: Vec3,
}

impl Aabb {
    /// Builds an AABB centred at `position` with the given half-extents.
    ///
    /// Negative half-size components are a caller bug (checked only in
    /// debug builds); use [`Aabb::try_new`] for untrusted input.
    #[must_use]
    pub fn new(position: Vec3, half_size: Vec3) -> Self {
        debug_assert!(
            half_size.to_array().iter().all(|h| *h >= 0.0),
            "invalid AABB: negative half-size {half_size:?}"
        );
        Self {
            position,
            half_size,
        }
    }

    /// Checked constructor: rejects non-finite input and negative half-sizes.
    pub fn try_new(position: Vec3, half_size: Vec3) -> Result<Self, GeomError> {
        validate_box(position, half_size)?;
        Ok(Self::new(position, half_size))
    }

    /// Builds an AABB from two opposite corners given in any order.
    #[must_use]
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        let min = a.min(&b);
        let max = a.max(&b);
        let half_size = max.sub(&min).scale(0.5);
        Self::new(min.add(&half_size), half_size)
    }

    /// Builds the minimal AABB that contains all `points`.
    ///
    /// Returns `None` when `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self::from_corners(min, max))
    }

    /// Centre of the box.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Half-extents along X, Y, Z.
    #[must_use]
    pub const fn half_size(&self) -> Vec3 {
        self.half_size
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        let a = self.position.add(&self.half_size);
        let b = self.position.sub(&self.half_size);
        a.min(&b)
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        let a = self.position.add(&self.half_size);
        let b = self.position.sub(&self.half_size);
        a.max(&b)
    }

    /// The eight corners, `position ± half_size`, ordered by sign pattern
    /// from `(-, -, -)` to `(+, +, +)`.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        CORNER_SIGNS.map(|s| self.position.add(&s.mul_elem(&self.half_size)))
    }

    /// World X, Y, Z axes.
    #[must_use]
    pub const fn axes(&self) -> [Vec3; 3] {
        Vec3::BASIS
    }

    /// Outward face normals in `-x, +x, -y, +y, -z, +z` order.
    #[must_use]
    pub const fn normals(&self) -> [Vec3; 6] {
        FACE_NORMALS
    }

    /// Interval spanned by the corners projected onto `axis`.
    #[must_use]
    pub fn project_onto_axis(&self, axis: &Vec3) -> Interval {
        project_corners(&self.corners(), axis)
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        let min = self.min();
        let max = self.max();
        (0..3).all(|i| {
            let p = point.component(i);
            min.component(i) <= p && p <= max.component(i)
        })
    }

    /// Point inside the box closest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.max(&self.min()).min(&self.max())
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    #[must_use]
    pub fn intersects_aabb(&self, other: &Self) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        (0..3).all(|i| {
            a_min.component(i) <= b_max.component(i) && a_max.component(i) >= b_min.component(i)
        })
    }

    /// Smallest single-axis vector that moves `other` out of this box.
    ///
    /// See [`mtv::minimum_translation_vector`].
    #[must_use]
    pub fn minimum_translation_vector(&self, other: &Self) -> Option<Vec3> {
        mtv::minimum_translation_vector(self, other)
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_corners(self.min().min(&other.min()), self.max().max(&other.max()))
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    #[must_use]
    pub fn inflate(&self, m: f32) -> Self {
        Self::new(self.position, self.half_size.add(&Vec3::splat(m)))
    }

    /// Places this local-space box in the world with `transform`.
    ///
    /// The box centre goes through the full transform, the half-size is
    /// scaled by the magnitude of the transform's scale, and the result takes
    /// the transform's rotation.
    #[must_use]
    pub fn to_obb(&self, transform: &Transform) -> Obb {
        let scale = transform.scale();
        if scale.to_array().iter().any(|s| *s < 0.0) {
            debug!(?scale, "negative scale folded into OBB half-size magnitude");
        }
        Obb::new(
            transform.transform_point(&self.position),
            self.half_size.mul_elem(&scale.abs()),
            transform.rotation(),
        )
    }
}

pub(crate) fn validate_box(position: Vec3, half_size: Vec3) -> Result<(), GeomError> {
    if !position.is_finite() {
        return Err(GeomError::NonFinite("box position"));
    }
    if !half_size.is_finite() {
        return Err(GeomError::NonFinite("box half-size"));
    }
    for axis in 0..3 {
        let value = half_size.component(axis);
        if value < 0.0 {
            return Err(GeomError::NegativeHalfSize { axis, value });
        }
    }
    Ok(())
}

pub(crate) fn project_corners(corners: &[Vec3; 8], axis: &Vec3) -> Interval {
    corners[1..]
        .iter()
        .fold(Interval::point(axis.dot(&corners[0])), |acc, c| {
            acc.expand(axis.dot(c))
        })
}
