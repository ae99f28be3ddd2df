// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::{approx_eq, nonzero, Vec3};
use thiserror::Error;
use tracing::trace;

use crate::types::aabb::Aabb;
use crate::types::obb::Obb;
use crate::types::plane::Plane;
use crate::types::ray::Ray3;
use crate::types::sphere::Sphere;

/// Successful raycast: where the ray entered (or, from inside, left) the
/// volume and the outward surface normal there.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaycastHit {
    point: Vec3,
    normal: Vec3,
    distance: f32,
}

impl RaycastHit {
    /// Creates a hit record.
    #[must_use]
    pub const fn new(point: Vec3, normal: Vec3, distance: f32) -> Self {
        Self {
            point,
            normal,
            distance,
        }
    }

    /// World-space hit point.
    #[must_use]
    pub const fn point(&self) -> Vec3 {
        self.point
    }

    /// Unit surface normal at the hit point.
    #[must_use]
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Distance along the ray; always `>= 0`.
    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }
}

/// Why a raycast produced no hit.
///
/// Misses are ordinary outcomes, not faults; callers typically branch on
/// the variant or discard it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RaycastFail {
    /// No classification applied.
    #[default]
    #[error("unknown")]
    Unknown,
    /// The ray's line misses the volume.
    #[error("outside bounds")]
    OutsideBounds,
    /// The volume lies entirely behind the ray origin.
    #[error("behind ray origin")]
    TargetBehindRayOrigin,
    /// The ray approaches the plane from behind or runs parallel to it.
    #[error("faces away from ray")]
    PlaneFacesAwayFromRay,
}

/// Outcome of [`Raycast::raycast`].
pub type RaycastResult = Result<RaycastHit, RaycastFail>;

/// Shapes a [`Ray3`] can be cast against.
pub trait Raycast {
    /// Casts `ray` against the shape.
    fn raycast(&self, ray: &Ray3) -> RaycastResult;
}

impl Raycast for Aabb {
    fn raycast(&self, ray: &Ray3) -> RaycastResult {
        slab_raycast(ray, self.position(), &self.axes(), self.half_size())
    }
}

impl Raycast for Obb {
    fn raycast(&self, ray: &Ray3) -> RaycastResult {
        if let Some(aabb) = self.as_aabb() {
            return aabb.raycast(ray);
        }
        slab_raycast(ray, self.position(), &self.axes(), self.half_size())
    }
}

impl Raycast for Plane {
    fn raycast(&self, ray: &Ray3) -> RaycastResult {
        let normal = self.normal();
        let nd = ray.direction().dot(&normal);
        if nd >= 0.0 {
            trace!(nd, "plane faces away from ray");
            return Err(RaycastFail::PlaneFacesAwayFromRay);
        }
        let t = (self.distance() - ray.origin().dot(&normal)) / nd;
        if t < 0.0 {
            trace!(t, "plane behind ray origin");
            return Err(RaycastFail::TargetBehindRayOrigin);
        }
        Ok(RaycastHit::new(ray.point_at(t), normal, t))
    }
}

impl Raycast for Sphere {
    fn raycast(&self, ray: &Ray3) -> RaycastResult {
        let e = self.position().sub(&ray.origin());
        let r2 = self.radius() * self.radius();
        let e2 = e.length_squared();
        let a = e.dot(&ray.direction());
        let b2 = e2 - a * a;
        if r2 - b2 < 0.0 {
            trace!(b2, r2, "ray line misses sphere");
            return Err(RaycastFail::OutsideBounds);
        }
        let f = (r2 - b2).abs().sqrt();
        let t = if e2 < r2 { a + f } else { a - f };
        if t < 0.0 {
            trace!(t, "sphere behind ray origin");
            return Err(RaycastFail::TargetBehindRayOrigin);
        }
        let point = ray.point_at(t);
        let normal = point.sub(&self.position()).normalize();
        Ok(RaycastHit::new(point, normal, t))
    }
}

/// Slab test against a box with orthonormal `axes` and half-extents `half`
/// centred at `center`.
///
/// Candidate `2i` is the `+axes[i]` face, `2i + 1` the `-axes[i]` face.
pub(crate) fn slab_raycast(ray: &Ray3, center: Vec3, axes: &[Vec3; 3], half: Vec3) -> RaycastResult {
    let to_center = center.sub(&ray.origin());
    let mut t = [0.0_f32; 6];
    for (i, axis) in axes.iter().enumerate() {
        let e = axis.dot(&to_center);
        let mut f = axis.dot(&ray.direction());
        let h = half.component(i);
        if approx_eq(f, 0.0) {
            if -e - h > 0.0 || -e + h < 0.0 {
                trace!(axis = i, "ray parallel to slab and outside it");
                return Err(RaycastFail::OutsideBounds);
            }
            f = nonzero(f);
        }
        t[2 * i] = finite((e + h) / f);
        t[2 * i + 1] = finite((e - h) / f);
    }

    let (tmin, tmax) = t
        .chunks_exact(2)
        .fold((-f32::MAX, f32::MAX), |(lo, hi), pair| {
            (lo.max(pair[0].min(pair[1])), hi.min(pair[0].max(pair[1])))
        });
    if tmax < 0.0 {
        trace!(tmax, "box behind ray origin");
        return Err(RaycastFail::TargetBehindRayOrigin);
    }
    if tmin > tmax {
        trace!(tmin, tmax, "slabs do not overlap");
        return Err(RaycastFail::OutsideBounds);
    }

    let distance = if tmin >= 0.0 { tmin } else { tmax };
    let face = t
        .iter()
        .enumerate()
        .filter(|(_, candidate)| approx_eq(**candidate, distance))
        .min_by(|(_, a), (_, b)| (*a - distance).abs().total_cmp(&(*b - distance).abs()))
        .map(|(j, _)| j)
        .ok_or(RaycastFail::Unknown)?;
    let axis = axes[face / 2];
    let normal = if face % 2 == 0 { axis } else { -axis };
    Ok(RaycastHit::new(ray.point_at(distance), normal, distance))
}

fn finite(v: f32) -> f32 {
    v.clamp(-f32::MAX, f32::MAX)
}
