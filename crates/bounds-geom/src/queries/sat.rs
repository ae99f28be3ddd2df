// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::{Vec3, EPSILON};
use tracing::trace;

use crate::interval::Interval;
use crate::queries::raycast::Raycast;
use crate::types::aabb::Aabb;
use crate::types::obb::Obb;

/// Box-like volume usable by the separating axis test.
///
/// Implementors expose three orthonormal axes, eight corners, six outward
/// face normals, and the interval their corners span along an arbitrary
/// axis.
pub trait Box3: Raycast {
    /// Local axes in world space.
    fn axes(&self) -> [Vec3; 3];
    /// The eight corners.
    fn corners(&self) -> [Vec3; 8];
    /// Outward face normals in `-x, +x, -y, +y, -z, +z` order.
    fn normals(&self) -> [Vec3; 6];
    /// Interval spanned by the corners projected onto `axis`.
    fn project_onto_axis(&self, axis: &Vec3) -> Interval;
    /// Returns `true` if `point` lies inside or on the box.
    fn contains_point(&self, point: Vec3) -> bool;
}

impl Box3 for Aabb {
    fn axes(&self) -> [Vec3; 3] {
        Self::axes(self)
    }

    fn corners(&self) -> [Vec3; 8] {
        Self::corners(self)
    }

    fn normals(&self) -> [Vec3; 6] {
        Self::normals(self)
    }

    fn project_onto_axis(&self, axis: &Vec3) -> Interval {
        Self::project_onto_axis(self, axis)
    }

    fn contains_point(&self, point: Vec3) -> bool {
        Self::contains_point(self, point)
    }
}

impl Box3 for Obb {
    fn axes(&self) -> [Vec3; 3] {
        Self::axes(self)
    }

    fn corners(&self) -> [Vec3; 8] {
        Self::corners(self)
    }

    fn normals(&self) -> [Vec3; 6] {
        Self::normals(self)
    }

    fn project_onto_axis(&self, axis: &Vec3) -> Interval {
        Self::project_onto_axis(self, axis)
    }

    fn contains_point(&self, point: Vec3) -> bool {
        Self::contains_point(self, point)
    }
}

/// Returns the first axis along which `a` and `b` do not overlap, or `None`
/// if they intersect.
///
/// Axes are tried in a fixed order: the three axes of `b`, then for each
/// axis of `a` that axis followed by its cross products with the three axes
/// of `b` (15 candidates). Cross products of (near) parallel edges carry no
/// separating information and are skipped.
pub fn separating_axis<A, B>(a: &A, b: &B) -> Option<Vec3>
where
    A: Box3 + ?Sized,
    B: Box3 + ?Sized,
{
    let separates = |axis: &Vec3| {
        let separated = !a.project_onto_axis(axis).overlaps(&b.project_onto_axis(axis));
        if separated {
            trace!(axis = ?axis.to_array(), "separating axis found");
        }
        separated
    };

    let b_axes = b.axes();
    if let Some(axis) = b_axes.iter().find(|axis| separates(*axis)) {
        return Some(*axis);
    }
    for a_axis in &a.axes() {
        if separates(a_axis) {
            return Some(*a_axis);
        }
        for b_axis in &b_axes {
            let edge = b_axis.cross(a_axis);
            if edge.length_squared() <= EPSILON {
                continue;
            }
            if separates(&edge) {
                return Some(edge.normalize());
            }
        }
    }
    None
}

/// Separating Axis Theorem intersection test; touching boxes intersect.
#[must_use]
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: Box3 + ?Sized,
    B: Box3 + ?Sized,
{
    separating_axis(a, b).is_none()
}
