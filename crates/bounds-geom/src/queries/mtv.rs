// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::Vec3;

use crate::interval::Interval;
use crate::types::aabb::Aabb;

/// Smallest single-axis translation that separates `b` from `a`.
///
/// Returns `None` unless the boxes overlap with positive depth on all three
/// world axes. Otherwise the axis with the least overlap wins (lowest index
/// on ties) and the vector points from `a` towards `b`: applying it to `b`
/// leaves the two boxes touching on that axis. When the centres coincide on
/// that axis the vector is positive.
#[must_use]
pub fn minimum_translation_vector(a: &Aabb, b: &Aabb) -> Option<Vec3> {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());

    let mut best: Option<(usize, f32)> = None;
    for axis in 0..3 {
        let ia = Interval::new(a_min.component(axis), a_max.component(axis));
        let ib = Interval::new(b_min.component(axis), b_max.component(axis));
        let overlap = ia.overlap_amount(&ib);
        if overlap <= 0.0 {
            return None;
        }
        if best.is_none_or(|(_, depth)| overlap < depth) {
            best = Some((axis, overlap));
        }
    }

    let (axis, depth) = best?;
    let sign = if a.position().component(axis) <= b.position().component(axis) {
        1.0
    } else {
        -1.0
    };
    Some(Vec3::ZERO.with_component(axis, sign * depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_boxes_have_no_mtv() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE);
        assert!(a.intersects_aabb(&b));
        assert_eq!(minimum_translation_vector(&a, &b), None);
    }

    #[test]
    fn picks_shallowest_axis_and_points_away() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(0.0, -1.5, 0.2), Vec3::ONE);
        let mtv = minimum_translation_vector(&a, &b).expect("overlap");
        assert_eq!(mtv.to_array(), [0.0, -0.5, 0.0]);
    }
}
