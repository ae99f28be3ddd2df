// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Separating Axis Theorem coverage: face axes, edge-cross axes, and
//! agreement with the direct AABB test.

mod common;

use core::f32::consts::FRAC_PI_4;

use bounds_geom::{intersects, separating_axis, Aabb, Box3, Obb};
use bounds_math::{Quat, Vec3};
use common::{aa_box, aa_obb, init_tracing, tilted_obb};
use proptest::prelude::*;

fn tilted_at(position: Vec3) -> Obb {
    Obb::new(
        position,
        Vec3::splat(2.0),
        Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_4),
    )
}

/// Two unit cubes whose nearest features are crossing edges: `a` spun about
/// Z presents an edge along Z on its top, `b` spun about X presents an edge
/// along X on its bottom. `gap` is the clearance between the two edges along
/// Y, the only axis that separates them.
fn crossed_edges(gap: f32) -> (Obb, Obb) {
    let a = Obb::new(
        Vec3::ZERO,
        Vec3::ONE,
        Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_4),
    );
    let b = Obb::new(
        Vec3::new(0.0, 2.0 * core::f32::consts::SQRT_2 + gap, 0.0),
        Vec3::ONE,
        Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_4),
    );
    (a, b)
}

fn face_axes_overlap(a: &Obb, b: &Obb) -> bool {
    a.axes()
        .iter()
        .chain(b.axes().iter())
        .all(|axis| a.project_onto_axis(axis).overlaps(&b.project_onto_axis(axis)))
}

#[test]
fn mixed_pairs_match_expected_overlap() {
    init_tracing();
    let near = Aabb::new(Vec3::ONE, Vec3::splat(2.0));
    let far = Aabb::new(Vec3::new(0.0, 0.0, 5.0), Vec3::splat(2.0));
    let tilted_near = tilted_at(Vec3::ONE);
    let tilted_far = tilted_at(Vec3::new(0.0, 0.0, 5.0));

    assert!(intersects(&aa_box(), &near));
    assert!(!intersects(&aa_box(), &far));
    assert!(intersects(&aa_obb(), &near));
    assert!(!intersects(&aa_obb(), &far));
    assert!(intersects(&tilted_obb(), &near));
    assert!(!intersects(&tilted_obb(), &far));
    assert!(intersects(&aa_obb(), &tilted_near));
    assert!(!intersects(&aa_obb(), &tilted_far));
    assert!(intersects(&tilted_obb(), &tilted_near));
}

#[test]
fn crossed_edges_separate_only_on_cross_axis() {
    init_tracing();
    let (a, b) = crossed_edges(0.1);
    assert!(face_axes_overlap(&a, &b));
    assert!(!intersects(&a, &b));
    assert!(!intersects(&b, &a));
    let axis = separating_axis(&a, &b).expect("edge-cross axis");
    assert!((axis.dot(&Vec3::UNIT_Y).abs() - 1.0).abs() < 1e-4);
}

#[test]
fn crossed_edges_touching_past_gap_intersect() {
    let (a, b) = crossed_edges(-0.1);
    assert!(intersects(&a, &b));
    assert!(separating_axis(&a, &b).is_none());
}

#[test]
fn dyn_box_pairs_dispatch() {
    let boxes: [&dyn Box3; 3] = [&aa_box(), &aa_obb(), &tilted_obb()];
    for a in boxes {
        for b in boxes {
            assert!(intersects(a, b));
        }
    }
}

fn arb_aabb() -> impl Strategy<Value = Aabb> {
    (
        prop::array::uniform3(-50.0_f32..50.0),
        prop::array::uniform3(0.0_f32..20.0),
    )
        .prop_map(|(p, h)| Aabb::new(Vec3::from(p), Vec3::from(h)))
}

fn arb_obb() -> impl Strategy<Value = Obb> {
    (
        prop::array::uniform3(-50.0_f32..50.0),
        prop::array::uniform3(0.1_f32..20.0),
        prop::array::uniform3(-1.0_f32..1.0),
        0.0_f32..core::f32::consts::TAU,
    )
        .prop_map(|(p, h, axis, angle)| {
            let axis = Vec3::from(axis);
            let rotation = if axis.length() < 1e-3 {
                Quat::identity()
            } else {
                Quat::from_axis_angle(axis, angle)
            };
            Obb::new(Vec3::from(p), Vec3::from(h), rotation)
        })
}

proptest! {
    #[test]
    fn sat_agrees_with_direct_aabb_test(a in arb_aabb(), b in arb_aabb()) {
        prop_assert_eq!(intersects(&a, &b), a.intersects_aabb(&b));
    }

    #[test]
    fn every_box_intersects_itself(o in arb_obb()) {
        prop_assert!(intersects(&o, &o));
    }

    #[test]
    fn intersection_is_symmetric(a in arb_obb(), b in arb_obb()) {
        prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
    }
}
