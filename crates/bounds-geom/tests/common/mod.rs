// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(dead_code)]

use core::f32::consts::FRAC_PI_4;

use bounds_geom::{Aabb, Obb, Plane, Ray3};
use bounds_math::{Quat, Vec3};
use tracing_subscriber::EnvFilter;

/// Routes kernel `trace!`/`debug!` events to the test writer.
///
/// Filtered by `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Origin-centred axis-aligned box with half-size 2.
pub fn aa_box() -> Aabb {
    Aabb::new(Vec3::ZERO, Vec3::splat(2.0))
}

/// `aa_box` as an identity-orientation OBB.
pub fn aa_obb() -> Obb {
    Obb::new(Vec3::ZERO, Vec3::splat(2.0), Quat::identity())
}

/// Flat OBB in the XY plane with no Z depth.
pub fn flat_obb() -> Obb {
    Obb::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 0.0), Quat::identity())
}

/// `aa_obb` turned 45° about +Y.
pub fn tilted_obb() -> Obb {
    Obb::new(
        Vec3::ZERO,
        Vec3::splat(2.0),
        Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_4),
    )
}

/// Plane through the origin facing `normal`.
pub fn origin_plane(normal: Vec3) -> Plane {
    Plane::new(normal, 0.0)
}

/// Rays starting 100 units out on each world axis and aimed at the origin,
/// ordered `-x, +x, -y, +y, -z, +z` by starting side.
pub fn inbound_rays() -> [Ray3; 6] {
    [
        Ray3::new(Vec3::new(-100.0, 0.0, 0.0), Vec3::UNIT_X),
        Ray3::new(Vec3::new(100.0, 0.0, 0.0), -Vec3::UNIT_X),
        Ray3::new(Vec3::new(0.0, -100.0, 0.0), Vec3::UNIT_Y),
        Ray3::new(Vec3::new(0.0, 100.0, 0.0), -Vec3::UNIT_Y),
        Ray3::new(Vec3::new(0.0, 0.0, -100.0), Vec3::UNIT_Z),
        Ray3::new(Vec3::new(0.0, 0.0, 100.0), -Vec3::UNIT_Z),
    ]
}
