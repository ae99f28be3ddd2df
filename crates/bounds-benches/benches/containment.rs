// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use core::f32::consts::FRAC_PI_4;

use bounds_geom::{Aabb, Obb, Shape, Sphere};
use bounds_math::{Quat, Vec3};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn shapes() -> Vec<(&'static str, Shape)> {
    vec![
        ("aabb", Aabb::new(Vec3::ZERO, Vec3::splat(2.0)).into()),
        (
            "obb-aligned",
            Obb::new(Vec3::ZERO, Vec3::splat(2.0), Quat::identity()).into(),
        ),
        (
            "obb-tilted",
            Obb::new(
                Vec3::ZERO,
                Vec3::splat(2.0),
                Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_4),
            )
            .into(),
        ),
        ("sphere", Sphere::new(Vec3::ZERO, 2.0).into()),
    ]
}

fn bench_contains_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_point");
    let points = [
        ("inside", Vec3::new(1.0, 1.0, 1.0)),
        ("outside", Vec3::new(3.0, 3.0, 3.0)),
    ];
    for (shape_name, shape) in shapes() {
        for (point_name, point) in points {
            let id = BenchmarkId::new(shape_name, point_name);
            group.bench_with_input(id, &point, |b, p| {
                b.iter(|| black_box(shape.contains_point(black_box(*p))));
            });
        }
    }
    group.finish();
}

fn bench_derived_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("obb_derived");
    let aligned = Obb::new(Vec3::ZERO, Vec3::splat(2.0), Quat::identity());
    let tilted = Obb::new(
        Vec3::ZERO,
        Vec3::splat(2.0),
        Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_4),
    );
    for (name, obb) in [("aligned", aligned), ("tilted", tilted)] {
        group.bench_function(BenchmarkId::new("axes", name), |b| {
            b.iter(|| black_box(black_box(&obb).axes()));
        });
        group.bench_function(BenchmarkId::new("normals", name), |b| {
            b.iter(|| black_box(black_box(&obb).normals()));
        });
        group.bench_function(BenchmarkId::new("corners", name), |b| {
            b.iter(|| black_box(black_box(&obb).corners()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contains_point, bench_derived_geometry);
criterion_main!(benches);
