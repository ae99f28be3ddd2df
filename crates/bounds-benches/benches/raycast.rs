// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use bounds_geom::{Aabb, Obb, Plane, Ray3, Raycast, Shape, Sphere};
use bounds_math::{Quat, Vec3};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x5eed_b0c5;

/// Rays from a shell around the origin aimed at jittered targets near it,
/// so the batch mixes hits and every miss classification.
fn ray_batch(n: usize) -> Vec<Ray3> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n)
        .map(|_| {
            let origin = Vec3::new(
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
            );
            let target = Vec3::new(
                rng.gen_range(-4.0..4.0),
                rng.gen_range(-4.0..4.0),
                rng.gen_range(-4.0..4.0),
            );
            Ray3::new(origin, target.sub(&origin))
        })
        .collect()
}

fn bench_raycast(c: &mut Criterion) {
    let shapes: [(&str, Shape); 5] = [
        ("aabb", Aabb::new(Vec3::ZERO, Vec3::splat(2.0)).into()),
        (
            "obb-tilted",
            Obb::new(
                Vec3::ZERO,
                Vec3::splat(2.0),
                Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.6),
            )
            .into(),
        ),
        (
            "obb-aligned",
            Obb::new(Vec3::ZERO, Vec3::splat(2.0), Quat::identity()).into(),
        ),
        ("sphere", Sphere::new(Vec3::ZERO, 2.0).into()),
        ("plane", Plane::new(Vec3::UNIT_Y, 0.0).into()),
    ];

    let mut group = c.benchmark_group("raycast");
    for &n in &[1usize, 64, 1_024] {
        let rays = ray_batch(n);
        group.throughput(Throughput::Elements(n as u64));
        for (name, shape) in &shapes {
            group.bench_with_input(BenchmarkId::new(*name, n), &rays, |b, rays| {
                b.iter(|| {
                    rays.iter()
                        .filter(|ray| shape.raycast(black_box(ray)).is_ok())
                        .count()
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_raycast);
criterion_main!(benches);
