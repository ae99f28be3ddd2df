// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Bounding-volume geometry kernel.

This crate provides:
- 1-D interval overlap arithmetic (`Interval`).
- Primitive volumes: axis-aligned boxes (`Aabb`), oriented boxes (`Obb`),
  spheres (`Sphere`), and planes (`Plane`), plus half-line rays (`Ray3`).
- Triangles (`Tri3`) with edges as segments (`Line3`).
- Per-shape raycasts returning a typed hit or a classified miss
  (`RaycastHit`, `RaycastFail`).
- A shape-agnostic Separating Axis Theorem test over the `Box3`
  capability (`intersects`).
- Axis-aligned minimum translation vectors for box pairs.

Design notes:
- Every shape is a `Copy` value; derived corners/axes/normals are returned
  by value so concurrent queries against one instance are safe.
- Float32 throughout; boundary tests and tie-breaks use the combined
  absolute/relative comparator from `bounds-math`.
- Expected geometric outcomes never panic: misses are values, not errors
  thrown across the API.
"]

/// Constructor validation errors.
pub mod error;
/// Closed 1-D intervals.
pub mod interval;
/// Intersection, raycast, and separation queries.
pub mod queries;
/// Foundational geometric types.
pub mod types;

pub use error::GeomError;
pub use interval::Interval;
pub use queries::mtv::minimum_translation_vector;
pub use queries::raycast::{Raycast, RaycastFail, RaycastHit, RaycastResult};
pub use queries::sat::{intersects, separating_axis, Box3};
pub use queries::shape::Shape;
pub use types::aabb::Aabb;
pub use types::obb::Obb;
pub use types::plane::Plane;
pub use types::ray::Ray3;
pub use types::segment::Line3;
pub use types::sphere::Sphere;
pub use types::transform::Transform;
pub use types::triangle::Tri3;
