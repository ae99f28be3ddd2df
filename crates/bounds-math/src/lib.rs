// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Deterministic math primitives for the bounds kernel.

This crate provides:
- 3D vectors (`Vec3`) used for both points and directions.
- Unit quaternions (`Quat`) for orientation and vector rotation.
- The tolerance-aware comparator (`Tolerance`, `approx_eq`) used by every
  boundary test and tie-break in the geometry layer.

All operations use `f32` so results round like the runtime's float32 mode.
"]

mod approx;
mod quat;
mod vec3;

pub use approx::{approx_eq, nonzero, Tolerance};
pub use quat::Quat;
pub use vec3::Vec3;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

