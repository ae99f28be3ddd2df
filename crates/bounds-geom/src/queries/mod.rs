// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Queries over the primitive volumes in [`crate::types`].

/// Axis-aligned minimum translation vectors.
pub mod mtv;
/// Per-shape raycasts and the miss taxonomy.
pub mod raycast;
/// Separating Axis Theorem over the [`sat::Box3`] capability.
pub mod sat;
/// Closed enum over every volume for heterogeneous dispatch.
pub mod shape;
