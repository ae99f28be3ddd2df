// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types used by the kernel (volumes, rays, transforms).
//!
//! Semantics shared by every volume:
//! - Box containment is inclusive on faces; sphere containment is strict.
//! - Half-sizes are stored, never full extents.
//! - All types are plain values; nothing here caches derived data.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Oriented bounding boxes rotated by a unit quaternion."]
pub mod obb;
#[doc = "Infinite one-sided planes."]
pub mod plane;
#[doc = "Half-line rays."]
pub mod ray;
#[doc = "Finite line segments."]
pub mod segment;
#[doc = "Spheres."]
pub mod sphere;
#[doc = "Affine transforms with non-uniform scale."]
pub mod transform;
#[doc = "Triangles: containment, barycentric weights, winding."]
pub mod triangle;
