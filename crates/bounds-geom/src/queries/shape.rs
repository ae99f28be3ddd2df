// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::Vec3;

use crate::queries::raycast::{Raycast, RaycastResult};
use crate::types::aabb::Aabb;
use crate::types::obb::Obb;
use crate::types::plane::Plane;
use crate::types::ray::Ray3;
use crate::types::sphere::Sphere;

/// Any primitive volume, for collections of mixed shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Axis-aligned box.
    Aabb(Aabb),
    /// Oriented box.
    Obb(Obb),
    /// Sphere.
    Sphere(Sphere),
    /// Infinite plane.
    Plane(Plane),
}

impl Shape {
    /// Point containment using each shape's own boundary rule.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        match self {
            Self::Aabb(s) => s.contains_point(point),
            Self::Obb(s) => s.contains_point(point),
            Self::Sphere(s) => s.contains_point(point),
            Self::Plane(s) => s.contains_point(point),
        }
    }

    /// Closest point on (or in) the shape to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        match self {
            Self::Aabb(s) => s.closest_point(point),
            Self::Obb(s) => s.closest_point(point),
            Self::Sphere(s) => s.closest_point(point),
            Self::Plane(s) => s.closest_point(point),
        }
    }
}

impl Raycast for Shape {
    fn raycast(&self, ray: &Ray3) -> RaycastResult {
        match self {
            Self::Aabb(s) => s.raycast(ray),
            Self::Obb(s) => s.raycast(ray),
            Self::Sphere(s) => s.raycast(ray),
            Self::Plane(s) => s.raycast(ray),
        }
    }
}

impl From<Aabb> for Shape {
    fn from(value: Aabb) -> Self {
        Self::Aabb(value)
    }
}

impl From<Obb> for Shape {
    fn from(value: Obb) -> Self {
        Self::Obb(value)
    }
}

impl From<Sphere> for Shape {
    fn from(value: Sphere) -> Self {
        Self::Sphere(value)
    }
}

impl From<Plane> for Shape {
    fn from(value: Plane) -> Self {
        Self::Plane(value)
    }
}
