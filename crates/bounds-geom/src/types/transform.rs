// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::{Quat, Vec3};

/// Affine transform with non-uniform scale used to place local-space boxes.
///
/// Conventions:
/// - `translation` in meters (world space).
/// - `rotation` as a unit quaternion (normalized on construction).
/// - `scale` is non-uniform and applied before rotation/translation.
///
/// `transform_point` scales, then rotates, then translates. Negative
/// scales are accepted but flip handedness; OBB derivation uses their
/// magnitude.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform from components; `rotation` is normalized.
    #[must_use]
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation: rotation.normalize(),
            scale,
        }
    }

    /// Pure translation.
    #[must_use]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::identity(),
            scale: Vec3::ONE,
        }
    }

    /// Translation component.
    #[must_use]
    pub const fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    #[must_use]
    pub const fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub const fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Maps a local-space point into world space.
    #[must_use]
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.rotation
            .rotate(&point.mul_elem(&self.scale))
            .add(&self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
