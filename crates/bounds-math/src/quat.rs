// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::Mul;

use crate::{Vec3, EPSILON};

/// Orientation quaternion stored as `(x, y, z, w)`.
///
/// Box orientations are expected to be unit length. Constructors that take
/// raw components do not normalize; call [`Quat::normalize`] after
/// composing many rotations.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    xyzw: [f32; 4],
}

impl Quat {
    /// The no-rotation quaternion `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Quaternion from raw components, taken as given.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { xyzw: [x, y, z, w] }
    }

    /// Components as `[x, y, z, w]`.
    pub const fn to_array(self) -> [f32; 4] {
        self.xyzw
    }

    /// Same as [`Quat::IDENTITY`].
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Scalar part `w`.
    pub const fn w(&self) -> f32 {
        self.xyzw[3]
    }

    /// Imaginary part `(x, y, z)`.
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.xyzw[0], self.xyzw[1], self.xyzw[2])
    }

    /// Exact identity check: `(0, 0, 0, ±1)`.
    ///
    /// A quaternion one ulp away from identity is a rotation.
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        self.xyz().to_array() == [0.0; 3] && self.w().abs() == 1.0
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// A zero-length axis yields [`Quat::IDENTITY`].
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len = axis.length();
        if len <= EPSILON {
            return Self::IDENTITY;
        }
        let (s, c) = (0.5 * angle).sin_cos();
        let v = axis.scale(s / len);
        Self::new(v.x(), v.y(), v.z(), c)
    }

    /// Hamilton product `self * other`: rotates by `other`, then by `self`.
    ///
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use bounds_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let (a, aw) = (self.xyz(), self.w());
        let (b, bw) = (other.xyz(), other.w());
        let v = b.scale(aw).add(&a.scale(bw)).add(&a.cross(&b));
        Self::new(v.x(), v.y(), v.z(), aw * bw - a.dot(&b))
    }

    /// `(-x, -y, -z, w)`, the inverse of a unit quaternion.
    pub fn conjugate(&self) -> Self {
        let v = -self.xyz();
        Self::new(v.x(), v.y(), v.z(), self.w())
    }

    /// Four-component Euclidean norm.
    pub fn length(&self) -> f32 {
        self.xyzw.iter().map(|c| c * c).sum::<f32>().sqrt()
    }

    /// `true` when no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.xyzw.iter().all(|c| c.is_finite())
    }

    /// Unit-length copy; degenerate input becomes [`Quat::IDENTITY`].
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::IDENTITY;
        }
        Self {
            xyzw: self.xyzw.map(|c| c / len),
        }
    }

    /// Rotates `v`, assuming `self` is unit length.
    ///
    /// Computes `v + w·t + q×t` with `t = 2·(q×v)`. For the identity both
    /// cross products vanish and `v` comes back unchanged.
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        let q = self.xyz();
        let t = q.cross(v).scale(2.0);
        v.add(&t.scale(self.w())).add(&q.cross(&t))
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for Quat {
    fn from(xyzw: [f32; 4]) -> Self {
        Self { xyzw }
    }
}

impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}
