// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bounds_math::{approx_eq, Vec3};
use tracing::trace;

use crate::types::plane::Plane;
use crate::types::segment::Line3;

/// Triangle with corners `a`, `b`, `c`.
///
/// Winding matters: seen from the side `(b - a) × (c - a)` points to, the
/// corners run counter-clockwise. `Plane::from(tri)` uses that side as the
/// front face.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tri3 {
    a: Vec3,
    b: Vec3,
    c: Vec3,
}

impl Tri3 {
    /// Triangle from three corners, in winding order.
    #[must_use]
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// First corner.
    #[must_use]
    pub const fn a(&self) -> Vec3 {
        self.a
    }

    /// Second corner.
    #[must_use]
    pub const fn b(&self) -> Vec3 {
        self.b
    }

    /// Third corner.
    #[must_use]
    pub const fn c(&self) -> Vec3 {
        self.c
    }

    /// Corners as `[a, b, c]`.
    #[must_use]
    pub const fn corners(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Average of the three corners.
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        self.a.add(&self.b).add(&self.c).scale(1.0 / 3.0)
    }

    /// Edges `ab`, `bc`, `ca`.
    #[must_use]
    pub const fn edges(&self) -> [Line3; 3] {
        [
            Line3::new(self.a, self.b),
            Line3::new(self.b, self.c),
            Line3::new(self.c, self.a),
        ]
    }

    /// Returns `true` if `point` lies inside the triangle or on an edge.
    ///
    /// `point` is assumed to lie in the triangle's plane; only the side of
    /// each edge is tested, so a point off the plane is judged by its
    /// position along the triangle's prism.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        let to_a = self.a.sub(&point);
        let to_b = self.b.sub(&point);
        let to_c = self.c.sub(&point);
        let bc = to_b.cross(&to_c);
        let ca = to_c.cross(&to_a);
        let ab = to_a.cross(&to_b);
        bc.dot(&ca) >= 0.0 && bc.dot(&ab) >= 0.0
    }

    /// Barycentric weights `(wa, wb, wc)` of `point`, summing to one.
    ///
    /// Returns [`Vec3::ZERO`] when the triangle is degenerate, meaning the
    /// Gram determinant of its edges is within comparator tolerance of zero.
    /// With the default absolute tolerance that also rejects triangles
    /// whose doubled area is below about `0.07` square units.
    #[must_use]
    pub fn barycentric(&self, point: Vec3) -> Vec3 {
        let e0 = self.b.sub(&self.a);
        let e1 = self.c.sub(&self.a);
        let d = point.sub(&self.a);
        let (aa, ab, bb) = (e0.dot(&e0), e0.dot(&e1), e1.dot(&e1));
        let (pa, pb) = (d.dot(&e0), d.dot(&e1));
        let denom = aa * bb - ab * ab;
        if approx_eq(denom, 0.0) {
            trace!(denom, "degenerate triangle has no barycentric frame");
            return Vec3::ZERO;
        }
        let wb = (bb * pa - ab * pb) / denom;
        let wc = (aa * pb - ab * pa) / denom;
        Vec3::new(1.0 - wb - wc, wb, wc)
    }

    /// Reorders corners so they wind counter-clockwise seen from `normal`.
    ///
    /// Swaps `a`/`b` if the first pair winds the wrong way about the
    /// centroid, then `b`/`c` likewise.
    pub fn sort_ccw(&mut self, normal: &Vec3) {
        let centre = self.centroid();
        let winds_back =
            |p: Vec3, q: Vec3| normal.dot(&p.sub(&centre).cross(&q.sub(&centre))) < 0.0;
        if winds_back(self.a, self.b) {
            core::mem::swap(&mut self.a, &mut self.b);
        }
        if winds_back(self.b, self.c) {
            core::mem::swap(&mut self.b, &mut self.c);
        }
    }
}

/// Plane through the triangle, facing the side its corners wind
/// counter-clockwise from.
///
/// A degenerate triangle gives a zero normal; use [`Plane::from_points`] to
/// reject it instead.
impl From<Tri3> for Plane {
    fn from(tri: Tri3) -> Self {
        let normal = tri.b.sub(&tri.a).cross(&tri.c.sub(&tri.a)).normalize();
        Self::new(normal, normal.dot(&tri.a))
    }
}
