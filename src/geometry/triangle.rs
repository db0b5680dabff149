// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt;

use crate::geometry::{Point2, Vector2};
use crate::numeric::Scalar;

/// Three distinct indices into a [`PointSet`](crate::geometry::PointSet),
/// stored in ascending order so that a triangle has a single representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleIndices([usize; 3]);

impl TriangleIndices {
    /// Returns `None` if any index is repeated.
    pub fn new(a: usize, b: usize, c: usize) -> Option<Self> {
        let mut idx = [a, b, c];
        idx.sort_unstable();
        if idx[0] == idx[1] || idx[1] == idx[2] {
            return None;
        }
        Some(Self(idx))
    }

    pub fn as_array(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl fmt::Display for TriangleIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [i, j, k] = self.0;
        write!(f, "{{{i}, {j}, {k}}}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T> {
    pub a: Point2<T>,
    pub b: Point2<T>,
    pub c: Point2<T>,
}

impl<T: Scalar> Triangle<T> {
    pub fn new(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Self {
        Self { a, b, c }
    }

    /// Edge vectors `ab`, `bc` and `ac`.
    pub fn edges(&self) -> [Vector2<T>; 3] {
        [
            self.a.vector_to(&self.b),
            self.b.vector_to(&self.c),
            self.a.vector_to(&self.c),
        ]
    }

    /// Lengths of `ab`, `bc` and `ca`.
    pub fn side_lengths(&self) -> [T; 3] {
        [
            self.a.distance_to(&self.b),
            self.b.distance_to(&self.c),
            self.c.distance_to(&self.a),
        ]
    }

    pub fn perimeter(&self) -> T {
        let [ab, bc, ca] = self.side_lengths();
        ab + bc + ca
    }

    /// Twice the signed area; positive for counter-clockwise vertex order.
    pub fn doubled_signed_area(&self) -> T {
        let [ab, _, ac] = self.edges();
        ab.cross(&ac)
    }

    /// Half the magnitude of the cross product of `ab` and `ac`.
    pub fn area_cross(&self) -> T {
        self.doubled_signed_area().abs() * T::half()
    }

    /// Area from the side lengths via Heron's formula.
    ///
    /// For nearly degenerate triangles the factors `s - a`, `s - b`, `s - c`
    /// subtract close values and lose precision; the radicand can even come out
    /// slightly negative, in which case the result is NaN. This is left as is:
    /// [`area_cross`](Self::area_cross) is the stable alternative, and the
    /// searches flag a NaN size instead of ranking it.
    pub fn area_heron(&self) -> T {
        let [a, b, c] = self.side_lengths();
        let s = (a + b + c) * T::half();
        (s * (s - a) * (s - b) * (s - c)).sqrt()
    }
}

impl<T: Scalar> From<[Point2<T>; 3]> for Triangle<T> {
    fn from([a, b, c]: [Point2<T>; 3]) -> Self {
        Triangle::new(a, b, c)
    }
}

impl<T: Scalar> fmt::Display for Triangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}

pub fn distance<T: Scalar>(p: &Point2<T>, q: &Point2<T>) -> T {
    p.distance_to(q)
}

pub fn perimeter<T: Scalar>(triangle: &Triangle<T>) -> T {
    triangle.perimeter()
}

pub fn area_cross<T: Scalar>(triangle: &Triangle<T>) -> T {
    triangle.area_cross()
}

pub fn area_heron<T: Scalar>(triangle: &Triangle<T>) -> T {
    triangle.area_heron()
}
