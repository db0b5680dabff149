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
use std::ops::Sub;

use crate::geometry::Vector2;
use crate::numeric::Scalar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Euclidean distance. Zero iff the points coincide.
    pub fn distance_to(&self, other: &Self) -> T {
        (other - self).norm()
    }

    /// Vector pointing from `self` to `other`.
    pub fn vector_to(&self, other: &Self) -> Vector2<T> {
        other - self
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Point2<T>> for &'a Point2<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: &'b Point2<T>) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: Point2<T>) -> Vector2<T> {
        &self - &rhs
    }
}

impl<T: Scalar> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2::new(x, y)
    }
}

impl<T: Scalar> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point2::new(x, y)
    }
}

impl<T: Scalar> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let p = Point2::new(1.0, 2.0);
        let q = Point2::new(4.0, 6.0);
        assert_eq!(p.distance_to(&q), 5.0);
        assert_eq!(q.distance_to(&p), 5.0);
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn vector_to_points_at_target() {
        let p = Point2::new(1.0, 1.0);
        let q = Point2::new(3.0, -2.0);
        assert_eq!(p.vector_to(&q), Vector2::new(2.0, -3.0));
    }

    #[test]
    fn display_prints_coordinates() {
        assert_eq!(Point2::new(-3.0, 7.5).to_string(), "(-3, 7.5)");
    }
}
