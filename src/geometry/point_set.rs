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

use std::ops::Index;

use crate::geometry::{Point2, Triangle, TriangleIndices};
use crate::numeric::Scalar;

/// Ordered, read-only collection of points. Duplicate coordinates are allowed;
/// the degeneracy predicate is what keeps them out of the results.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T> {
    points: Vec<Point2<T>>,
}

impl<T: Scalar> PointSet<T> {
    pub fn new(points: Vec<Point2<T>>) -> Self {
        Self { points }
    }

    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        coords.into_iter().map(Point2::from).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Point2<T>> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2<T>> {
        self.points.iter()
    }

    /// Resolves indices to vertices; `None` if any index is out of range.
    pub fn triangle(&self, indices: TriangleIndices) -> Option<Triangle<T>> {
        let [i, j, k] = indices.as_array();
        Some(Triangle::new(*self.get(i)?, *self.get(j)?, *self.get(k)?))
    }
}

impl<T: Scalar> From<Vec<Point2<T>>> for PointSet<T> {
    fn from(points: Vec<Point2<T>>) -> Self {
        PointSet::new(points)
    }
}

impl<T: Scalar> FromIterator<Point2<T>> for PointSet<T> {
    fn from_iter<I: IntoIterator<Item = Point2<T>>>(iter: I) -> Self {
        PointSet::new(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for PointSet<T> {
    type Output = Point2<T>;
    fn index(&self, index: usize) -> &Point2<T> {
        &self.points[index]
    }
}

impl<'a, T: Scalar> IntoIterator for &'a PointSet<T> {
    type Item = &'a Point2<T>;
    type IntoIter = std::slice::Iter<'a, Point2<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
