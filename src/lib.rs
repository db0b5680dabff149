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

//! Find the smallest non-degenerate triangle in a planar point set.
//!
//! Two searches are provided: an exhaustive one over all triples, which is
//! exact, and a nearest-neighbor chain heuristic, which is much cheaper but may
//! return a larger triangle. Both rank candidates by a [`SizeMetric`] and gate
//! them through a [`ValidityPolicy`] first.
//!
//! ```
//! use mintri::{PointSet, SizeMetric, find_minimum_triangle_exact};
//!
//! let points = PointSet::from_coords([(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (10.0, 10.0)]);
//! let found = find_minimum_triangle_exact(&points, SizeMetric::Perimeter).unwrap();
//! assert_eq!(found.indices.as_array(), [0, 1, 2]);
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod generation;
pub mod geometry;
pub mod kernel;
pub mod metric;
pub mod numeric;
pub mod search;

pub use compare::{Comparison, compare};
pub use config::{InvalidMetricPolicy, SearchConfig};
pub use error::{GenerationError, ParseError, SearchError};
pub use generation::{PointSource, UniformIntegerSource, generate_points};
pub use geometry::{Point2, PointSet, Triangle, TriangleIndices, Vector2};
pub use kernel::{ValidityPolicy, is_valid};
pub use metric::SizeMetric;
pub use numeric::Scalar;
pub use search::{
    NeighborRankings, SearchStats, TriangleMatch, find_minimum_triangle_exact,
    find_minimum_triangle_exact_with, find_minimum_triangle_heuristic,
    find_minimum_triangle_heuristic_with,
};
