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

//! Nearest-neighbor chain heuristic.
//!
//! For every point `i`, take its nearest neighbor `j`, then the point closest
//! to `j` other than `i`, and score the triangle they form. That is `n`
//! candidates after the O(n² log n) ranking step instead of `C(n, 3)`. The true
//! minimum can involve points that are not each other's nearest neighbor, in
//! which case it is missed.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::geometry::{PointSet, TriangleIndices};
use crate::numeric::Scalar;
use crate::search::{NeighborRankings, Tracker, TriangleMatch, ensure_enough_points};

/// Perimeter-ranked heuristic search with the default validity policy.
///
/// # Errors
///
/// [`SearchError::InsufficientPoints`] or [`SearchError::AllDegenerate`], with
/// the same meaning as for the exact search.
pub fn find_minimum_triangle_heuristic<T: Scalar>(
    points: &PointSet<T>,
) -> Result<TriangleMatch<T>, SearchError> {
    find_minimum_triangle_heuristic_with(points, &SearchConfig::default())
}

/// Heuristic search ranking candidates by `config.metric`.
///
/// Candidates are still generated from distances; only the scoring changes.
pub fn find_minimum_triangle_heuristic_with<T: Scalar>(
    points: &PointSet<T>,
    config: &SearchConfig,
) -> Result<TriangleMatch<T>, SearchError> {
    ensure_enough_points(points)?;
    let rankings = build_rankings(points, config);
    let mut tracker = Tracker::new(points, config);

    for i in 0..points.len() {
        let Some(closest) = rankings.nearest(i) else {
            continue;
        };
        let Some(third) = rankings.nearest_excluding(closest.index, i) else {
            continue;
        };
        let Some(indices) = TriangleIndices::new(i, closest.index, third.index) else {
            continue;
        };
        tracker.offer(indices)?;
    }

    let result = tracker.finish();
    match &result {
        Ok(found) => tracing::debug!(
            n = points.len(),
            metric = %config.metric,
            candidates = found.stats.candidates,
            "heuristic search picked {} with size {}",
            found.indices,
            found.size
        ),
        Err(err) => tracing::debug!(n = points.len(), "heuristic search found nothing: {err}"),
    }
    result
}

#[cfg(feature = "parallel")]
fn build_rankings<T: Scalar>(points: &PointSet<T>, config: &SearchConfig) -> NeighborRankings<T> {
    if config.use_parallel() {
        NeighborRankings::build_parallel(points)
    } else {
        NeighborRankings::build(points)
    }
}

#[cfg(not(feature = "parallel"))]
fn build_rankings<T: Scalar>(points: &PointSet<T>, _config: &SearchConfig) -> NeighborRankings<T> {
    NeighborRankings::build(points)
}
