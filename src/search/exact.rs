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

//! Exhaustive search over all `C(n, 3)` triples.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::geometry::{PointSet, TriangleIndices};
use crate::metric::SizeMetric;
use crate::numeric::Scalar;
use crate::search::{Tracker, TriangleMatch, ensure_enough_points};

/// Smallest valid triangle under `metric`, using the default validity policy.
///
/// Triples are visited as `i < j < k` in lexicographic order and a triangle only
/// replaces the current best when it is strictly smaller, so among equal sizes
/// the first one visited wins.
///
/// # Errors
///
/// * [`SearchError::InsufficientPoints`] for fewer than three points
/// * [`SearchError::AllDegenerate`] if no triple survives the validity gate
///   with a positive size
pub fn find_minimum_triangle_exact<T: Scalar>(
    points: &PointSet<T>,
    metric: SizeMetric,
) -> Result<TriangleMatch<T>, SearchError> {
    find_minimum_triangle_exact_with(points, &SearchConfig::new(metric))
}

/// Same as [`find_minimum_triangle_exact`] with full control over the options.
///
/// # Errors
///
/// As above, plus [`SearchError::InvalidMetric`] when
/// [`InvalidMetricPolicy::Fail`](crate::InvalidMetricPolicy::Fail) is set and
/// some size comes out NaN or negative.
pub fn find_minimum_triangle_exact_with<T: Scalar>(
    points: &PointSet<T>,
    config: &SearchConfig,
) -> Result<TriangleMatch<T>, SearchError> {
    ensure_enough_points(points)?;

    let tracker = if config.use_parallel() {
        scan_parallel(points, config)?
    } else {
        scan_sequential(points, config)?
    };

    let result = tracker.finish();
    match &result {
        Ok(found) => tracing::debug!(
            n = points.len(),
            metric = %config.metric,
            candidates = found.stats.candidates,
            degenerate = found.stats.degenerate,
            "exact search picked {} with size {}",
            found.indices,
            found.size
        ),
        Err(err) => tracing::debug!(n = points.len(), "exact search found nothing: {err}"),
    }
    result
}

/// All triples whose smallest index is `i`.
fn scan_from<T: Scalar>(
    tracker: &mut Tracker<'_, T>,
    i: usize,
    n: usize,
) -> Result<(), SearchError> {
    for j in (i + 1)..n {
        for k in (j + 1)..n {
            if let Some(indices) = TriangleIndices::new(i, j, k) {
                tracker.offer(indices)?;
            }
        }
    }
    Ok(())
}

fn scan_sequential<'a, T: Scalar>(
    points: &'a PointSet<T>,
    config: &'a SearchConfig,
) -> Result<Tracker<'a, T>, SearchError> {
    let mut tracker = Tracker::new(points, config);
    for i in 0..points.len() {
        scan_from(&mut tracker, i, points.len())?;
    }
    Ok(tracker)
}

#[cfg(feature = "parallel")]
fn scan_parallel<'a, T: Scalar>(
    points: &'a PointSet<T>,
    config: &'a SearchConfig,
) -> Result<Tracker<'a, T>, SearchError> {
    use rayon::prelude::*;

    let n = points.len();
    let partials: Vec<Result<Tracker<'a, T>, SearchError>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut tracker = Tracker::new(points, config);
            scan_from(&mut tracker, i, n)?;
            Ok(tracker)
        })
        .collect();

    // merge in outer-index order so ties resolve exactly as in the sequential scan
    let mut merged = Tracker::new(points, config);
    for partial in partials {
        merged.merge(partial?);
    }
    Ok(merged)
}

#[cfg(not(feature = "parallel"))]
fn scan_parallel<'a, T: Scalar>(
    points: &'a PointSet<T>,
    config: &'a SearchConfig,
) -> Result<Tracker<'a, T>, SearchError> {
    scan_sequential(points, config)
}
