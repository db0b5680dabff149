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

//! Minimum-triangle searches.
//!
//! [`exact`] enumerates every triple and is the reference answer. [`heuristic`]
//! only looks at nearest-neighbor chains and may miss the optimum, but it never
//! reports a triangle smaller than the exact one since its candidates are a
//! subset of the exhaustive ones.

pub mod exact;
pub mod heuristic;
pub mod neighbors;

use std::cmp::Ordering;
use std::fmt;
use std::ops::AddAssign;

use crate::config::{InvalidMetricPolicy, SearchConfig};
use crate::error::SearchError;
use crate::geometry::{PointSet, Triangle, TriangleIndices};
use crate::kernel::is_valid;
use crate::metric::SizeMetric;
use crate::numeric::Scalar;

pub use exact::{find_minimum_triangle_exact, find_minimum_triangle_exact_with};
pub use heuristic::{find_minimum_triangle_heuristic, find_minimum_triangle_heuristic_with};
pub use neighbors::{Neighbor, NeighborRankings};

/// Counters describing what a search looked at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Triples handed to the validity gate.
    pub candidates: usize,
    /// Rejected by the validity policy.
    pub degenerate: usize,
    /// Metric returned NaN or a negative value.
    pub invalid_metric: usize,
    /// Passed the gate but measured exactly zero.
    pub zero_size: usize,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: SearchStats) {
        self.candidates += rhs.candidates;
        self.degenerate += rhs.degenerate;
        self.invalid_metric += rhs.invalid_metric;
        self.zero_size += rhs.zero_size;
    }
}

/// The winning triangle of a search together with its size.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMatch<T> {
    pub indices: TriangleIndices,
    pub triangle: Triangle<T>,
    pub size: T,
    pub metric: SizeMetric,
    pub stats: SearchStats,
}

impl<T: Scalar> fmt::Display for TriangleMatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at indices {} with {} {}",
            self.triangle, self.indices, self.metric, self.size
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Best<T> {
    indices: TriangleIndices,
    triangle: Triangle<T>,
    size: T,
}

/// Running minimum shared by both searches.
///
/// Every candidate passes through [`offer`](Self::offer), which applies the
/// validity gate, the metric guard and the strict-improvement rule, so that the
/// first triangle reaching a given size keeps its place.
pub(crate) struct Tracker<'a, T> {
    points: &'a PointSet<T>,
    config: &'a SearchConfig,
    best: Option<Best<T>>,
    stats: SearchStats,
}

impl<'a, T: Scalar> Tracker<'a, T> {
    pub(crate) fn new(points: &'a PointSet<T>, config: &'a SearchConfig) -> Self {
        Self {
            points,
            config,
            best: None,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn offer(&mut self, indices: TriangleIndices) -> Result<(), SearchError> {
        let Some(triangle) = self.points.triangle(indices) else {
            return Ok(());
        };
        self.stats.candidates += 1;

        if !is_valid(&triangle, self.config.policy) {
            self.stats.degenerate += 1;
            return Ok(());
        }

        let size = match self.config.metric.measure_checked(&triangle, indices) {
            Ok(size) => size,
            Err(err) => match self.config.on_invalid_metric {
                InvalidMetricPolicy::Fail => return Err(err),
                InvalidMetricPolicy::Skip => {
                    tracing::warn!("skipping candidate: {err}");
                    self.stats.invalid_metric += 1;
                    return Ok(());
                }
            },
        };

        // measure_checked already ruled out negatives and NaN
        if size.is_zero() {
            self.stats.zero_size += 1;
            return Ok(());
        }

        let improves = match &self.best {
            Some(best) => size < best.size,
            None => true,
        };
        if improves {
            tracing::trace!(%indices, size = %size, "new minimum");
            self.best = Some(Best {
                indices,
                triangle,
                size,
            });
        }
        Ok(())
    }

    /// Folds in a tracker that covered candidates enumerated *after* this one.
    /// Equal sizes keep the earlier winner, so merging partitions in order
    /// gives the same answer as one sequential pass.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    pub(crate) fn merge(&mut self, later: Tracker<'a, T>) {
        self.stats += later.stats;
        let Some(candidate) = later.best else {
            return;
        };
        let replace = match &self.best {
            None => true,
            Some(best) => match T::cmp_total(&candidate.size, &best.size) {
                Ordering::Less => true,
                Ordering::Equal => candidate.indices < best.indices,
                Ordering::Greater => false,
            },
        };
        if replace {
            self.best = Some(candidate);
        }
    }

    pub(crate) fn finish(self) -> Result<TriangleMatch<T>, SearchError> {
        let stats = self.stats;
        match self.best {
            Some(best) => Ok(TriangleMatch {
                indices: best.indices,
                triangle: best.triangle,
                size: best.size,
                metric: self.config.metric,
                stats,
            }),
            None => Err(SearchError::AllDegenerate {
                candidates: stats.candidates,
            }),
        }
    }
}

pub(crate) fn ensure_enough_points<T: Scalar>(points: &PointSet<T>) -> Result<(), SearchError> {
    if points.len() < 3 {
        return Err(SearchError::InsufficientPoints {
            found: points.len(),
        });
    }
    Ok(())
}
