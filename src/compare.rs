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

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::geometry::PointSet;
use crate::numeric::Scalar;
use crate::search::{
    TriangleMatch, find_minimum_triangle_exact_with, find_minimum_triangle_heuristic_with,
};

/// Both search results for one point set.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<T> {
    pub exact: Result<TriangleMatch<T>, SearchError>,
    pub heuristic: Result<TriangleMatch<T>, SearchError>,
}

impl<T: Scalar> Comparison<T> {
    /// `(heuristic - exact) / exact` when both searches found a triangle.
    pub fn gap(&self) -> Option<T> {
        let exact = self.exact.as_ref().ok()?;
        let heuristic = self.heuristic.as_ref().ok()?;
        Some((heuristic.size - exact.size) / exact.size)
    }

    /// Whether the heuristic hit the optimal size.
    pub fn heuristic_is_optimal(&self) -> Option<bool> {
        self.gap().map(|gap| gap.is_zero())
    }

    pub fn both_found(&self) -> bool {
        self.exact.is_ok() && self.heuristic.is_ok()
    }
}

/// Runs the exhaustive and the heuristic search with the same options.
pub fn compare<T: Scalar>(points: &PointSet<T>, config: &SearchConfig) -> Comparison<T> {
    let comparison = Comparison {
        exact: find_minimum_triangle_exact_with(points, config),
        heuristic: find_minimum_triangle_heuristic_with(points, config),
    };
    if let Some(gap) = comparison.gap() {
        tracing::info!(n = points.len(), metric = %config.metric, "relative gap {gap}");
    }
    comparison
}

fn write_result<T: Scalar>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    result: &Result<TriangleMatch<T>, SearchError>,
) -> fmt::Result {
    match result {
        Ok(found) => writeln!(f, "Smallest triangle ({label}): {found}"),
        Err(err) => writeln!(f, "Smallest triangle ({label}): none ({err})"),
    }
}

impl<T: Scalar> fmt::Display for Comparison<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_result(f, "exact", &self.exact)?;
        write_result(f, "heuristic", &self.heuristic)?;
        if let Some(gap) = self.gap() {
            write!(f, "Relative gap: {:.4}%", gap.as_f64() * 100.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::SizeMetric;

    #[test]
    fn gap_is_zero_when_heuristic_matches() {
        let points = PointSet::from_coords([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (50.0, 50.0)]);
        let comparison = compare(&points, &SearchConfig::new(SizeMetric::Perimeter));
        assert_eq!(comparison.gap(), Some(0.0));
        assert_eq!(comparison.heuristic_is_optimal(), Some(true));
    }

    #[test]
    fn no_gap_without_results() {
        let points = PointSet::from_coords([(0.0, 0.0), (1.0, 1.0)]);
        let comparison = compare(&points, &SearchConfig::default());
        assert!(!comparison.both_found());
        assert_eq!(comparison.gap(), None);
        assert!(comparison.to_string().contains("none"));
    }
}
