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

use mintri::{PointSet, PointSource, SearchConfig, SizeMetric, UniformIntegerSource, compare};

#[test]
fn report_lists_both_searches() {
    let points: PointSet<f64> = UniformIntegerSource::seeded(2024).generate(25);
    let comparison = compare(&points, &SearchConfig::new(SizeMetric::Perimeter));
    assert!(comparison.both_found());

    let gap = comparison.gap().unwrap();
    assert!(gap >= 0.0);

    let report = comparison.to_string();
    assert!(report.contains("Smallest triangle (exact)"));
    assert!(report.contains("Smallest triangle (heuristic)"));
    assert!(report.contains("Relative gap"));
}

#[test]
fn collinear_input_reports_nothing() {
    let points = PointSet::from_coords((0..6).map(|i| (f64::from(i), f64::from(i))));
    let comparison = compare(&points, &SearchConfig::default());
    assert!(comparison.exact.as_ref().unwrap_err().is_not_found());
    assert!(comparison.heuristic.as_ref().unwrap_err().is_not_found());
    assert_eq!(comparison.heuristic_is_optimal(), None);
}
