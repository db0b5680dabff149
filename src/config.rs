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

use crate::kernel::ValidityPolicy;
use crate::metric::SizeMetric;

/// What to do when a metric produces NaN or a negative size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidMetricPolicy {
    /// Log it, count it, and keep searching.
    #[default]
    Skip,
    /// Abort the search with [`SearchError::InvalidMetric`](crate::SearchError::InvalidMetric).
    Fail,
}

/// Options shared by both searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub policy: ValidityPolicy,
    pub metric: SizeMetric,
    pub on_invalid_metric: InvalidMetricPolicy,
    /// Spread work over rayon workers. Results are identical either way; without
    /// the `parallel` feature this flag is ignored.
    pub parallel: bool,
}

impl SearchConfig {
    pub fn new(metric: SizeMetric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: ValidityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_metric(mut self, metric: SizeMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_invalid_metric_policy(mut self, on_invalid_metric: InvalidMetricPolicy) -> Self {
        self.on_invalid_metric = on_invalid_metric;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub(crate) fn use_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }
}
