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

use thiserror::Error;

use crate::geometry::TriangleIndices;
use crate::metric::SizeMetric;

/// Reasons a search comes back without a triangle.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("at least 3 points are needed to form a triangle, got {found}")]
    InsufficientPoints { found: usize },

    #[error("no valid triangle: all {candidates} candidate triangles are degenerate")]
    AllDegenerate { candidates: usize },

    #[error("{metric} gave invalid size {value} for triangle {indices}")]
    InvalidMetric {
        metric: SizeMetric,
        indices: TriangleIndices,
        value: f64,
    },
}

impl SearchError {
    /// Both "too few points" and "nothing non-degenerate" mean no triangle
    /// exists; callers that don't care which one can test this.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SearchError::InsufficientPoints { .. } | SearchError::AllDegenerate { .. }
        )
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid coordinate range [{min}, {max}): min must be less than max")]
    InvalidRange { min: i32, max: i32 },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown size metric '{0}' (expected perimeter, area or heron)")]
    UnknownMetric(String),

    #[error("unknown validity policy '{0}' (expected collinear or perpendicular)")]
    UnknownPolicy(String),
}
