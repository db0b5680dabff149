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

//! Size metrics used to rank candidate triangles.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, SearchError};
use crate::geometry::{Triangle, TriangleIndices};
use crate::numeric::Scalar;

/// The ways a triangle's "size" can be measured.
///
/// All three are non-negative for real triangles and zero for degenerate ones.
/// The two area variants agree up to rounding; Heron's formula loses accuracy
/// on slivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeMetric {
    #[default]
    Perimeter,
    AreaCross,
    AreaHeron,
}

impl SizeMetric {
    pub const ALL: [SizeMetric; 3] = [
        SizeMetric::Perimeter,
        SizeMetric::AreaCross,
        SizeMetric::AreaHeron,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SizeMetric::Perimeter => "perimeter",
            SizeMetric::AreaCross => "area-cross",
            SizeMetric::AreaHeron => "area-heron",
        }
    }

    pub fn measure<T: Scalar>(&self, triangle: &Triangle<T>) -> T {
        match self {
            SizeMetric::Perimeter => triangle.perimeter(),
            SizeMetric::AreaCross => triangle.area_cross(),
            SizeMetric::AreaHeron => triangle.area_heron(),
        }
    }

    /// Like [`measure`](Self::measure) but rejects NaN and negative values.
    pub fn measure_checked<T: Scalar>(
        &self,
        triangle: &Triangle<T>,
        indices: TriangleIndices,
    ) -> Result<T, SearchError> {
        let value = self.measure(triangle);
        if value.is_nan() || value < T::zero() {
            return Err(SearchError::InvalidMetric {
                metric: *self,
                indices,
                value: value.as_f64(),
            });
        }
        Ok(value)
    }
}

impl fmt::Display for SizeMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeMetric {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perimeter" => Ok(SizeMetric::Perimeter),
            "area" | "area-cross" | "area_cross" | "cross" => Ok(SizeMetric::AreaCross),
            "heron" | "area-heron" | "area_heron" => Ok(SizeMetric::AreaHeron),
            other => Err(ParseError::UnknownMetric(other.to_string())),
        }
    }
}
