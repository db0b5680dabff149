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
use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::{Point2, Triangle};
use crate::kernel::orient2d;
use crate::numeric::Scalar;

/// Exact collinearity: the orientation determinant is zero. Coincident points
/// count as collinear.
pub fn are_collinear<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> bool {
    orient2d(a, b, c).is_zero()
}

/// True if any two of the edge vectors `ab`, `bc`, `ac` have a dot product of
/// exactly zero. A zero-length edge is perpendicular to everything, so
/// coincident points also trip this.
pub fn has_right_angle<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> bool {
    let ab = a.vector_to(b);
    let bc = b.vector_to(c);
    let ac = a.vector_to(c);
    ab.dot(&bc).is_zero() || ab.dot(&ac).is_zero() || bc.dot(&ac).is_zero()
}

/// Which triples are rejected before a size is ever computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidityPolicy {
    /// Reject triples with zero signed area (collinear or coincident points).
    #[default]
    Collinear,
    /// Reject triples where two edge vectors are exactly perpendicular.
    ///
    /// This reproduces an older rule that throws away right triangles while
    /// accepting collinear triples. The searches skip zero-size candidates, so
    /// under [`SizeMetric::AreaCross`](crate::SizeMetric::AreaCross) those
    /// triples never win, but under the perimeter metric a collinear triple
    /// has a positive size and can be reported as the smallest triangle.
    /// Kept for comparison runs only.
    Perpendicular,
}

impl ValidityPolicy {
    pub const ALL: [ValidityPolicy; 2] =
        [ValidityPolicy::Collinear, ValidityPolicy::Perpendicular];

    pub fn name(&self) -> &'static str {
        match self {
            ValidityPolicy::Collinear => "collinear",
            ValidityPolicy::Perpendicular => "perpendicular",
        }
    }
}

impl fmt::Display for ValidityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidityPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "collinear" => Ok(ValidityPolicy::Collinear),
            "perpendicular" | "legacy" => Ok(ValidityPolicy::Perpendicular),
            other => Err(ParseError::UnknownPolicy(other.to_string())),
        }
    }
}

pub fn is_valid<T: Scalar>(triangle: &Triangle<T>, policy: ValidityPolicy) -> bool {
    let Triangle { a, b, c } = triangle;
    match policy {
        ValidityPolicy::Collinear => !are_collinear(a, b, c),
        ValidityPolicy::Perpendicular => !has_right_angle(a, b, c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle<f64> {
        Triangle::new(a.into(), b.into(), c.into())
    }

    #[test]
    fn policies_disagree_on_right_triangles() {
        let right = tri((0.0, 0.0), (0.0, 1.0), (1.0, 0.0));
        assert!(is_valid(&right, ValidityPolicy::Collinear));
        assert!(!is_valid(&right, ValidityPolicy::Perpendicular));
    }

    #[test]
    fn policies_disagree_on_collinear_triples() {
        let flat = tri((0.0, 0.0), (1.0, 0.0), (2.0, 0.0));
        assert!(!is_valid(&flat, ValidityPolicy::Collinear));
        assert!(is_valid(&flat, ValidityPolicy::Perpendicular));
    }

    #[test]
    fn coincident_points_are_rejected_by_both() {
        let pinched = tri((1.0, 1.0), (1.0, 1.0), (4.0, 2.0));
        for policy in ValidityPolicy::ALL {
            assert!(!is_valid(&pinched, policy), "{policy}");
        }
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!(
            "Collinear".parse::<ValidityPolicy>().unwrap(),
            ValidityPolicy::Collinear
        );
        assert_eq!(
            "legacy".parse::<ValidityPolicy>().unwrap(),
            ValidityPolicy::Perpendicular
        );
        assert!("obtuse".parse::<ValidityPolicy>().is_err());
    }
}
