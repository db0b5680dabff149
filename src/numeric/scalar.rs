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

use num_traits::Float;

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Coordinate and size type used throughout the crate.
///
/// Anything that behaves like an IEEE float qualifies; in practice this is
/// `f32` or `f64`.
pub trait Scalar: Float + Debug + Display + Send + Sync + 'static {
    /// Lossy conversion from `f64`. Values that do not fit become NaN.
    fn from_f64(value: f64) -> Self {
        num_traits::cast::<f64, Self>(value).unwrap_or_else(Self::nan)
    }

    fn from_i32(value: i32) -> Self {
        Self::from_f64(f64::from(value))
    }

    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn half() -> Self {
        Self::one() / Self::two()
    }

    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Total order with NaN sorted after every number (two NaNs compare equal).
    #[inline(always)]
    fn cmp_total(a: &Self, b: &Self) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => Ordering::Equal,
        }
    }
}

impl<T> Scalar for T where T: Float + Debug + Display + Send + Sync + 'static {}
