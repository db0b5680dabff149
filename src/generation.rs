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

//! Random point sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GenerationError;
use crate::geometry::{Point2, PointSet};
use crate::numeric::Scalar;

/// Default coordinate range, half-open: `[-100, 100)` on both axes.
pub const DEFAULT_RANGE: (i32, i32) = (-100, 100);

/// Anything that can hand out a point set of a requested size.
pub trait PointSource<T: Scalar> {
    fn generate(&mut self, n: usize) -> PointSet<T>;
}

/// Integer-valued points drawn uniformly from `[min, max)` on each axis.
///
/// Integer grids produce exact collinear and coincident triples fairly often,
/// which is useful for exercising the degeneracy handling.
#[derive(Debug, Clone)]
pub struct UniformIntegerSource<R> {
    rng: R,
    min: i32,
    max: i32,
}

impl<R: Rng> UniformIntegerSource<R> {
    pub fn new(rng: R, min: i32, max: i32) -> Result<Self, GenerationError> {
        if min >= max {
            return Err(GenerationError::InvalidRange { min, max });
        }
        Ok(Self { rng, min, max })
    }

    /// Same generator, drawing from `[min, max)` instead.
    pub fn with_range(self, min: i32, max: i32) -> Result<Self, GenerationError> {
        Self::new(self.rng, min, max)
    }
}

impl UniformIntegerSource<StdRng> {
    /// Reproducible source over [`DEFAULT_RANGE`].
    pub fn seeded(seed: u64) -> Self {
        let (min, max) = DEFAULT_RANGE;
        Self {
            rng: StdRng::seed_from_u64(seed),
            min,
            max,
        }
    }

    pub fn from_os_rng() -> Self {
        let (min, max) = DEFAULT_RANGE;
        Self {
            rng: StdRng::from_os_rng(),
            min,
            max,
        }
    }
}

impl<R: Rng, T: Scalar> PointSource<T> for UniformIntegerSource<R> {
    fn generate(&mut self, n: usize) -> PointSet<T> {
        (0..n)
            .map(|_| {
                let x = self.rng.random_range(self.min..self.max);
                let y = self.rng.random_range(self.min..self.max);
                Point2::new(T::from_i32(x), T::from_i32(y))
            })
            .collect()
    }
}

/// `n` integer points in [`DEFAULT_RANGE`] drawn from `rng`.
pub fn generate_points<R: Rng>(n: usize, rng: &mut R) -> PointSet<f64> {
    let (min, max) = DEFAULT_RANGE;
    (0..n)
        .map(|_| {
            Point2::new(
                f64::from(rng.random_range(min..max)),
                f64::from(rng.random_range(min..max)),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_range() {
        let rng = StdRng::seed_from_u64(1);
        let err = UniformIntegerSource::new(rng, 5, 5).unwrap_err();
        assert_eq!(err, GenerationError::InvalidRange { min: 5, max: 5 });
    }

    #[test]
    fn points_stay_in_range() {
        let mut source = UniformIntegerSource::new(StdRng::seed_from_u64(7), -3, 3).unwrap();
        let points: PointSet<f64> = source.generate(200);
        assert_eq!(points.len(), 200);
        for p in &points {
            assert!((-3.0..3.0).contains(&p.x), "{p}");
            assert!((-3.0..3.0).contains(&p.y), "{p}");
            assert_eq!(p.x.fract(), 0.0);
        }
    }

    #[test]
    fn convenience_generator_uses_default_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = generate_points(100, &mut rng);
        let (min, max) = DEFAULT_RANGE;
        assert_eq!(points.len(), 100);
        for p in &points {
            assert!(p.x >= f64::from(min) && p.y < f64::from(max), "{p}");
        }
    }

    #[test]
    fn narrowed_range_is_validated_and_applied() {
        let err = UniformIntegerSource::seeded(9).with_range(4, -4).unwrap_err();
        assert_eq!(err, GenerationError::InvalidRange { min: 4, max: -4 });

        let mut source = UniformIntegerSource::from_os_rng().with_range(0, 1).unwrap();
        let points: PointSet<f64> = source.generate(10);
        assert!(points.iter().all(|p| *p == Point2::new(0.0, 0.0)));
    }

    #[test]
    fn same_seed_same_points() {
        let a: PointSet<f64> = UniformIntegerSource::seeded(42).generate(30);
        let b: PointSet<f64> = UniformIntegerSource::seeded(42).generate(30);
        assert_eq!(a, b);
    }
}
