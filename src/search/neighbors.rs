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

use crate::geometry::PointSet;
use crate::numeric::Scalar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<T> {
    pub distance: T,
    pub index: usize,
}

/// For every point, all other points sorted by ascending distance.
///
/// Equal distances are ordered by index. The lists are built once and only
/// read afterwards, so walking one never affects another.
#[derive(Debug, Clone)]
pub struct NeighborRankings<T> {
    rankings: Vec<Vec<Neighbor<T>>>,
}

impl<T: Scalar> NeighborRankings<T> {
    /// O(n² log n) construction.
    pub fn build(points: &PointSet<T>) -> Self {
        let rankings = (0..points.len()).map(|i| rank_from(points, i)).collect();
        Self { rankings }
    }

    /// Same result as [`build`](Self::build), one rayon task per point.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(points: &PointSet<T>) -> Self {
        use rayon::prelude::*;

        let rankings = (0..points.len())
            .into_par_iter()
            .map(|i| rank_from(points, i))
            .collect();
        Self { rankings }
    }

    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    /// Neighbors of `i` closest first; empty if `i` is out of range.
    pub fn ranking(&self, i: usize) -> &[Neighbor<T>] {
        self.rankings.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn nearest(&self, i: usize) -> Option<Neighbor<T>> {
        self.ranking(i).first().copied()
    }

    pub fn nearest_excluding(&self, i: usize, excluded: usize) -> Option<Neighbor<T>> {
        self.ranking(i)
            .iter()
            .find(|n| n.index != excluded)
            .copied()
    }
}

fn rank_from<T: Scalar>(points: &PointSet<T>, i: usize) -> Vec<Neighbor<T>> {
    let origin = points[i];
    let mut ranking: Vec<Neighbor<T>> = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(j, p)| Neighbor {
            distance: origin.distance_to(p),
            index: j,
        })
        .collect();
    ranking.sort_by(|a, b| T::cmp_total(&a.distance, &b.distance).then(a.index.cmp(&b.index)));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rankings_are_sorted_and_skip_self() {
        let points = PointSet::from_coords([(0.0, 0.0), (3.0, 0.0), (1.0, 0.0), (0.0, 2.0)]);
        let rankings = NeighborRankings::build(&points);
        assert_eq!(rankings.len(), 4);

        let order: Vec<usize> = rankings.ranking(0).iter().map(|n| n.index).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(rankings.nearest(1).unwrap().index, 2);
        assert_eq!(rankings.nearest_excluding(2, 0).unwrap().index, 1);
    }

    #[test]
    fn equal_distances_keep_index_order() {
        let points = PointSet::from_coords([(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (-1.0, 0.0)]);
        let rankings = NeighborRankings::build(&points);
        let order: Vec<usize> = rankings.ranking(0).iter().map(|n| n.index).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn out_of_range_is_empty() {
        let points = PointSet::from_coords([(0.0, 0.0), (1.0, 1.0)]);
        let rankings = NeighborRankings::build(&points);
        assert!(rankings.ranking(7).is_empty());
        assert!(rankings.nearest(7).is_none());
    }
}
