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

use mintri::kernel::{are_collinear, has_right_angle, orient2d};
use mintri::{Point2, Triangle, ValidityPolicy, is_valid};

#[test]
fn test_are_collinear() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 1.0);
    let c = Point2::new(2.0, 2.0);
    assert!(are_collinear(&a, &b, &c));
    assert_eq!(orient2d(&a, &b, &c), 0.0);
}

#[test]
fn test_has_right_angle() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(0.0, 1.0);
    let c = Point2::new(1.0, 0.0);
    assert!(has_right_angle(&a, &b, &c));
    assert!(!has_right_angle(&a, &b, &Point2::new(1.0, 3.0)));
}

#[test]
fn test_collinear_policy_accepts_right_triangles() {
    let t = Triangle::new(
        Point2::new(10.0, 10.0),
        Point2::new(10.0, 11.0),
        Point2::new(11.0, 10.0),
    );
    assert!(is_valid(&t, ValidityPolicy::Collinear));
    assert!(!is_valid(&t, ValidityPolicy::Perpendicular));
}

#[test]
fn test_duplicate_points_are_degenerate() {
    let p = Point2::new(3.0, -4.0);
    let t = Triangle::new(p, p, Point2::new(0.0, 0.0));
    assert!(!is_valid(&t, ValidityPolicy::Collinear));
    assert!(!is_valid(&t, ValidityPolicy::Perpendicular));
}

#[test]
fn test_default_policy_is_collinear() {
    assert_eq!(ValidityPolicy::default(), ValidityPolicy::Collinear);
}
