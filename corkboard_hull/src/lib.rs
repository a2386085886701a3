// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Hull: convex hull computation for group boundary overlays.
//!
//! When wishes are matched into a group, the board draws a dashed outline
//! hugging the group's member notes. That outline is the convex hull of the
//! members' (padded) corner points, computed here with a Graham scan.
//!
//! The hull is returned in counter-clockwise order starting at the pivot (the
//! lowest, leftmost point). Inputs with fewer than three points are returned
//! unchanged — a single note or a pair of corners still renders, just as a
//! degenerate polygon, and callers are expected to cope with that rather than
//! treat it as an error.
//!
//! ```rust
//! use corkboard_hull::convex_hull;
//! use kurbo::Point;
//!
//! // A square with an interior point: the interior point is dropped.
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//!     Point::new(5.0, 5.0),
//! ];
//! let hull = convex_hull(&points);
//! assert_eq!(hull.len(), 4);
//! assert_eq!(hull[0], Point::new(0.0, 0.0)); // pivot: lowest y, then lowest x
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::Point;

/// Cross product of `(a - o) × (b - o)`.
///
/// Positive when `o → a → b` turns counter-clockwise, negative when
/// clockwise, zero when collinear.
#[inline]
fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Compute the convex hull of a point set (Graham scan).
///
/// Duplicates are permitted. Fewer than three input points are returned
/// as-is (degenerate hull). Otherwise the result is the hull vertices in
/// counter-clockwise order starting from the pivot; collinear and interior
/// points are removed by the `cross <= 0` pop rule, so a fully collinear
/// input degrades to its two extreme points.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    // Pivot: minimum y, tie-broken by minimum x.
    let mut pivot = points[0];
    for &p in points {
        if p.y < pivot.y || (p.y == pivot.y && p.x < pivot.x) {
            pivot = p;
        }
    }

    // Sort by polar angle around the pivot; equal angles by ascending
    // distance so the scan visits nearer points first.
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|&a, &b| {
        use core::cmp::Ordering;
        match (a == pivot, b == pivot) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                let angle_a = (a - pivot).atan2();
                let angle_b = (b - pivot).atan2();
                angle_a
                    .total_cmp(&angle_b)
                    .then_with(|| (a - pivot).hypot2().total_cmp(&(b - pivot).hypot2()))
            }
        }
    });

    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len());
    hull.push(sorted[0]);
    hull.push(sorted[1]);
    for &p in &sorted[2..] {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}
