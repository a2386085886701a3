// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Geometry: nearest-edge distance between axis-aligned rectangles.
//!
//! Sticky notes on the board are axis-aligned rectangles. Proximity matching
//! cares about how far apart two notes are *edge to edge*, not center to
//! center: a note dragged right up against another should read as distance 0
//! even if their centers are far apart, and nudging it a few pixels away
//! should read as exactly those few pixels.
//!
//! [`rect_distance`] computes that: the per-axis gap between the rectangles
//! (zero where they overlap on an axis), combined as a Euclidean norm. Two
//! touching or overlapping rectangles report 0 regardless of overlap depth —
//! the function cannot express "how deeply inside", which is a deliberate
//! property of the matching model, not an oversight.
//!
//! ```rust
//! use corkboard_geometry::rect_distance;
//! use kurbo::Rect;
//!
//! let a = Rect::new(0.0, 0.0, 200.0, 150.0);
//! let b = Rect::new(210.0, 0.0, 410.0, 150.0);
//! assert_eq!(rect_distance(a, b), 10.0);
//!
//! // Diagonal separation combines both axis gaps.
//! let c = Rect::new(203.0, 154.0, 403.0, 304.0);
//! assert_eq!(rect_distance(a, c), 5.0); // hypot(3, 4)
//! ```

#![no_std]

use kurbo::{Rect, Vec2};

/// Gap between two intervals `[a0, a1]` and `[b0, b1]`, zero when they overlap.
#[inline]
fn axis_gap(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (b0 - a1).max(a0 - b1).max(0.0)
}

/// Nearest-edge distance between two axis-aligned rectangles.
///
/// Returns the Euclidean norm of the per-axis gaps. The result is symmetric
/// and is exactly `0.0` iff the rectangles touch or overlap on both axes;
/// overlap depth is not observable.
#[inline]
pub fn rect_distance(a: Rect, b: Rect) -> f64 {
    let gap = Vec2::new(
        axis_gap(a.x0, a.x1, b.x0, b.x1),
        axis_gap(a.y0, a.y1, b.y0, b.y1),
    );
    gap.hypot()
}

/// Nearest-edge distance between a note rectangle and an arbitrary bounds
/// rectangle, such as a match group's AABB.
///
/// Same metric as [`rect_distance`]; the separate name marks the asymmetric
/// role at call sites (note vs. derived group bounds).
#[inline]
pub fn rect_to_bounds_distance(rect: Rect, bounds: Rect) -> f64 {
    rect_distance(rect, bounds)
}
