// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Bounds: derived geometry for match-group overlays.
//!
//! A match group has no geometry of its own — its outline is recomputed from
//! the *live* positions and sizes of its member wishes on every render pass.
//! For each member this crate takes the note's rectangle, pushes its four
//! corners outward by a padding margin, and feeds all corners from all
//! members into a convex hull. The hull polygon is what the board draws; the
//! hull's axis-aligned bounding box is what proximity checks test against.
//!
//! [`compute_group_bounds`] never caches: group membership and member
//! geometry both change under drag, and a stale box must never reach the
//! proximity check. Members that reference deleted wishes are skipped; a
//! group whose members all dangle yields `None` and is simply not rendered.
//!
//! ```rust
//! use corkboard_bounds::{GROUP_PADDING, compute_group_bounds};
//! use corkboard_model::{GroupIdGen, MatchGroup, Wish, WishId};
//! use kurbo::Point;
//!
//! let wishes = [
//!     Wish::new(WishId::new("a"), "a").sized(200.0, 150.0),
//!     Wish::new(WishId::new("b"), "b")
//!         .at(Point::new(300.0, 0.0))
//!         .sized(200.0, 150.0),
//! ];
//! let group = MatchGroup::new(
//!     GroupIdGen::new().mint(),
//!     vec![WishId::new("a"), WishId::new("b")],
//!     100.0,
//!     0,
//! );
//! let bounds = compute_group_bounds(&group, &wishes, GROUP_PADDING).unwrap();
//! assert_eq!(bounds.aabb.x0, -10.0);
//! assert_eq!(bounds.aabb.x1, 510.0);
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use corkboard_hull::convex_hull;
use corkboard_model::{MatchGroup, Wish};

/// Default outward padding (px) applied to member corners before hulling.
pub const GROUP_PADDING: f64 = 10.0;

/// Derived outline of a match group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupBounds {
    /// Convex hull of all padded member corners, CCW from the pivot.
    /// Purely for overlay rendering (polygon fill/stroke).
    pub hull: Vec<Point>,
    /// Axis-aligned bounding box of the hull. This is what proximity checks
    /// against other wishes and groups use.
    pub aabb: Rect,
}

/// Four corners of `rect` pushed outward by `padding` on both axes.
#[inline]
fn padded_corners(rect: Rect, padding: f64) -> [Point; 4] {
    [
        Point::new(rect.x0 - padding, rect.y0 - padding),
        Point::new(rect.x1 + padding, rect.y0 - padding),
        Point::new(rect.x1 + padding, rect.y1 + padding),
        Point::new(rect.x0 - padding, rect.y1 + padding),
    ]
}

/// Compute the live bounds of `group` from the current wish geometry.
///
/// Member ids that no longer resolve to a wish are skipped (a member may
/// reference a deleted note). Returns `None` when no member resolves — the
/// caller must treat the group as absent for rendering and proximity
/// purposes, not as an error.
pub fn compute_group_bounds(
    group: &MatchGroup,
    wishes: &[Wish],
    padding: f64,
) -> Option<GroupBounds> {
    // Inline capacity covers groups of up to four notes.
    let mut corners: SmallVec<[Point; 16]> = SmallVec::new();
    for member in &group.wishes {
        match wishes.iter().find(|w| &w.id == member) {
            Some(wish) => corners.extend_from_slice(&padded_corners(wish.rect(), padding)),
            None => log::debug!("{}: member {member} no longer exists, skipping", group.id),
        }
    }
    if corners.is_empty() {
        return None;
    }

    let hull = convex_hull(&corners);
    let mut aabb = Rect::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );
    for p in &hull {
        aabb.x0 = aabb.x0.min(p.x);
        aabb.y0 = aabb.y0.min(p.y);
        aabb.x1 = aabb.x1.max(p.x);
        aabb.y1 = aabb.y1.max(p.y);
    }
    Some(GroupBounds { hull, aabb })
}
