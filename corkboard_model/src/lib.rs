// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Model: board state types for a sticky-note brainstorming canvas.
//!
//! A board holds **wishes** (project proposals pinned to a freeform canvas as
//! draggable, resizable sticky notes) and **match groups** (sets of wishes
//! that have been confirmed as belonging together). This crate defines those
//! types plus the coercion rules that turn loosely-typed note dimensions into
//! numbers the geometry layer can trust.
//!
//! The crate holds no behavior beyond the data model: distance checks live in
//! `corkboard_geometry`, hull overlays in `corkboard_bounds`, and the match
//! lifecycle in `corkboard_match`. Everything here is a plain value type so
//! higher layers can stay pure functions over snapshots of this state.
//!
//! # Example
//!
//! ```rust
//! use corkboard_model::{Dimension, Wish, WishId, WishSize};
//! use kurbo::Point;
//!
//! let wish = Wish::new(WishId::new("wish1"), "Music festival 2027")
//!     .with_keywords(["music", "festival", "streaming"])
//!     .at(Point::new(120.0, 80.0));
//!
//! // Notes sized by the presentation layer may carry unit suffixes; geometry
//! // always sees resolved pixel values.
//! let sized = Wish {
//!     size: WishSize {
//!         width: Dimension::Text("240px".into()),
//!         height: Dimension::Px(160.0),
//!     },
//!     ..wish
//! };
//! assert_eq!(sized.rect().width(), 240.0);
//! assert_eq!(sized.rect().height(), 160.0);
//! ```

#![no_std]

extern crate alloc;

mod dimension;
mod group;
mod wish;

pub use dimension::{DEFAULT_WISH_HEIGHT, DEFAULT_WISH_WIDTH, Dimension, WishSize};
pub use group::{GroupId, GroupIdGen, MatchGroup};
pub use wish::{Comment, Wish, WishFlags, WishId};
