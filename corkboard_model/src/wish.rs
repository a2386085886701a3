// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wishes: proposal sticky notes pinned to the canvas.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};

use crate::WishSize;

/// Identifier for a wish.
///
/// Ids are opaque strings chosen by the host application (the reference board
/// uses values like `"wish1"`); the core only compares them.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct WishId(String);

impl WishId {
    /// Create an id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The string form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for WishId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

bitflags::bitflags! {
    /// Presentation flags for a wish.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct WishFlags: u8 {
        /// The note is a personal offer of help rather than a project proposal.
        const PERSONAL_OFFER = 0b0000_0001;
        /// The note was posted on behalf of a company rather than a person.
        const COMPANY_WISH   = 0b0000_0010;
    }
}

/// A threaded comment on a wish.
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    /// Comment identifier.
    pub id: String,
    /// The wish this comment is attached to.
    pub wish_id: WishId,
    /// Identifier of the comment author.
    pub author_id: String,
    /// Cached display name of the author, if known.
    pub author_name: Option<String>,
    /// Comment body.
    pub body: String,
    /// Creation time in milliseconds, supplied by the host.
    pub timestamp: u64,
}

/// A proposal sticky note on the board.
///
/// Position and size are mutated in place by drag/resize events in the host;
/// the matching core only ever reads them through [`Wish::rect`], which
/// applies the dimension fallback rules.
#[derive(Clone, Debug, PartialEq)]
pub struct Wish {
    /// Identifier, unique across the board.
    pub id: WishId,
    /// Short display title.
    pub title: String,
    /// Longer free-text description.
    pub description: String,
    /// Free-text matching keywords. Unordered; duplicates across wishes are fine.
    pub keywords: Vec<String>,
    /// Display name of the author.
    pub author: String,
    /// Identifier of the author's company, if any.
    pub company: Option<String>,
    /// Top-left corner on the canvas.
    pub position: Point,
    /// Note size, possibly still in its raw textual form.
    pub size: WishSize,
    /// Stacking order on the canvas. Higher draws on top.
    pub z_index: i32,
    /// Creation time in milliseconds, supplied by the host.
    pub created_at: u64,
    /// Threaded comments, oldest first.
    pub comments: Vec<Comment>,
    /// Presentation flags.
    pub flags: WishFlags,
}

impl Wish {
    /// Create a wish with the given id and title at the canvas origin.
    pub fn new(id: WishId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            keywords: Vec::new(),
            author: String::new(),
            company: None,
            position: Point::ZERO,
            size: WishSize::default(),
            z_index: 0,
            created_at: 0,
            comments: Vec::new(),
            flags: WishFlags::default(),
        }
    }

    /// Builder: replace the keyword list.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: move the wish to `position`.
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Builder: set the size from plain pixel values.
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.size = WishSize::px(width, height);
        self
    }

    /// The note's bounding rectangle with its size coerced to pixels.
    ///
    /// This is the only geometry the matching core ever reads from a wish.
    pub fn rect(&self) -> Rect {
        let (w, h) = self.size.resolve();
        Rect::from_origin_size(self.position, Size::new(w, h))
    }
}
