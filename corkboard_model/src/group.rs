// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Match groups: sets of wishes confirmed as belonging together.

use alloc::string::String;
use alloc::vec::Vec;

use crate::WishId;

/// Identifier for a match group.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct GroupId(u64);

impl GroupId {
    /// The numeric form of the id.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for GroupId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// Allocator for [`GroupId`]s.
///
/// Whatever container owns the group collection owns one of these; ids are
/// minted sequentially so a run is reproducible.
#[derive(Clone, Debug, Default)]
pub struct GroupIdGen {
    next: u64,
}

impl GroupIdGen {
    /// A generator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next id.
    pub fn mint(&mut self) -> GroupId {
        let id = GroupId(self.next);
        self.next += 1;
        id
    }
}

/// An unordered set of wishes considered matched.
///
/// A group only meaningfully exists with at least two members; containers
/// prune groups that drop below that (see [`MatchGroup::is_viable`]).
#[derive(Clone, Debug, PartialEq)]
pub struct MatchGroup {
    /// Group identifier.
    pub id: GroupId,
    /// Member wish ids. Order is insertion order; membership is what matters.
    pub wishes: Vec<WishId>,
    /// Keywords common to every member. Empty for proximity-based matches.
    pub common_keywords: Vec<String>,
    /// Match score in `[0, 100]`.
    pub match_score: f64,
    /// Creation time in milliseconds, supplied by the host.
    pub created_at: u64,
}

impl MatchGroup {
    /// Create a group with the given members.
    pub fn new(id: GroupId, wishes: Vec<WishId>, match_score: f64, created_at: u64) -> Self {
        Self {
            id,
            wishes,
            common_keywords: Vec::new(),
            match_score,
            created_at,
        }
    }

    /// Number of member wishes.
    pub fn len(&self) -> usize {
        self.wishes.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.wishes.is_empty()
    }

    /// Whether `wish` is a member.
    pub fn contains(&self, wish: &WishId) -> bool {
        self.wishes.iter().any(|w| w == wish)
    }

    /// Whether the group can exist at all: a match needs at least 2 members.
    pub fn is_viable(&self) -> bool {
        self.wishes.len() >= 2
    }

    /// Remove `wish` from the member list. Returns `true` if it was a member.
    pub fn remove(&mut self, wish: &WishId) -> bool {
        let before = self.wishes.len();
        self.wishes.retain(|w| w != wish);
        self.wishes.len() != before
    }
}
