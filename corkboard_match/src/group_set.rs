// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owning container for confirmed match groups.

use alloc::vec::Vec;

use corkboard_model::{GroupId, GroupIdGen, MatchGroup, Wish, WishId};

/// The confirmed groups of a board, plus the id allocator for new ones.
///
/// Membership invariants maintained by every mutation:
///
/// - every group holds at least two members (a group that collapses below
///   that is pruned immediately),
/// - no wish is a member of two groups — a confirm that would move a wish
///   detaches it from its prior group first.
///
/// Invalid operations (unknown group id, re-confirming an existing match)
/// are logged no-ops, never errors.
#[derive(Clone, Debug, Default)]
pub struct GroupSet {
    groups: Vec<MatchGroup>,
    ids: GroupIdGen,
}

impl GroupSet {
    /// An empty group set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over the groups in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &MatchGroup> {
        self.groups.iter()
    }

    /// Look up a group by id.
    pub fn get(&self, id: GroupId) -> Option<&MatchGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// The group `wish` currently belongs to, if any.
    pub fn group_of(&self, wish: &WishId) -> Option<&MatchGroup> {
        self.groups.iter().find(|g| g.contains(wish))
    }

    /// The id allocator, for minting ids outside the confirm flow (e.g. for
    /// groups produced by the batch keyword grouper).
    pub fn id_gen_mut(&mut self) -> &mut GroupIdGen {
        &mut self.ids
    }

    /// Install externally-built groups (e.g. keyword-derived ones).
    ///
    /// Callers switching grouping strategies should [`clear`](Self::clear)
    /// first; the two strategies' assignments are never merged.
    pub fn adopt(&mut self, groups: impl IntoIterator<Item = MatchGroup>) {
        self.groups.extend(groups);
        self.assert_invariants();
    }

    /// Remove all groups.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Confirm a pairwise match between `a` and `b`.
    ///
    /// Creates a new two-member group with no common keywords and score 100
    /// (proximity matches are treated as certain) and returns its id. If the
    /// two are already co-grouped this is a logged no-op. A wish already in
    /// some *other* group is detached from it first so membership stays
    /// exclusive.
    pub fn confirm_pairwise(&mut self, a: &WishId, b: &WishId, now: u64) -> Option<GroupId> {
        if let (Some(ga), Some(gb)) = (self.group_of(a), self.group_of(b))
            && ga.id == gb.id
        {
            log::debug!("{a} and {b} are already matched, ignoring confirm");
            return None;
        }
        self.detach(a);
        self.detach(b);
        let group = MatchGroup::new(
            self.ids.mint(),
            alloc::vec![a.clone(), b.clone()],
            100.0,
            now,
        );
        let id = group.id;
        self.groups.push(group);
        self.assert_invariants();
        Some(id)
    }

    /// Confirm `wish` joining the group `target`.
    ///
    /// Unknown group ids and existing members are logged no-ops. A wish in a
    /// different group transitions atomically: removed from the source (which
    /// is pruned if it collapses), then appended to the target — from the
    /// caller's perspective it never belongs to two groups. Returns whether
    /// the membership changed.
    pub fn confirm_join(&mut self, wish: &WishId, target: GroupId) -> bool {
        let Some(group) = self.get(target) else {
            log::warn!("confirm-join for nonexistent {target}, ignoring");
            return false;
        };
        if group.contains(wish) {
            log::debug!("{wish} is already in {target}, ignoring confirm");
            return false;
        }
        self.detach(wish);
        // Re-resolve: detaching may have pruned other groups and moved this one.
        if let Some(group) = self.groups.iter_mut().find(|g| g.id == target) {
            group.wishes.push(wish.clone());
        }
        self.assert_invariants();
        true
    }

    /// Drop groups that no longer have two *live* members.
    ///
    /// Dangling member references (wishes deleted from the board) are only
    /// skipped during rendering and proximity checks; this explicit pass is
    /// how a host actually deletes the husks.
    pub fn prune_dangling(&mut self, wishes: &[Wish]) {
        for group in &mut self.groups {
            group
                .wishes
                .retain(|member| wishes.iter().any(|w| &w.id == member));
        }
        self.groups.retain(MatchGroup::is_viable);
    }

    /// Remove `wish` from whatever group holds it, pruning a group that
    /// collapses below two members.
    fn detach(&mut self, wish: &WishId) {
        for group in &mut self.groups {
            if group.remove(wish) {
                break;
            }
        }
        self.groups.retain(MatchGroup::is_viable);
    }

    /// Debug check: no empty or single-member group survives a mutation, and
    /// no wish appears twice.
    fn assert_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            for group in &self.groups {
                debug_assert!(group.is_viable(), "group below two members survived");
                for wish in &group.wishes {
                    let memberships = self.groups.iter().filter(|g| g.contains(wish)).count();
                    debug_assert!(memberships == 1, "wish in more than one group");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn id(s: &str) -> WishId {
        WishId::new(s)
    }

    #[test]
    fn pairwise_confirm_creates_a_certain_group() {
        let mut set = GroupSet::new();
        let gid = set.confirm_pairwise(&id("a"), &id("b"), 42).unwrap();
        let group = set.get(gid).unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group.match_score, 100.0);
        assert!(group.common_keywords.is_empty());
        assert_eq!(group.created_at, 42);
    }

    #[test]
    fn re_confirming_a_match_is_a_no_op() {
        let mut set = GroupSet::new();
        let first = set.confirm_pairwise(&id("a"), &id("b"), 0);
        let second = set.confirm_pairwise(&id("a"), &id("b"), 1);
        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn joining_a_nonexistent_group_is_a_no_op() {
        let mut set = GroupSet::new();
        let gid = set.confirm_pairwise(&id("a"), &id("b"), 0).unwrap();
        let bogus = set.id_gen_mut().mint();
        assert!(!set.confirm_join(&id("c"), bogus));
        assert_eq!(set.get(gid).unwrap().len(), 2);
    }

    #[test]
    fn joining_twice_is_a_no_op() {
        let mut set = GroupSet::new();
        let gid = set.confirm_pairwise(&id("a"), &id("b"), 0).unwrap();
        assert!(set.confirm_join(&id("c"), gid));
        assert!(!set.confirm_join(&id("c"), gid));
        assert_eq!(set.get(gid).unwrap().len(), 3);
    }

    #[test]
    fn moving_between_groups_detaches_and_prunes() {
        let mut set = GroupSet::new();
        let first = set.confirm_pairwise(&id("a"), &id("b"), 0).unwrap();
        let second = set.confirm_pairwise(&id("c"), &id("d"), 0).unwrap();

        // b moves to the second group; the first collapses to one member and
        // is pruned, freeing "a".
        assert!(set.confirm_join(&id("b"), second));
        assert!(set.get(first).is_none());
        assert!(set.group_of(&id("a")).is_none());
        assert_eq!(set.get(second).unwrap().len(), 3);
        assert_eq!(set.group_of(&id("b")).unwrap().id, second);
    }

    #[test]
    fn moving_from_a_large_group_keeps_the_source() {
        let mut set = GroupSet::new();
        let first = set.confirm_pairwise(&id("a"), &id("b"), 0).unwrap();
        set.confirm_join(&id("c"), first);
        let second = set.confirm_pairwise(&id("d"), &id("e"), 0).unwrap();

        assert!(set.confirm_join(&id("c"), second));
        // Source still has two members, so it survives.
        assert_eq!(set.get(first).unwrap().len(), 2);
        assert_eq!(set.get(second).unwrap().len(), 3);
    }

    #[test]
    fn pairwise_across_existing_groups_keeps_exclusivity() {
        let mut set = GroupSet::new();
        let first = set.confirm_pairwise(&id("a"), &id("b"), 0).unwrap();
        let second = set.confirm_pairwise(&id("c"), &id("d"), 0).unwrap();

        // a and c confirmed as a fresh pair: both leave their old groups,
        // both old groups collapse and are pruned.
        let third = set.confirm_pairwise(&id("a"), &id("c"), 0).unwrap();
        assert!(set.get(first).is_none());
        assert!(set.get(second).is_none());
        assert_eq!(set.get(third).unwrap().len(), 2);
        for wish in ["a", "b", "c", "d"] {
            let memberships = set.iter().filter(|g| g.contains(&id(wish))).count();
            assert!(memberships <= 1);
        }
    }

    #[test]
    fn prune_dangling_drops_husks() {
        let mut set = GroupSet::new();
        let gid = set.confirm_pairwise(&id("a"), &id("b"), 0).unwrap();
        set.confirm_join(&id("c"), gid);

        // Only "a" and "c" still exist on the board.
        let live = [
            Wish::new(id("a"), "a").at(Point::ZERO),
            Wish::new(id("c"), "c").at(Point::ZERO),
        ];
        set.prune_dangling(&live);
        assert_eq!(set.get(gid).unwrap().len(), 2);

        // Now only "a" survives: the group is no longer viable.
        set.prune_dangling(&live[..1]);
        assert!(set.get(gid).is_none());
        assert!(set.is_empty());
    }
}
