// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-stop proposal computation.

use corkboard_bounds::{GROUP_PADDING, compute_group_bounds};
use corkboard_geometry::{rect_distance, rect_to_bounds_distance};
use corkboard_model::{GroupId, Wish, WishId};

use crate::GroupSet;

/// Default proximity threshold (px): a drop closer than this to a candidate
/// proposes a match. Directly determines UX feel, so hosts override it via
/// [`MatchConfig`] rather than this constant.
pub const PROXIMITY_MATCH_DISTANCE: f64 = 20.0;

/// Tunables for proximity matching.
#[derive(Clone, Copy, Debug)]
pub struct MatchConfig {
    /// Candidates at or beyond this nearest-edge distance are ignored.
    pub proximity_distance: f64,
    /// Outward padding applied to member corners when deriving group bounds.
    pub group_padding: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            proximity_distance: PROXIMITY_MATCH_DISTANCE,
            group_padding: GROUP_PADDING,
        }
    }
}

impl MatchConfig {
    /// A config with a custom proximity threshold.
    pub fn with_distance(proximity_distance: f64) -> Self {
        Self {
            proximity_distance,
            ..Self::default()
        }
    }
}

/// A candidate match awaiting the user's decision.
#[derive(Clone, Debug, PartialEq)]
pub enum Proposal {
    /// Match the dragged wish with one other ungrouped wish.
    Pairwise {
        /// The dragged wish.
        wish: WishId,
        /// The closest qualifying ungrouped wish.
        other: WishId,
        /// Nearest-edge distance between the two, in px.
        distance: f64,
    },
    /// Add the dragged wish to an existing group.
    JoinGroup {
        /// The dragged wish.
        wish: WishId,
        /// The closest qualifying group.
        group: GroupId,
        /// Nearest-edge distance to the group's AABB, in px.
        distance: f64,
        /// Member count of the group at proposal time, for display.
        member_count: usize,
    },
}

impl Proposal {
    /// The dragged wish this proposal is about.
    pub fn wish(&self) -> &WishId {
        match self {
            Self::Pairwise { wish, .. } | Self::JoinGroup { wish, .. } => wish,
        }
    }

    /// Distance that qualified the candidate, in px.
    pub fn distance(&self) -> f64 {
        match self {
            Self::Pairwise { distance, .. } | Self::JoinGroup { distance, .. } => *distance,
        }
    }
}

/// Compute the match proposal for a drag-stop of `wish_id`, if any.
///
/// Checks run against one consistent snapshot of `wishes` and `groups`:
///
/// 1. A wish already in a group never triggers a proposal.
/// 2. Existing groups are checked first, against their live AABBs; the
///    closest one under the threshold wins.
/// 3. Otherwise individual *ungrouped* wishes are checked; again the closest
///    qualifying one wins.
/// 4. No qualifying candidate means the drag was just a relocation.
///
/// Ties resolve to the earliest candidate in iteration order, so repeated
/// runs over the same snapshot return the same proposal.
pub fn propose_match(
    wish_id: &WishId,
    wishes: &[Wish],
    groups: &GroupSet,
    config: &MatchConfig,
) -> Option<Proposal> {
    let Some(dragged) = wishes.iter().find(|w| &w.id == wish_id) else {
        log::debug!("drag-stop for unknown wish {wish_id}");
        return None;
    };
    if groups.group_of(wish_id).is_some() {
        // Moving an already-matched wish just moves it.
        return None;
    }
    let rect = dragged.rect();

    // Existing groups take precedence over individual wishes.
    let mut best_group: Option<(GroupId, f64, usize)> = None;
    for group in groups.iter() {
        let Some(bounds) = compute_group_bounds(group, wishes, config.group_padding) else {
            continue;
        };
        let distance = rect_to_bounds_distance(rect, bounds.aabb);
        if distance < config.proximity_distance
            && best_group.is_none_or(|(_, best, _)| distance < best)
        {
            best_group = Some((group.id, distance, group.len()));
        }
    }
    if let Some((group, distance, member_count)) = best_group {
        return Some(Proposal::JoinGroup {
            wish: wish_id.clone(),
            group,
            distance,
            member_count,
        });
    }

    let mut best_wish: Option<(&WishId, f64)> = None;
    for other in wishes {
        if other.id == *wish_id || groups.group_of(&other.id).is_some() {
            continue;
        }
        let distance = rect_distance(rect, other.rect());
        if distance < config.proximity_distance && best_wish.is_none_or(|(_, best)| distance < best)
        {
            best_wish = Some((&other.id, distance));
        }
    }
    best_wish.map(|(other, distance)| Proposal::Pairwise {
        wish: wish_id.clone(),
        other: other.clone(),
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use corkboard_model::GroupIdGen;
    use corkboard_model::MatchGroup;
    use kurbo::Point;

    fn note(id: &str, x: f64, y: f64) -> Wish {
        Wish::new(WishId::new(id), id)
            .at(Point::new(x, y))
            .sized(200.0, 150.0)
    }

    fn id(s: &str) -> WishId {
        WishId::new(s)
    }

    #[test]
    fn closest_ungrouped_wish_wins() {
        let wishes = [
            note("dragged", 0.0, 0.0),
            note("near", 215.0, 0.0),  // 15px
            note("nearer", 0.0, 160.0), // 10px
            note("far", 900.0, 900.0),
        ];
        let groups = GroupSet::new();
        let proposal =
            propose_match(&id("dragged"), &wishes, &groups, &MatchConfig::default()).unwrap();
        assert_eq!(
            proposal,
            Proposal::Pairwise {
                wish: id("dragged"),
                other: id("nearer"),
                distance: 10.0,
            }
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        let wishes = [note("a", 0.0, 0.0), note("b", 220.0, 0.0)]; // exactly 20px
        let groups = GroupSet::new();
        assert!(propose_match(&id("b"), &wishes, &groups, &MatchConfig::default()).is_none());
        // A wider threshold admits the same drop.
        let wide = MatchConfig::with_distance(25.0);
        assert!(propose_match(&id("b"), &wishes, &groups, &wide).is_some());
    }

    #[test]
    fn groups_shadow_individual_wishes() {
        // "c" lands near both an existing group and an ungrouped wish; the
        // group wins even when the wish is closer.
        let wishes = [
            note("a", 0.0, 0.0),
            note("b", 210.0, 0.0),
            note("c", 435.0, 0.0),
            note("loose", 445.0, 160.0), // only 10px below c
        ];
        let mut groups = GroupSet::new();
        groups.confirm_pairwise(&id("a"), &id("b"), 0);

        let proposal = propose_match(&id("c"), &wishes, &groups, &MatchConfig::default()).unwrap();
        match proposal {
            Proposal::JoinGroup {
                distance,
                member_count,
                ..
            } => {
                // Group AABB reaches x=420; c starts at 435. The group wins
                // by precedence even though "loose" is the closer candidate.
                assert_eq!(distance, 15.0);
                assert_eq!(member_count, 2);
            }
            Proposal::Pairwise { .. } => panic!("group proximity must take precedence"),
        }
    }

    #[test]
    fn grouped_wishes_are_not_pairwise_candidates() {
        let wishes = [
            note("a", 0.0, 0.0),
            note("b", 500.0, 500.0),
            note("c", 210.0, 0.0), // 10px from a
        ];
        let mut groups = GroupSet::new();
        groups.confirm_pairwise(&id("a"), &id("b"), 0);

        // The group AABB spans both members, so c lands inside it: a join
        // proposal, never a pairwise one against the already-grouped "a".
        let proposal = propose_match(&id("c"), &wishes, &groups, &MatchConfig::default()).unwrap();
        assert!(matches!(proposal, Proposal::JoinGroup { .. }));
    }

    #[test]
    fn tie_breaks_to_first_in_iteration_order() {
        // Two candidates at exactly the same 10px gap, left and right.
        let wishes = [
            note("dragged", 500.0, 0.0),
            note("left", 290.0, 0.0),  // gap: 500 - 490 = 10
            note("right", 710.0, 0.0), // gap: 710 - 700 = 10
        ];
        let groups = GroupSet::new();
        for _ in 0..10 {
            let proposal =
                propose_match(&id("dragged"), &wishes, &groups, &MatchConfig::default()).unwrap();
            match &proposal {
                Proposal::Pairwise { other, .. } => assert_eq!(other, &id("left")),
                Proposal::JoinGroup { .. } => panic!("no groups exist"),
            }
        }
    }

    #[test]
    fn unknown_wish_is_a_quiet_no_op() {
        let wishes = [note("a", 0.0, 0.0)];
        let groups = GroupSet::new();
        assert!(propose_match(&id("ghost"), &wishes, &groups, &MatchConfig::default()).is_none());
    }

    #[test]
    fn group_with_only_dangling_members_is_skipped() {
        let wishes = [note("a", 0.0, 0.0), note("b", 215.0, 0.0)];
        let mut groups = GroupSet::new();
        // A group whose members were both deleted from the board.
        let gid = groups.id_gen_mut().mint();
        groups.adopt([MatchGroup::new(
            gid,
            alloc::vec![id("gone1"), id("gone2")],
            100.0,
            0,
        )]);

        // Its bounds resolve to nothing, so the pairwise path still runs.
        let proposal = propose_match(&id("a"), &wishes, &groups, &MatchConfig::default()).unwrap();
        assert!(matches!(proposal, Proposal::Pairwise { .. }));
    }
}
