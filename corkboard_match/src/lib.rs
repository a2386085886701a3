// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Match: the proximity matching flow of the board.
//!
//! Dropping a wish near another wish — or near the outline of an existing
//! match group — should offer the user a match. This crate owns that flow:
//!
//! - [`propose_match`] turns a drag-stop into at most one [`Proposal`],
//!   checking existing group bounds first and individual ungrouped wishes
//!   second, always picking the closest qualifying candidate under the
//!   configured threshold ([`MatchConfig`]).
//! - [`MatchState`] holds the pending proposal between the drag-stop and the
//!   user's confirm/cancel, in the spirit of a pointer-event state machine:
//!   idle, or exactly one proposal awaiting a decision.
//! - [`GroupSet`] owns the confirmed groups and keeps the membership
//!   invariants: every group has at least two members, and no wish belongs to
//!   two groups — confirming a move between groups detaches first, prunes the
//!   source if it collapses, then appends.
//!
//! Every guard degrades to a silent (logged) no-op: confirming against a
//! vanished group, re-confirming an existing match, or proposing for an
//! unknown wish never raises an error. The board is a single-user surface and
//! an impossible confirm just means the world changed under the dialog.
//!
//! ```rust
//! use corkboard_match::{GroupSet, MatchConfig, MatchState, Proposal};
//! use corkboard_model::{Wish, WishId};
//! use kurbo::Point;
//!
//! let wishes = [
//!     Wish::new(WishId::new("a"), "Music fes").sized(200.0, 150.0),
//!     Wish::new(WishId::new("b"), "Food stalls")
//!         .at(Point::new(210.0, 0.0))
//!         .sized(200.0, 150.0),
//! ];
//! let mut groups = GroupSet::new();
//! let mut state = MatchState::new();
//!
//! // "b" was just dropped 10px away from "a": propose a pairwise match.
//! let proposal = state
//!     .on_drag_stop(&WishId::new("b"), &wishes, &groups, &MatchConfig::default())
//!     .expect("10px is within the 20px threshold");
//! assert!(matches!(proposal, Proposal::Pairwise { distance, .. } if *distance == 10.0));
//!
//! // The user confirms; the two wishes now share a group.
//! let group = state.confirm(&mut groups, 0).expect("proposal was pending");
//! assert!(groups.get(group).unwrap().contains(&WishId::new("a")));
//! assert!(groups.get(group).unwrap().contains(&WishId::new("b")));
//! ```

#![no_std]

extern crate alloc;

mod group_set;
mod propose;
mod state;

pub use group_set::GroupSet;
pub use propose::{MatchConfig, PROXIMITY_MATCH_DISTANCE, Proposal, propose_match};
pub use state::MatchState;

#[cfg(test)]
mod tests {
    use super::*;
    use corkboard_model::{Wish, WishId};
    use kurbo::Point;

    fn note(id: &str, x: f64, y: f64) -> Wish {
        Wish::new(WishId::new(id), id)
            .at(Point::new(x, y))
            .sized(200.0, 150.0)
    }

    fn id(s: &str) -> WishId {
        WishId::new(s)
    }

    /// Full flow: pairwise match, then a third wish joins by group proximity,
    /// then moving a grouped wish stays quiet.
    #[test]
    fn drag_confirm_join_lifecycle() {
        let config = MatchConfig::default();
        let mut wishes = alloc::vec![
            note("a", 0.0, 0.0),
            note("b", 210.0, 0.0),
            note("c", 2000.0, 2000.0),
        ];
        let mut groups = GroupSet::new();
        let mut state = MatchState::new();

        // b dropped 10px from a.
        assert!(
            state
                .on_drag_stop(&id("b"), &wishes, &groups, &config)
                .is_some()
        );
        let group = state.confirm(&mut groups, 100).unwrap();
        assert_eq!(groups.get(group).unwrap().len(), 2);
        assert_eq!(groups.get(group).unwrap().match_score, 100.0);
        assert!(groups.get(group).unwrap().common_keywords.is_empty());

        // c dragged next to the group's padded bounds: the group AABB spans
        // x in [-10, 420], so x=435 leaves a 15px gap.
        wishes[2].position = Point::new(435.0, 0.0);
        let proposal = state
            .on_drag_stop(&id("c"), &wishes, &groups, &config)
            .expect("15px from the group bounds qualifies");
        match proposal {
            Proposal::JoinGroup {
                group: g,
                distance,
                member_count,
                ..
            } => {
                assert_eq!(*g, group);
                assert_eq!(*distance, 15.0);
                assert_eq!(*member_count, 2);
            }
            Proposal::Pairwise { .. } => panic!("expected a join-group proposal"),
        }
        state.confirm(&mut groups, 200);
        assert_eq!(groups.get(group).unwrap().len(), 3);

        // Moving an already-matched wish never proposes again.
        wishes[0].position = Point::new(5.0, 5.0);
        assert!(
            state
                .on_drag_stop(&id("a"), &wishes, &groups, &config)
                .is_none()
        );
    }

    /// No wish is ever observable in two groups, across any confirm sequence.
    #[test]
    fn membership_stays_exclusive() {
        let config = MatchConfig::default();
        let wishes = alloc::vec![
            note("a", 0.0, 0.0),
            note("b", 210.0, 0.0),
            note("c", 1000.0, 1000.0),
            note("d", 1210.0, 1000.0),
        ];
        let mut groups = GroupSet::new();
        let mut state = MatchState::new();

        state.on_drag_stop(&id("b"), &wishes, &groups, &config);
        let first = state.confirm(&mut groups, 0).unwrap();
        state.on_drag_stop(&id("d"), &wishes, &groups, &config);
        let second = state.confirm(&mut groups, 0).unwrap();
        assert_ne!(first, second);

        // Force-move b into the second group.
        groups.confirm_join(&id("b"), second);
        for wish in &wishes {
            let memberships = groups.iter().filter(|g| g.contains(&wish.id)).count();
            assert!(memberships <= 1, "{} is in two groups", wish.id);
        }
        // The first group collapsed below two members and was pruned, which
        // leaves "a" ungrouped and free to be proposed again.
        assert!(groups.get(first).is_none());
        assert_eq!(groups.get(second).unwrap().len(), 3);
        assert!(groups.group_of(&id("a")).is_none());
    }

    /// Dragging out of range relocates the wish with no side effects.
    #[test]
    fn out_of_range_drop_is_quiet() {
        let config = MatchConfig::default();
        let wishes = [note("a", 0.0, 0.0), note("b", 230.0, 0.0)]; // 30px gap
        let groups = GroupSet::new();
        let mut state = MatchState::new();
        assert!(
            state
                .on_drag_stop(&id("b"), &wishes, &groups, &config)
                .is_none()
        );
        assert!(state.is_idle());
    }
}
