// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending-proposal state machine.

use corkboard_model::{GroupId, Wish, WishId};

use crate::{GroupSet, MatchConfig, Proposal, propose_match};

/// Match decision state: idle, or one proposal awaiting confirm/cancel.
///
/// A drag-stop computes at most one proposal ([`MatchState::on_drag_stop`]);
/// the host shows it in a confirmation dialog and reports the outcome with
/// [`confirm`](MatchState::confirm) or [`cancel`](MatchState::cancel), either
/// of which returns the machine to idle. A new drag-stop while a proposal is
/// pending replaces it — the stale proposal referred to a board that no
/// longer exists.
#[derive(Clone, Debug, Default)]
pub struct MatchState {
    pending: Option<Proposal>,
}

impl MatchState {
    /// An idle state machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no proposal is pending.
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// The pending proposal, if any.
    pub fn pending(&self) -> Option<&Proposal> {
        self.pending.as_ref()
    }

    /// Handle a drag-stop of `wish` against a consistent snapshot of the
    /// board, storing and returning the resulting proposal, if any.
    pub fn on_drag_stop(
        &mut self,
        wish: &WishId,
        wishes: &[Wish],
        groups: &GroupSet,
        config: &MatchConfig,
    ) -> Option<&Proposal> {
        self.pending = propose_match(wish, wishes, groups, config);
        self.pending.as_ref()
    }

    /// Commit the pending proposal against `groups` and return to idle.
    ///
    /// Returns the id of the group the wish ended up in, or `None` when
    /// nothing was pending or the commit degraded to a no-op (the guards in
    /// [`GroupSet`] apply unchanged). `now` stamps a newly created group.
    pub fn confirm(&mut self, groups: &mut GroupSet, now: u64) -> Option<GroupId> {
        match self.pending.take()? {
            Proposal::Pairwise { wish, other, .. } => groups.confirm_pairwise(&wish, &other, now),
            Proposal::JoinGroup { wish, group, .. } => {
                groups.confirm_join(&wish, group).then_some(group)
            }
        }
    }

    /// Discard the pending proposal, leaving the board untouched.
    ///
    /// Returns whether a proposal was actually pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
