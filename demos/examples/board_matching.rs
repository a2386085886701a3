// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walkthrough of the matching core on a small board.
//!
//! Simulates a host application driving the whole flow: wishes are dropped on
//! the canvas, drag-stops are fed to [`MatchState`], proposals are confirmed
//! into a [`GroupSet`], group outlines are recomputed, and finally a batch
//! keyword pass regroups the board by content instead of position.
//!
//! Run: `cargo run -p corkboard_demos --example board_matching`

use corkboard_bounds::{GROUP_PADDING, compute_group_bounds};
use corkboard_geometry::rect_distance;
use corkboard_keywords::KeywordGrouper;
use corkboard_match::{GroupSet, MatchConfig, MatchState, Proposal};
use corkboard_model::{Wish, WishId};
use kurbo::Point;

fn note(id: &str, title: &str, x: f64, y: f64, keywords: &[&str]) -> Wish {
    Wish::new(WishId::new(id), title)
        .at(Point::new(x, y))
        .sized(200.0, 150.0)
        .with_keywords(keywords.iter().copied())
}

fn describe(proposal: &Proposal) -> String {
    match proposal {
        Proposal::Pairwise {
            wish,
            other,
            distance,
        } => format!("match {wish} with {other} ({distance:.0}px apart)?"),
        Proposal::JoinGroup {
            wish,
            group,
            distance,
            member_count,
        } => format!("add {wish} to {group} with {member_count} members ({distance:.0}px away)?"),
    }
}

fn main() {
    let mut wishes = vec![
        note("wish1", "Music festival", 0.0, 0.0, &["music", "fes"]),
        note("wish2", "Food stalls", 600.0, 0.0, &["music", "fes", "food"]),
        note("wish3", "Robot arm demo", 0.0, 400.0, &["robotics"]),
        note("wish4", "Street food map", 600.0, 400.0, &["food", "map"]),
    ];

    let mut groups = GroupSet::new();
    let mut state = MatchState::new();
    let config = MatchConfig::default();
    let mut now = 0_u64;

    // wish2 is dragged next to wish1 and released 15px away.
    wishes[1].position = Point::new(215.0, 0.0);
    now += 1_000;
    println!(
        "wish1/wish2 edge distance: {:.0}px",
        rect_distance(wishes[0].rect(), wishes[1].rect())
    );
    match state.on_drag_stop(&WishId::new("wish2"), &wishes, &groups, &config) {
        Some(proposal) => println!("proposal: {}", describe(proposal)),
        None => println!("no proposal, plain relocation"),
    }
    let gid = state.confirm(&mut groups, now).expect("proposal was pending");
    println!("confirmed into {gid}");

    let group = groups.get(gid).expect("just created");
    let bounds = compute_group_bounds(group, &wishes, GROUP_PADDING).expect("members exist");
    println!(
        "{gid} outline: {} hull vertices, box {:?}",
        bounds.hull.len(),
        bounds.aabb
    );

    // wish4 lands just outside the group's box: a join proposal this time.
    wishes[3].position = Point::new(430.0, 0.0);
    now += 1_000;
    if let Some(proposal) = state.on_drag_stop(&WishId::new("wish4"), &wishes, &groups, &config) {
        println!("proposal: {}", describe(proposal));
    }
    state.confirm(&mut groups, now);
    println!(
        "{gid} now has {} members",
        groups.get(gid).expect("still alive").len()
    );

    // wish3 is dropped far from everything: the drag is just a relocation.
    wishes[2].position = Point::new(1500.0, 800.0);
    now += 1_000;
    assert!(
        state
            .on_drag_stop(&WishId::new("wish3"), &wishes, &groups, &config)
            .is_none()
    );
    println!("wish3 relocated, no proposal");

    // Switch strategies: throw away the proximity groups and regroup the
    // whole board by keyword similarity instead.
    groups.clear();
    now += 1_000;
    // A host would pass an RNG here; a fixed sample keeps the output stable.
    let keyword_groups =
        KeywordGrouper::default().group(&wishes, groups.id_gen_mut(), &mut || 0.72, now);
    groups.adopt(keyword_groups);

    println!("keyword pass produced {} group(s):", groups.len());
    for group in groups.iter() {
        let members: Vec<&str> = group.wishes.iter().map(WishId::as_str).collect();
        println!(
            "  {}: members {:?}, common keywords {:?}, score {:.0}",
            group.id, members, group.common_keywords, group.match_score
        );
    }
}
