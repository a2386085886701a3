// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Keywords: similarity scoring and batch grouping over keywords.
//!
//! Alongside the live proximity flow, the board offers a batch strategy that
//! groups wishes by what they *say* rather than where they *sit*: two wishes
//! are similar when their keyword sets overlap enough, and a group is a
//! connected component of the similarity graph.
//!
//! Scoring judges the overlap against the **smaller** keyword set, so a
//! tightly-tagged wish whose few keywords all appear on a richly-tagged wish
//! still scores 100 ([`keyword_overlap_score`]). Matching is case-sensitive
//! and exact; no normalization is applied.
//!
//! This is a separate code path from proximity matching and is intended as a
//! batch/offline utility over the whole wish collection. The two strategies
//! must not be trusted to produce compatible assignments over the same board:
//! a wish belongs to at most one group, so clear proximity-derived groups
//! before adopting keyword-derived ones.
//!
//! ```rust
//! use corkboard_keywords::KeywordGrouper;
//! use corkboard_model::{GroupIdGen, Wish, WishId};
//!
//! let wishes = [
//!     Wish::new(WishId::new("w1"), "Music fes").with_keywords(["music", "fes"]),
//!     Wish::new(WishId::new("w2"), "Food stalls").with_keywords(["music", "fes", "food"]),
//!     Wish::new(WishId::new("w3"), "Robot arm").with_keywords(["robotics"]),
//! ];
//! let mut ids = GroupIdGen::new();
//! let groups = KeywordGrouper::default().group(&wishes, &mut ids, &mut || 0.5, 0);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].wishes.len(), 2); // w3 floats free
//! assert_eq!(groups[0].common_keywords, ["music", "fes"]);
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashSet;

use corkboard_model::{GroupIdGen, MatchGroup, Wish};

/// Default similarity threshold: pairs scoring at least this are connected.
pub const KEYWORD_MATCH_THRESHOLD: f64 = 50.0;

/// Overlap score between two wishes' keyword sets, in `[0, 100]`.
///
/// Keyword lists are treated as sets (exact, case-sensitive matches;
/// in-list duplicates collapse). The score is
/// `100 * |A ∩ B| / min(|A|, |B|)`, or 0 when either set is empty — so 100
/// means the smaller set is a subset of the larger. `min` is commutative, so
/// the score is symmetric despite the asymmetric-looking denominator.
pub fn keyword_overlap_score(a: &Wish, b: &Wish) -> f64 {
    let set_a: HashSet<&str> = a.keywords.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.keywords.iter().map(String::as_str).collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let common = set_a.intersection(&set_b).count();
    let smaller = set_a.len().min(set_b.len());
    100.0 * common as f64 / smaller as f64
}

/// Batch grouping of wishes by keyword similarity.
///
/// Builds an undirected graph with an edge wherever a pair scores at least
/// [`threshold`](Self::threshold), then takes connected components of size
/// ≥ 2 as groups. Wishes with no qualifying neighbor stay ungrouped —
/// floating wishes are expected, never forced into a group.
#[derive(Clone, Copy, Debug)]
pub struct KeywordGrouper {
    /// Minimum pairwise score for two wishes to be connected.
    pub threshold: f64,
}

impl Default for KeywordGrouper {
    fn default() -> Self {
        Self {
            threshold: KEYWORD_MATCH_THRESHOLD,
        }
    }
}

impl KeywordGrouper {
    /// A grouper with a custom similarity threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Group `wishes` into connected components of the similarity graph.
    ///
    /// One [`MatchGroup`] is returned per component of size ≥ 2, carrying the
    /// keywords common to *every* member (in the first member's list order)
    /// and a match score drawn from `score_source`.
    ///
    /// `score_source` yields a unit sample in `[0, 1)` that is mapped into
    /// the reference score range `[50, 100]`. The reference implementation
    /// randomizes this score; injecting the source keeps this function pure —
    /// hosts pass an RNG, tests pass a constant.
    ///
    /// `now` is the creation timestamp (milliseconds) stamped on each group.
    pub fn group(
        &self,
        wishes: &[Wish],
        ids: &mut GroupIdGen,
        score_source: &mut dyn FnMut() -> f64,
        now: u64,
    ) -> Vec<MatchGroup> {
        // Similarity graph over wish indices.
        let n = wishes.len();
        let mut adjacency: Vec<Vec<usize>> = alloc::vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if keyword_overlap_score(&wishes[i], &wishes[j]) >= self.threshold {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                }
            }
        }

        // Connected components by iterative DFS.
        let mut visited = alloc::vec![false; n];
        let mut groups = Vec::new();
        for start in 0..n {
            if visited[start] {
                continue;
            }
            let mut component = Vec::new();
            let mut stack = alloc::vec![start];
            visited[start] = true;
            while let Some(i) = stack.pop() {
                component.push(i);
                for &j in &adjacency[i] {
                    if !visited[j] {
                        visited[j] = true;
                        stack.push(j);
                    }
                }
            }
            // A wish with no qualifying neighbor stays ungrouped.
            if component.len() < 2 {
                continue;
            }
            component.sort_unstable();

            let common_keywords = common_keywords(&component, wishes);
            let score = 50.0 + score_source().clamp(0.0, 1.0) * 50.0;
            let mut group = MatchGroup::new(
                ids.mint(),
                component.iter().map(|&i| wishes[i].id.clone()).collect(),
                score,
                now,
            );
            group.common_keywords = common_keywords;
            groups.push(group);
        }
        groups
    }
}

/// Keywords shared by every member of `component`, in the first member's
/// list order, deduplicated.
fn common_keywords(component: &[usize], wishes: &[Wish]) -> Vec<String> {
    let Some((&first, rest)) = component.split_first() else {
        return Vec::new();
    };
    let mut seen: HashSet<&str> = HashSet::new();
    wishes[first]
        .keywords
        .iter()
        .filter(|k| seen.insert(k.as_str()))
        .filter(|k| {
            rest.iter()
                .all(|&i| wishes[i].keywords.iter().any(|other| other == *k))
        })
        .cloned()
        .collect()
}
