// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Pairwise majority analysis: head-to-head matchups, the Condorcet
//! winner over a whole electorate, and the Condorcet loser within a
//! subset of candidates (used by pairwise elimination to pick whom to
//! remove each round).

use crate::electorate::{CandidateIndex, Voter};

/// True iff a strict majority of all voters prefers candidate `i` to
/// candidate `j`. A voter with equal utilities for the two counts for
/// neither side, so `head_to_head(i,j)` and `head_to_head(j,i)` can both
/// be false.
pub fn head_to_head(voters: &[Voter], i: CandidateIndex, j: CandidateIndex) -> bool {
    let votes = voters.iter().filter(|v| v.utilities[i.0] > v.utilities[j.0]).count();
    votes > voters.len() / 2
}

/// The candidate beating every other candidate head-to-head, if one
/// exists. There can be at most one.
pub fn condorcet_winner(voters: &[Voter], num_candidates: usize) -> Option<CandidateIndex> {
    'candidates: for i in 0..num_candidates {
        for j in 0..num_candidates {
            if i == j {
                continue;
            }
            if !head_to_head(voters, CandidateIndex(i), CandidateIndex(j)) {
                continue 'candidates;
            }
        }
        return Some(CandidateIndex(i));
    }
    None
}

/// The candidate in `group` losing every head-to-head matchup within
/// `group`, if one exists. Two candidates cannot both lose to each other,
/// so there is at most one and the first found is it.
pub fn condorcet_loser_among(voters: &[Voter], group: &[CandidateIndex]) -> Option<CandidateIndex> {
    'candidates: for &i in group {
        for &j in group {
            if i == j {
                continue;
            }
            if !head_to_head(voters, j, i) {
                continue 'candidates;
            }
        }
        return Some(i);
    }
    None
}
