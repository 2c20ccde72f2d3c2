// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Approval voting: each ballot approves any number of candidates, the
//! candidate with the most approvals wins.

use crate::electorate::{Candidate, Electorate, Voter};
use crate::methods::{MethodName, MethodOutcome, VotingMethod, first_strict_max};
use crate::spatial;

pub struct Approval;

/// One up or down vote per candidate.
struct ApprovalBallot {
    approvals: Vec<bool>,
}

impl VotingMethod for Approval {
    fn name(&self) -> MethodName {
        MethodName::Approval
    }

    fn tabulate(&self, electorate: &Electorate) -> MethodOutcome {
        let mut ballots = Vec::with_capacity(electorate.voters.len());
        for voter in &electorate.voters {
            ballots.push(if voter.strategic {
                strategic_ballot(voter, &electorate.candidates)
            } else {
                honest_ballot(voter)
            });
        }

        let mut tallies = vec![0usize; electorate.candidates.len()];
        for ballot in &ballots {
            for (i, &approved) in ballot.approvals.iter().enumerate() {
                if approved {
                    tallies[i] += 1;
                }
            }
        }
        let winner = first_strict_max(&tallies);
        MethodOutcome { winner, average_utility: electorate.average_utility(winner) }
    }
}

/// An honest voter approves every candidate whose utility is strictly
/// above their approval threshold.
fn honest_ballot(voter: &Voter) -> ApprovalBallot {
    ApprovalBallot {
        approvals: voter.utilities.iter().map(|&u| u > voter.approval_threshold).collect(),
    }
}

/// A strategic voter bullet-votes when their overall favorite is a major
/// candidate; approving anyone else could only hurt that favorite. When
/// the favorite is minor there is nothing to protect and they vote
/// honestly.
fn strategic_ballot(voter: &Voter, candidates: &[Candidate]) -> ApprovalBallot {
    let favorite = spatial::find_favorite(&voter.utilities);
    if !candidates[favorite.0].major {
        return honest_ballot(voter);
    }
    let mut approvals = vec![false; voter.utilities.len()];
    approvals[favorite.0] = true;
    ApprovalBallot { approvals }
}
