// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Plurality (first past the post): each ballot is a single favorite, the
//! candidate with the most ballots wins.

use crate::electorate::{Candidate, CandidateIndex, Electorate, Voter};
use crate::methods::{MethodName, MethodOutcome, VotingMethod, first_strict_max};
use crate::spatial;

pub struct Plurality;

impl VotingMethod for Plurality {
    fn name(&self) -> MethodName {
        MethodName::Plurality
    }

    fn tabulate(&self, electorate: &Electorate) -> MethodOutcome {
        let mut tallies = vec![0usize; electorate.candidates.len()];
        for voter in &electorate.voters {
            let choice = if voter.strategic {
                strategic_choice(voter, &electorate.candidates)
            } else {
                honest_choice(voter)
            };
            tallies[choice.0] += 1;
        }
        let winner = first_strict_max(&tallies);
        MethodOutcome { winner, average_utility: electorate.average_utility(winner) }
    }
}

/// An honest plurality voter just picks their favorite.
fn honest_choice(voter: &Voter) -> CandidateIndex {
    spatial::find_favorite(&voter.utilities)
}

/// A strategic plurality voter votes for their preferred major candidate
/// rather than waste the ballot on a minor favorite. If no major candidate
/// has positive utility for them the choice degenerates to candidate 0.
fn strategic_choice(voter: &Voter, candidates: &[Candidate]) -> CandidateIndex {
    spatial::find_favorite_major(&voter.utilities, candidates)
}
