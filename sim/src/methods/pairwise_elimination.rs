// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Condorcet-consistent pairwise elimination: repeatedly eliminate the
//! Condorcet loser among the remaining candidates, falling back to the
//! most-hated candidate when a preference cycle leaves no Condorcet loser.
//!
//! Ballots are the same full rankings IRV uses, read from the bottom: a
//! ballot sits on the pile of its least preferred remaining candidate (its
//! "hate" pile). A Condorcet loser always exists short of a cycle, and
//! eliminating one can never remove a Condorcet winner, so this method
//! elects the Condorcet winner whenever there is one.

use crate::ballot_pile::{BallotPiles, RankedBallot};
use crate::condorcet;
use crate::electorate::{CandidateIndex, Electorate, Voter};
use crate::methods::{MethodName, MethodOutcome, VotingMethod};

pub struct PairwiseElimination;

impl VotingMethod for PairwiseElimination {
    fn name(&self) -> MethodName {
        MethodName::PairwiseElimination
    }

    fn tabulate(&self, electorate: &Electorate) -> MethodOutcome {
        if electorate.candidates.is_empty() {
            return MethodOutcome { winner: None, average_utility: 0.0 };
        }
        let mut piles = BallotPiles::new(electorate.candidates.len());

        // Cast every ballot and count it against its least preferred candidate.
        for voter in &electorate.voters {
            let mut ballot = if voter.strategic {
                RankedBallot::strategic(&voter.utilities, &electorate.candidates)
            } else {
                RankedBallot::honest(&voter.utilities)
            };
            ballot.start_from_bottom();
            if let Some(hated) = ballot.next_least_preferred(&piles) {
                piles.add(hated, ballot);
            }
        }

        while piles.num_live() > 1 {
            let loser = find_loser(&electorate.voters, &piles);
            for mut ballot in piles.eliminate(loser) {
                if let Some(hated) = ballot.next_least_preferred(&piles) {
                    piles.add(hated, ballot);
                }
            }
        }

        let winner = piles.sole_live();
        MethodOutcome { winner, average_utility: electorate.average_utility(winner) }
    }
}

/// The next candidate to eliminate: the Condorcet loser among the live
/// candidates if the matchups produce one, otherwise whoever has the most
/// hate ballots (ties, and the all-empty case of a voterless electorate,
/// resolve to the lowest live index so the count always terminates).
fn find_loser(voters: &[Voter], piles: &BallotPiles) -> CandidateIndex {
    let live = piles.live_candidates();
    if let Some(loser) = condorcet::condorcet_loser_among(voters, &live) {
        return loser;
    }
    let mut most_hated = live[0];
    let mut most = piles.pile_size(most_hated);
    for &candidate in &live[1..] {
        let size = piles.pile_size(candidate);
        if size > most {
            most = size;
            most_hated = candidate;
        }
    }
    most_hated
}
