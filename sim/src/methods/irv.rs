// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Instant-runoff voting: full ranked ballots, repeated elimination of the
//! candidate with the fewest first preferences among those remaining.

use crate::ballot_pile::{BallotPiles, RankedBallot};
use crate::electorate::{CandidateIndex, Electorate};
use crate::methods::{MethodName, MethodOutcome, VotingMethod};

pub struct InstantRunoff;

impl VotingMethod for InstantRunoff {
    fn name(&self) -> MethodName {
        MethodName::IRV
    }

    fn tabulate(&self, electorate: &Electorate) -> MethodOutcome {
        if electorate.candidates.is_empty() {
            return MethodOutcome { winner: None, average_utility: 0.0 };
        }
        let mut piles = BallotPiles::new(electorate.candidates.len());
        let total_ballots = electorate.voters.len();

        // Cast every ballot and count it for its first preference.
        for voter in &electorate.voters {
            let mut ballot = if voter.strategic {
                RankedBallot::strategic(&voter.utilities, &electorate.candidates)
            } else {
                RankedBallot::honest(&voter.utilities)
            };
            if let Some(first) = ballot.next_preference(&piles) {
                piles.add(first, ballot);
            }
        }

        let winner = run_rounds(&mut piles, total_ballots);
        MethodOutcome { winner, average_utility: electorate.average_utility(winner) }
    }
}

/// The round loop. Each pass either declares a winner (a pile holding a
/// strict majority of all ballots cast, or the larger pile once only two
/// candidates remain) or eliminates the smallest pile and redistributes
/// its ballots to their next live preference. Ballots whose ranking runs
/// out are discarded. The sole-survivor check makes degenerate electorates
/// (no voters at all) terminate instead of spinning.
fn run_rounds(piles: &mut BallotPiles, total_ballots: usize) -> Option<CandidateIndex> {
    loop {
        if piles.num_live() <= 1 {
            return piles.sole_live();
        }
        let (leader, leader_votes) =
            piles.largest_pile().expect("at least two continuing candidates");
        if leader_votes > total_ballots / 2 || piles.num_live() == 2 {
            return Some(leader);
        }
        let (loser, _) = piles.smallest_pile().expect("at least two continuing candidates");
        for mut ballot in piles.eliminate(loser) {
            if let Some(next) = ballot.next_preference(piles) {
                piles.add(next, ballot);
            }
        }
    }
}
