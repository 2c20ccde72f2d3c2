// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Score (range) voting: each voter scores every candidate within a
//! configured integer range, the candidate with the largest score sum
//! wins.

use crate::electorate::{CandidateIndex, Electorate, Voter};
use crate::methods::{MethodName, MethodOutcome, VotingMethod};
use crate::spatial;

pub struct Score {
    min: i64,
    max: i64,
}

impl Score {
    pub fn new(min: i64, max: i64) -> Score {
        Score { min, max }
    }
}

impl VotingMethod for Score {
    fn name(&self) -> MethodName {
        MethodName::Score
    }

    fn tabulate(&self, electorate: &Electorate) -> MethodOutcome {
        if electorate.candidates.is_empty() {
            return MethodOutcome { winner: None, average_utility: 0.0 };
        }
        let mut sums = vec![0i64; electorate.candidates.len()];
        for voter in &electorate.voters {
            for (i, score) in self.ballot(voter, electorate).iter().enumerate() {
                sums[i] += score;
            }
        }
        // Unlike the count based methods an all-equal score sum still names
        // a winner: the scan starts from the first candidate's sum.
        let winner = Some(largest_index(&sums));
        MethodOutcome { winner, average_utility: electorate.average_utility(winner) }
    }
}

impl Score {
    fn ballot(&self, voter: &Voter, electorate: &Electorate) -> Vec<i64> {
        if voter.strategic {
            let favorite_major =
                spatial::find_favorite_major(&voter.utilities, &electorate.candidates);
            let threshold = voter.utilities[favorite_major.0];
            threshold_clamp(&voter.utilities, threshold, self.min, self.max)
        } else {
            linear_scale(&voter.utilities, self.min, self.max)
        }
    }
}

/// Index of the strictly largest value, ties to the lowest index. The
/// running maximum starts at the first entry, so an all-equal list returns
/// index 0. The list must be non-empty.
fn largest_index(sums: &[i64]) -> CandidateIndex {
    let mut largest_index = 0;
    let mut largest = sums[0];
    for (i, &value) in sums.iter().enumerate() {
        if value > largest {
            largest = value;
            largest_index = i;
        }
    }
    CandidateIndex(largest_index)
}

/// Linearly rescale utilities so the smallest becomes `min` and the
/// largest becomes `max`, rounding half up.
///
/// If every utility is equal there is no span to scale over and every
/// candidate scores 0, not `min`. That is a documented rule of the model,
/// so an indifferent voter contributes nothing rather than `min`
/// everywhere.
/// ```
/// use sim::methods::score::linear_scale;
/// assert_eq!(vec![0,5,2],linear_scale(&[0.1,0.9,0.4],0,5));
/// assert_eq!(vec![0,0,0],linear_scale(&[0.7,0.7,0.7],0,5));
/// ```
pub fn linear_scale(utilities: &[f64], min: i64, max: i64) -> Vec<i64> {
    let mut smallest = utilities[0];
    let mut largest = utilities[0];
    for &u in utilities {
        if u > largest {
            largest = u;
        } else if u < smallest {
            smallest = u;
        }
    }

    if largest == smallest {
        return vec![0; utilities.len()];
    }

    let scale_factor = (max - min) as f64 / (largest - smallest);
    utilities
        .iter()
        .map(|&u| {
            let scaled = (u - smallest) * scale_factor;
            (scaled + 0.5).floor() as i64 + min
        })
        .collect()
}

/// Clamp utilities to the extremes of the score range: anything at or
/// above `threshold` becomes `max`, the rest become `min`. This is the
/// strategic ballot: bullet voting for the preferred major candidate and
/// everyone the voter likes at least as much.
pub fn threshold_clamp(utilities: &[f64], threshold: f64, min: i64, max: i64) -> Vec<i64> {
    utilities.iter().map(|&u| if u >= threshold { max } else { min }).collect()
}
