// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The voting methods under study, behind a common capability so the
//! pipeline can run whichever set is enabled without knowing anything
//! about the individual algorithms.

pub mod approval;
pub mod irv;
pub mod pairwise_elimination;
pub mod plurality;
pub mod score;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::electorate::{CandidateIndex, Electorate};
use crate::parameters::SimulationParameters;

/// The methods this crate knows how to tabulate.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum MethodName {
    Plurality,
    Approval,
    Score,
    #[serde(rename = "IRV")]
    IRV,
    PairwiseElimination,
}

impl MethodName {
    /// Instantiate the tabulator for this method. Score takes its range
    /// from the configuration; the others are stateless.
    pub fn construct(self, params: &SimulationParameters) -> Box<dyn VotingMethod> {
        match self {
            MethodName::Plurality => Box::new(plurality::Plurality),
            MethodName::Approval => Box::new(approval::Approval),
            MethodName::Score => Box::new(score::Score::new(params.score_min, params.score_max)),
            MethodName::IRV => Box::new(irv::InstantRunoff),
            MethodName::PairwiseElimination => Box::new(pairwise_elimination::PairwiseElimination),
        }
    }
}

impl FromStr for MethodName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Plurality" => Ok(MethodName::Plurality),
            "Approval" => Ok(MethodName::Approval),
            "Score" => Ok(MethodName::Score),
            "IRV" => Ok(MethodName::IRV),
            "PairwiseElimination" => Ok(MethodName::PairwiseElimination),
            _ => Err("No such voting method supported"),
        }
    }
}

impl Display for MethodName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MethodName::Plurality => "Plurality",
            MethodName::Approval => "Approval",
            MethodName::Score => "Score",
            MethodName::IRV => "IRV",
            MethodName::PairwiseElimination => "PairwiseElimination",
        };
        f.write_str(s)
    }
}

/// What a method produced for one electorate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodOutcome {
    /// index of the winning candidate, None if the method produced no winner
    pub winner: Option<CandidateIndex>,
    /// mean utility per voter of the winner, 0.0 when there is no winner
    pub average_utility: f64,
}

/// The capability every voting method satisfies: consume an electorate,
/// produce a winner and the winner's average utility. Tabulators own
/// whatever ballots they build and discard them when done.
pub trait VotingMethod {
    fn name(&self) -> MethodName;
    fn tabulate(&self, electorate: &Electorate) -> MethodOutcome;
}

/// The index with the strictly largest tally. A later tally only takes
/// over with a strictly greater value, so ties resolve to the lowest
/// index, and None is returned only when every tally is zero (e.g. no
/// ballots were cast at all).
/// ```
/// use sim::methods::first_strict_max;
/// use sim::electorate::CandidateIndex;
/// assert_eq!(Some(CandidateIndex(2)),first_strict_max(&[3,3,5,3]));
/// assert_eq!(Some(CandidateIndex(0)),first_strict_max(&[4,4,4]));
/// assert_eq!(None,first_strict_max(&[0,0,0]));
/// ```
pub fn first_strict_max(tallies: &[usize]) -> Option<CandidateIndex> {
    let mut winner = None;
    let mut winning_tally = 0;
    for (i, &tally) in tallies.iter().enumerate() {
        if tally > winning_tally {
            winning_tally = tally;
            winner = Some(CandidateIndex(i));
        }
    }
    winner
}
