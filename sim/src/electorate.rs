//! The population being simulated: candidates, voters, and the electorate
//! that owns them, together with random generation of all three.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::condorcet;
use crate::methods::{MethodName, MethodOutcome};
use crate::parameters::SimulationParameters;
use crate::spatial;

/// a candidate, referred to by position in the electorate's candidate list, 0 being first
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateIndex(pub usize);
// type alias really, don't want long display
impl fmt::Display for CandidateIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for CandidateIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// A single ballot choice with a fixed position in ideological space.
/// Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    /// position on each ideological axis, each in [0,1]
    pub alignments: Vec<f64>,
    /// true if the candidate represents a "major party" bloc
    pub major: bool,
}

/// An individual voter. Utilities are computed once, against every
/// candidate in the electorate, and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voter {
    /// position on each ideological axis, each in [0,1]
    pub alignments: Vec<f64>,
    /// whether this voter deviates from honest balloting to avoid wasting influence
    pub strategic: bool,
    /// utility for each candidate, index aligned with the electorate's candidate list
    pub utilities: Vec<f64>,
    /// the utility above which this voter approves of a candidate
    pub approval_threshold: f64,
}

/// A generated population of voters and candidates, with the facts derived
/// from it that the reports need. Built once, tabulated by each enabled
/// method, then discarded once its report has been extracted.
#[derive(Debug, Clone)]
pub struct Electorate {
    pub candidates: Vec<Candidate>,
    pub voters: Vec<Voter>,
    /// the candidate with the highest mean utility, if any has a positive one
    pub utility_winner: Option<CandidateIndex>,
    /// the mean utility per voter of the utility winner
    pub max_utility: f64,
    /// the candidate beating every other head-to-head, if one exists
    pub condorcet_winner: Option<CandidateIndex>,
}

/// An electorate together with the outcome of every enabled method, keyed
/// by method name. This is what a pipeline worker hands to the aggregator.
#[derive(Debug, Clone)]
pub struct CompletedElectorate {
    pub electorate: Electorate,
    pub results: BTreeMap<MethodName, MethodOutcome>,
}

impl Electorate {
    /// Generate a random electorate within the configured bounds.
    ///
    /// Candidate and voter counts are drawn uniformly from their inclusive
    /// ranges; candidate `i` takes the `i`th name from the configured pool,
    /// so the pool must be at least `max_candidates` long (checked by
    /// [SimulationParameters::validate], a violation panics here).
    pub fn generate(params: &SimulationParameters, rng: &mut impl Rng) -> Electorate {
        let num_candidates = rng.random_range(params.min_candidates..=params.max_candidates);
        let mut candidates = Vec::with_capacity(num_candidates);
        for i in 0..num_candidates {
            let name = params.names[i].clone();
            candidates.push(if i < params.num_major_candidates {
                Candidate::random_major(name, params.num_axes, i, rng)
            } else {
                Candidate::random(name, params.num_axes, rng)
            });
        }

        let num_voters = rng.random_range(params.min_voters..=params.max_voters);
        let mut voters = Vec::with_capacity(num_voters);
        for _ in 0..num_voters {
            voters.push(Voter::random(params.num_axes, params.strategic_voters, &candidates, rng));
        }

        Electorate::new(candidates, voters)
    }

    /// Assemble an electorate from already-built candidates and voters and
    /// derive the analysis facts (utility winner, Condorcet winner) the
    /// reports compare methods against. Voters' utility vectors must be
    /// index aligned with `candidates`.
    pub fn new(candidates: Vec<Candidate>, voters: Vec<Voter>) -> Electorate {
        let (utility_winner, max_utility) = find_utility_winner(&voters, candidates.len());
        let condorcet_winner = condorcet::condorcet_winner(&voters, candidates.len());
        Electorate { candidates, voters, utility_winner, max_utility, condorcet_winner }
    }

    /// Mean utility over all voters of the given candidate, 0.0 for an
    /// empty electorate or when there is no such candidate.
    pub fn average_utility(&self, candidate: Option<CandidateIndex>) -> f64 {
        match candidate {
            Some(c) if !self.voters.is_empty() => {
                let total: f64 = self.voters.iter().map(|v| v.utilities[c.0]).sum();
                total / self.voters.len() as f64
            }
            _ => 0.0,
        }
    }
}

/// The candidate with the strictly largest mean utility, and that utility.
/// The scan starts from 0.0, so an electorate where nobody has positive
/// utility for anyone (or with no voters at all) has no utility winner.
fn find_utility_winner(voters: &[Voter], num_candidates: usize) -> (Option<CandidateIndex>, f64) {
    if voters.is_empty() {
        return (None, 0.0);
    }
    let mut winner = None;
    let mut winner_utility = 0.0;
    for i in 0..num_candidates {
        let total: f64 = voters.iter().map(|v| v.utilities[i]).sum();
        let mean = total / voters.len() as f64;
        if mean > winner_utility {
            winner = Some(CandidateIndex(i));
            winner_utility = mean;
        }
    }
    (winner, winner_utility)
}

impl Candidate {
    /// A minor candidate, drawn uniformly from the whole ideological space.
    pub fn random(name: String, num_axes: usize, rng: &mut impl Rng) -> Candidate {
        let alignments = (0..num_axes).map(|_| rng.random::<f64>()).collect();
        Candidate { name, alignments, major: false }
    }

    /// A major candidate. Every alignment is confined to the same half of
    /// its axis, alternating half by candidate index, so that two majors
    /// model opposing left/right blocs with the axis crossings at 0.5.
    pub fn random_major(name: String, num_axes: usize, index: usize, rng: &mut impl Rng) -> Candidate {
        let zone = (index % 2) as f64;
        let low = zone * 0.5;
        let alignments = (0..num_axes).map(|_| low + rng.random::<f64>() * 0.5).collect();
        Candidate { name, alignments, major: true }
    }
}

impl Voter {
    /// A voter drawn uniformly from the ideological space, with utilities
    /// computed against every candidate. Strategic status is a Bernoulli
    /// draw at the configured probability.
    pub fn random(
        num_axes: usize,
        strategic_chance: f64,
        candidates: &[Candidate],
        rng: &mut impl Rng,
    ) -> Voter {
        let alignments: Vec<f64> = (0..num_axes).map(|_| rng.random::<f64>()).collect();
        let strategic = rng.random_bool(strategic_chance);
        let utilities = candidates
            .iter()
            .map(|c| spatial::utility(&alignments, &c.alignments))
            .collect();
        Voter { alignments, strategic, utilities, approval_threshold: 0.5 }
    }
}
