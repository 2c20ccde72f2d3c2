// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The elimination based methods (IRV and pairwise elimination): ballot
//! construction, round behavior, and the Condorcet consistency property
//! pairwise elimination is designed around.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sim::ballot_pile::{BallotPiles, RankedBallot};
use sim::electorate::{Candidate, CandidateIndex, Electorate, Voter};
use sim::methods::VotingMethod;
use sim::methods::irv::InstantRunoff;
use sim::methods::pairwise_elimination::PairwiseElimination;
use sim::methods::plurality::Plurality;
use sim::methods::MethodName;
use sim::parameters::SimulationParameters;

fn candidate(name: &str, major: bool) -> Candidate {
    Candidate { name: name.to_string(), alignments: vec![], major }
}

fn voter(utilities: Vec<f64>) -> Voter {
    Voter { alignments: vec![], strategic: false, utilities, approval_threshold: 0.5 }
}

fn minor_slate(n: usize) -> Vec<Candidate> {
    (0..n).map(|i| candidate(&format!("C{}", i), false)).collect()
}

fn prefs(ballot: &RankedBallot) -> Vec<usize> {
    ballot.prefs.iter().map(|c| c.0).collect()
}

#[test]
fn honest_ballots_rank_by_utility_with_first_seen_ties() {
    assert_eq!(vec![1, 2, 0], prefs(&RankedBallot::honest(&[0.2, 0.9, 0.5])));
    // 0 and 2 are tied: insertion only displaces on strictly greater
    // utility, so the earlier index stays higher
    assert_eq!(vec![1, 0, 2], prefs(&RankedBallot::honest(&[0.5, 0.9, 0.5])));
}

#[test]
fn strategic_ballots_bracket_the_majors() {
    let candidates = vec![
        candidate("A", true),
        candidate("B", true),
        candidate("C", false),
        candidate("D", false),
    ];
    let ballot = RankedBallot::strategic(&[0.3, 0.6, 0.9, 0.1], &candidates);
    // preferred major 1 first, other major 0 last, minors honest in between
    assert_eq!(vec![1, 2, 3, 0], prefs(&ballot));
}

#[test]
fn exhausted_ballots_stop_yielding_candidates() {
    let mut piles = BallotPiles::new(2);
    let mut ballot = RankedBallot::honest(&[0.9, 0.4]);
    assert_eq!(Some(CandidateIndex(0)), ballot.next_preference(&piles));
    piles.eliminate(CandidateIndex(0));
    piles.eliminate(CandidateIndex(1));
    // both choices are dead: the ballot is exhausted, silently
    assert_eq!(None, ballot.next_preference(&piles));
    assert_eq!(None, ballot.next_preference(&piles));
}

#[test]
fn irv_majority_wins_the_first_round() {
    let e = Electorate::new(
        minor_slate(3),
        vec![
            voter(vec![0.1, 0.9, 0.2]),
            voter(vec![0.2, 0.8, 0.1]),
            voter(vec![0.3, 0.9, 0.2]),
            voter(vec![0.9, 0.1, 0.2]),
            voter(vec![0.1, 0.2, 0.9]),
        ],
    );
    // candidate 1 has 3 of 5 first preferences: immediate majority
    assert_eq!(Some(CandidateIndex(1)), InstantRunoff.tabulate(&e).winner);
}

#[test]
fn irv_transfers_the_eliminated_candidates_ballots() {
    // a center squeeze: 1 is everyone's acceptable second choice but has
    // the fewest first preferences, so it goes out first and its ballot
    // decides the runoff
    let e = Electorate::new(
        minor_slate(3),
        vec![
            voter(vec![0.9, 0.5, 0.1]),
            voter(vec![0.9, 0.5, 0.1]),
            voter(vec![0.1, 0.5, 0.9]),
            voter(vec![0.1, 0.5, 0.9]),
            voter(vec![0.5, 0.9, 0.1]),
        ],
    );
    // first preferences are [2,1,2]: no majority, eliminate 1, whose
    // ballot ranks 0 next, and candidate 0 reaches 3 of 5
    assert_eq!(Some(CandidateIndex(0)), InstantRunoff.tabulate(&e).winner);
}

#[test]
fn irv_two_remaining_candidates_resolve_by_count() {
    let e = Electorate::new(
        minor_slate(2),
        vec![
            voter(vec![0.9, 0.1]),
            voter(vec![0.9, 0.1]),
            voter(vec![0.1, 0.9]),
        ],
    );
    assert_eq!(Some(CandidateIndex(0)), InstantRunoff.tabulate(&e).winner);
    // and a dead even split resolves to the lower index
    let tied = Electorate::new(
        minor_slate(2),
        vec![voter(vec![0.9, 0.1]), voter(vec![0.1, 0.9])],
    );
    assert_eq!(Some(CandidateIndex(0)), InstantRunoff.tabulate(&tied).winner);
}

#[test]
fn known_condorcet_winner_end_to_end() {
    // two majors, one minor, five voters,
    // candidate 0 beats both others head-to-head
    let candidates =
        vec![candidate("A", true), candidate("B", true), candidate("C", false)];
    let voters = vec![
        voter(vec![0.9, 0.1, 0.8]),
        voter(vec![0.9, 0.1, 0.8]),
        voter(vec![0.8, 0.1, 0.9]),
        voter(vec![0.1, 0.9, 0.2]),
        voter(vec![0.6, 0.5, 0.4]),
    ];
    let e = Electorate::new(candidates, voters);
    assert_eq!(Some(CandidateIndex(0)), e.condorcet_winner);
    // pairwise elimination must elect the Condorcet winner
    assert_eq!(Some(CandidateIndex(0)), PairwiseElimination.tabulate(&e).winner);
    // plurality is allowed to disagree (vote splitting); here it happens
    // to agree, which is fine, the report layer measures the difference
    let plurality = Plurality.tabulate(&e).winner;
    assert!(plurality.is_some());
}

fn generation_params() -> SimulationParameters {
    SimulationParameters {
        num_electorates: 1,
        min_voters: 5,
        max_voters: 25,
        strategic_voters: 0.3,
        min_candidates: 3,
        max_candidates: 5,
        num_major_candidates: 2,
        methods: vec![MethodName::PairwiseElimination],
        num_axes: 2,
        names: vec!["A".into(), "B".into(), "C".into(), "D".into(), "E".into()],
        num_workers: 1,
        score_min: 0,
        score_max: 5,
        seed: None,
    }
}

/// True when every pairwise matchup has a strict winner and the resulting
/// tournament is transitive (win counts are then 0,1,..,k-1 with no
/// repeats). In that case every candidate subset has a Condorcet loser, so
/// pairwise elimination never falls back to the hate ballot tiebreak and
/// provably elects the Condorcet winner.
fn tournament_is_transitive(e: &Electorate) -> bool {
    let k = e.candidates.len();
    let mut wins = vec![0usize; k];
    for i in 0..k {
        for j in (i + 1)..k {
            let ij = sim::condorcet::head_to_head(&e.voters, CandidateIndex(i), CandidateIndex(j));
            let ji = sim::condorcet::head_to_head(&e.voters, CandidateIndex(j), CandidateIndex(i));
            if ij == ji {
                return false; // a tied matchup
            }
            if ij { wins[i] += 1 } else { wins[j] += 1 }
        }
    }
    let mut seen = vec![false; k];
    for &w in &wins {
        if seen[w] {
            return false; // a cycle
        }
        seen[w] = true;
    }
    true
}

#[test]
fn pairwise_elimination_elects_the_condorcet_winner() {
    let params = generation_params();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut checked = 0;
    for _ in 0..200 {
        let e = Electorate::generate(&params, &mut rng);
        let outcome = PairwiseElimination.tabulate(&e);
        assert!(outcome.winner.is_some());
        if tournament_is_transitive(&e) {
            checked += 1;
            assert_eq!(e.condorcet_winner, outcome.winner);
        }
    }
    // a spatial model produces clean tournaments most of the time; if this
    // ever fails the sample was too degenerate to have tested anything
    assert!(checked > 100);
}

#[test]
fn pairwise_fallback_never_eliminates_the_condorcet_winner() {
    // candidate 0 beats everyone, while 1, 2 and 3 form a cycle
    // (1 beats 2, 2 beats 3, 3 beats 1), so the first round has no
    // Condorcet loser at all and must fall back to the hate piles. Each of
    // 1, 2 and 3 is bottom ranked once and 0 never is, so the fallback has
    // to pick among the cycle rather than touch the eventual winner.
    let voters = vec![
        voter(vec![0.9, 0.8, 0.5, 0.2]),
        voter(vec![0.9, 0.2, 0.8, 0.5]),
        voter(vec![0.9, 0.5, 0.2, 0.8]),
    ];
    let e = Electorate::new(minor_slate(4), voters);
    assert_eq!(Some(CandidateIndex(0)), e.condorcet_winner);
    assert_eq!(Some(CandidateIndex(0)), PairwiseElimination.tabulate(&e).winner);
}

#[test]
fn irv_always_produces_a_winner_on_generated_electorates() {
    let params = generation_params();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..200 {
        let e = Electorate::generate(&params, &mut rng);
        let outcome = InstantRunoff.tabulate(&e);
        let winner = outcome.winner.expect("IRV left no candidate standing");
        assert!(winner.0 < e.candidates.len());
        assert!(outcome.average_utility >= 0.0 && outcome.average_utility <= 1.0);
    }
}
