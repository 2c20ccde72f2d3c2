// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Ranked ballots and the piles they sit in while an elimination style
//! count (IRV, pairwise elimination) is running.
//!
//! The piles are a fixed size arena: one pile per original candidate index
//! plus a liveness flag, so eliminating a candidate is marking it dead and
//! draining its pile rather than deleting keys from a map.

use crate::electorate::{Candidate, CandidateIndex};
use crate::spatial;

/// A full strict ranking of the candidates, plus a cursor recording how
/// far distribution has consumed it.
///
/// IRV reads the ranking top down (`next_preference`); pairwise
/// elimination reads it bottom up (`next_least_preferred`, after
/// [RankedBallot::start_from_bottom]). A ballot is only ever read in one
/// direction.
#[derive(Debug, Clone)]
pub struct RankedBallot {
    /// candidate indices, most preferred first
    pub prefs: Vec<CandidateIndex>,
    upto: usize,
}

impl RankedBallot {
    /// Rank candidates honestly by utility, best first.
    ///
    /// Built by repeated compare-and-insert with a strictly-greater test,
    /// so equal utilities are never reordered: among ties, the earlier
    /// candidate index ranks higher.
    pub fn honest(utilities: &[f64]) -> RankedBallot {
        let mut prefs: Vec<CandidateIndex> = Vec::with_capacity(utilities.len());
        'candidates: for (i, &u) in utilities.iter().enumerate() {
            for j in 0..prefs.len() {
                if u > utilities[prefs[j].0] {
                    prefs.insert(j, CandidateIndex(i));
                    continue 'candidates;
                }
            }
            prefs.push(CandidateIndex(i));
        }
        RankedBallot { prefs, upto: 0 }
    }

    /// Rank the preferred major candidate first and the other major
    /// candidate last, with everyone else ranked honestly in between.
    ///
    /// In the degenerate case where the voter has positive utility for no
    /// major candidate both slots fall back to candidate 0 (see
    /// [spatial::find_favorite_major]), and candidate 0 then appears at
    /// both ends of the ranking; distribution skips the duplicate once the
    /// candidate is no longer live, so the ballot still behaves.
    pub fn strategic(utilities: &[f64], candidates: &[Candidate]) -> RankedBallot {
        let preferred = spatial::find_favorite_major(utilities, candidates);
        let other = spatial::find_other_major(preferred, candidates);
        let mut prefs: Vec<CandidateIndex> = Vec::with_capacity(utilities.len() + 1);
        prefs.push(preferred);
        'candidates: for (i, &u) in utilities.iter().enumerate() {
            if i == preferred.0 || i == other.0 {
                continue;
            }
            // slot 0 is reserved for the preferred major
            for j in 1..prefs.len() {
                if u > utilities[prefs[j].0] {
                    prefs.insert(j, CandidateIndex(i));
                    continue 'candidates;
                }
            }
            prefs.push(CandidateIndex(i));
        }
        prefs.push(other);
        RankedBallot { prefs, upto: 0 }
    }

    /// Move the cursor past the end of the ranking, ready for
    /// [RankedBallot::next_least_preferred] to walk upwards from the
    /// bottom.
    pub fn start_from_bottom(&mut self) {
        self.upto = self.prefs.len();
    }

    /// Advance the cursor to the highest ranked candidate still live in
    /// `piles` and return it, or None if the ranking is exhausted (the
    /// ballot is then silently discarded from the count).
    pub fn next_preference(&mut self, piles: &BallotPiles) -> Option<CandidateIndex> {
        while self.upto < self.prefs.len() {
            let candidate = self.prefs[self.upto];
            self.upto += 1;
            if piles.is_live(candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Retreat the cursor to the lowest ranked candidate still live in
    /// `piles` and return it, or None if the ranking is exhausted.
    pub fn next_least_preferred(&mut self, piles: &BallotPiles) -> Option<CandidateIndex> {
        while self.upto > 0 {
            self.upto -= 1;
            let candidate = self.prefs[self.upto];
            if piles.is_live(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

/// One pile of ballots per candidate, with a liveness bitmap over the
/// original candidate index space.
pub struct BallotPiles {
    piles: Vec<Vec<RankedBallot>>,
    live: Vec<bool>,
    num_live: usize,
}

impl BallotPiles {
    pub fn new(num_candidates: usize) -> BallotPiles {
        BallotPiles {
            piles: (0..num_candidates).map(|_| Vec::new()).collect(),
            live: vec![true; num_candidates],
            num_live: num_candidates,
        }
    }

    pub fn is_live(&self, candidate: CandidateIndex) -> bool {
        self.live[candidate.0]
    }

    pub fn num_live(&self) -> usize {
        self.num_live
    }

    /// The live candidate indices, in ascending order.
    pub fn live_candidates(&self) -> Vec<CandidateIndex> {
        (0..self.live.len()).filter(|&i| self.live[i]).map(CandidateIndex).collect()
    }

    /// The single remaining candidate, if the count is down to one.
    pub fn sole_live(&self) -> Option<CandidateIndex> {
        if self.num_live == 1 {
            self.live_candidates().first().copied()
        } else {
            None
        }
    }

    pub fn pile_size(&self, candidate: CandidateIndex) -> usize {
        self.piles[candidate.0].len()
    }

    /// Put a ballot on a candidate's pile. The candidate must be live.
    pub fn add(&mut self, candidate: CandidateIndex, ballot: RankedBallot) {
        debug_assert!(self.live[candidate.0]);
        self.piles[candidate.0].push(ballot);
    }

    /// Mark a candidate dead and take back the ballots that were counted
    /// for it, so the caller can redistribute them.
    pub fn eliminate(&mut self, candidate: CandidateIndex) -> Vec<RankedBallot> {
        debug_assert!(self.live[candidate.0]);
        self.live[candidate.0] = false;
        self.num_live -= 1;
        std::mem::take(&mut self.piles[candidate.0])
    }

    /// The live candidate with the strictly largest pile, with its size.
    /// Ties go to the lowest candidate index. None only if nobody is live.
    pub fn largest_pile(&self) -> Option<(CandidateIndex, usize)> {
        let mut best: Option<(CandidateIndex, usize)> = None;
        for candidate in self.live_candidates() {
            let size = self.pile_size(candidate);
            if best.is_none_or(|(_, s)| size > s) {
                best = Some((candidate, size));
            }
        }
        best
    }

    /// The live candidate with the strictly smallest pile, with its size.
    /// Ties go to the lowest candidate index. None only if nobody is live.
    pub fn smallest_pile(&self) -> Option<(CandidateIndex, usize)> {
        let mut best: Option<(CandidateIndex, usize)> = None;
        for candidate in self.live_candidates() {
            let size = self.pile_size(candidate);
            if best.is_none_or(|(_, s)| size < s) {
                best = Some((candidate, size));
            }
        }
        best
    }
}
