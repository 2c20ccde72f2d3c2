// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The spatial utility model: how much a voter likes a candidate, as a
//! function of their distance in ideological space.

use crate::electorate::{Candidate, CandidateIndex};

/// Standard Euclidean distance between two alignment vectors.
/// Both vectors must have one entry per ideological axis; a length mismatch
/// is a programming error.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum::<f64>().sqrt()
}

/// The utility a voter derives from a candidate being elected, in [0,1].
///
/// Distance is normalized by the largest possible distance in the axis
/// count (the diagonal of the unit hypercube) and reversed so that bigger
/// is better.
/// ```
/// use sim::spatial::utility;
/// assert_eq!(1.0,utility(&[0.25,0.25],&[0.25,0.25]));
/// assert_eq!(0.0,utility(&[0.0,0.0],&[1.0,1.0]));
/// assert_eq!(0.5,utility(&[0.0],&[0.5]));
/// ```
pub fn utility(voter_alignments: &[f64], candidate_alignments: &[f64]) -> f64 {
    let max_distance = (voter_alignments.len() as f64).sqrt();
    1.0 - euclidean_distance(voter_alignments, candidate_alignments) / max_distance
}

/// The candidate this voter likes best, by a strictly-greater scan.
///
/// The running maximum starts at utility 0.0 and index 0, so equal
/// utilities resolve to the earlier index, and a voter with no positive
/// utility for anyone "prefers" candidate 0. Strategic balloting relies on
/// that default; do not change it without changing the strategic models.
/// ```
/// use sim::spatial::find_favorite;
/// use sim::electorate::CandidateIndex;
/// assert_eq!(CandidateIndex(2),find_favorite(&[0.3,0.1,0.9]));
/// assert_eq!(CandidateIndex(0),find_favorite(&[0.4,0.4,0.2]));
/// assert_eq!(CandidateIndex(0),find_favorite(&[0.0,0.0,0.0]));
/// ```
pub fn find_favorite(utilities: &[f64]) -> CandidateIndex {
    let mut best = CandidateIndex(0);
    let mut best_utility = 0.0;
    for (i, &u) in utilities.iter().enumerate() {
        if u > best_utility {
            best_utility = u;
            best = CandidateIndex(i);
        }
    }
    best
}

/// The major candidate this voter likes best. Same scan and same defaults
/// as [find_favorite], restricted to candidates flagged as major. If no
/// major candidate has positive utility this returns candidate 0, whether
/// or not candidate 0 is major.
pub fn find_favorite_major(utilities: &[f64], candidates: &[Candidate]) -> CandidateIndex {
    let mut best = CandidateIndex(0);
    let mut best_utility = 0.0;
    for (i, &u) in utilities.iter().enumerate() {
        if u > best_utility && candidates[i].major {
            best_utility = u;
            best = CandidateIndex(i);
        }
    }
    best
}

/// The first major candidate other than `first`, or candidate 0 if there
/// is no other major candidate.
pub fn find_other_major(first: CandidateIndex, candidates: &[Candidate]) -> CandidateIndex {
    for (i, c) in candidates.iter().enumerate() {
        if c.major && i != first.0 {
            return CandidateIndex(i);
        }
    }
    CandidateIndex(0)
}
