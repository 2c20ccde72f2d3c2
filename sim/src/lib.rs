// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Simulate single winner elections under several voting methods over large
//! numbers of randomly generated electorates, to measure how often each
//! method elects the utility maximizing or Condorcet winning candidate.
//!
//! Voters and candidates live in a shared ideological space; a voter's
//! utility for a candidate is derived from their distance in that space.
//! Each enabled method turns those utilities into ballots (honestly or
//! strategically), tabulates a winner, and the results are aggregated into
//! per method efficiency and Condorcet agreement statistics.

pub mod ballot_pile;
pub mod condorcet;
pub mod electorate;
pub mod methods;
pub mod parameters;
pub mod report;
pub mod simulation;
pub mod spatial;
