// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The validated parameter record a run is driven by. Loading it (from
//! params.json or anywhere else) is the caller's business; the core only
//! consumes it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::methods::MethodName;

/// Everything configurable about a run. Field names serialize in
/// PascalCase for compatibility with existing params.json files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimulationParameters {
    /// the number of unique electorates to generate and test
    pub num_electorates: usize,
    /// lower limit of the randomly chosen electorate size
    pub min_voters: usize,
    /// upper limit of the randomly chosen electorate size
    pub max_voters: usize,
    /// probability that a voter is "strategic"
    pub strategic_voters: f64,
    /// lower limit of the randomly chosen number of candidates
    pub min_candidates: usize,
    /// upper limit of the randomly chosen number of candidates
    pub max_candidates: usize,
    /// how many candidates represent "major parties"; 0 or 2 in practice
    pub num_major_candidates: usize,
    /// the methods to tabulate for every electorate
    pub methods: Vec<MethodName>,
    /// the number of ideological axes voters and candidates align on
    pub num_axes: usize,
    /// name pool for candidates; must cover max_candidates
    pub names: Vec<String>,
    /// number of concurrent workers building and tabulating electorates
    pub num_workers: usize,
    /// bottom of the score ballot range
    #[serde(default = "default_score_min")]
    pub score_min: i64,
    /// top of the score ballot range
    #[serde(default = "default_score_max")]
    pub score_max: i64,
    /// master seed for the run; omit for a fresh seed from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_score_min() -> i64 { 0 }
fn default_score_max() -> i64 { 5 }

/// A configuration the simulation cannot meaningfully run with. All of
/// these are fatal; there is no degraded mode.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("NumElectorates must be at least 1")]
    NoElectorates,
    #[error("at least one voting method must be enabled")]
    NoMethods,
    #[error("voter range {0}..={1} is empty or starts below 1")]
    BadVoterRange(usize, usize),
    #[error("candidate range {0}..={1} is empty or starts below 1")]
    BadCandidateRange(usize, usize),
    #[error("StrategicVoters probability {0} is not in [0,1]")]
    BadStrategicProbability(f64),
    #[error("NumAxes must be at least 1")]
    NoAxes,
    #[error("NumWorkers must be at least 1")]
    NoWorkers,
    #[error("score range {0}..={1} is empty")]
    BadScoreRange(i64, i64),
    #[error("name pool has {available} names but up to {needed} candidates may be drawn")]
    NotEnoughNames { available: usize, needed: usize },
}

impl SimulationParameters {
    /// Check every bound the generator and tabulators rely on. Call this
    /// before a run; the core treats a violation discovered later as a
    /// programming error and panics.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.num_electorates < 1 {
            return Err(ParameterError::NoElectorates);
        }
        if self.methods.is_empty() {
            return Err(ParameterError::NoMethods);
        }
        if self.min_voters < 1 || self.max_voters < self.min_voters {
            return Err(ParameterError::BadVoterRange(self.min_voters, self.max_voters));
        }
        if self.min_candidates < 1 || self.max_candidates < self.min_candidates {
            return Err(ParameterError::BadCandidateRange(self.min_candidates, self.max_candidates));
        }
        if !(0.0..=1.0).contains(&self.strategic_voters) {
            return Err(ParameterError::BadStrategicProbability(self.strategic_voters));
        }
        if self.num_axes < 1 {
            return Err(ParameterError::NoAxes);
        }
        if self.num_workers < 1 {
            return Err(ParameterError::NoWorkers);
        }
        if self.score_min >= self.score_max {
            return Err(ParameterError::BadScoreRange(self.score_min, self.score_max));
        }
        if self.names.len() < self.max_candidates {
            return Err(ParameterError::NotEnoughNames {
                available: self.names.len(),
                needed: self.max_candidates,
            });
        }
        Ok(())
    }
}
