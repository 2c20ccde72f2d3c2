// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! Per electorate reports and the cross electorate summary statistics the
//! whole study exists to produce.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::electorate::{CandidateIndex, CompletedElectorate};
use crate::methods::{MethodName, MethodOutcome};

/// Whether a method's winner was the Condorcet winner. A tri-state, not a
/// bool: an electorate without a Condorcet winner is a normal outcome and
/// must not count either way in the agreement rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CondorcetAgreement {
    Agreed,
    Disagreed,
    NoCondorcetWinner,
}

/// One method's performance on one electorate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    /// index of the winning candidate, None if the method produced none
    pub winner: Option<CandidateIndex>,
    /// the winner's mean utility as a fraction of the best achievable mean utility
    pub efficiency: f64,
    pub condorcet: CondorcetAgreement,
}

/// An immutable snapshot of how every enabled method did on a single
/// electorate. This is all the reporting layer ever sees of an electorate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub num_voters: usize,
    pub num_candidates: usize,
    pub utility_winner: Option<CandidateIndex>,
    pub condorcet_winner: Option<CandidateIndex>,
    pub lines: BTreeMap<MethodName, ReportLine>,
}

impl Report {
    /// Extract the report from a tabulated electorate.
    pub fn new(completed: &CompletedElectorate) -> Report {
        let electorate = &completed.electorate;
        let mut lines = BTreeMap::new();
        for (&name, outcome) in &completed.results {
            lines.insert(name, report_line(outcome, electorate.condorcet_winner, electorate.max_utility));
        }
        Report {
            num_voters: electorate.voters.len(),
            num_candidates: electorate.candidates.len(),
            utility_winner: electorate.utility_winner,
            condorcet_winner: electorate.condorcet_winner,
            lines,
        }
    }
}

fn report_line(
    outcome: &MethodOutcome,
    condorcet_winner: Option<CandidateIndex>,
    max_utility: f64,
) -> ReportLine {
    // The sentinel comparison trap: when there is no Condorcet winner the
    // agreement must short-circuit to the third state rather than ever
    // comparing two "no winner" sentinels as equal.
    let condorcet = match (condorcet_winner, outcome.winner) {
        (None, _) => CondorcetAgreement::NoCondorcetWinner,
        (Some(c), Some(w)) if c == w => CondorcetAgreement::Agreed,
        _ => CondorcetAgreement::Disagreed,
    };
    let efficiency = if max_utility > 0.0 { outcome.average_utility / max_utility } else { 0.0 };
    ReportLine { winner: outcome.winner, efficiency, condorcet }
}

/// A method's performance averaged over the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodSummary {
    /// mean efficiency over every electorate in the run
    pub mean_efficiency: f64,
    /// fraction of electorates with a Condorcet winner where this method elected them
    pub condorcet_match_rate: f64,
}

/// The final output of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub num_electorates: usize,
    pub num_with_condorcet_winner: usize,
    pub methods: BTreeMap<MethodName, MethodSummary>,
}

/// Running sums the aggregator folds each report into. Single threaded by
/// construction; only the aggregator ever touches one.
pub struct SummaryAccumulator {
    num_electorates: usize,
    num_with_condorcet_winner: usize,
    total_efficiency: BTreeMap<MethodName, f64>,
    total_agreements: BTreeMap<MethodName, usize>,
}

impl SummaryAccumulator {
    pub fn new(methods: &[MethodName]) -> SummaryAccumulator {
        SummaryAccumulator {
            num_electorates: 0,
            num_with_condorcet_winner: 0,
            total_efficiency: methods.iter().map(|&m| (m, 0.0)).collect(),
            total_agreements: methods.iter().map(|&m| (m, 0)).collect(),
        }
    }

    pub fn add(&mut self, report: &Report) {
        self.num_electorates += 1;
        if report.condorcet_winner.is_some() {
            self.num_with_condorcet_winner += 1;
        }
        for (&name, line) in &report.lines {
            *self.total_efficiency.entry(name).or_insert(0.0) += line.efficiency;
            if line.condorcet == CondorcetAgreement::Agreed {
                *self.total_agreements.entry(name).or_insert(0) += 1;
            }
        }
    }

    pub fn finish(self) -> SimulationSummary {
        let mut methods = BTreeMap::new();
        for (name, total) in &self.total_efficiency {
            let mean_efficiency =
                if self.num_electorates > 0 { total / self.num_electorates as f64 } else { 0.0 };
            let agreements = self.total_agreements.get(name).copied().unwrap_or(0);
            let condorcet_match_rate = if self.num_with_condorcet_winner > 0 {
                agreements as f64 / self.num_with_condorcet_winner as f64
            } else {
                0.0
            };
            methods.insert(*name, MethodSummary { mean_efficiency, condorcet_match_rate });
        }
        SimulationSummary {
            num_electorates: self.num_electorates,
            num_with_condorcet_winner: self.num_with_condorcet_winner,
            methods,
        }
    }
}
