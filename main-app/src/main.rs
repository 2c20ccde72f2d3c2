// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use sim::electorate::CandidateIndex;
use sim::parameters::SimulationParameters;
use sim::report::{CondorcetAgreement, Report};
use sim::simulation::run_simulation;

#[derive(Parser)]
#[clap(version = "0.1", name = "ConcreteSim")]
/// Compare single-winner voting methods over many randomly generated
/// spatial electorates and report each method's utility efficiency and
/// Condorcet agreement rate.
struct Opts {
    /// The JSON file holding the run parameters
    #[clap(value_parser, default_value = "params.json")]
    params: PathBuf,

    /// Override the master seed (takes precedence over the params file)
    #[clap(long)]
    seed: Option<u64>,

    /// Print a report for every electorate, not just the final summary
    #[clap(long)]
    verbose: bool,

    /// Emit the final summary as JSON rather than human readable text
    #[clap(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let start = Instant::now();
    let opts: Opts = Opts::parse();

    let params: SimulationParameters = serde_json::from_reader(File::open(&opts.params)?)?;
    params.validate()?;
    let seed = opts.seed.or(params.seed).unwrap_or_else(rand::random);

    let verbose = opts.verbose;
    let summary = run_simulation(&params, seed, |report| {
        if verbose {
            print_report(&report, &params);
        }
    });

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for (name, method) in &summary.methods {
            println!("{}: {:.3} {:.2}", name, method.mean_efficiency, method.condorcet_match_rate);
        }
        println!("Analysis took {:?}", start.elapsed());
    }

    Ok(())
}

fn print_report(report: &Report, params: &SimulationParameters) {
    println!("Voters: {}", report.num_voters);
    println!("Candidates: {}", report.num_candidates);
    println!("Utility: {}", candidate_info(report.utility_winner, params));
    println!("Condorcet: {}", candidate_info(report.condorcet_winner, params));
    for (name, line) in &report.lines {
        let agreement = match line.condorcet {
            CondorcetAgreement::Agreed => "true",
            CondorcetAgreement::Disagreed => "false",
            CondorcetAgreement::NoCondorcetWinner => "-",
        };
        println!(
            "{}: {}, {:.2}, {}",
            name,
            candidate_info(line.winner, params),
            line.efficiency,
            agreement
        );
    }
    println!();
}

/// Candidate `i` always takes the `i`th name from the configured pool and
/// is major exactly when `i` is below the configured major count, so a
/// report's bare indices can be rendered from the parameters alone.
fn candidate_info(candidate: Option<CandidateIndex>, params: &SimulationParameters) -> String {
    match candidate {
        None => "none".to_string(),
        Some(c) => {
            let major = if c.0 < params.num_major_candidates { " (major)" } else { "" };
            format!("{}{}", params.names[c.0], major)
        }
    }
}
