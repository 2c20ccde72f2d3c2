// Copyright 2026 the ConcreteSim authors.
// This file is part of ConcreteSim.
// ConcreteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSim.  If not, see <https://www.gnu.org/licenses/>.


//! The pipeline that runs the study at volume: a feeder handing out one
//! token per electorate, a bounded pool of workers each generating and
//! tabulating electorates, and a single aggregator folding completed
//! electorates into the summary.
//!
//! Both queues are bounded to the worker count, so at most a pool's worth
//! of electorates is in flight at once and generation cannot outrun
//! aggregation and pile up memory.
//!
//! Every worker owns its own ChaCha generator, seeded from the master seed
//! and the worker index. Draws within one worker's electorates are
//! deterministic; which worker builds which electorate is not, since
//! workers race for tokens. A panic in any worker tears down the whole
//! run; this is a batch research tool, there is no partial-failure story.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::mpsc;
use std::thread;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::electorate::{CompletedElectorate, Electorate};
use crate::parameters::SimulationParameters;
use crate::report::{Report, SimulationSummary, SummaryAccumulator};

/// Generate one electorate and run every enabled method on it. This is the
/// unit of work a pipeline worker performs per token; it is public so
/// tests and tools can run single electorates without the pipeline.
pub fn tabulate_one(params: &SimulationParameters, rng: &mut ChaCha20Rng) -> CompletedElectorate {
    let electorate = Electorate::generate(params, rng);
    let mut results = BTreeMap::new();
    for &name in &params.methods {
        let method = name.construct(params);
        results.insert(name, method.tabulate(&electorate));
    }
    CompletedElectorate { electorate, results }
}

/// The generator a worker draws everything from.
pub fn worker_rng(master_seed: u64, worker: usize) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(master_seed.wrapping_add(worker as u64))
}

/// Run the whole study: `params.num_electorates` electorates through
/// `params.num_workers` workers, every report passed to `observer` as it
/// is aggregated (in electorate completion order, on the calling thread),
/// and the cross electorate summary returned at the end.
///
/// The caller is the aggregator; this function blocks until the run is
/// complete. Parameters must have been validated.
pub fn run_simulation<F>(
    params: &SimulationParameters,
    master_seed: u64,
    mut observer: F,
) -> SimulationSummary
where
    F: FnMut(Report),
{
    let num_electorates = params.num_electorates;
    let (token_tx, token_rx) = mpsc::sync_channel::<()>(params.num_workers);
    let (completed_tx, completed_rx) = mpsc::sync_channel::<CompletedElectorate>(params.num_workers);
    // workers share the token queue; the mutex only guards taking a token
    let token_rx = Mutex::new(token_rx);

    let mut accumulator = SummaryAccumulator::new(&params.methods);
    thread::scope(|scope| {
        // the feeder: exactly one token per electorate, then hang up so
        // the workers drain out
        scope.spawn(move || {
            for _ in 0..num_electorates {
                if token_tx.send(()).is_err() {
                    break;
                }
            }
        });

        for worker in 0..params.num_workers {
            let completed_tx = completed_tx.clone();
            let token_rx = &token_rx;
            scope.spawn(move || {
                let mut rng = worker_rng(master_seed, worker);
                loop {
                    let token = token_rx.lock().unwrap().recv();
                    if token.is_err() {
                        break;
                    }
                    if completed_tx.send(tabulate_one(params, &mut rng)).is_err() {
                        break;
                    }
                }
            });
        }
        // only the workers' clones keep the completed queue open
        drop(completed_tx);

        for _ in 0..num_electorates {
            let completed = completed_rx.recv().expect("worker pool stopped before finishing the run");
            let report = Report::new(&completed);
            accumulator.add(&report);
            observer(report);
        }
    });
    accumulator.finish()
}
