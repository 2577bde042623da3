//! Whole-run helpers and side-by-side policy comparison.

use std::thread;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use crate::common::{PageId, Result};
use crate::memory::{MetricsReport, PolicyKind, SimulationEngine, Step};

/// A completed simulation: every step plus the final report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub policy: PolicyKind,
    pub capacity: usize,
    pub steps: Vec<Step>,
    pub report: MetricsReport,
}

/// Run `references` through a fresh engine for `kind`.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
pub fn simulate(capacity: usize, kind: PolicyKind, references: &[PageId]) -> Result<Simulation> {
    let mut engine = SimulationEngine::with_kind(capacity, kind, references)?;
    let steps = engine
        .run(references.iter().copied())
        .collect::<Result<Vec<_>>>()?;

    Ok(Simulation {
        policy: kind,
        capacity,
        steps,
        report: engine.report(),
    })
}

/// One row of a policy comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub policy: PolicyKind,
    pub report: MetricsReport,
}

/// Run every policy over the same references, each on its own thread.
///
/// Each thread builds an independent engine; only the finished reports are
/// shared. Results come back in [`PolicyKind::ALL`] order.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
pub fn compare(capacity: usize, references: &[PageId]) -> Result<Vec<Comparison>> {
    let results: Mutex<Vec<(PolicyKind, Result<MetricsReport>)>> =
        Mutex::new(Vec::with_capacity(PolicyKind::ALL.len()));

    thread::scope(|s| {
        for kind in PolicyKind::ALL {
            let results = &results;
            s.spawn(move || {
                let report = simulate(capacity, kind, references).map(|sim| sim.report);
                results.lock().push((kind, report));
            });
        }
    });

    let mut results = results.into_inner();
    results.sort_by_key(|(kind, _)| PolicyKind::ALL.iter().position(|k| k == kind));

    let rows = results
        .into_iter()
        .map(|(policy, report)| report.map(|report| Comparison { policy, report }))
        .collect::<Result<Vec<_>>>()?;

    debug!(capacity, references = references.len(), "compared policies");
    Ok(rows)
}
