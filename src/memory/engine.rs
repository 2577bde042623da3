//! Simulation engine - drives a reference string through a replacer.
//!
//! The [`SimulationEngine`] owns:
//! - the [`FrameTable`] of resident pages
//! - one [`ReplacementPolicy`] and its auxiliary state
//! - the fault/hit counters and the current position

use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::common::{PageId, Result};
use crate::memory::stats::Counters;
use crate::memory::{FrameTable, MetricsReport, PolicyKind, ReplacementPolicy, Step};

/// Simulates one reference string against a fixed number of frames.
///
/// The engine is a linear fold: each reference is classified as a hit or a
/// fault strictly after the previous one. It never sleeps and does no I/O, so
/// a front end may pace [`step`](Self::step) calls however it likes.
///
/// Engines are not meant to be shared. To compare policies, build one engine
/// per policy (see [`compare`](crate::memory::comparison::compare)).
///
/// # Usage
/// ```
/// use pagesim::{PageId, PolicyKind, SimulationEngine};
///
/// let refs: Vec<PageId> = [1, 2, 3, 1].into_iter().map(PageId::new).collect();
/// let mut engine = SimulationEngine::with_kind(2, PolicyKind::Optimal, &refs)?;
///
/// for step in engine.run(refs.iter().copied()) {
///     println!("{}", step?);
/// }
///
/// let report = engine.report();
/// assert_eq!((report.faults, report.hits), (3, 1));
/// # Ok::<(), pagesim::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    table: FrameTable,
    policy: ReplacementPolicy,

    /// Index of the next reference to process.
    position: usize,

    counters: Counters,
}

impl SimulationEngine {
    /// Create an engine with `capacity` empty frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize, policy: ReplacementPolicy) -> Result<Self> {
        let table = FrameTable::new(capacity)?;
        debug!(capacity, policy = %policy.kind(), "created simulation engine");

        Ok(Self {
            table,
            policy,
            position: 0,
            counters: Counters::default(),
        })
    }

    /// Create an engine for `kind`.
    ///
    /// `references` is the string that will be simulated; FIFO and LRU ignore
    /// it, Optimal keeps a copy for lookahead.
    pub fn with_kind(capacity: usize, kind: PolicyKind, references: &[PageId]) -> Result<Self> {
        Self::new(capacity, ReplacementPolicy::for_kind(kind, references))
    }

    /// Process one reference.
    ///
    /// For Optimal, `page` is assumed to be the reference at the current
    /// position of the string given at construction; lookahead is always
    /// taken from that string.
    ///
    /// # Errors
    /// Only frame-table invariant violations. They are not recoverable:
    /// the counters are left untouched and the run should be abandoned.
    pub fn step(&mut self, page: PageId) -> Result<Step> {
        let position = self.position;
        let outcome = self
            .policy
            .on_access(&mut self.table, page, position)
            .inspect_err(|e| warn!(position, %page, error = %e, "simulation invariant violated"))?;

        if outcome.is_hit() {
            self.counters.hits += 1;
        } else {
            self.counters.faults += 1;
            if outcome.evicted().is_some() {
                self.counters.evictions += 1;
            }
        }
        self.position += 1;

        trace!(position, %page, %outcome, resident = self.table.len(), "processed reference");

        Ok(Step {
            position,
            page,
            outcome,
            frames: self.table.snapshot().to_vec(),
        })
    }

    /// Lazily step through `references`.
    ///
    /// The returned iterator yields one `Step` per reference. If a step
    /// fails, the error is yielded once and the iterator ends.
    ///
    /// An engine simulates a single reference string and never restarts:
    /// a later `run` or `step` continues from the current frames, counters
    /// and position. Past the end of the string given at construction,
    /// Optimal sees no future use for any page.
    pub fn run<I>(&mut self, references: I) -> Run<'_, I::IntoIter>
    where
        I: IntoIterator<Item = PageId>,
    {
        Run {
            engine: self,
            references: references.into_iter(),
            failed: false,
        }
    }

    /// Summary of the counters so far. Callable at any point.
    pub fn report(&self) -> MetricsReport {
        self.counters.report()
    }

    /// Resident pages in residency order.
    pub fn frames(&self) -> &[PageId] {
        self.table.snapshot()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Number of references processed so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Iterator returned by [`SimulationEngine::run`].
pub struct Run<'a, I> {
    engine: &'a mut SimulationEngine,
    references: I,
    failed: bool,
}

impl<I> Run<'_, I> {
    /// Report of the underlying engine at this point of the run.
    pub fn report(&self) -> MetricsReport {
        self.engine.report()
    }
}

impl<I> Iterator for Run<'_, I>
where
    I: Iterator<Item = PageId>,
{
    type Item = Result<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let page = self.references.next()?;
        let step = self.engine.step(page);
        self.failed = step.is_err();
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.references.size_hint().1)
        }
    }
}

impl<I> FusedIterator for Run<'_, I> where I: Iterator<Item = PageId> {}
