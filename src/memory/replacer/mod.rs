//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - evict the oldest arrival
//! - [`LruReplacer`] - evict the least recently used page
//! - [`OptimalReplacer`] - evict the page needed farthest in the future
//!
//! [`ReplacementPolicy`] is the closed set of these variants. The engine only
//! talks to it through [`ReplacementPolicy::on_access`].

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::common::{Error, PageId, Result};
use crate::memory::{FrameTable, Outcome};

/// Names one of the supported replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
}

impl PolicyKind {
    /// Every policy, in display order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        };
        f.pad(name)
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" | "belady" => Ok(PolicyKind::Optimal),
            other => Err(Error::InvalidInput(format!(
                "unknown replacement policy '{}'",
                other
            ))),
        }
    }
}

/// A replacement policy together with its auxiliary ordering state.
///
/// The FIFO and LRU queues are owned here and never handed out mutably;
/// they always hold exactly the pages resident in the frame table they
/// are driven against.
#[derive(Debug, Clone)]
pub enum ReplacementPolicy {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
    Optimal(OptimalReplacer),
}

impl ReplacementPolicy {
    /// FIFO policy with an empty arrival queue.
    pub fn fifo() -> Self {
        ReplacementPolicy::Fifo(FifoReplacer::new())
    }

    /// LRU policy with an empty recency queue.
    pub fn lru() -> Self {
        ReplacementPolicy::Lru(LruReplacer::new())
    }

    /// Optimal policy looking ahead in `references`.
    pub fn optimal(references: Vec<PageId>) -> Self {
        ReplacementPolicy::Optimal(OptimalReplacer::new(references))
    }

    /// Build the policy named by `kind`.
    ///
    /// `references` is only retained by Optimal.
    pub fn for_kind(kind: PolicyKind, references: &[PageId]) -> Self {
        match kind {
            PolicyKind::Fifo => Self::fifo(),
            PolicyKind::Lru => Self::lru(),
            PolicyKind::Optimal => Self::optimal(references.to_vec()),
        }
    }

    /// Which variant this is.
    pub fn kind(&self) -> PolicyKind {
        match self {
            ReplacementPolicy::Fifo(_) => PolicyKind::Fifo,
            ReplacementPolicy::Lru(_) => PolicyKind::Lru,
            ReplacementPolicy::Optimal(_) => PolicyKind::Optimal,
        }
    }

    /// Process one reference against `table`.
    ///
    /// `position` is the index of `page` in the reference string; only
    /// Optimal uses it.
    ///
    /// # Errors
    /// Only frame-table invariant violations (`CapacityExceeded`,
    /// `PageNotResident`), which indicate a bug in this module.
    pub fn on_access(
        &mut self,
        table: &mut FrameTable,
        page: PageId,
        position: usize,
    ) -> Result<Outcome> {
        if table.contains(page) {
            if let ReplacementPolicy::Lru(lru) = self {
                lru.record_access(page);
            }
            self.check_tracked(table);
            return Ok(Outcome::Hit);
        }

        let evicted = if table.is_full() {
            let kind = self.kind();
            let victim = self.select_victim(table, position)?;
            table.remove(victim).inspect_err(|e| {
                warn!(policy = %kind, %victim, error = %e, "victim was not resident");
            })?;
            debug!(policy = %kind, %victim, incoming = %page, position, "evicted page");
            Some(victim)
        } else {
            None
        };

        table.insert(page)?;
        self.record_insert(page);
        self.check_tracked(table);

        Ok(Outcome::Fault { evicted })
    }

    /// Number of pages in the FIFO/LRU queue; None for Optimal.
    pub fn tracked(&self) -> Option<usize> {
        match self {
            ReplacementPolicy::Fifo(fifo) => Some(fifo.size()),
            ReplacementPolicy::Lru(lru) => Some(lru.size()),
            ReplacementPolicy::Optimal(_) => None,
        }
    }

    /// Warn when the queue no longer tracks exactly the resident pages.
    ///
    /// The next eviction from a desynced queue fails with an invariant
    /// violation; this records where the drift was first visible.
    fn check_tracked(&self, table: &FrameTable) {
        match self.tracked() {
            Some(tracked) if tracked != table.len() => {
                warn!(policy = %self.kind(), tracked, resident = table.len(), "replacer queue out of sync");
            }
            _ => {}
        }
    }

    /// Pick (and for FIFO/LRU, dequeue) the page to evict from a full table.
    fn select_victim(&mut self, table: &FrameTable, position: usize) -> Result<PageId> {
        let victim = match self {
            ReplacementPolicy::Fifo(fifo) => fifo.evict(),
            ReplacementPolicy::Lru(lru) => lru.evict(),
            ReplacementPolicy::Optimal(optimal) => {
                optimal.select_victim(table.snapshot(), position)
            }
        };

        // An empty queue next to a full table means the queue fell out of sync.
        victim.ok_or(Error::CapacityExceeded {
            capacity: table.capacity(),
        })
    }

    fn record_insert(&mut self, page: PageId) {
        match self {
            ReplacementPolicy::Fifo(fifo) => fifo.record_insert(page),
            ReplacementPolicy::Lru(lru) => lru.record_insert(page),
            ReplacementPolicy::Optimal(_) => {}
        }
    }
}
