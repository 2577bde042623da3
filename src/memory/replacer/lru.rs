//! LRU (Least-Recently-Used) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;

/// Evicts the resident page that has gone longest without an access.
///
/// Both hits and the original fault-in count as accesses.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer {
    /// Resident pages in recency order (front = least recently used).
    recency: VecDeque<PageId>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            recency: VecDeque::new(),
        }
    }

    /// Record a hit: move `page` to the most-recently-used end.
    ///
    /// A page the replacer is not tracking is appended.
    pub fn record_access(&mut self, page: PageId) {
        if let Some(index) = self.recency.iter().position(|&p| p == page) {
            self.recency.remove(index);
        }
        self.recency.push_back(page);
    }

    /// Record that a page was faulted in (it becomes most recently used).
    pub fn record_insert(&mut self, page: PageId) {
        self.recency.push_back(page);
    }

    /// Select and dequeue the least recently used page.
    pub fn evict(&mut self) -> Option<PageId> {
        self.recency.pop_front()
    }

    /// Number of tracked pages.
    pub fn size(&self) -> usize {
        self.recency.len()
    }
}
