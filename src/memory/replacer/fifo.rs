//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;

/// Evicts pages in the order they were brought in.
///
/// Hits never reorder the queue: a page that is referenced constantly is
/// still evicted once it becomes the oldest resident page.
#[derive(Debug, Clone, Default)]
pub struct FifoReplacer {
    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Record that a page was faulted in.
    pub fn record_insert(&mut self, page: PageId) {
        self.queue.push_back(page);
    }

    /// Select and dequeue the oldest resident page.
    ///
    /// Returns None only if nothing was ever inserted.
    pub fn evict(&mut self) -> Option<PageId> {
        self.queue.pop_front()
    }

    /// Number of tracked pages.
    pub fn size(&self) -> usize {
        self.queue.len()
    }
}
