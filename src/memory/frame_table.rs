//! FrameTable - the bounded set of resident pages.
//!
//! A [`FrameTable`] is purely a container: it knows nothing about which page
//! should be evicted. Replacers decide that and then call [`FrameTable::remove`]
//! followed by [`FrameTable::insert`].

use crate::common::{Error, PageId, Result};

/// A fixed-capacity, ordered collection of resident pages.
///
/// Pages are kept in residency order: a newly inserted page goes to the end,
/// and removing a page closes the gap. This order is what [`snapshot`] reports
/// and what Optimal scans when breaking ties.
///
/// # Invariants
/// - `len() <= capacity()` at all times
/// - `capacity() >= 1`, fixed at construction
/// - no page is resident twice
///
/// [`snapshot`]: FrameTable::snapshot
#[derive(Debug, Clone)]
pub struct FrameTable {
    /// Resident pages in insertion order.
    frames: Vec<PageId>,

    /// Number of frames (immutable after construction).
    capacity: usize,
}

impl FrameTable {
    /// Create an empty frame table.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < crate::common::config::MIN_FRAMES {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            frames: Vec::new(),
            capacity,
        })
    }

    /// Check whether `page` is resident. O(capacity).
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.frames.contains(&page)
    }

    /// Make `page` resident in a free frame.
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if every frame is occupied
    pub fn insert(&mut self, page: PageId) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        debug_assert!(!self.contains(page), "{} inserted twice", page);

        self.frames.push(page);
        Ok(())
    }

    /// Remove a resident page, freeing its frame.
    ///
    /// # Errors
    /// - `Error::PageNotResident` if `page` is not in the table
    pub fn remove(&mut self, page: PageId) -> Result<()> {
        let index = self
            .frames
            .iter()
            .position(|&resident| resident == page)
            .ok_or(Error::PageNotResident(page))?;

        self.frames.remove(index);
        Ok(())
    }

    /// Resident pages in residency order.
    #[inline]
    pub fn snapshot(&self) -> &[PageId] {
        &self.frames
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// True if every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.frames.len() >= self.capacity
    }

    /// Total number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
