//! Optimal (Belady) replacement policy.
//!
//! Optimal is the only policy that needs the whole reference string up
//! front: it evicts the resident page whose next use lies farthest in the
//! future. It keeps no mutable state of its own.

use crate::common::PageId;

/// Evicts the page not needed for the longest time.
///
/// # Victim selection
/// Resident pages are scanned in frame-table order:
/// - the first page with no later reference is chosen at once
/// - otherwise the page with the strictly largest next-use index wins
/// - on equal next-use indexes the earlier page in the scan is kept
#[derive(Debug, Clone)]
pub struct OptimalReplacer {
    /// The full reference string, read-only.
    references: Vec<PageId>,
}

impl OptimalReplacer {
    /// Create a replacer that looks ahead in `references`.
    pub fn new(references: Vec<PageId>) -> Self {
        Self { references }
    }

    /// Index of the next reference to `page` strictly after `position`.
    pub fn next_use(&self, page: PageId, position: usize) -> Option<usize> {
        let start = position.saturating_add(1);
        self.references
            .get(start..)?
            .iter()
            .position(|&p| p == page)
            .map(|offset| start + offset)
    }

    /// Choose a victim among `resident` for the reference at `position`.
    ///
    /// Returns None only if `resident` is empty.
    pub fn select_victim(&self, resident: &[PageId], position: usize) -> Option<PageId> {
        let mut farthest: Option<(PageId, usize)> = None;

        for &page in resident {
            match self.next_use(page, position) {
                None => return Some(page),
                Some(next) => match farthest {
                    Some((_, best)) if next <= best => {}
                    _ => farthest = Some((page, next)),
                },
            }
        }

        farthest.map(|(page, _)| page)
    }

    /// The lookahead reference string.
    pub fn references(&self) -> &[PageId] {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[i64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_next_use_is_strictly_after_position() {
        let replacer = OptimalReplacer::new(pages(&[1, 2, 1, 3, 1]));

        assert_eq!(replacer.next_use(PageId::new(1), 0), Some(2));
        assert_eq!(replacer.next_use(PageId::new(1), 2), Some(4));
        assert_eq!(replacer.next_use(PageId::new(1), 4), None);
        assert_eq!(replacer.next_use(PageId::new(2), 1), None);
    }

    #[test]
    fn test_next_use_past_end() {
        let replacer = OptimalReplacer::new(pages(&[1, 2]));
        assert_eq!(replacer.next_use(PageId::new(1), 10), None);
        assert_eq!(replacer.next_use(PageId::new(1), usize::MAX), None);
    }

    #[test]
    fn test_select_farthest_next_use() {
        // position 2 references page 3; 1 recurs at 4, 2 recurs at 3
        let replacer = OptimalReplacer::new(pages(&[1, 2, 3, 2, 1]));
        let victim = replacer.select_victim(&pages(&[1, 2]), 2);
        assert_eq!(victim, Some(PageId::new(1)));
    }

    #[test]
    fn test_no_future_use_preempts_farther_candidate() {
        // 1 recurs at 5 (the farthest finite use), 2 never recurs
        let replacer = OptimalReplacer::new(pages(&[1, 2, 3, 4, 0, 1]));
        let victim = replacer.select_victim(&pages(&[1, 2]), 2);
        assert_eq!(victim, Some(PageId::new(2)));
    }

    #[test]
    fn test_first_unused_page_in_table_order_wins() {
        // Neither 5 nor 6 recurs; the scan stops at whichever comes first.
        let replacer = OptimalReplacer::new(pages(&[5, 6, 7]));
        assert_eq!(
            replacer.select_victim(&pages(&[5, 6]), 2),
            Some(PageId::new(5))
        );
        assert_eq!(
            replacer.select_victim(&pages(&[6, 5]), 2),
            Some(PageId::new(6))
        );
    }

    #[test]
    fn test_empty_resident_set() {
        let replacer = OptimalReplacer::new(pages(&[1]));
        assert_eq!(replacer.select_victim(&[], 0), None);
    }
}
