//! Error types for pagesim.

use thiserror::Error;

use crate::common::PageId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Frame count below one at construction.
    ///
    /// Raised before any reference is processed; no simulation state exists.
    #[error("Invalid frame capacity {0}: at least one frame is required")]
    InvalidCapacity(usize),

    /// Insert into a full frame table.
    ///
    /// This indicates a bug - replacers only insert below capacity.
    #[error("Frame table is full ({capacity} frames)")]
    CapacityExceeded { capacity: usize },

    /// Removal of a page that is not resident.
    ///
    /// This indicates a bug - victims are always chosen from resident pages.
    #[error("{0} is not resident")]
    PageNotResident(PageId),

    /// Front-end input that could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True for frame-table invariant violations (as opposed to bad input).
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Error::CapacityExceeded { .. } | Error::PageNotResident(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PageNotResident(PageId::new(42));
        assert_eq!(format!("{}", err), "Page(42) is not resident");

        let err = Error::InvalidCapacity(0);
        assert_eq!(
            format!("{}", err),
            "Invalid frame capacity 0: at least one frame is required"
        );

        let err = Error::CapacityExceeded { capacity: 3 };
        assert_eq!(format!("{}", err), "Frame table is full (3 frames)");
    }

    #[test]
    fn test_invariant_violation_classification() {
        assert!(Error::CapacityExceeded { capacity: 1 }.is_invariant_violation());
        assert!(Error::PageNotResident(PageId::new(1)).is_invariant_violation());
        assert!(!Error::InvalidCapacity(0).is_invariant_violation());
        assert!(!Error::InvalidInput("x".into()).is_invariant_violation());
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
