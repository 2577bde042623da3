//! Configuration constants for pagesim.

/// Smallest frame table a simulation accepts.
///
/// A table with zero frames could never hold the faulted-in page, so
/// construction rejects it with [`Error::InvalidCapacity`](crate::Error).
pub const MIN_FRAMES: usize = 1;

/// Frame count used by the CLI when `--frames` is omitted.
pub const DEFAULT_FRAMES: usize = 3;

/// Separator between page numbers in a reference string (`"1,2,3,4"`).
pub const REFERENCE_DELIMITER: char = ',';

/// Pause between printed steps when the CLI animates a run.
pub const DEFAULT_STEP_DELAY_MS: u64 = 500;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_frames_is_positive() {
        assert!(MIN_FRAMES >= 1);
        assert!(DEFAULT_FRAMES >= MIN_FRAMES);
    }
}
