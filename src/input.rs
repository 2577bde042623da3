//! Parsing of front-end input.
//!
//! The engine never sees raw text. These helpers turn what a user typed into
//! a frame count and a reference string, collapsing every parse failure into
//! [`Error::InvalidInput`].

use crate::common::config::{MIN_FRAMES, REFERENCE_DELIMITER};
use crate::common::{Error, PageId, Result};

/// Parse a frame count such as `" 3 "`.
///
/// # Errors
/// - `Error::InvalidInput` if the text is not a non-negative integer
/// - `Error::InvalidCapacity` if it is below [`MIN_FRAMES`]
pub fn parse_frame_count(text: &str) -> Result<usize> {
    let text = text.trim();
    let frames: usize = text
        .parse()
        .map_err(|_| Error::InvalidInput(format!("frame count '{}' is not a number", text)))?;

    if frames < MIN_FRAMES {
        return Err(Error::InvalidCapacity(frames));
    }
    Ok(frames)
}

/// Parse a comma-separated reference string such as `"1, 2,3"`.
///
/// # Errors
/// - `Error::InvalidInput` if the string is blank, or any item is empty or
///   not an integer
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    if text.trim().is_empty() {
        return Err(Error::InvalidInput("reference string is empty".to_string()));
    }

    text.split(REFERENCE_DELIMITER)
        .enumerate()
        .map(|(index, item)| {
            let item = item.trim();
            item.parse::<i64>().map(PageId::new).map_err(|_| {
                Error::InvalidInput(format!("reference #{} ('{}') is not a page number", index + 1, item))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_count() {
        assert_eq!(parse_frame_count("3").unwrap(), 3);
        assert_eq!(parse_frame_count("  12\n").unwrap(), 12);
    }

    #[test]
    fn test_parse_frame_count_rejects_zero() {
        assert_eq!(parse_frame_count("0"), Err(Error::InvalidCapacity(0)));
    }

    #[test]
    fn test_parse_frame_count_rejects_garbage() {
        for bad in ["", "three", "-1", "2.5"] {
            assert!(
                matches!(parse_frame_count(bad), Err(Error::InvalidInput(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_references() {
        let refs = parse_references("1, 2 ,3,1").unwrap();
        let ids: Vec<i64> = refs.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_parse_negative_references() {
        let refs = parse_references("-1, 2,-1,+3").unwrap();
        let ids: Vec<i64> = refs.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![-1, 2, -1, 3]);
    }

    #[test]
    fn test_parse_single_reference() {
        assert_eq!(parse_references("7").unwrap(), vec![PageId::new(7)]);
    }

    #[test]
    fn test_parse_references_rejects_garbage() {
        for bad in ["", "   ", "1,,2", "1,a,3", "1,2.5", "1,2,"] {
            assert!(
                matches!(parse_references(bad), Err(Error::InvalidInput(_))),
                "accepted {:?}",
                bad
            );
        }
    }
}
