//! Per-reference results.

use std::fmt;

use serde::Serialize;

use crate::common::PageId;

/// Classification of one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    /// The page was already resident.
    Hit,

    /// The page had to be brought in, displacing `evicted` if the table was full.
    Fault { evicted: Option<PageId> },
}

impl Outcome {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit)
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }

    /// The page this reference displaced, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            Outcome::Fault { evicted } => *evicted,
            Outcome::Hit => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit => write!(f, "Hit"),
            Outcome::Fault { evicted: None } => write!(f, "Fault"),
            Outcome::Fault {
                evicted: Some(victim),
            } => write!(f, "Fault (evicted {})", victim.0),
        }
    }
}

/// Everything observable about one processed reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Index of this reference in the stream (0-based).
    pub position: usize,

    /// The referenced page.
    pub page: PageId,

    pub outcome: Outcome,

    /// Resident pages after the reference, in residency order.
    pub frames: Vec<PageId>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Accessed Page: {}, {}, Frames: [",
            self.page.0, self.outcome
        )?;
        for (i, page) in self.frames.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page.0)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let hit = Outcome::Hit;
        assert!(hit.is_hit());
        assert_eq!(hit.evicted(), None);

        let fault = Outcome::Fault {
            evicted: Some(PageId::new(4)),
        };
        assert!(fault.is_fault());
        assert_eq!(fault.evicted(), Some(PageId::new(4)));
    }

    #[test]
    fn test_step_display() {
        let step = Step {
            position: 3,
            page: PageId::new(4),
            outcome: Outcome::Fault {
                evicted: Some(PageId::new(1)),
            },
            frames: vec![PageId::new(2), PageId::new(3), PageId::new(4)],
        };

        assert_eq!(
            step.to_string(),
            "Accessed Page: 4, Fault (evicted 1), Frames: [2, 3, 4]"
        );
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_string(&Outcome::Fault { evicted: None }).unwrap();
        assert_eq!(json, r#"{"kind":"fault","evicted":null}"#);
        assert_eq!(serde_json::to_string(&Outcome::Hit).unwrap(), r#"{"kind":"hit"}"#);
    }
}
