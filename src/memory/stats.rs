//! Simulation statistics.

use std::fmt;

use serde::Serialize;

/// Counters owned by the engine.
///
/// Exactly one of `faults`/`hits` is incremented per reference; nothing is
/// ever decremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Counters {
    pub faults: u64,
    pub hits: u64,
    pub evictions: u64,
}

impl Counters {
    /// Derive a report from the current counts.
    pub fn report(&self) -> MetricsReport {
        MetricsReport::from_counts(self.faults, self.hits, self.evictions)
    }
}

/// A point-in-time summary of a simulation.
///
/// Both rates are 0.0 when no reference has been processed.
///
/// # Example
/// ```
/// use pagesim::MetricsReport;
///
/// let report = MetricsReport::from_counts(3, 1, 1);
/// assert_eq!(report.fault_rate, 0.75);
/// assert_eq!(report.hit_rate, 0.25);
/// println!("{}", report);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsReport {
    pub faults: u64,
    pub hits: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,

    pub fault_rate: f64,
    pub hit_rate: f64,
}

impl MetricsReport {
    /// Build a report from raw counts.
    pub fn from_counts(faults: u64, hits: u64, evictions: u64) -> Self {
        let total = faults + hits;
        let rate = |n: u64| {
            if total == 0 {
                0.0
            } else {
                n as f64 / total as f64
            }
        };

        Self {
            faults,
            hits,
            evictions,
            fault_rate: rate(faults),
            hit_rate: rate(hits),
        }
    }

    /// Total references processed.
    #[inline]
    pub fn accesses(&self) -> u64 {
        self.faults + self.hits
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Page Faults: {}", self.faults)?;
        writeln!(f, "Page Hits: {}", self.hits)?;
        writeln!(f, "Page Fault Rate: {:.2}", self.fault_rate)?;
        write!(f, "Hit Rate: {:.2}", self.hit_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_empty() {
        let report = Counters::default().report();
        assert_eq!(report.accesses(), 0);
        assert_eq!(report.fault_rate, 0.0);
        assert_eq!(report.hit_rate, 0.0);
    }

    #[test]
    fn test_report_rates() {
        let report = MetricsReport::from_counts(3, 7, 1);

        assert_eq!(report.accesses(), 10);
        assert_eq!(report.hit_rate, 0.7);
        assert_eq!(report.fault_rate, 0.3);
    }

    #[test]
    fn test_report_display() {
        let report = MetricsReport::from_counts(4, 2, 1);
        let display = format!("{}", report);

        assert!(display.contains("Page Faults: 4"));
        assert!(display.contains("Page Hits: 2"));
        assert!(display.contains("Page Fault Rate: 0.67"));
        assert!(display.contains("Hit Rate: 0.33"));
    }
}
