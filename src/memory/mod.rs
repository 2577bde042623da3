//! Page replacement simulation.
//!
//! The simulator models a fixed set of physical frames and classifies each
//! page reference as a hit or a fault, evicting a resident page through a
//! pluggable policy when the frames are full.
//!
//! # Components
//! - [`FrameTable`] - The bounded set of resident pages
//! - [`replacer`] - Eviction policies (FIFO, LRU, Optimal)
//! - [`SimulationEngine`] - Drives references through a policy
//! - [`MetricsReport`] - Fault/hit summary
//! - [`comparison`] - Whole runs and side-by-side comparison

pub mod comparison;
mod engine;
mod frame_table;
mod outcome;
pub mod replacer;
mod stats;

pub use comparison::{compare, simulate, Comparison, Simulation};
pub use engine::{Run, SimulationEngine};
pub use frame_table::FrameTable;
pub use outcome::{Outcome, Step};
pub use replacer::{PolicyKind, ReplacementPolicy};
pub use stats::MetricsReport;
