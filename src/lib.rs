//! pagesim - a virtual-memory page replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Front end (main.rs, input)                     │   │
//! │  │   parse frames + reference string, render steps          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       SimulationEngine (memory/)                         │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Replacement Policies: FIFO | LRU | Optimal      │   │   │
//! │  │   │        (chosen at construction time)             │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      FrameTable + Counters → MetricsReport               │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`memory`] - Frame table, replacement policies and the engine
//! - [`input`] - Parsing of user-supplied frame counts and reference strings
//!
//! # Quick Start
//! ```
//! use pagesim::{input, simulate, PolicyKind};
//!
//! let refs = input::parse_references("1,2,3,4,1,2,5")?;
//! let sim = simulate(3, PolicyKind::Fifo, &refs)?;
//!
//! assert_eq!(sim.report.faults, 7);
//! assert_eq!(sim.report.hits, 0);
//! # Ok::<(), pagesim::Error>(())
//! ```

pub mod common;
pub mod input;
pub mod memory;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_FRAMES;
pub use common::{Error, PageId, Result};

pub use memory::{
    compare, simulate, Comparison, FrameTable, MetricsReport, Outcome, PolicyKind,
    ReplacementPolicy, Simulation, SimulationEngine, Step,
};
