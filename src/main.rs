//! pagesim CLI - run a reference string through a replacement policy.

use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use pagesim::common::config::DEFAULT_STEP_DELAY_MS;
use pagesim::{compare, input, PageId, PolicyKind, SimulationEngine, DEFAULT_FRAMES};

#[derive(Parser)]
#[command(author, version, about = "Virtual memory page replacement simulator")]
struct Cli {
    /// Number of physical frames
    #[arg(short, long, allow_hyphen_values = true, default_value_t = DEFAULT_FRAMES.to_string())]
    frames: String,

    /// Page reference string (comma-separated), e.g. "7,0,1,2,0,3"
    #[arg(short, long, allow_hyphen_values = true)]
    references: String,

    /// Replacement policy: fifo, lru or optimal
    #[arg(short, long, default_value = "fifo")]
    policy: PolicyKind,

    /// Run every policy and print a comparison instead of single steps
    #[arg(long)]
    compare: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Pause between printed steps
    #[arg(long)]
    animate: bool,

    /// Pause length in milliseconds (overrides the --animate default)
    #[arg(long)]
    delay_ms: Option<u64>,
}

impl Cli {
    fn step_delay(&self) -> Duration {
        let default = if self.animate { DEFAULT_STEP_DELAY_MS } else { 0 };
        Duration::from_millis(self.delay_ms.unwrap_or(default))
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let (frames, references) = match parse_inputs(&cli) {
        Ok(inputs) => inputs,
        Err(e) => {
            debug!(error = %e, "rejected input");
            println!("Error: Please provide valid inputs.");
            return Ok(ExitCode::from(2));
        }
    };

    let result = if cli.compare {
        run_comparison(&cli, frames, &references)
    } else {
        run_single(&cli, frames, &references)
    };

    if let Err(e) = &result {
        if let Some(err) = e.downcast_ref::<pagesim::Error>() {
            if err.is_invariant_violation() {
                error!(error = %err, "simulator bug: frame table invariant violated");
            }
        }
    }
    result?;

    Ok(ExitCode::SUCCESS)
}

/// Parse and validate everything the user typed.
///
/// Bad frame counts (`-1`, `0`, `abc`) and bad reference strings all end up
/// here, so they fail the same way.
fn parse_inputs(cli: &Cli) -> pagesim::Result<(usize, Vec<PageId>)> {
    let frames = input::parse_frame_count(&cli.frames)?;
    let references = input::parse_references(&cli.references)?;
    Ok((frames, references))
}

fn run_single(cli: &Cli, frames: usize, references: &[PageId]) -> Result<()> {
    if cli.json {
        let sim = pagesim::simulate(frames, cli.policy, references)
            .context("simulation failed")?;
        println!("{}", serde_json::to_string_pretty(&sim)?);
        return Ok(());
    }

    let mut engine = SimulationEngine::with_kind(frames, cli.policy, references)
        .context("cannot start simulation")?;
    let delay = cli.step_delay();
    let mut out = io::stdout().lock();

    writeln!(out, "Starting Simulation...\n")?;
    for step in engine.run(references.iter().copied()) {
        let step = step.context("simulation aborted")?;
        writeln!(out, "{}", step)?;
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    writeln!(out, "\nSimulation Results:")?;
    writeln!(out, "{}", engine.report())?;
    Ok(())
}

fn run_comparison(cli: &Cli, frames: usize, references: &[PageId]) -> Result<()> {
    let rows = compare(frames, references).context("comparison failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<8} {:>7} {:>6} {:>11} {:>9}",
        "Policy", "Faults", "Hits", "Fault Rate", "Hit Rate"
    );
    for row in rows {
        println!(
            "{:<8} {:>7} {:>6} {:>11.2} {:>9.2}",
            row.policy,
            row.report.faults,
            row.report.hits,
            row.report.fault_rate,
            row.report.hit_rate
        );
    }
    Ok(())
}
