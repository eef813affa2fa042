//! Ticket Solver Entry Point
//!
//! Prints the smallest accepted ticket in a randomly placed window.
//! Uses `anyhow` for start-up errors; an exhausted window prints nothing.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use platform::rng::clock_seed;
use pow::{SolveOutcome, SolveTicketUseCase, SolverConfig};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    solver::init_tracing("solver=warn,pow=warn");

    let config = Arc::new(SolverConfig::from_env()?);
    let seed = config.seed.unwrap_or_else(clock_seed);

    tracing::info!(
        seed,
        range_start = config.range_start,
        range_size = config.range_size,
        scan_width = config.scan_width,
        workers = config.worker_count(),
        "Starting ticket search"
    );

    let use_case = SolveTicketUseCase::new(config)?;

    match use_case.execute(seed)? {
        SolveOutcome::Solved(solved) => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", solved.ticket)?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        SolveOutcome::Exhausted { .. } => Ok(ExitCode::from(solver::EXIT_NO_TICKET)),
    }
}
