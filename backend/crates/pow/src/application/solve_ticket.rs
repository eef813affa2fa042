//! Solve Ticket Use Case

use std::sync::Arc;
use std::time::{Duration, Instant};

use platform::rng::seeded_rng;

use crate::application::check_ticket::CheckTicketUseCase;
use crate::application::config::SolverConfig;
use crate::domain::searcher::PowSearcher;
use crate::domain::value_objects::{RequiredPrefix, SearchWindow};
use crate::error::{PowError, PowResult};

/// Ticket found and accepted by the gate check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedTicket {
    pub ticket: i64,
    pub hex_digest: String,
    pub window: SearchWindow,
    pub hashes: u64,
}

/// Result of one solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(SolvedTicket),
    /// The whole window was scanned without a match
    Exhausted { window: SearchWindow, hashes: u64 },
}

impl SolveOutcome {
    pub fn ticket(&self) -> Option<i64> {
        match self {
            SolveOutcome::Solved(solved) => Some(solved.ticket),
            SolveOutcome::Exhausted { .. } => None,
        }
    }
}

/// Solve Ticket Use Case
pub struct SolveTicketUseCase {
    searcher: PowSearcher,
    checker: CheckTicketUseCase,
    config: Arc<SolverConfig>,
}

impl SolveTicketUseCase {
    /// Solver for the gate's fixed prefix
    pub fn new(config: Arc<SolverConfig>) -> PowResult<Self> {
        Self::with_prefix(config, RequiredPrefix::default())
    }

    pub fn with_prefix(config: Arc<SolverConfig>, prefix: RequiredPrefix) -> PowResult<Self> {
        config.validate()?;
        let searcher = PowSearcher::new(prefix.clone()).with_workers(config.worker_count());
        Ok(Self {
            searcher,
            checker: CheckTicketUseCase::new(prefix),
            config,
        })
    }

    pub fn execute(&self, seed: u64) -> PowResult<SolveOutcome> {
        let offsets = self.config.offset_range()?;
        let mut rng = seeded_rng(seed);
        let started = Instant::now();

        let report = self
            .searcher
            .search(&mut rng, &offsets, self.config.scan_width)
            .ok_or_else(|| PowError::Internal("drawn window overflows".into()))?;
        let elapsed = started.elapsed();

        tracing::info!(
            seed,
            start = report.window.start(),
            width = report.window.width(),
            workers = self.searcher.workers(),
            hashes = report.hashes,
            elapsed_ms = elapsed.as_millis() as u64,
            rate_khs = hash_rate_khs(report.hashes, elapsed),
            "Search finished"
        );

        let Some(ticket) = report.found else {
            tracing::warn!(
                start = report.window.start(),
                width = report.window.width(),
                "No ticket found in window"
            );
            return Ok(SolveOutcome::Exhausted {
                window: report.window,
                hashes: report.hashes,
            });
        };

        // Re-run the gate's own check so a reported ticket is always accepted.
        let checked = self.checker.execute(&ticket.to_string()).map_err(|e| {
            PowError::Internal(format!("found ticket {ticket} failed the gate check: {e}"))
        })?;

        tracing::info!(ticket, digest = %checked.hex_digest, "Ticket solved");

        Ok(SolveOutcome::Solved(SolvedTicket {
            ticket,
            hex_digest: checked.hex_digest,
            window: report.window,
            hashes: report.hashes,
        }))
    }
}

fn hash_rate_khs(hashes: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (hashes as f64 / secs / 1000.0) as u64
    } else {
        0
    }
}
