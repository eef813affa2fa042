//! Application Configuration
//!
//! Search parameters for the solver. Only the search range, seed and
//! worker count can be overridden; the prefix is fixed.

use platform::env::parse_optional;

use crate::domain::value_objects::{OffsetRange, SearchWindow, Ticket};
use crate::error::{PowError, PowResult};

pub const DEFAULT_RANGE_START: i64 = 100_000_000;
pub const DEFAULT_RANGE_SIZE: u64 = 200_000_000_000;
pub const DEFAULT_SCAN_WIDTH: u64 = 20_000_000_000;

/// Smallest start whose candidates render to at least `Ticket::MIN_LEN` digits
pub const MIN_RANGE_START: i64 = 10_i64.pow(Ticket::MIN_LEN as u32 - 1);

pub const ENV_RANGE_START: &str = "POW_RANGE_START";
pub const ENV_RANGE_SIZE: &str = "POW_RANGE_SIZE";
pub const ENV_SCAN_WIDTH: &str = "POW_SCAN_WIDTH";
pub const ENV_SEED: &str = "POW_SEED";
pub const ENV_WORKERS: &str = "POW_WORKERS";

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Lower bound of the random start
    pub range_start: i64,
    /// Width of the random start range
    pub range_size: u64,
    /// Candidates examined from the start
    pub scan_width: u64,
    /// Fixed seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
    /// Scan workers; `0` means one per CPU
    pub workers: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            range_start: DEFAULT_RANGE_START,
            range_size: DEFAULT_RANGE_SIZE,
            scan_width: DEFAULT_SCAN_WIDTH,
            seed: None,
            workers: 1,
        }
    }
}

impl SolverConfig {
    /// Defaults overridden by any `POW_*` variables that are set
    pub fn from_env() -> PowResult<Self> {
        let defaults = Self::default();
        let config = Self {
            range_start: parse_optional(ENV_RANGE_START)?.unwrap_or(defaults.range_start),
            range_size: parse_optional(ENV_RANGE_SIZE)?.unwrap_or(defaults.range_size),
            scan_width: parse_optional(ENV_SCAN_WIDTH)?.unwrap_or(defaults.scan_width),
            seed: parse_optional(ENV_SEED)?.or(defaults.seed),
            workers: parse_optional(ENV_WORKERS)?.unwrap_or(defaults.workers),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject ranges that are empty, would produce tickets the launcher
    /// refuses, or could run past `i64::MAX`
    pub fn validate(&self) -> PowResult<()> {
        if self.range_start < MIN_RANGE_START {
            return Err(PowError::InvalidConfig(format!(
                "range start {} is below {MIN_RANGE_START}",
                self.range_start
            )));
        }
        if self.scan_width == 0 {
            return Err(PowError::InvalidConfig("scan width must be positive".into()));
        }
        let offsets = self.offset_range()?;
        SearchWindow::new(offsets.last(), self.scan_width).ok_or_else(|| {
            PowError::InvalidConfig(format!(
                "window starting at {} with width {} overflows",
                offsets.last(),
                self.scan_width
            ))
        })?;
        Ok(())
    }

    pub fn offset_range(&self) -> PowResult<OffsetRange> {
        OffsetRange::new(self.range_start, self.range_size).ok_or_else(|| {
            PowError::InvalidConfig(format!(
                "range [{}, +{}) is empty or overflows",
                self.range_start, self.range_size
            ))
        })
    }

    /// Resolved worker count
    pub fn worker_count(&self) -> usize {
        match self.workers {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
