//! Domain Entities
//!
//! Results produced by the PoW domain.

use crate::domain::value_objects::SearchWindow;

/// Outcome of scanning one window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub window: SearchWindow,
    /// Smallest matching candidate in the window, if any
    pub found: Option<i64>,
    /// Candidates hashed (workers may overshoot the match slightly)
    pub hashes: u64,
}

impl SearchReport {
    pub fn exhausted(&self) -> bool {
        self.found.is_none()
    }
}
