//! Check Ticket Use Case
//!
//! Gate-side validation of a submitted ticket.

use crate::domain::services::ticket_hex_digest;
use crate::domain::value_objects::{RequiredPrefix, Ticket};
use crate::error::{PowError, PowResult};

/// Accepted ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedTicket {
    /// The ticket string doubles as the team id
    pub team_id: String,
    pub hex_digest: String,
}

/// Check Ticket Use Case
#[derive(Debug, Clone, Default)]
pub struct CheckTicketUseCase {
    prefix: RequiredPrefix,
}

impl CheckTicketUseCase {
    pub fn new(prefix: RequiredPrefix) -> Self {
        Self { prefix }
    }

    pub fn execute(&self, raw: &str) -> PowResult<CheckedTicket> {
        let ticket = Ticket::parse(raw)?;
        let hex_digest = ticket_hex_digest(ticket.as_str());

        if !self.prefix.matches_hex(&hex_digest) {
            return Err(PowError::PrefixMismatch {
                prefix: self.prefix.as_str().to_string(),
                digest: hex_digest,
            });
        }

        tracing::debug!(ticket = ticket.as_str(), digest = %hex_digest, "Ticket accepted");

        Ok(CheckedTicket {
            team_id: ticket.into_inner(),
            hex_digest,
        })
    }
}
