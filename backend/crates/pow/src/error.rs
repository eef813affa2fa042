//! PoW Error Types
//!
//! Scan exhaustion is not an error: it is reported as an empty search
//! result. These variants cover rejected tickets and bad configuration.

use platform::env::EnvError;
use thiserror::Error;

/// PoW-specific result type alias
pub type PowResult<T> = Result<T, PowError>;

/// PoW-specific error variants
#[derive(Debug, Error)]
pub enum PowError {
    /// Ticket length outside the accepted bounds
    #[error("invalid ticket length: {0} (expected {min}..={max})", min = crate::domain::value_objects::Ticket::MIN_LEN, max = crate::domain::value_objects::Ticket::MAX_LEN)]
    InvalidTicketLength(usize),

    /// Ticket contains characters other than ASCII letters and digits
    #[error("ticket must be alphanumeric")]
    TicketNotAlphanumeric,

    /// Digest does not carry the required prefix
    #[error("PoW: sha256(sha256(ticket) + ticket) must start with {prefix} (digest was {digest})")]
    PrefixMismatch { prefix: String, digest: String },

    /// Search range or scan width cannot be scanned
    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),

    /// Environment override could not be parsed
    #[error("Configuration error: {0}")]
    Env(#[from] EnvError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PowError {
    /// Whether the error is a rejected ticket (as opposed to a setup problem)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            PowError::InvalidTicketLength(_)
                | PowError::TicketNotAlphanumeric
                | PowError::PrefixMismatch { .. }
        )
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            PowError::Internal(msg) => {
                tracing::error!(message = %msg, "PoW internal error");
            }
            PowError::InvalidConfig(_) | PowError::Env(_) => {
                tracing::error!(error = %self, "PoW configuration rejected");
            }
            PowError::PrefixMismatch { digest, .. } => {
                tracing::warn!(digest = %digest, "PoW ticket digest mismatch");
            }
            _ => {
                tracing::warn!(error = %self, "PoW ticket rejected");
            }
        }
    }
}
