//! PoW (Proof of Work) Ticket Module
//!
//! Layered structure:
//! - `domain/` - Double-hash construction, value objects, searcher
//! - `application/` - Solve and check use cases, configuration
//!
//! ## Ticket Rule
//! A ticket is accepted when `hex(sha256(sha256(ticket) ++ ticket))`
//! starts with `0000000`. The solver scans decimal tickets upward from a
//! random start and reports the smallest accepted one in its window.

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::check_ticket::{CheckTicketUseCase, CheckedTicket};
pub use application::config::SolverConfig;
pub use application::solve_ticket::{SolveOutcome, SolveTicketUseCase, SolvedTicket};
pub use domain::entities::SearchReport;
pub use domain::searcher::PowSearcher;
pub use domain::value_objects::{OffsetRange, RequiredPrefix, SearchWindow, Ticket};
pub use error::{PowError, PowResult};
