//! Application Layer - Use Cases
//!
//! Orchestrates the domain search and ticket check for the binaries.

pub mod check_ticket;
pub mod config;
pub mod solve_ticket;
