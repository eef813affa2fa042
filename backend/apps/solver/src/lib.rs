//! Shared start-up for the solver binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status when the whole window was scanned without a ticket
pub const EXIT_NO_TICKET: u8 = 2;

/// Exit status when a submitted ticket is rejected
pub const EXIT_REJECTED: u8 = 1;

/// Install the tracing subscriber. Logs go to stderr so stdout carries
/// only the program's result.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
