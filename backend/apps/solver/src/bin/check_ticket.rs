//! Ticket Check Entry Point
//!
//! Reads one ticket from stdin and applies the gate's rules. Prints the
//! digest of an accepted ticket; a rejected ticket exits with status 1.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use pow::CheckTicketUseCase;

fn main() -> anyhow::Result<ExitCode> {
    solver::init_tracing("check_ticket=info,pow=warn");

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let raw = line.trim_end_matches(['\r', '\n']);

    match CheckTicketUseCase::default().execute(raw) {
        Ok(checked) => {
            tracing::info!(team_id = %checked.team_id, "Ticket accepted");
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", checked.hex_digest)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_rejection() => {
            e.log();
            Ok(ExitCode::from(solver::EXIT_REJECTED))
        }
        Err(e) => Err(e.into()),
    }
}
