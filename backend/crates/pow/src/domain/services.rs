//! Domain Services
//!
//! Pure domain logic for the ticket double hash:
//! `digest2 = SHA256(SHA256(ticket) ++ ticket)`.

use std::fmt::Write;

use platform::crypto::{sha256, sha256_concat, to_hex};

use crate::domain::value_objects::RequiredPrefix;

/// First pass: SHA-256 of the ticket bytes
pub fn digest1(ticket: &[u8]) -> [u8; 32] {
    sha256(ticket)
}

/// Second pass: SHA-256 of the raw first digest followed by the ticket bytes
pub fn digest2(digest1: &[u8; 32], ticket: &[u8]) -> [u8; 32] {
    sha256_concat(&[digest1.as_slice(), ticket])
}

/// Full double hash of a ticket
pub fn ticket_digest(ticket: &[u8]) -> [u8; 32] {
    digest2(&digest1(ticket), ticket)
}

/// Lowercase hex of the double hash (64 characters)
pub fn ticket_hex_digest(ticket: &str) -> String {
    to_hex(&ticket_digest(ticket.as_bytes()))
}

/// Decimal rendering used as the ticket for a candidate
pub fn render_candidate(candidate: i64, buf: &mut String) {
    buf.clear();
    // Writing into a String cannot fail.
    let _ = write!(buf, "{candidate}");
}

/// Check one candidate, reusing `buf` for its decimal rendering
pub fn candidate_matches(candidate: i64, prefix: &RequiredPrefix, buf: &mut String) -> bool {
    render_candidate(candidate, buf);
    prefix.matches_digest(&ticket_digest(buf.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest1_of_zero() {
        assert_eq!(
            to_hex(&digest1(b"0")),
            "5feceb66ffc86f38d952786c6d696c79c2dbc239dd4e91b46729d73a27fb57e9"
        );
    }

    #[test]
    fn test_digest2_appends_raw_digest_then_ticket() {
        let d1 = digest1(b"0");
        let mut data = d1.to_vec();
        data.extend_from_slice(b"0");
        assert_eq!(digest2(&d1, b"0"), sha256(&data));

        // Not the hex form of digest1
        let hex_form = format!("{}0", to_hex(&d1));
        assert_ne!(digest2(&d1, b"0"), sha256(hex_form.as_bytes()));
    }

    #[test]
    fn test_render_candidate_reuses_buffer() {
        let mut buf = String::from("leftover");
        render_candidate(100_000_000, &mut buf);
        assert_eq!(buf, "100000000");
        render_candidate(7, &mut buf);
        assert_eq!(buf, "7");
        render_candidate(-12, &mut buf);
        assert_eq!(buf, "-12");
    }
}
