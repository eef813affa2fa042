//! Domain Value Objects
//!
//! Immutable value types for the PoW domain.

use rand::Rng;

use crate::error::{PowError, PowResult};

/// Required leading hex characters of the final digest
///
/// Stored both as text and as nibbles so the hot loop can compare against
/// raw digest bytes without hex-encoding every candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredPrefix {
    text: String,
    nibbles: Vec<u8>,
}

impl RequiredPrefix {
    pub const DEFAULT: &'static str = "0000000";
    pub const MAX_LEN: usize = 64;

    pub fn new(text: &str) -> Option<Self> {
        if text.is_empty() || text.len() > Self::MAX_LEN {
            return None;
        }
        let nibbles = text
            .chars()
            .map(|c| match c {
                '0'..='9' | 'a'..='f' => c.to_digit(16).map(|d| d as u8),
                _ => None,
            })
            .collect::<Option<Vec<u8>>>()?;
        Some(Self {
            text: text.to_string(),
            nibbles,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.nibbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nibbles.is_empty()
    }

    /// True when the lowercase hex form of `digest` starts with this prefix
    pub fn matches_digest(&self, digest: &[u8; 32]) -> bool {
        self.nibbles.iter().enumerate().all(|(i, &want)| {
            let byte = digest[i / 2];
            let got = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            got == want
        })
    }

    pub fn matches_hex(&self, hex_digest: &str) -> bool {
        hex_digest.starts_with(&self.text)
    }
}

impl Default for RequiredPrefix {
    fn default() -> Self {
        Self {
            text: Self::DEFAULT.to_string(),
            nibbles: vec![0; Self::DEFAULT.len()],
        }
    }
}

/// Range the random scan start is drawn from: `[start, start + size)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetRange {
    start: i64,
    size: u64,
}

impl OffsetRange {
    /// `None` for an empty range, one wider than `i64::MAX`, or one whose
    /// end does not fit in `i64`
    pub fn new(start: i64, size: u64) -> Option<Self> {
        if size == 0 || size > i64::MAX as u64 {
            return None;
        }
        start.checked_add_unsigned(size)?;
        Some(Self { start, size })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Largest value `draw` can return
    pub fn last(&self) -> i64 {
        self.start + (self.size - 1) as i64
    }

    /// Uniform draw in `[start, start + size)`
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        self.start + rng.random_range(0..self.size) as i64
    }
}

/// Consecutive candidates `[start, start + width)` scanned in one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    start: i64,
    width: u64,
}

impl SearchWindow {
    /// `None` when the exclusive end does not fit in `i64`
    pub fn new(start: i64, width: u64) -> Option<Self> {
        start.checked_add_unsigned(width)?;
        Some(Self { start, width })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    /// Exclusive end
    pub fn end(&self) -> i64 {
        self.start + self.width as i64
    }

    pub fn candidates(&self) -> std::ops::Range<i64> {
        self.start..self.end()
    }

    pub fn contains(&self, candidate: i64) -> bool {
        self.candidates().contains(&candidate)
    }
}

/// Ticket string as accepted by the launcher gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket(String);

impl Ticket {
    pub const MIN_LEN: usize = 8;
    pub const MAX_LEN: usize = 100;

    pub fn parse(raw: &str) -> PowResult<Self> {
        let len = raw.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(PowError::InvalidTicketLength(len));
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PowError::TicketNotAlphanumeric);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
