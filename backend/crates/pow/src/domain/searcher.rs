//! Brute-force ticket search
//!
//! One worker scans the window in ascending order and stops at the first
//! match. With several workers the window is split into chunks claimed in
//! ascending order; a worker abandons anything above the best match seen so
//! far, and the reported candidate is still the smallest match in the window.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::thread;

use rand::Rng;

use crate::domain::entities::SearchReport;
use crate::domain::services::candidate_matches;
use crate::domain::value_objects::{OffsetRange, RequiredPrefix, SearchWindow};

/// Candidates claimed per worker at a time
pub const DEFAULT_CHUNK_SIZE: u64 = 1 << 16;

/// Sentinel for "no match yet". Windows end before `i64::MAX`, so no
/// candidate can equal it.
const NO_MATCH: i64 = i64::MAX;

#[derive(Debug, Clone)]
pub struct PowSearcher {
    prefix: RequiredPrefix,
    workers: usize,
    chunk_size: u64,
}

impl PowSearcher {
    pub fn new(prefix: RequiredPrefix) -> Self {
        Self {
            prefix,
            workers: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Draw a start from `offsets` and scan `scan_width` candidates from it.
    ///
    /// Returns `None` only if the drawn window would run past `i64::MAX`;
    /// callers validate their ranges up front.
    pub fn search<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        offsets: &OffsetRange,
        scan_width: u64,
    ) -> Option<SearchReport> {
        let start = offsets.draw(rng);
        let window = SearchWindow::new(start, scan_width)?;
        Some(self.scan(window))
    }

    /// Scan a fixed window
    pub fn scan(&self, window: SearchWindow) -> SearchReport {
        tracing::debug!(
            start = window.start(),
            width = window.width(),
            workers = self.workers,
            prefix = self.prefix.as_str(),
            "Scanning window"
        );

        if self.workers == 1 || window.width() <= self.chunk_size {
            self.scan_sequential(window)
        } else {
            self.scan_sharded(window)
        }
    }

    fn scan_sequential(&self, window: SearchWindow) -> SearchReport {
        let mut buf = String::with_capacity(20);
        let mut hashes = 0u64;
        for candidate in window.candidates() {
            hashes += 1;
            if candidate_matches(candidate, &self.prefix, &mut buf) {
                return SearchReport {
                    window,
                    found: Some(candidate),
                    hashes,
                };
            }
        }
        SearchReport {
            window,
            found: None,
            hashes,
        }
    }

    fn scan_sharded(&self, window: SearchWindow) -> SearchReport {
        let next_offset = AtomicU64::new(0);
        let best = AtomicI64::new(NO_MATCH);
        let hashes = AtomicU64::new(0);

        thread::scope(|scope| {
            for worker_id in 0..self.workers {
                let (next_offset, best, hashes) = (&next_offset, &best, &hashes);
                scope.spawn(move || {
                    let local = self.run_worker(worker_id, window, next_offset, best);
                    hashes.fetch_add(local, Ordering::Relaxed);
                });
            }
        });

        let found = match best.into_inner() {
            NO_MATCH => None,
            candidate => Some(candidate),
        };
        SearchReport {
            window,
            found,
            hashes: hashes.into_inner(),
        }
    }

    /// Claim chunks until the window is exhausted or every remaining chunk
    /// lies above the best match. Returns the number of candidates hashed.
    fn run_worker(
        &self,
        worker_id: usize,
        window: SearchWindow,
        next_offset: &AtomicU64,
        best: &AtomicI64,
    ) -> u64 {
        let mut buf = String::with_capacity(20);
        let mut hashed = 0u64;

        loop {
            let offset = next_offset.fetch_add(self.chunk_size, Ordering::Relaxed);
            if offset >= window.width() {
                break;
            }
            let chunk_start = window.start() + offset as i64;
            if chunk_start > best.load(Ordering::Relaxed) {
                break;
            }
            let chunk_end =
                window.start() + offset.saturating_add(self.chunk_size).min(window.width()) as i64;

            for candidate in chunk_start..chunk_end {
                if candidate > best.load(Ordering::Relaxed) {
                    break;
                }
                hashed += 1;
                if candidate_matches(candidate, &self.prefix, &mut buf) {
                    best.fetch_min(candidate, Ordering::Relaxed);
                    tracing::debug!(worker_id, candidate, "Worker found match");
                    break;
                }
            }
        }

        tracing::trace!(worker_id, hashed, "Worker finished");
        hashed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(s: &str) -> RequiredPrefix {
        RequiredPrefix::new(s).unwrap()
    }

    #[test]
    fn test_sequential_finds_first_match() {
        let searcher = PowSearcher::new(prefix("00"));
        let window = SearchWindow::new(100_000_000, 1000).unwrap();

        let report = searcher.scan(window);

        assert_eq!(report.found, Some(100_000_066));
        assert_eq!(report.hashes, 67);
    }

    #[test]
    fn test_sequential_exhaustion_is_empty_result() {
        // digest of "100000000" starts with 'c'
        let searcher = PowSearcher::new(prefix("0"));
        let window = SearchWindow::new(100_000_000, 1).unwrap();

        let report = searcher.scan(window);

        assert!(report.exhausted());
        assert_eq!(report.hashes, 1);
    }

    #[test]
    fn test_empty_window() {
        let searcher = PowSearcher::new(prefix("0"));
        let report = searcher.scan(SearchWindow::new(5, 0).unwrap());
        assert!(report.exhausted());
        assert_eq!(report.hashes, 0);
    }

    #[test]
    fn test_sharded_matches_sequential() {
        let window = SearchWindow::new(100_000_000, 20_000).unwrap();
        let sequential = PowSearcher::new(prefix("000")).scan(window);

        for workers in [2, 3, 4, 8] {
            let sharded = PowSearcher::new(prefix("000"))
                .with_workers(workers)
                .with_chunk_size(97)
                .scan(window);
            assert_eq!(sharded.found, sequential.found, "workers = {workers}");
        }
        assert_eq!(sequential.found, Some(100_005_941));
    }

    #[test]
    fn test_sharded_exhaustion_scans_every_candidate() {
        let window = SearchWindow::new(100_000_000, 500).unwrap();
        let sharded = PowSearcher::new(prefix("ffffff"))
            .with_workers(4)
            .with_chunk_size(16)
            .scan(window);

        assert!(sharded.exhausted());
        assert_eq!(sharded.hashes, 500);
    }

    #[test]
    fn test_with_workers_clamps_to_one() {
        let searcher = PowSearcher::new(RequiredPrefix::default()).with_workers(0);
        assert_eq!(searcher.workers(), 1);
    }
}
