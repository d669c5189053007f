use std::sync::atomic::{AtomicU64, Ordering};

use quorum_common::Clock;

/// Controllable [`Clock`] for tests.
///
/// Starts at a fixed timestamp and only moves when `advance` is called, so
/// the Open/Closed deadline boundary can be hit exactly.
#[derive(Debug)]
pub struct MockClock {
    now: AtomicU64,
}

impl MockClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    /// Moves the clock forward by `seconds`.
    pub fn advance(&self, seconds: u64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }

    /// Jumps the clock to an absolute timestamp. Never moves backwards.
    pub fn set(&self, timestamp: u64) {
        self.now.fetch_max(timestamp, Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_clock_advances() {
        let clock = MockClock::new(100);
        assert_eq!(clock.now(), 100);

        clock.advance(60);
        assert_eq!(clock.now(), 160);
    }

    #[test]
    fn test_mock_clock_never_rewinds() {
        let clock = MockClock::new(100);
        clock.set(50);
        assert_eq!(clock.now(), 100);

        clock.set(500);
        assert_eq!(clock.now(), 500);
    }
}
