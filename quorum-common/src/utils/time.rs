use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current UNIX timestamp in seconds.
///
/// This represents the number of seconds since 1970-01-01 UTC.
///
/// # Panics
///
/// Panics if the system clock is set before the UNIX epoch.
pub fn current_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before UNIX EPOCH")
        .as_secs()
}

/// Source of the current time for deadline checks.
///
/// The ballot never schedules anything; it only compares `now()` against a
/// fixed deadline on each call. Production code uses [`SystemClock`]; tests
/// substitute a controllable clock so the Open/Closed boundary can be
/// exercised deterministically.
pub trait Clock: Send + Sync {
    /// Current UNIX timestamp in seconds. Must be non-decreasing.
    fn now(&self) -> u64;
}

/// [`Clock`] backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        current_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_time_non_zero() {
        let timestamp = current_time();
        assert!(timestamp > 0, "Timestamp should be greater than zero");
    }

    #[test]
    fn test_current_time_monotonic() {
        let t1 = current_time();
        let t2 = current_time();
        assert!(t2 >= t1, "Second timestamp should be greater than or equal to the first");
    }

    #[test]
    fn test_system_clock_matches_current_time() {
        let clock = SystemClock;
        let before = current_time();
        let now = clock.now();
        assert!(now >= before);
    }
}
