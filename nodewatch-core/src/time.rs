//! Time management for the node
//!
//! The scheduler never reads a clock itself; the event loop passes `now` in.
//! A [`TimeSource`] is what the loop reads it from:
//! - Hardware tick counter (provided by the board support crate)
//! - [`StdMonotonic`] on a host build
//! - [`FixedTime`] for tests and simulation

/// Milliseconds since reset on the node's monotonic clock
pub type Timestamp = u64;

/// Source of time for the event loop
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Host monotonic clock, zero at construction (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct StdMonotonic {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdMonotonic {
    pub fn new() -> Self {
        Self { start: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for StdMonotonic {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for StdMonotonic {
    fn now(&self) -> Timestamp {
        self.start.elapsed().as_millis() as Timestamp
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// `true` once `now` has reached `deadline`
///
/// Saturating, so a deadline in the past is always due.
pub fn is_due(now: Timestamp, deadline: Timestamp) -> bool {
    deadline.saturating_sub(now) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);
    }

    #[test]
    fn due_at_and_after_deadline() {
        assert!(!is_due(9_999, 10_000));
        assert!(is_due(10_000, 10_000));
        assert!(is_due(10_001, 10_000));
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_monotonic_starts_near_zero() {
        let clock = StdMonotonic::new();
        assert!(clock.now() < 1_000);
    }
}
