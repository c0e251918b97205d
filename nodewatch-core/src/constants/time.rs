//! Time-Related Constants
//!
//! All intervals are milliseconds on the node's monotonic clock.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

// ===== PUBLISH SCHEDULE =====

/// Delay before the first periodic publish after reset (milliseconds).
///
/// Shorter than the steady-state period so the thermometer and accelerometer
/// have produced a first reading before the first report goes out.
pub const PUBLISH_WARMUP_MS: u64 = 10 * MS_PER_SECOND;

/// Steady-state period between batch publishes (milliseconds).
pub const PUBLISH_INTERVAL_MS: u64 = 60 * MS_PER_SECOND;

// ===== DRIVER POLL CADENCE =====
//
// Owned by the drivers. The core only hands these to the host at startup.

/// Thermometer update interval (milliseconds).
pub const UPDATE_THERMOMETER_MS: u64 = 20 * MS_PER_SECOND;

/// Accelerometer update interval (milliseconds).
pub const UPDATE_ACCELEROMETER_MS: u64 = 20 * MS_PER_SECOND;

/// Magnetic switch scan interval (milliseconds).
pub const SWITCH_SCAN_MS: u64 = 20;

// ===== STATUS LED =====

/// Feedback pulse for a discrete event (button press, switch opened).
pub const EVENT_PULSE_MS: u32 = 100;

/// Pulse shown once at the end of startup.
pub const STARTUP_PULSE_MS: u32 = 2000;
