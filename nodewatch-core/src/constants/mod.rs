//! Constants for the NodeWatch core
//!
//! Every number the node behaves by lives here, grouped by domain:
//! - **Thresholds**: bounds that trigger an out-of-cycle publish
//! - **Time**: warm-up, publish period, driver poll cadence, LED pulses
//! - **Radio**: topic names and node identity
//! - **Buffers**: inbox capacity
//!
//! These are compile-time constants. [`crate::config::NodeConfig::DEFAULT`] is
//! assembled from them and nothing mutates them at runtime.

/// Threshold bounds for immediate publishing.
pub mod thresholds;

/// Time intervals, in milliseconds.
pub mod time;

/// Radio topics and pairing identity.
pub mod radio;

/// Buffer sizes for the cooperative inbox.
pub mod buffers;

pub use thresholds::{MAX_TEMPERATURE_C, MAX_G_X, MAX_G_Y, MAX_G_Z};

pub use time::{
    MS_PER_SECOND, PUBLISH_INTERVAL_MS, PUBLISH_WARMUP_MS,
    UPDATE_THERMOMETER_MS, UPDATE_ACCELEROMETER_MS, SWITCH_SCAN_MS,
    EVENT_PULSE_MS, STARTUP_PULSE_MS,
};

pub use radio::{
    TOPIC_THERMOMETER, TOPIC_ACCELEROMETER, TOPIC_MAGNET_COUNT, TOPIC_PUSH_BUTTON,
    NODE_NAME,
};

pub use buffers::INBOX_CAPACITY;
