//! Node configuration
//!
//! One [`NodeConfig`] value describes everything the node behaves by. It is
//! `const`-constructible, so a deployment declares its variant at compile
//! time:
//!
//! ```rust
//! use nodewatch_core::config::{NodeConfig, ScheduleConfig};
//!
//! const BENCH: NodeConfig = NodeConfig::DEFAULT
//!     .with_schedule(ScheduleConfig::new(1_000, 5_000));
//!
//! assert_eq!(BENCH.schedule.period_ms, 5_000);
//! assert_eq!(BENCH.thresholds.max_temperature_c, 35.0);
//! ```
//!
//! [`crate::node::Node`] takes the config by value at construction and exposes
//! no setters afterwards.

use crate::constants::{
    EVENT_PULSE_MS, NODE_NAME, PUBLISH_INTERVAL_MS, PUBLISH_WARMUP_MS, STARTUP_PULSE_MS,
    SWITCH_SCAN_MS, UPDATE_ACCELEROMETER_MS, UPDATE_THERMOMETER_MS,
};
use crate::policy::ThresholdSpec;

/// Periodic publish timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Delay from startup to the first batch (ms)
    pub warmup_ms: u64,
    /// Delay between a batch and the next (ms)
    pub period_ms: u64,
}

impl ScheduleConfig {
    pub const DEFAULT: Self = Self {
        warmup_ms: PUBLISH_WARMUP_MS,
        period_ms: PUBLISH_INTERVAL_MS,
    };

    /// Checked constructor; a zero period fails const evaluation
    pub const fn new(warmup_ms: u64, period_ms: u64) -> Self {
        assert!(period_ms > 0, "publish period must be non-zero");
        Self { warmup_ms, period_ms }
    }
}

/// Status LED pulse lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseConfig {
    /// Per button press / switch opening (ms)
    pub event_ms: u32,
    /// Once at the end of startup (ms)
    pub startup_ms: u32,
}

impl PulseConfig {
    pub const DEFAULT: Self = Self {
        event_ms: EVENT_PULSE_MS,
        startup_ms: STARTUP_PULSE_MS,
    };
}

/// Poll cadence the host must configure its drivers with
///
/// The core does not poll anything itself; these are handed to the board
/// setup code so driver timing and the core's expectations agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverIntervals {
    pub thermometer_ms: u64,
    pub accelerometer_ms: u64,
    pub switch_scan_ms: u64,
}

impl DriverIntervals {
    pub const DEFAULT: Self = Self {
        thermometer_ms: UPDATE_THERMOMETER_MS,
        accelerometer_ms: UPDATE_ACCELEROMETER_MS,
        switch_scan_ms: SWITCH_SCAN_MS,
    };
}

/// Complete node configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeConfig {
    pub thresholds: ThresholdSpec,
    pub schedule: ScheduleConfig,
    pub pulses: PulseConfig,
    pub drivers: DriverIntervals,
    /// Name sent with the pairing request
    pub node_name: &'static str,
    /// Firmware version sent with the pairing request
    pub version: &'static str,
}

impl NodeConfig {
    pub const DEFAULT: Self = Self {
        thresholds: ThresholdSpec::DEFAULT,
        schedule: ScheduleConfig::DEFAULT,
        pulses: PulseConfig::DEFAULT,
        drivers: DriverIntervals::DEFAULT,
        node_name: NODE_NAME,
        version: crate::VERSION,
    };

    pub const fn with_thresholds(mut self, thresholds: ThresholdSpec) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub const fn with_schedule(mut self, schedule: ScheduleConfig) -> Self {
        self.schedule = schedule;
        self
    }

    pub const fn with_pulses(mut self, pulses: PulseConfig) -> Self {
        self.pulses = pulses;
        self
    }

    pub const fn with_drivers(mut self, drivers: DriverIntervals) -> Self {
        self.drivers = drivers;
        self
    }

    pub const fn with_identity(mut self, node_name: &'static str, version: &'static str) -> Self {
        self.node_name = node_name;
        self.version = version;
        self
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
