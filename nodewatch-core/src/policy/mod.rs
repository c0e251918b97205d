//! Threshold Policies
//!
//! ## Overview
//!
//! A policy is a pure function from one new reading (or discrete event) to a
//! [`Decision`]: publish now, hold for the next periodic batch, or discard.
//! Policies hold only their compile-time bounds and never change them.
//!
//! | Channel        | Publishes now when                        |
//! |----------------|-------------------------------------------|
//! | Thermometer    | valid and `t ≥ 35.0`                      |
//! | Accelerometer  | valid and any `|axis| ≥ 1.5`              |
//! | Button         | every press                               |
//! | Switch counter | never (periodic batch only)               |
//!
//! ## Invalid Readings
//!
//! An invalid value (NaN or infinite) is always [`Decision::Discard`],
//! checked before any comparison.
//!
//! ## Usage Example
//!
//! ```rust
//! use nodewatch_core::policy::{Decision, ThresholdPolicy, TemperatureThreshold};
//!
//! let policy = TemperatureThreshold::default();
//!
//! assert_eq!(policy.decide(&34.9), Decision::HoldForBatch);
//! assert_eq!(policy.decide(&35.0), Decision::PublishNow);
//! assert_eq!(policy.decide(&f32::NAN), Decision::Discard);
//! ```

mod acceleration;
mod discrete;
mod temperature;

pub use acceleration::AccelerationThreshold;
pub use discrete::{ButtonPolicy, SwitchPolicy};
pub use temperature::TemperatureThreshold;

use crate::channel::Vector3;
use crate::constants::{MAX_G_X, MAX_G_Y, MAX_G_Z, MAX_TEMPERATURE_C};

/// What to do with a new reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decision {
    /// Publish this reading immediately, out of cycle
    PublishNow,
    /// Keep it for the next periodic batch
    HoldForBatch,
    /// Reading unusable, nothing to publish
    Discard,
}

impl Decision {
    pub const fn publishes_now(&self) -> bool {
        matches!(self, Decision::PublishNow)
    }
}

/// Core policy trait - one implementation per channel type
pub trait ThresholdPolicy {
    /// The reading (or event) this policy decides on
    type Reading;

    /// Decide what to do with one reading
    fn decide(&self, reading: &Self::Reading) -> Decision;
}

/// Per-channel bounds
///
/// Only measured channels have bounds; the counters are event-driven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSpec {
    /// Thermometer upper bound, °C, inclusive
    pub max_temperature_c: f32,
    /// Per-axis acceleration bounds, g, compared by absolute value
    pub max_g: Vector3,
}

impl ThresholdSpec {
    pub const DEFAULT: Self = Self {
        max_temperature_c: MAX_TEMPERATURE_C,
        max_g: Vector3::new(MAX_G_X, MAX_G_Y, MAX_G_Z),
    };
}

impl Default for ThresholdSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}
