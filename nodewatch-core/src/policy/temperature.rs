//! Thermometer threshold

use super::{Decision, ThresholdPolicy, ThresholdSpec};
use crate::channel::Reading;
use crate::constants::MAX_TEMPERATURE_C;

/// Publishes a temperature immediately at or above a fixed bound
#[derive(Debug, Clone, Copy)]
pub struct TemperatureThreshold {
    max_celsius: f32,
}

impl Default for TemperatureThreshold {
    fn default() -> Self {
        Self { max_celsius: MAX_TEMPERATURE_C }
    }
}

impl TemperatureThreshold {
    pub const fn from_spec(spec: &ThresholdSpec) -> Self {
        Self { max_celsius: spec.max_temperature_c }
    }

    pub fn max_celsius(&self) -> f32 {
        self.max_celsius
    }
}

impl ThresholdPolicy for TemperatureThreshold {
    type Reading = f32;

    fn decide(&self, celsius: &f32) -> Decision {
        if !celsius.is_valid() {
            return Decision::Discard;
        }

        if *celsius >= self.max_celsius {
            Decision::PublishNow
        } else {
            Decision::HoldForBatch
        }
    }
}
