//! Discrete event policies
//!
//! The button and the magnetic switch report counts, not measurements.
//! Button presses go out immediately. Switch openings are only reported in
//! the periodic batch.

use super::{Decision, ThresholdPolicy};

/// Every press publishes immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonPolicy;

impl ThresholdPolicy for ButtonPolicy {
    type Reading = u16;

    fn decide(&self, _count: &u16) -> Decision {
        Decision::PublishNow
    }
}

/// Switch openings wait for the periodic batch
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchPolicy;

impl ThresholdPolicy for SwitchPolicy {
    type Reading = u32;

    fn decide(&self, _count: &u32) -> Decision {
        Decision::HoldForBatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_always_publishes() {
        for count in [0u16, 1, 500, u16::MAX] {
            assert_eq!(ButtonPolicy.decide(&count), Decision::PublishNow);
        }
    }

    #[test]
    fn switch_never_publishes() {
        for count in [0u32, 1, 70_000, u32::MAX] {
            assert_eq!(SwitchPolicy.decide(&count), Decision::HoldForBatch);
        }
    }
}
