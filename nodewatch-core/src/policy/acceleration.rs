//! Accelerometer threshold
//!
//! Each axis has its own bound and is compared by magnitude, so a hard knock
//! in either direction along any axis counts as a breach.

use super::{Decision, ThresholdPolicy, ThresholdSpec};
use crate::channel::{Reading, Vector3};

/// Publishes a 3-axis reading immediately when any axis breaches its bound
#[derive(Debug, Clone, Copy)]
pub struct AccelerationThreshold {
    max_g: Vector3,
}

impl Default for AccelerationThreshold {
    fn default() -> Self {
        Self::from_spec(&ThresholdSpec::DEFAULT)
    }
}

impl AccelerationThreshold {
    pub const fn from_spec(spec: &ThresholdSpec) -> Self {
        Self { max_g: spec.max_g }
    }

    pub fn max_g(&self) -> Vector3 {
        self.max_g
    }
}

impl ThresholdPolicy for AccelerationThreshold {
    type Reading = Vector3;

    fn decide(&self, g: &Vector3) -> Decision {
        if !g.is_valid() {
            return Decision::Discard;
        }

        let breach = libm::fabsf(g.x) >= self.max_g.x
            || libm::fabsf(g.y) >= self.max_g.y
            || libm::fabsf(g.z) >= self.max_g.z;

        if breach {
            Decision::PublishNow
        } else {
            Decision::HoldForBatch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_G_X;
    use proptest::prelude::*;

    #[test]
    fn negative_axis_breaches_by_magnitude() {
        let policy = AccelerationThreshold::default();
        assert_eq!(policy.decide(&Vector3::new(0.2, -1.6, 0.1)), Decision::PublishNow);
    }

    #[test]
    fn resting_on_table_holds() {
        // 1 g of gravity on z is below the bound
        let policy = AccelerationThreshold::default();
        assert_eq!(policy.decide(&Vector3::new(0.01, -0.02, 1.0)), Decision::HoldForBatch);
    }

    #[test]
    fn bound_is_inclusive_per_axis() {
        let policy = AccelerationThreshold::default();
        assert_eq!(policy.decide(&Vector3::new(1.5, 0.0, 0.0)), Decision::PublishNow);
        assert_eq!(policy.decide(&Vector3::new(0.0, 0.0, -1.5)), Decision::PublishNow);
        assert_eq!(policy.decide(&Vector3::new(1.49, 1.49, 1.49)), Decision::HoldForBatch);
    }

    #[test]
    fn any_nan_axis_discards() {
        let policy = AccelerationThreshold::default();
        assert_eq!(policy.decide(&Vector3::new(9.0, f32::NAN, 0.0)), Decision::Discard);
        assert_eq!(policy.decide(&Vector3::NAN), Decision::Discard);
    }

    proptest! {
        #[test]
        fn publishes_iff_max_axis_at_or_above_bound(
            x in -4.0f32..4.0,
            y in -4.0f32..4.0,
            z in -4.0f32..4.0,
        ) {
            let g = Vector3::new(x, y, z);
            let decision = AccelerationThreshold::default().decide(&g);
            prop_assert_eq!(decision.publishes_now(), g.max_abs() >= MAX_G_X);
        }
    }
}
