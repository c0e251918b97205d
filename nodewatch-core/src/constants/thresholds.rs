//! Threshold Bounds
//!
//! A reading at or above its bound is published immediately, in addition to
//! the next periodic batch. Bounds are inclusive.

// ===== THERMOMETER =====

/// Upper temperature bound (°C).
///
/// External DS18B20 probe. `35.0` is a breach, `34.9` is not.
pub const MAX_TEMPERATURE_C: f32 = 35.0;

// ===== ACCELEROMETER =====

/// X axis bound (g), compared against the absolute axis value.
pub const MAX_G_X: f32 = 1.5;

/// Y axis bound (g), compared against the absolute axis value.
pub const MAX_G_Y: f32 = 1.5;

/// Z axis bound (g), compared against the absolute axis value.
pub const MAX_G_Z: f32 = 1.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_bounds_are_positive() {
        for bound in [MAX_G_X, MAX_G_Y, MAX_G_Z] {
            assert!(bound > 0.0);
        }
    }
}
