//! Sensor Channels
//!
//! ## Overview
//!
//! A channel is the node's view of one physical sensor: the latest value plus
//! a validity flag. There are four of them, owned together by
//! [`crate::state::NodeState`]:
//!
//! | Channel        | Value           | Writer               |
//! |----------------|-----------------|----------------------|
//! | Thermometer    | `f32` °C        | thermometer callback |
//! | Accelerometer  | [`Vector3`] g   | accelerometer callback |
//! | SwitchCounter  | `u32` openings  | switch callback      |
//! | Button         | `u16` presses   | button callback      |
//!
//! ## Invalid Readings
//!
//! Measured channels start invalid and become invalid again whenever the
//! driver reports an error. An invalid channel holds the NaN sentinel, not the
//! last good value, so the periodic batch publishes "unavailable" instead of a
//! stale reading:
//!
//! ```text
//! reset ──▶ [NaN, invalid] ──Update(ok)──▶ [v, valid]
//!                 ▲                           │
//!                 └──────Error / read fail────┘
//! ```
//!
//! Counters are always valid. They only ever grow, wrapping at the type's
//! maximum.

use core::fmt;

use crate::errors::{SensorError, SensorResult};

/// Identifies one of the four physical sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChannelId {
    Thermometer = 0,
    Accelerometer = 1,
    SwitchCounter = 2,
    Button = 3,
}

impl ChannelId {
    /// All channels, in reporting order
    pub const ALL: [ChannelId; 4] = [
        ChannelId::Thermometer,
        ChannelId::Accelerometer,
        ChannelId::SwitchCounter,
        ChannelId::Button,
    ];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            ChannelId::Thermometer => "thermometer",
            ChannelId::Accelerometer => "accelerometer",
            ChannelId::SwitchCounter => "magnet",
            ChannelId::Button => "push-button",
        }
    }
}

/// Three-axis acceleration in g
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// All three axes set to the sentinel
    pub const NAN: Self = Self::new(f32::NAN, f32::NAN, f32::NAN);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Largest absolute axis value (NaN if any axis is NaN)
    pub fn max_abs(&self) -> f32 {
        if !self.is_valid() {
            return f32::NAN;
        }
        libm::fmaxf(
            libm::fabsf(self.x),
            libm::fmaxf(libm::fabsf(self.y), libm::fabsf(self.z)),
        )
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2},{:.2},{:.2}]", self.x, self.y, self.z)
    }
}

/// A value a measured channel can hold
pub trait Reading: Copy {
    /// Stored while the channel is invalid
    const SENTINEL: Self;

    /// Check the value is a real measurement (not NaN or infinite)
    fn is_valid(&self) -> bool;
}

impl Reading for f32 {
    const SENTINEL: Self = f32::NAN;

    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Reading for Vector3 {
    const SENTINEL: Self = Vector3::NAN;

    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Latest reading of a measured sensor
#[derive(Debug, Clone, Copy)]
pub struct SensorChannel<T: Reading> {
    id: ChannelId,
    value: T,
    valid: bool,
}

impl<T: Reading> SensorChannel<T> {
    /// Create an invalid channel holding the sentinel
    pub const fn new(id: ChannelId) -> Self {
        Self {
            id,
            value: T::SENTINEL,
            valid: false,
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Store a successful reading
    ///
    /// A non-finite value from a misbehaving driver is treated as a failed
    /// read: the channel is invalidated instead.
    pub fn record(&mut self, value: T) {
        if value.is_valid() {
            self.value = value;
            self.valid = true;
        } else {
            self.invalidate();
        }
    }

    /// Drop the current value and store the sentinel
    pub fn invalidate(&mut self) {
        self.value = T::SENTINEL;
        self.valid = false;
    }

    /// Current value, sentinel included. This is what gets published.
    pub fn value(&self) -> T {
        self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Current value if valid
    pub fn latest(&self) -> SensorResult<T> {
        if self.valid {
            Ok(self.value)
        } else {
            Err(SensorError::NotReady)
        }
    }
}

/// Integer types usable as an event counter
pub trait CounterValue: Copy + Default + PartialEq + fmt::Debug {
    /// Add one, wrapping at the type's maximum
    fn increment(self) -> Self;
}

impl CounterValue for u16 {
    fn increment(self) -> Self {
        self.wrapping_add(1)
    }
}

impl CounterValue for u32 {
    fn increment(self) -> Self {
        self.wrapping_add(1)
    }
}

/// Count of discrete events on one sensor
///
/// Never reset. Incremented only by its own handler.
#[derive(Debug, Clone, Copy)]
pub struct CounterChannel<T: CounterValue> {
    id: ChannelId,
    count: T,
}

impl<T: CounterValue> CounterChannel<T> {
    pub fn new(id: ChannelId) -> Self {
        Self { id, count: T::default() }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Count one event and return the new total
    pub fn increment(&mut self) -> T {
        self.count = self.count.increment();
        self.count
    }

    pub fn count(&self) -> T {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_starts_invalid_with_sentinel() {
        let channel = SensorChannel::<f32>::new(ChannelId::Thermometer);
        assert!(!channel.is_valid());
        assert!(channel.value().is_nan());
        assert_eq!(channel.latest(), Err(SensorError::NotReady));
    }

    #[test]
    fn invalidate_discards_last_good_value() {
        let mut channel = SensorChannel::<f32>::new(ChannelId::Thermometer);
        channel.record(22.5);
        assert_eq!(channel.latest(), Ok(22.5));

        channel.invalidate();
        assert!(channel.value().is_nan());

        // Recovers on the next good reading
        channel.record(23.0);
        assert_eq!(channel.value(), 23.0);
    }

    #[test]
    fn non_finite_record_invalidates() {
        let mut channel = SensorChannel::<Vector3>::new(ChannelId::Accelerometer);
        channel.record(Vector3::new(0.0, 0.0, 1.0));
        channel.record(Vector3::new(0.0, f32::INFINITY, 1.0));
        assert!(!channel.is_valid());
        assert!(!channel.value().is_valid());
    }

    #[test]
    fn max_abs_picks_largest_axis() {
        assert_eq!(Vector3::new(0.2, -1.6, 0.1).max_abs(), 1.6);
        assert!(Vector3::NAN.max_abs().is_nan());
    }

    #[test]
    fn counters_wrap_at_max() {
        let mut button = CounterChannel::<u16>::new(ChannelId::Button);
        for _ in 0..u16::MAX {
            button.increment();
        }
        assert_eq!(button.count(), u16::MAX);
        assert_eq!(button.increment(), 0);
    }

    #[test]
    fn magnet_counter_wraps_at_u32_max() {
        let mut magnet = CounterChannel::<u32> { id: ChannelId::SwitchCounter, count: u32::MAX - 1 };

        assert_eq!(magnet.increment(), u32::MAX);
        assert_eq!(magnet.increment(), 0);
        assert_eq!(magnet.increment(), 1);
    }
}
