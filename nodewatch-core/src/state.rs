//! Node state
//!
//! All mutable sensor state lives in one [`NodeState`], created once at startup
//! and owned by [`crate::node::Node`] for the rest of the process. Handlers get
//! `&mut NodeState`, the scheduler gets `&NodeState`; the cooperative loop
//! guarantees only one of them runs at a time, so there is no locking.

use crate::channel::{ChannelId, CounterChannel, SensorChannel, Vector3};

/// Latest value of every channel on the node
#[derive(Debug, Clone)]
pub struct NodeState {
    pub thermometer: SensorChannel<f32>,
    pub accelerometer: SensorChannel<Vector3>,
    pub magnet: CounterChannel<u32>,
    pub button: CounterChannel<u16>,
}

impl NodeState {
    pub fn new() -> Self {
        Self {
            thermometer: SensorChannel::new(ChannelId::Thermometer),
            accelerometer: SensorChannel::new(ChannelId::Accelerometer),
            magnet: CounterChannel::new(ChannelId::SwitchCounter),
            button: CounterChannel::new(ChannelId::Button),
        }
    }

    /// Copy of every value, sentinels included
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            temperature: self.thermometer.value(),
            temperature_valid: self.thermometer.is_valid(),
            acceleration: self.accelerometer.value(),
            acceleration_valid: self.accelerometer.is_valid(),
            magnet_count: self.magnet.count(),
            button_count: self.button.count(),
        }
    }
}

impl Default for NodeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of [`NodeState`]
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub temperature: f32,
    pub temperature_valid: bool,
    pub acceleration: Vector3,
    pub acceleration_valid: bool,
    pub magnet_count: u32,
    pub button_count: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_unreported() {
        let snapshot = NodeState::new().snapshot();

        assert!(!snapshot.temperature_valid);
        assert!(snapshot.temperature.is_nan());
        assert!(!snapshot.acceleration_valid);
        assert_eq!(snapshot.magnet_count, 0);
        assert_eq!(snapshot.button_count, 0);
    }

    #[test]
    fn channels_carry_their_ids() {
        let state = NodeState::new();
        assert_eq!(state.thermometer.id(), ChannelId::Thermometer);
        assert_eq!(state.accelerometer.id(), ChannelId::Accelerometer);
        assert_eq!(state.magnet.id(), ChannelId::SwitchCounter);
        assert_eq!(state.button.id(), ChannelId::Button);
    }
}
