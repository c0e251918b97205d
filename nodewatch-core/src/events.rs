//! Driver Event Types
//!
//! ## Overview
//!
//! Drivers report to the core through one tagged enum, [`SensorEvent`]. Each
//! variant wraps the event kinds of one sensor family, and the dispatcher
//! matches on it exhaustively, so a new event kind cannot be silently
//! ignored by the compiler.
//!
//! ```text
//! DS18B20 poll ──▶ ThermometerEvent ──┐
//! LIS2DH12 poll ─▶ AccelerometerEvent ┤
//! button IRQ ────▶ ButtonEvent ───────┼──▶ SensorEvent ──▶ EventDispatcher
//! reed scan ─────▶ SwitchEvent ───────┘
//! ```
//!
//! ## Read Outcome
//!
//! An `Update` carries the result of the driver's read attempt. A successful
//! update whose read fails arrives as `Update { reading: Err(..) }` and is
//! handled like an `Error` event: the channel goes invalid.
//!
//! ## Memory Model
//!
//! Events are `Copy`, stack-sized and carry no references, so interrupt-side
//! drivers can hand them to [`crate::queue::EventInbox`] without lifetimes.

use crate::channel::{ChannelId, Vector3};
use crate::errors::SensorResult;

/// 1-Wire ROM address of a thermometer probe
pub type DeviceAddress = u64;

/// Thermometer driver events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThermometerEvent {
    /// Conversion finished; `reading` is the read attempt's result (°C)
    Update {
        device: DeviceAddress,
        reading: SensorResult<f32>,
    },
    /// Driver-level failure (bus fault, probe missing)
    Error {
        device: DeviceAddress,
    },
}

/// Accelerometer driver events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccelerometerEvent {
    /// Sample ready; the read attempt's result in g
    Update(SensorResult<Vector3>),
    /// Driver-level failure
    Error,
}

/// Push-button events
///
/// Only `Press` is acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Press,
    Release,
    Click,
    Hold,
}

/// Magnetic reed switch events
///
/// Only `Opened` is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchEvent {
    Opened,
    Closed,
}

/// Any event a driver can deliver to the core
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorEvent {
    Thermometer(ThermometerEvent),
    Accelerometer(AccelerometerEvent),
    Button(ButtonEvent),
    Switch(SwitchEvent),
}

impl SensorEvent {
    /// Channel this event writes to
    pub const fn channel(&self) -> ChannelId {
        match self {
            SensorEvent::Thermometer(_) => ChannelId::Thermometer,
            SensorEvent::Accelerometer(_) => ChannelId::Accelerometer,
            SensorEvent::Button(_) => ChannelId::Button,
            SensorEvent::Switch(_) => ChannelId::SwitchCounter,
        }
    }
}

impl From<ThermometerEvent> for SensorEvent {
    fn from(event: ThermometerEvent) -> Self {
        SensorEvent::Thermometer(event)
    }
}

impl From<AccelerometerEvent> for SensorEvent {
    fn from(event: AccelerometerEvent) -> Self {
        SensorEvent::Accelerometer(event)
    }
}

impl From<ButtonEvent> for SensorEvent {
    fn from(event: ButtonEvent) -> Self {
        SensorEvent::Button(event)
    }
}

impl From<SwitchEvent> for SensorEvent {
    fn from(event: SwitchEvent) -> Self {
        SensorEvent::Switch(event)
    }
}
