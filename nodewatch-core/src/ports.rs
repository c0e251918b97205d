//! Outbound ports
//!
//! The core calls out to two collaborators it does not implement:
//! - [`RadioPublisher`]: serializes and transmits one named value
//! - [`StatusLed`]: the single status LED, pulsed on discrete events
//!
//! Both are fire-and-forget. The core never waits on either and never tracks
//! an acknowledgment; retry, backoff and encryption live in the transport.
//!
//! # Example Implementation
//!
//! ```ignore
//! struct BigClownRadio;
//!
//! impl RadioPublisher for BigClownRadio {
//!     type Error = RadioBusy;
//!
//!     fn publish(&mut self, topic: Topic, payload: Payload) -> Result<(), RadioBusy> {
//!         match payload {
//!             Payload::Float(v) => sdk::radio_pub_float(topic.as_str(), v),
//!             Payload::Acceleration(g) => sdk::radio_pub_acceleration(g.x, g.y, g.z),
//!             Payload::Uint32(n) => sdk::radio_pub_uint32(topic.as_str(), n),
//!             Payload::Uint16(n) => sdk::radio_pub_push_button(n),
//!         }
//!     }
//! }
//! ```

use core::fmt;

use crate::channel::Vector3;
use crate::constants::{TOPIC_ACCELEROMETER, TOPIC_MAGNET_COUNT, TOPIC_PUSH_BUTTON, TOPIC_THERMOMETER};
use crate::errors::{NodeError, NodeResult};

/// Radio topics the core publishes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Topic {
    /// `f32` °C
    Thermometer,
    /// [`Vector3`] in g
    Accelerometer,
    /// `u32` switch openings
    MagnetCount,
    /// `u16` button presses
    PushButton,
}

impl Topic {
    /// Topics sent on every periodic batch, in order
    pub const BATCH: [Topic; 3] = [Topic::Thermometer, Topic::Accelerometer, Topic::MagnetCount];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Topic::Thermometer => TOPIC_THERMOMETER,
            Topic::Accelerometer => TOPIC_ACCELEROMETER,
            Topic::MagnetCount => TOPIC_MAGNET_COUNT,
            Topic::PushButton => TOPIC_PUSH_BUTTON,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical value of one publish
///
/// Sentinels (NaN) are published as-is. Encoding them is the transport's job.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Payload {
    Float(f32),
    Acceleration(Vector3),
    Uint32(u32),
    Uint16(u16),
}

/// Radio transport, external to the core
pub trait RadioPublisher {
    /// Local submission failure (radio busy, not paired)
    type Error: fmt::Debug;

    /// Queue one value for transmission
    fn publish(&mut self, topic: Topic, payload: Payload) -> Result<(), Self::Error>;

    /// Announce the node to the gateway once at startup
    fn pairing_request(&mut self, _name: &str, _version: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Single status LED
pub trait StatusLed {
    /// Switch the LED off
    fn off(&mut self);

    /// Light the LED for `duration_ms`, then turn it off without blocking
    fn pulse(&mut self, duration_ms: u32);
}

/// Publish and log the result
///
/// A refusal comes back as [`NodeError::Publish`] after it is logged; callers
/// record it and carry on.
pub(crate) fn publish_logged<R: RadioPublisher>(radio: &mut R, topic: Topic, payload: Payload) -> NodeResult<()> {
    match radio.publish(topic, payload) {
        Ok(()) => {
            node_debug!("publish topic={}", topic.as_str());
            Ok(())
        }
        Err(_) => {
            let err = NodeError::Publish { topic: topic.as_str() };
            node_warn!("publish failed error={}", err);
            Err(err)
        }
    }
}
