//! Transport Connectors for the Radio Port
//!
//! ## Overview
//!
//! `nodewatch-core` publishes logical values through its `RadioPublisher`
//! port and leaves encoding and transmission to someone else. This crate is
//! that someone on host builds and gateways: it turns each `(Topic, Payload)`
//! into a topic string plus a JSON body and hands it to a [`Connector`], the
//! same topic/bytes shape an MQTT bridge or a serial gateway expects.
//!
//! ```text
//! Node ──publish(Topic, Payload)──▶ ConnectorRadio ──send(&str, &[u8])──▶ Connector
//!                                    (JSON encode)
//! ```
//!
//! ## Payload Encoding
//!
//! | Payload        | Body                              |
//! |----------------|-----------------------------------|
//! | `Float(21.5)`  | `21.5`                            |
//! | `Float(NaN)`   | `null`                            |
//! | `Acceleration` | `{"x":0.2,"y":-1.6,"z":0.1}`      |
//! | `Uint32(7)`    | `7`                               |
//! | `Uint16(3)`    | `3`                               |
//!
//! The NaN sentinel becomes JSON `null`, so "reported as unavailable" stays
//! distinct from "never reported" on the receiving side.
//!
//! ## Example Usage
//!
//! ```rust
//! use nodewatch_connectors::{ConnectorRadio, memory::MemoryConnector};
//! use nodewatch_core::{Payload, RadioPublisher, Topic};
//!
//! let mut radio = ConnectorRadio::new(MemoryConnector::new());
//! radio.publish(Topic::MagnetCount, Payload::Uint32(7))?;
//!
//! let (topic, body) = &radio.connector().messages()[0];
//! assert_eq!(topic, "magnet/-/count");
//! assert_eq!(body, b"7");
//! # Ok::<(), nodewatch_connectors::ConnectorError>(())
//! ```

pub mod memory;
pub mod radio;

pub use radio::ConnectorRadio;

use thiserror::Error;

/// Common connector errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Not connected")]
    NotConnected,

    #[error("Buffer full")]
    BufferFull,

    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Trait for topic/bytes transports
pub trait Connector {
    type Error;

    /// Send one message
    fn send(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error>;

    /// Check if connected
    fn is_connected(&self) -> bool;
}

/// Connection statistics common to all connectors
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConnectionStats {
    /// Total messages sent successfully
    pub messages_sent: u64,
    /// Total messages failed to send
    pub messages_failed: u64,
    /// Total bytes sent
    pub bytes_sent: u64,
    /// Last error message
    pub last_error: Option<String>,
}
