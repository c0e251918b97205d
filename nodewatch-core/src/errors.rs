//! Error Types for the Monitoring Core
//!
//! ## Design Philosophy
//!
//! Errors follow the same constraints as the rest of the core:
//!
//! 1. **No Heap Allocation**: variants carry only `Copy` data and `&'static str`.
//!
//! 2. **Copy Semantics**: errors are returned from handlers that run inside an
//!    interrupt-fed loop, so they must be cheap to move and log.
//!
//! 3. **Never Fatal**: nothing in this crate aborts the node. A failed reading
//!    marks its channel invalid; a failed publish is logged and dropped.
//!
//! ## Error Categories
//!
//! ### Sensor Read Failures ([`SensorError`])
//! - `ReadFailed`: an `Update` arrived but the driver produced no usable value
//! - `Driver`: the driver raised its own error event
//! - `NotReady`: the channel has never held a valid reading
//!
//! Handled locally: the channel takes the NaN sentinel and the next successful
//! update restores it. The next scheduled poll is the implicit retry.
//!
//! ### Node Failures ([`NodeError`])
//! - `QueueFull`: the cooperative inbox had no room for a driver event
//! - `Publish`: the radio transport refused a message
//! - `NotInitialized`: the loop was driven before the startup sequence ran
//!
//! ```rust
//! use nodewatch_core::{SensorError, SensorChannel, ChannelId};
//!
//! let mut channel = SensorChannel::<f32>::new(ChannelId::Thermometer);
//! match channel.latest() {
//!     Ok(celsius) => { let _ = celsius; }
//!     Err(SensorError::NotReady) => { /* no reading yet */ }
//!     Err(_) => {}
//! }
//! channel.record(21.5);
//! assert_eq!(channel.latest(), Ok(21.5));
//! ```

use thiserror_no_std::Error;

/// Result type for sensor reads
pub type SensorResult<T> = Result<T, SensorError>;

/// Result type for node operations
pub type NodeResult<T> = Result<T, NodeError>;

/// Why a channel has no usable value
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Driver signalled an update but the value could not be read
    #[error("Sensor read failed")]
    ReadFailed,

    /// Driver reported an error event
    #[error("Sensor driver error")]
    Driver,

    /// No successful reading since reset
    #[error("Sensor has not produced a reading yet")]
    NotReady,
}

/// Failures at the node boundary, all recoverable
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    /// Inbox full, event dropped
    #[error("Event inbox full ({capacity} pending)")]
    QueueFull {
        /// Inbox capacity at the time of the drop
        capacity: usize,
    },

    /// Radio transport rejected a message
    #[error("Publish to {topic} failed")]
    Publish {
        /// Topic of the rejected message
        topic: &'static str,
    },

    /// Event loop driven before startup completed
    #[error("Node not initialized")]
    NotInitialized,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ReadFailed => defmt::write!(fmt, "Sensor read failed"),
            Self::Driver => defmt::write!(fmt, "Sensor driver error"),
            Self::NotReady => defmt::write!(fmt, "Sensor not ready"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for NodeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::QueueFull { capacity } =>
                defmt::write!(fmt, "Inbox full ({} pending)", capacity),
            Self::Publish { topic } =>
                defmt::write!(fmt, "Publish to {} failed", topic),
            Self::NotInitialized =>
                defmt::write!(fmt, "Node not initialized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_small() {
        assert!(core::mem::size_of::<SensorError>() <= 1);
        assert!(core::mem::size_of::<NodeError>() <= 24);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_names_topic() {
        let err = NodeError::Publish { topic: "magnet/-/count" };
        assert_eq!(err.to_string(), "Publish to magnet/-/count failed");
    }
}
