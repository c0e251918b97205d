//! Monitoring and publish-scheduling core for NodeWatch sensor nodes
//!
//! Decides, for every sensor reading or discrete event, whether to publish it
//! now, hold it for the next periodic batch, or drop it, and runs the periodic
//! batch on its own timer. Drivers, the radio and the LED are collaborators
//! behind the traits in [`ports`].
//!
//! Key constraints:
//! - Battery node, radio asleep most of the time
//! - No heap allocation, no locks
//! - Every handler runs to completion without blocking
//!
//! ```no_run
//! use nodewatch_core::{Node, NodeConfig};
//! use nodewatch_core::events::ThermometerEvent;
//! use nodewatch_core::time::{StdMonotonic, TimeSource};
//! # use nodewatch_core::ports::{Payload, RadioPublisher, StatusLed, Topic};
//! # struct Radio;
//! # impl RadioPublisher for Radio {
//! #     type Error = ();
//! #     fn publish(&mut self, _: Topic, _: Payload) -> Result<(), ()> { Ok(()) }
//! # }
//! # struct Led;
//! # impl StatusLed for Led { fn off(&mut self) {} fn pulse(&mut self, _: u32) {} }
//!
//! let clock = StdMonotonic::new();
//! let mut node: Node<Radio, Led> = Node::new(NodeConfig::DEFAULT, Radio, Led);
//! node.start(clock.now());
//!
//! // From the thermometer driver
//! let _ = node.submit(ThermometerEvent::Update { device: 0x28, reading: Ok(36.2) });
//!
//! loop {
//!     let _ = node.run_pending(clock.now());
//!     // sleep until node.next_wakeup() or the next interrupt
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod logging;

pub mod channel;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod errors;
pub mod events;
pub mod node;
pub mod policy;
pub mod ports;
pub mod queue;
pub mod scheduler;
pub mod state;
pub mod time;

// Public API
pub use channel::{ChannelId, CounterChannel, SensorChannel, Vector3};
pub use config::NodeConfig;
pub use dispatcher::{EventDispatcher, Outcome};
pub use errors::{NodeError, NodeResult, SensorError, SensorResult};
pub use events::SensorEvent;
pub use node::{Node, Step};
pub use policy::{Decision, ThresholdPolicy, ThresholdSpec};
pub use ports::{Payload, RadioPublisher, StatusLed, Topic};
pub use scheduler::{PublishScheduler, ScheduleState};
pub use state::NodeState;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
