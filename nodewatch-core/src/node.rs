//! Node lifecycle and event loop
//!
//! [`Node`] owns everything the core needs for the life of the process: the
//! configuration, the channel state, the dispatcher, the scheduler, the inbox
//! and the two outbound collaborators. Nothing is global.
//!
//! ## Lifecycle
//!
//! ```text
//! Node::new(config, radio, led)
//!     │
//!     ▼
//! start(now)       LED off, reset banner, pairing request,
//!     │            startup pulse, scheduler armed at now + warmup
//!     ▼
//! loop {
//!     run_once(now)    at most one handler: a queued event,
//!                      or the batch publish if it is due
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nodewatch_core::{Node, NodeConfig, Step};
//! use nodewatch_core::events::ButtonEvent;
//! use nodewatch_core::ports::{Payload, RadioPublisher, StatusLed, Topic};
//!
//! struct Radio;
//! impl RadioPublisher for Radio {
//!     type Error = ();
//!     fn publish(&mut self, _: Topic, _: Payload) -> Result<(), ()> { Ok(()) }
//! }
//!
//! struct Led;
//! impl StatusLed for Led {
//!     fn off(&mut self) {}
//!     fn pulse(&mut self, _: u32) {}
//! }
//!
//! let mut node: Node<Radio, Led> = Node::new(NodeConfig::DEFAULT, Radio, Led);
//! node.start(0);
//!
//! node.submit(ButtonEvent::Press)?;
//! assert!(matches!(node.run_once(5)?, Step::Event(_)));
//! assert!(matches!(node.run_once(10_000)?, Step::Batch(_)));
//! # Ok::<(), nodewatch_core::NodeError>(())
//! ```

use crate::config::NodeConfig;
use crate::constants::INBOX_CAPACITY;
use crate::dispatcher::{EventDispatcher, Outcome};
use crate::errors::{NodeError, NodeResult};
use crate::events::SensorEvent;
use crate::ports::{RadioPublisher, StatusLed};
use crate::queue::EventInbox;
use crate::scheduler::{BatchReport, PublishScheduler};
use crate::state::NodeState;
use crate::time::Timestamp;

/// What one turn of the loop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing pending and no batch due
    Idle,
    /// Handled one driver event
    Event(Outcome),
    /// Fired the periodic batch
    Batch(BatchReport),
}

/// The sensor node's monitoring core
pub struct Node<R, L, const N: usize = INBOX_CAPACITY> {
    config: NodeConfig,
    state: NodeState,
    dispatcher: EventDispatcher,
    scheduler: PublishScheduler,
    inbox: EventInbox<N>,
    radio: R,
    led: L,
    started: bool,
}

impl<R, L, const N: usize> Node<R, L, N>
where
    R: RadioPublisher,
    L: StatusLed,
{
    pub fn new(config: NodeConfig, radio: R, led: L) -> Self {
        Self {
            dispatcher: EventDispatcher::new(&config),
            scheduler: PublishScheduler::new(config.schedule),
            state: NodeState::new(),
            inbox: EventInbox::new(),
            config,
            radio,
            led,
            started: false,
        }
    }

    /// One-time startup sequence
    ///
    /// Returns the deadline of the first batch.
    pub fn start(&mut self, now: Timestamp) -> Timestamp {
        self.led.off();
        node_info!("reset node={} version={}", self.config.node_name, self.config.version);
        node_info!(
            "driver intervals thermometer_ms={} accelerometer_ms={} switch_scan_ms={}",
            self.config.drivers.thermometer_ms,
            self.config.drivers.accelerometer_ms,
            self.config.drivers.switch_scan_ms
        );

        if self.radio.pairing_request(self.config.node_name, self.config.version).is_err() {
            node_warn!("pairing request failed node={}", self.config.node_name);
        }

        self.led.pulse(self.config.pulses.startup_ms);
        self.started = true;
        self.scheduler.start(now)
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Queue a driver event for the next loop turn
    pub fn submit(&mut self, event: impl Into<SensorEvent>) -> NodeResult<()> {
        self.inbox.push(event)
    }

    /// Handle a driver event right away, bypassing the inbox
    ///
    /// For platforms whose drivers already call back from the main loop.
    pub fn handle(&mut self, event: impl Into<SensorEvent>) -> Outcome {
        self.dispatcher
            .dispatch(&mut self.state, &mut self.radio, &mut self.led, event.into())
    }

    /// Run at most one handler
    ///
    /// Queued events go first so a due batch reports the freshest values.
    pub fn run_once(&mut self, now: Timestamp) -> NodeResult<Step> {
        if !self.started {
            return Err(NodeError::NotInitialized);
        }

        if let Some(event) = self.inbox.pop() {
            return Ok(Step::Event(self.handle(event)));
        }

        Ok(self
            .scheduler
            .poll(now, &self.state, &mut self.radio)
            .map_or(Step::Idle, Step::Batch))
    }

    /// Turn the loop until nothing is pending at `now`
    ///
    /// Returns the number of handlers run.
    pub fn run_pending(&mut self, now: Timestamp) -> NodeResult<usize> {
        let mut handled = 0;
        while self.run_once(now)? != Step::Idle {
            handled += 1;
        }
        Ok(handled)
    }

    /// When the loop next has work without new driver events
    ///
    /// The platform may sleep until then.
    pub fn next_wakeup(&self) -> Option<Timestamp> {
        self.scheduler.next_deadline()
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    pub fn scheduler(&self) -> &PublishScheduler {
        &self.scheduler
    }

    pub fn inbox(&self) -> &EventInbox<N> {
        &self.inbox
    }

    pub fn radio(&self) -> &R {
        &self.radio
    }

    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    pub fn led(&self) -> &L {
        &self.led
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ButtonEvent, SwitchEvent};
    use crate::ports::{Payload, Topic};

    #[derive(Default)]
    struct Radio {
        paired: bool,
        sent: u32,
    }

    impl RadioPublisher for Radio {
        type Error = ();

        fn publish(&mut self, _topic: Topic, _payload: Payload) -> Result<(), ()> {
            self.sent += 1;
            Ok(())
        }

        fn pairing_request(&mut self, name: &str, _version: &str) -> Result<(), ()> {
            self.paired = name == "okim-bps-hugo";
            Ok(())
        }
    }

    #[derive(Default)]
    struct Led {
        off: bool,
        last_pulse: Option<u32>,
    }

    impl StatusLed for Led {
        fn off(&mut self) {
            self.off = true;
        }

        fn pulse(&mut self, duration_ms: u32) {
            self.last_pulse = Some(duration_ms);
        }
    }

    fn node() -> Node<Radio, Led> {
        Node::new(NodeConfig::DEFAULT, Radio::default(), Led::default())
    }

    #[test]
    fn loop_refuses_to_run_before_start() {
        let mut node = node();
        assert_eq!(node.run_once(0), Err(NodeError::NotInitialized));
    }

    #[test]
    fn startup_sequence() {
        let mut node = node();
        let first = node.start(1_000);

        assert_eq!(first, 11_000);
        assert_eq!(node.next_wakeup(), Some(11_000));
        assert!(node.radio().paired);
        assert!(node.led().off);
        assert_eq!(node.led().last_pulse, Some(2_000));
    }

    #[test]
    fn events_run_before_due_batch() {
        let mut node = node();
        node.start(0);
        node.submit(SwitchEvent::Opened).unwrap();

        let first = node.run_once(10_000).unwrap();
        assert!(matches!(first, Step::Event(_)));

        match node.run_once(10_000).unwrap() {
            Step::Batch(report) => assert_eq!(report.published, 3),
            other => panic!("expected batch, got {:?}", other),
        }
        assert_eq!(node.run_once(10_000).unwrap(), Step::Idle);
    }

    #[test]
    fn run_pending_drains_inbox() {
        let mut node = node();
        node.start(0);
        node.submit(ButtonEvent::Press).unwrap();
        node.submit(ButtonEvent::Press).unwrap();

        assert_eq!(node.run_pending(5).unwrap(), 2);
        assert_eq!(node.state().button.count(), 2);
        assert_eq!(node.radio().sent, 2);
    }
}
