//! Common test utilities for integration tests
//!
//! This module provides:
//! - A recording radio that keeps every publish in order
//! - A recording status LED
//! - A simulated node driven by a fixed clock

#![allow(dead_code)]

use nodewatch_core::{
    events::SensorEvent,
    time::{FixedTime, TimeSource, Timestamp},
    Node, NodeConfig, Payload, RadioPublisher, StatusLed, Step, Topic,
};

/// One accepted publish
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sent {
    pub at: Timestamp,
    pub topic: Topic,
    pub payload: Payload,
}

/// Radio that records everything it is asked to send
#[derive(Default)]
pub struct RecordingRadio {
    pub sent: Vec<Sent>,
    pub pairing: Option<(String, String)>,
    /// Refuse every publish (radio busy)
    pub refuse: bool,
    now: Timestamp,
}

impl RecordingRadio {
    pub fn on(&self, topic: Topic) -> Vec<Sent> {
        self.sent.iter().filter(|s| s.topic == topic).copied().collect()
    }

    pub fn clear(&mut self) {
        self.sent.clear();
    }
}

impl RadioPublisher for RecordingRadio {
    type Error = &'static str;

    fn publish(&mut self, topic: Topic, payload: Payload) -> Result<(), Self::Error> {
        if self.refuse {
            return Err("radio busy");
        }
        self.sent.push(Sent { at: self.now, topic, payload });
        Ok(())
    }

    fn pairing_request(&mut self, name: &str, version: &str) -> Result<(), Self::Error> {
        self.pairing = Some((name.to_string(), version.to_string()));
        Ok(())
    }
}

/// LED that records pulse durations
#[derive(Default)]
pub struct RecordingLed {
    pub pulses: Vec<u32>,
    pub switched_off: usize,
}

impl StatusLed for RecordingLed {
    fn off(&mut self) {
        self.switched_off += 1;
    }

    fn pulse(&mut self, duration_ms: u32) {
        self.pulses.push(duration_ms);
    }
}

/// Node wired to recording collaborators and a fixed clock
pub struct SimulatedNode {
    pub node: Node<RecordingRadio, RecordingLed>,
    pub clock: FixedTime,
}

impl SimulatedNode {
    /// Started node at `t0`
    pub fn start(t0: Timestamp) -> Self {
        Self::with_config(NodeConfig::DEFAULT, t0)
    }

    pub fn with_config(config: NodeConfig, t0: Timestamp) -> Self {
        let mut node = Node::new(config, RecordingRadio::default(), RecordingLed::default());
        node.radio_mut().now = t0;
        node.start(t0);
        Self { node, clock: FixedTime::new(t0) }
    }

    /// Deliver a driver event and run it to completion
    pub fn deliver(&mut self, event: impl Into<SensorEvent>) {
        self.node.submit(event).expect("inbox has room");
        self.settle();
    }

    /// Move the clock forward, running the loop at every millisecond the
    /// scheduler could fire on
    pub fn advance(&mut self, ms: u64) {
        let target = self.clock.now() + ms;
        while let Some(deadline) = self.node.next_wakeup() {
            if deadline > target {
                break;
            }
            self.clock.set(deadline);
            self.settle();
        }
        self.clock.set(target);
        self.settle();
    }

    pub fn radio(&self) -> &RecordingRadio {
        self.node.radio()
    }

    pub fn radio_mut(&mut self) -> &mut RecordingRadio {
        self.node.radio_mut()
    }

    /// Times at which a batch fired
    pub fn batch_times(&self) -> Vec<Timestamp> {
        let mut times: Vec<Timestamp> = self
            .radio()
            .on(Topic::MagnetCount)
            .iter()
            .map(|s| s.at)
            .collect();
        times.dedup();
        times
    }

    fn settle(&mut self) {
        let now = self.clock.now();
        self.node.radio_mut().now = now;
        loop {
            match self.node.run_once(now).expect("node started") {
                Step::Idle => break,
                Step::Event(_) | Step::Batch(_) => {}
            }
        }
    }
}
