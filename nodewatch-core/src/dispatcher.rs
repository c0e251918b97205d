//! Event Dispatcher
//!
//! ## Overview
//!
//! The dispatcher is the inbound port of the core. Every driver callback ends
//! up in [`EventDispatcher::dispatch`], which:
//!
//! 1. updates the channel the event belongs to,
//! 2. asks that channel's [`ThresholdPolicy`] for a [`Decision`],
//! 3. publishes immediately when the decision says so.
//!
//! ```text
//! SensorEvent ──▶ match ──▶ channel update ──▶ policy ──▶ PublishNow? ──▶ radio
//!                                                            │
//!                                                            └─ otherwise: wait for batch
//! ```
//!
//! An immediate publish is in addition to the next periodic batch, never
//! instead of it.
//!
//! ## Per-Sensor Behavior
//!
//! | Event                     | Channel            | LED    | Publish now         |
//! |---------------------------|--------------------|--------|---------------------|
//! | Thermometer `Update(ok)`  | store °C           | -      | if `t ≥ 35.0`       |
//! | Accelerometer `Update(ok)`| store xyz          | -      | if any `|a| ≥ 1.5`  |
//! | Thermometer/Accel failure | NaN, invalid       | -      | never               |
//! | Button `Press`            | count + 1          | pulse  | always              |
//! | Switch `Opened`           | count + 1          | pulse  | never               |
//! | anything else             | untouched          | -      | never               |
//!
//! ## Concurrency
//!
//! Handlers run to completion on the cooperative loop and never block. The
//! dispatcher itself is immutable after construction; all state it writes is
//! passed in.

use crate::channel::{ChannelId, Reading};
use crate::config::{NodeConfig, PulseConfig};
use crate::errors::SensorError;
use crate::events::{AccelerometerEvent, ButtonEvent, SensorEvent, SwitchEvent, ThermometerEvent};
use crate::policy::{
    AccelerationThreshold, ButtonPolicy, Decision, SwitchPolicy, TemperatureThreshold,
    ThresholdPolicy,
};
use crate::ports::{publish_logged, Payload, RadioPublisher, StatusLed, Topic};
use crate::state::NodeState;

/// What a handler did with one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Channel the event belonged to
    pub channel: ChannelId,
    /// Policy decision for the event
    pub decision: Decision,
    /// An immediate publish was accepted by the transport
    pub published: bool,
}

impl Outcome {
    fn new(channel: ChannelId, decision: Decision) -> Self {
        Self { channel, decision, published: false }
    }

    fn ignored(channel: ChannelId) -> Self {
        Self::new(channel, Decision::Discard)
    }
}

/// Routes driver events to channel updates and immediate publishes
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    temperature: TemperatureThreshold,
    acceleration: AccelerationThreshold,
    button: ButtonPolicy,
    switch: SwitchPolicy,
    pulses: PulseConfig,
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(&NodeConfig::DEFAULT)
    }
}

impl EventDispatcher {
    pub fn new(config: &NodeConfig) -> Self {
        Self {
            temperature: TemperatureThreshold::from_spec(&config.thresholds),
            acceleration: AccelerationThreshold::from_spec(&config.thresholds),
            button: ButtonPolicy,
            switch: SwitchPolicy,
            pulses: config.pulses,
        }
    }

    /// Handle one driver event
    pub fn dispatch<R, L>(
        &self,
        state: &mut NodeState,
        radio: &mut R,
        led: &mut L,
        event: SensorEvent,
    ) -> Outcome
    where
        R: RadioPublisher,
        L: StatusLed,
    {
        match event {
            SensorEvent::Thermometer(event) => self.on_thermometer(state, radio, event),
            SensorEvent::Accelerometer(event) => self.on_accelerometer(state, radio, event),
            SensorEvent::Button(event) => self.on_button(state, radio, led, event),
            SensorEvent::Switch(event) => self.on_switch(state, led, event),
        }
    }

    /// Thermometer callback
    pub fn on_thermometer<R: RadioPublisher>(
        &self,
        state: &mut NodeState,
        radio: &mut R,
        event: ThermometerEvent,
    ) -> Outcome {
        let (device, reading) = match event {
            ThermometerEvent::Update { device, reading } => (device, reading),
            ThermometerEvent::Error { device } => (device, Err(SensorError::Driver)),
        };

        let celsius = match reading {
            Ok(celsius) if celsius.is_valid() => celsius,
            Ok(_) | Err(_) => {
                state.thermometer.invalidate();
                let err = reading.err().unwrap_or(SensorError::ReadFailed);
                node_error!("thermometer device={} error={}", device, err);
                return Outcome::ignored(ChannelId::Thermometer);
            }
        };

        state.thermometer.record(celsius);
        node_info!("thermometer device={} temperature={}", device, celsius);

        let mut outcome = Outcome::new(ChannelId::Thermometer, self.temperature.decide(&celsius));
        if outcome.decision.publishes_now() {
            outcome.published = publish_logged(radio, Topic::Thermometer, Payload::Float(celsius)).is_ok();
        }
        outcome
    }

    /// Accelerometer callback
    pub fn on_accelerometer<R: RadioPublisher>(
        &self,
        state: &mut NodeState,
        radio: &mut R,
        event: AccelerometerEvent,
    ) -> Outcome {
        let reading = match event {
            AccelerometerEvent::Update(reading) => reading,
            AccelerometerEvent::Error => Err(SensorError::Driver),
        };

        let g = match reading {
            Ok(g) if g.is_valid() => g,
            Ok(_) | Err(_) => {
                state.accelerometer.invalidate();
                let err = reading.err().unwrap_or(SensorError::ReadFailed);
                node_error!("accelerometer error={}", err);
                return Outcome::ignored(ChannelId::Accelerometer);
            }
        };

        state.accelerometer.record(g);
        node_info!("accelerometer x={} y={} z={}", g.x, g.y, g.z);

        let mut outcome = Outcome::new(ChannelId::Accelerometer, self.acceleration.decide(&g));
        if outcome.decision.publishes_now() {
            outcome.published = publish_logged(radio, Topic::Accelerometer, Payload::Acceleration(g)).is_ok();
        }
        outcome
    }

    /// Push-button callback
    pub fn on_button<R: RadioPublisher, L: StatusLed>(
        &self,
        state: &mut NodeState,
        radio: &mut R,
        led: &mut L,
        event: ButtonEvent,
    ) -> Outcome {
        if event != ButtonEvent::Press {
            return Outcome::ignored(ChannelId::Button);
        }

        led.pulse(self.pulses.event_ms);
        let count = state.button.increment();
        node_info!("button press_count={}", count);

        let mut outcome = Outcome::new(ChannelId::Button, self.button.decide(&count));
        if outcome.decision.publishes_now() {
            outcome.published = publish_logged(radio, Topic::PushButton, Payload::Uint16(count)).is_ok();
        }
        outcome
    }

    /// Magnetic switch callback
    ///
    /// Counted only; the count goes out with the next periodic batch.
    pub fn on_switch<L: StatusLed>(
        &self,
        state: &mut NodeState,
        led: &mut L,
        event: SwitchEvent,
    ) -> Outcome {
        if event != SwitchEvent::Opened {
            return Outcome::ignored(ChannelId::SwitchCounter);
        }

        led.pulse(self.pulses.event_ms);
        let count = state.magnet.increment();
        node_info!("magnet count={}", count);

        Outcome::new(ChannelId::SwitchCounter, self.switch.decide(&count))
    }
}
