//! Periodic Publish Scheduler
//!
//! ## Overview
//!
//! A single recurring timer, independent of sensor activity, that publishes
//! every batch topic on a fixed period:
//!
//! ```text
//!            arm(now + warmup)          fire: publish batch
//! Idle ─────────────────────▶ Armed ──────────────────────▶ Running
//!                              ▲                               │
//!                              └───── re-arm(now + period) ────┘
//! ```
//!
//! There is no terminal state; the cycle repeats for the life of the node.
//!
//! ## Timing
//!
//! With `t0` the startup time, fires land at `t0 + warmup`, then every
//! `period` after the previous fire. The next deadline is computed from the
//! time the fire actually ran, so a late loop turn delays later fires instead
//! of producing a catch-up burst.
//!
//! A zero period is raised to [`MIN_PERIOD_MS`], and the scheduler fires at
//! most once per distinct `now`. A loop that keeps passing the same time (or
//! a deadline saturated at `u64::MAX`) sees one batch, then idles.
//!
//! ## Batch Contents
//!
//! Thermometer, accelerometer and magnet count, in that order, published
//! unconditionally. Invalid channels go out as their NaN sentinel so the
//! gateway can tell "unavailable" from "never reported". The button count is
//! not part of the batch.

use crate::config::ScheduleConfig;
use crate::ports::{publish_logged, Payload, RadioPublisher, Topic};
use crate::state::NodeState;
use crate::time::{is_due, Timestamp};

/// Shortest period the scheduler runs with
pub const MIN_PERIOD_MS: u64 = 1;

/// Scheduler state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScheduleState {
    /// Not armed yet (before startup)
    Idle,
    /// Waiting for `deadline`
    Armed { deadline: Timestamp },
    /// Publishing a batch
    Running,
}

/// Result of one batch fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// When the batch ran
    pub fired_at: Timestamp,
    /// Topics the transport accepted, out of [`Topic::BATCH`]
    pub published: usize,
    /// Deadline of the next batch
    pub next_deadline: Timestamp,
}

/// Drives the periodic batch publish
#[derive(Debug, Clone)]
pub struct PublishScheduler {
    config: ScheduleConfig,
    state: ScheduleState,
    fires: u32,
    last_fired: Option<Timestamp>,
}

impl PublishScheduler {
    pub fn new(config: ScheduleConfig) -> Self {
        if config.period_ms < MIN_PERIOD_MS {
            node_warn!("publish period raised period_ms={} min={}", config.period_ms, MIN_PERIOD_MS);
        }
        Self {
            config: ScheduleConfig {
                period_ms: config.period_ms.max(MIN_PERIOD_MS),
                ..config
            },
            state: ScheduleState::Idle,
            fires: 0,
            last_fired: None,
        }
    }

    pub fn config(&self) -> ScheduleConfig {
        self.config
    }

    /// Arm the first fire at `now + warmup`
    pub fn start(&mut self, now: Timestamp) -> Timestamp {
        let deadline = now.saturating_add(self.config.warmup_ms);
        self.state = ScheduleState::Armed { deadline };
        node_debug!("scheduler armed deadline={}", deadline);
        deadline
    }

    pub fn state(&self) -> ScheduleState {
        self.state
    }

    /// Deadline of the next fire, if armed
    pub fn next_deadline(&self) -> Option<Timestamp> {
        match self.state {
            ScheduleState::Armed { deadline } => Some(deadline),
            ScheduleState::Idle | ScheduleState::Running => None,
        }
    }

    /// Number of batches fired since startup
    pub fn fires(&self) -> u32 {
        self.fires
    }

    /// Deadline reached and no batch fired yet at `now`
    pub fn is_due(&self, now: Timestamp) -> bool {
        self.last_fired != Some(now)
            && self.next_deadline().is_some_and(|deadline| is_due(now, deadline))
    }

    /// Fire if the deadline has passed
    pub fn poll<R: RadioPublisher>(
        &mut self,
        now: Timestamp,
        state: &NodeState,
        radio: &mut R,
    ) -> Option<BatchReport> {
        if self.is_due(now) {
            Some(self.fire(now, state, radio))
        } else {
            None
        }
    }

    /// Publish every batch topic and re-arm at `now + period`
    ///
    /// Runs to completion. The transport only queues; nothing here waits.
    pub fn fire<R: RadioPublisher>(
        &mut self,
        now: Timestamp,
        state: &NodeState,
        radio: &mut R,
    ) -> BatchReport {
        self.state = ScheduleState::Running;
        self.fires = self.fires.wrapping_add(1);
        self.last_fired = Some(now);
        node_info!("task fire={} now={}", self.fires, now);

        let published = Topic::BATCH
            .iter()
            .filter(|topic| publish_logged(radio, **topic, batch_payload(**topic, state)).is_ok())
            .count();

        let next_deadline = now.saturating_add(self.config.period_ms);
        self.state = ScheduleState::Armed { deadline: next_deadline };

        BatchReport { fired_at: now, published, next_deadline }
    }
}

/// Current value of a batch topic, sentinel included
fn batch_payload(topic: Topic, state: &NodeState) -> Payload {
    match topic {
        Topic::Thermometer => Payload::Float(state.thermometer.value()),
        Topic::Accelerometer => Payload::Acceleration(state.accelerometer.value()),
        Topic::MagnetCount => Payload::Uint32(state.magnet.count()),
        Topic::PushButton => Payload::Uint16(state.button.count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Vector3;

    #[derive(Default)]
    struct Radio {
        sent: heapless::Vec<(Topic, Payload), 16>,
    }

    impl RadioPublisher for Radio {
        type Error = ();

        fn publish(&mut self, topic: Topic, payload: Payload) -> Result<(), ()> {
            self.sent.push((topic, payload)).map_err(|_| ())
        }
    }

    #[test]
    fn idle_until_started() {
        let scheduler = PublishScheduler::new(ScheduleConfig::DEFAULT);
        assert_eq!(scheduler.state(), ScheduleState::Idle);
        assert!(!scheduler.is_due(u64::MAX));
    }

    #[test]
    fn first_fire_after_warmup_then_every_period() {
        let mut scheduler = PublishScheduler::new(ScheduleConfig::DEFAULT);
        let state = NodeState::new();
        let mut radio = Radio::default();

        assert_eq!(scheduler.start(0), 10_000);
        assert!(scheduler.poll(9_999, &state, &mut radio).is_none());

        let report = scheduler.poll(10_000, &state, &mut radio).unwrap();
        assert_eq!(report.next_deadline, 70_000);
        assert_eq!(report.published, 3);
        assert_eq!(scheduler.state(), ScheduleState::Armed { deadline: 70_000 });
    }

    #[test]
    fn late_fire_reschedules_from_actual_time() {
        let mut scheduler = PublishScheduler::new(ScheduleConfig::DEFAULT);
        let mut radio = Radio::default();
        scheduler.start(0);

        let report = scheduler.fire(12_500, &NodeState::new(), &mut radio);
        assert_eq!(report.next_deadline, 72_500);
    }

    #[test]
    fn zero_period_is_raised_to_minimum() {
        let scheduler = PublishScheduler::new(ScheduleConfig { warmup_ms: 0, period_ms: 0 });
        assert_eq!(scheduler.config().period_ms, MIN_PERIOD_MS);
    }

    #[test]
    fn saturated_deadline_fires_once_per_instant() {
        let mut scheduler = PublishScheduler::new(ScheduleConfig::DEFAULT);
        let state = NodeState::new();
        let mut radio = Radio::default();
        scheduler.start(u64::MAX - 5_000);

        let report = scheduler.poll(u64::MAX, &state, &mut radio).unwrap();
        assert_eq!(report.next_deadline, u64::MAX);
        assert!(!scheduler.is_due(u64::MAX));
        assert!(scheduler.poll(u64::MAX, &state, &mut radio).is_none());
        assert_eq!(scheduler.fires(), 1);
    }

    #[test]
    fn batch_carries_sentinels_and_skips_button() {
        let mut scheduler = PublishScheduler::new(ScheduleConfig::DEFAULT);
        let mut state = NodeState::new();
        let mut radio = Radio::default();
        state.accelerometer.record(Vector3::new(0.1, 0.2, 0.9));
        state.button.increment();

        scheduler.start(0);
        scheduler.fire(10_000, &state, &mut radio);

        assert_eq!(radio.sent.len(), 3);
        assert!(matches!(radio.sent[0], (Topic::Thermometer, Payload::Float(v)) if v.is_nan()));
        assert_eq!(radio.sent[1], (Topic::Accelerometer, Payload::Acceleration(Vector3::new(0.1, 0.2, 0.9))));
        assert_eq!(radio.sent[2], (Topic::MagnetCount, Payload::Uint32(0)));
    }
}
