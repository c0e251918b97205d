//! Cooperative Event Inbox
//!
//! ## Overview
//!
//! Drivers finish conversions and scans on their own timers and interrupts.
//! Rather than calling into the core from there, they push a [`SensorEvent`]
//! into the inbox, and the event loop pops one per turn. That is what makes
//! "one handler at a time" true without any lock on channel state:
//!
//! ```text
//! driver timers / IRQs            event loop (single context)
//!      │                                 │
//!      ▼ push                            ▼ pop (one per turn)
//!  ┌─────┬─────┬─────┬─────┐      EventDispatcher::dispatch
//!  │ ev  │ ev  │     │     │ ───▶
//!  └─────┴─────┴─────┴─────┘
//! ```
//!
//! ## Overflow
//!
//! The inbox is fixed-size. When it is full the newest event is dropped,
//! counted in [`InboxStats::dropped`] and logged; events already queued keep
//! their order. A dropped thermometer or accelerometer update is recovered on
//! the next poll; a dropped button press is lost.
//!
//! ## Sharing with interrupts
//!
//! The inbox takes `&mut self`. On hardware, wrap it in the platform's
//! critical-section mutex and push from the ISR inside the critical section.

use heapless::Deque;

use crate::constants::INBOX_CAPACITY;
use crate::errors::{NodeError, NodeResult};
use crate::events::SensorEvent;

/// Inbox counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InboxStats {
    /// Events accepted
    pub pushed: u32,
    /// Events handed to the loop
    pub popped: u32,
    /// Events dropped because the inbox was full
    pub dropped: u32,
    /// Deepest the inbox has been
    pub max_depth: u32,
}

/// Bounded FIFO of pending driver events
pub struct EventInbox<const N: usize = INBOX_CAPACITY> {
    events: Deque<SensorEvent, N>,
    stats: InboxStats,
}

impl<const N: usize> EventInbox<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
            stats: InboxStats {
                pushed: 0,
                popped: 0,
                dropped: 0,
                max_depth: 0,
            },
        }
    }

    /// Queue an event from a driver
    pub fn push(&mut self, event: impl Into<SensorEvent>) -> NodeResult<()> {
        let event = event.into();
        if self.events.push_back(event).is_err() {
            self.stats.dropped = self.stats.dropped.wrapping_add(1);
            node_warn!("inbox full, dropped event channel={} dropped={}", event.channel().name(), self.stats.dropped);
            return Err(NodeError::QueueFull { capacity: N });
        }

        self.stats.pushed = self.stats.pushed.wrapping_add(1);
        let depth = self.events.len() as u32;
        if depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }
        Ok(())
    }

    /// Next event, oldest first
    pub fn pop(&mut self) -> Option<SensorEvent> {
        let event = self.events.pop_front()?;
        self.stats.popped = self.stats.popped.wrapping_add(1);
        Some(event)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn stats(&self) -> InboxStats {
        self.stats
    }
}

impl<const N: usize> Default for EventInbox<N> {
    fn default() -> Self {
        Self::new()
    }
}
