//! In-memory connector
//!
//! Keeps every message it is sent. Used by host simulations and tests in
//! place of a real gateway link.

use crate::{Connector, ConnectorError};

/// Default number of messages kept before refusing more
pub const DEFAULT_CAPACITY: usize = 1024;

/// Connector that stores messages in order
#[derive(Debug, Clone)]
pub struct MemoryConnector {
    messages: Vec<(String, Vec<u8>)>,
    capacity: usize,
    connected: bool,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: Vec::new(),
            capacity,
            connected: true,
        }
    }

    /// Simulate the link going up or down
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn messages(&self) -> &[(String, Vec<u8>)] {
        &self.messages
    }

    /// Bodies sent to `topic`, as UTF-8
    pub fn bodies(&self, topic: &str) -> Vec<String> {
        self.messages
            .iter()
            .filter(|(t, _)| t == topic)
            .map(|(_, body)| String::from_utf8_lossy(body).into_owned())
            .collect()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for MemoryConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl Connector for MemoryConnector {
    type Error = ConnectorError;

    fn send(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error> {
        if !self.connected {
            return Err(ConnectorError::NotConnected);
        }
        if self.messages.len() >= self.capacity {
            return Err(ConnectorError::BufferFull);
        }
        self.messages.push((topic.to_owned(), data.to_vec()));
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
