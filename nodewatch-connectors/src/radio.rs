//! Radio port adapter
//!
//! Implements the core's `RadioPublisher` on top of any [`Connector`].

use log::{debug, warn};
use serde::Serialize;

use nodewatch_core::{Payload, RadioPublisher, Topic};

use crate::{ConnectionStats, Connector, ConnectorError};

/// Encodes publishes as JSON and sends them through a connector
#[derive(Debug)]
pub struct ConnectorRadio<C> {
    connector: C,
    stats: ConnectionStats,
}

impl<C> ConnectorRadio<C>
where
    C: Connector,
    C::Error: Into<ConnectorError>,
{
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            stats: ConnectionStats::default(),
        }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn connector_mut(&mut self) -> &mut C {
        &mut self.connector
    }

    pub fn stats(&self) -> &ConnectionStats {
        &self.stats
    }

    fn send_json<T: Serialize>(&mut self, topic: &str, body: &T) -> Result<(), ConnectorError> {
        let result = encode(body).and_then(|data| {
            if !self.connector.is_connected() {
                return Err(ConnectorError::NotConnected);
            }
            self.connector.send(topic, &data).map_err(Into::into)?;
            Ok(data.len())
        });

        match result {
            Ok(bytes) => {
                self.stats.messages_sent += 1;
                self.stats.bytes_sent += bytes as u64;
                debug!("sent topic={} bytes={}", topic, bytes);
                Ok(())
            }
            Err(err) => {
                self.stats.messages_failed += 1;
                self.stats.last_error = Some(err.to_string());
                warn!("send failed topic={} error={}", topic, err);
                Err(err)
            }
        }
    }
}

impl<C> RadioPublisher for ConnectorRadio<C>
where
    C: Connector,
    C::Error: Into<ConnectorError>,
{
    type Error = ConnectorError;

    fn publish(&mut self, topic: Topic, payload: Payload) -> Result<(), Self::Error> {
        self.send_json(topic.as_str(), &payload)
    }
}

/// JSON body for one payload
pub fn encode<T: Serialize>(body: &T) -> Result<Vec<u8>, ConnectorError> {
    Ok(serde_json::to_vec(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryConnector;
    use nodewatch_core::Vector3;

    #[test]
    fn payload_encoding() {
        assert_eq!(encode(&Payload::Float(21.5)).unwrap(), b"21.5");
        assert_eq!(encode(&Payload::Uint16(3)).unwrap(), b"3");
        assert_eq!(
            encode(&Payload::Acceleration(Vector3::new(0.5, -1.5, 0.25))).unwrap(),
            br#"{"x":0.5,"y":-1.5,"z":0.25}"#,
        );
    }

    #[test]
    fn sentinel_encodes_as_null() {
        assert_eq!(encode(&Payload::Float(f32::NAN)).unwrap(), b"null");
        assert_eq!(
            encode(&Payload::Acceleration(Vector3::NAN)).unwrap(),
            br#"{"x":null,"y":null,"z":null}"#,
        );
    }

    #[test]
    fn publish_goes_to_topic() {
        let mut radio = ConnectorRadio::new(MemoryConnector::new());
        radio.publish(Topic::Thermometer, Payload::Float(35.0)).unwrap();

        assert_eq!(radio.connector().bodies("thermometer/-/temperature"), vec!["35.0".to_string()]);
        assert_eq!(radio.stats().messages_sent, 1);
        assert_eq!(radio.stats().bytes_sent, 4);
    }

    #[test]
    fn disconnected_link_is_counted() {
        let mut radio = ConnectorRadio::new(MemoryConnector::new());
        radio.connector_mut().set_connected(false);

        let result = radio.publish(Topic::PushButton, Payload::Uint16(1));

        assert!(matches!(result, Err(ConnectorError::NotConnected)));
        assert_eq!(radio.stats().messages_failed, 1);
        assert_eq!(radio.stats().last_error.as_deref(), Some("Not connected"));
    }
}
