//! Inbound message parsing - maps (topic, payload) pairs from the broker
//! onto bridge commands.
//!
//! The broker session dispatches each publish through [`Command::parse`]
//! and handles the result with an exhaustive match, so adding a command
//! variant forces every dispatch site to be revisited.

use heapless::Vec;

use crate::config::{MAX_KEYSTROKE_PAYLOAD, MQTT_TOPIC_INDICATOR, MQTT_TOPIC_KEYSTROKES};
use crate::error::Error;

/// Bounded copy of one keystroke payload, owned by the command queue.
pub type KeystrokePayload = Vec<u8, MAX_KEYSTROKE_PAYLOAD>;

/// One decoded inbound message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Type the payload as USB keystrokes.
    Type(KeystrokePayload),
    /// Override the status indicator for the rest of the session.
    SetIndicator(bool),
}

impl Command {
    /// Decode a publish received from the broker.
    ///
    /// Keystroke payloads are copied into a bounded buffer; oversized
    /// payloads are rejected whole rather than truncated (a half-typed
    /// message is worse than none).
    pub fn parse(topic: &str, payload: &[u8]) -> Result<Self, Error> {
        match topic {
            MQTT_TOPIC_KEYSTROKES => {
                let text = Vec::from_slice(payload).map_err(|_| Error::PayloadTooLong)?;
                Ok(Command::Type(text))
            }
            MQTT_TOPIC_INDICATOR => match payload {
                b"on" | b"1" => Ok(Command::SetIndicator(true)),
                b"off" | b"0" => Ok(Command::SetIndicator(false)),
                _ => Err(Error::InvalidIndicatorPayload),
            },
            _ => Err(Error::UnknownTopic),
        }
    }
}
