//! Unified error type for mq2usb.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging when the
//! `defmt` feature is enabled.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Network
    /// Wi-Fi, TCP, or broker-level failure.
    Net(NetError),

    // Commands
    /// Keystroke payload exceeds `MAX_KEYSTROKE_PAYLOAD`.
    PayloadTooLong,

    /// Message arrived on a topic the bridge does not handle.
    UnknownTopic,

    /// Indicator payload was not one of `on`/`off`/`1`/`0`.
    InvalidIndicatorPayload,
}

/// Subset of network errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetError {
    /// Broker hostname did not resolve.
    DnsFailed,

    /// TCP connection to the broker could not be established.
    ConnectFailed,

    /// Broker rejected or dropped the MQTT session; carries the raw
    /// reason code where one was received.
    Broker(u8),
}

// Convenience conversions

impl From<NetError> for Error {
    fn from(e: NetError) -> Self {
        Error::Net(e)
    }
}
