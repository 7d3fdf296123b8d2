//! mq2usb - MQTT-to-USB HID keystroke bridge.
//!
//! The pure logic modules (keystroke emitter, keymap, command parsing,
//! indicator policy) build for any target and are tested on the host with
//! `cargo test` - no hardware required. The hardware glue (Embassy USB
//! device, CYW43 Wi-Fi, broker session, LED task) sits behind the
//! `embedded` feature and is only reachable from the firmware binary.

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod config;
pub mod error;
pub mod hid;
pub mod status;
pub mod typist;

#[cfg(feature = "embedded")]
pub mod led;
#[cfg(feature = "embedded")]
pub mod net;
#[cfg(feature = "embedded")]
pub mod usb;

pub use command::Command;
pub use error::Error;
pub use hid::KeyboardReport;
pub use typist::{KeySink, TypeOutcome, Typist};
