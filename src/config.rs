//! Application-wide constants and compile-time configuration.
//!
//! All network endpoints, timing parameters, and protocol constants
//! live here so they can be tuned in one place.

// Wi-Fi

/// SSID of the network the bridge joins on boot.
pub const WIFI_SSID: &str = "mq2usb-net";

/// WPA2 passphrase. Provisioning flows are out of scope; rebuild to change.
pub const WIFI_PASSWORD: &str = "change-me";

// MQTT broker

/// Broker hostname, resolved over DNS after DHCP completes.
pub const MQTT_BROKER_HOST: &str = "test.mosquitto.org";

/// Broker TCP port (plain MQTT; TLS is out of scope).
pub const MQTT_BROKER_PORT: u16 = 1883;

/// Client identifier presented in CONNECT.
pub const MQTT_CLIENT_ID: &str = "mq2usb";

/// Username/password for the broker session. Leave both empty for
/// anonymous access.
pub const MQTT_USERNAME: &str = "";
pub const MQTT_PASSWORD: &str = "";

/// Keep-alive interval advertised to the broker (seconds). Pings are
/// sent at half this interval while the receive loop is idle.
pub const MQTT_KEEP_ALIVE_SECS: u16 = 60;

/// Delay before reconnecting after a dropped broker session (seconds).
pub const MQTT_RECONNECT_DELAY_SECS: u64 = 5;

/// Packet buffer size for the MQTT client (bytes, each direction).
pub const MQTT_BUF_SIZE: usize = 512;

// Topics

/// Payloads published here are typed out as USB keystrokes.
pub const MQTT_TOPIC_KEYSTROKES: &str = "mq2usb/keystrokes";

/// `on`/`off`/`1`/`0` published here overrides the status indicator.
pub const MQTT_TOPIC_INDICATOR: &str = "mq2usb/indicator";

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "mq2usb";
pub const USB_PRODUCT: &str = "MQTT Keystroke Bridge";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms). 10 ms is plenty for synthesized typing.
pub const USB_HID_POLL_MS: u8 = 10;

// Typing

/// Gap between successive character reports (ms). The host needs time to
/// register each press as discrete; back-to-back reports risk dropped or
/// merged keystrokes.
pub const INTER_KEY_DELAY_MS: u32 = 40;

/// Gap after the trailing Enter and all-released reports (ms).
pub const KEY_RELEASE_DELAY_MS: u32 = 10;

/// Largest keystroke payload accepted from the broker (bytes). Longer
/// messages are rejected rather than truncated.
pub const MAX_KEYSTROKE_PAYLOAD: usize = 256;

/// Depth of the command queue between the broker session and the typist.
/// One message is typed at a time; a full queue drops new commands.
pub const COMMAND_QUEUE_DEPTH: usize = 4;
