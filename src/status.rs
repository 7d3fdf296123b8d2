/// Decide whether the status indicator should be lit.
///
/// The indicator follows the broker session: lit while connected, dark
/// while disconnected. A manual override (from the indicator topic) wins
/// while the session is up and is cleared on the next connect/disconnect.
pub fn indicator_should_be_on(broker_connected: bool, manual_override: Option<bool>) -> bool {
    if !broker_connected {
        return false;
    }

    manual_override.unwrap_or(true)
}
