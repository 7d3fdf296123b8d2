//! Keystroke emitter - turns a byte payload into a timed sequence of
//! keyboard reports on an attached USB host.
//!
//! The sequence for a payload is: one press report per translatable byte
//! (shift riding on the same report as its keycode), then Enter, then an
//! all-keys-released report. Reports are strictly sequential; the caller
//! is expected to serialize invocations (here: the command queue feeding
//! the typist task).

use embedded_hal_async::delay::DelayNs;

use crate::config::{INTER_KEY_DELAY_MS, KEY_RELEASE_DELAY_MS};
use crate::hid::keyboard::KeyboardReport;
use crate::hid::keymap;

/// Where reports go: a USB HID keyboard endpoint, or a test double.
///
/// Attachment state is owned by the transport; the emitter only reads it.
/// `send` is assumed to succeed while attached - the embedded
/// implementation logs and drops endpoint errors.
#[allow(async_fn_in_trait)]
pub trait KeySink {
    /// Whether a USB host is currently configured and awake.
    fn is_attached(&self) -> bool;

    /// Deliver one report to the host.
    async fn send(&mut self, report: &KeyboardReport);
}

/// Inter-report delays, milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Gap after each character report.
    pub inter_key_ms: u32,
    /// Gap after the Enter and all-released reports.
    pub release_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            inter_key_ms: INTER_KEY_DELAY_MS,
            release_ms: KEY_RELEASE_DELAY_MS,
        }
    }
}

/// What one `type_payload` call actually delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TypeOutcome {
    /// Reports delivered to the sink, trailing Enter/release included.
    pub reports_sent: usize,
    /// Payload bytes with no keycode translation, silently skipped.
    pub skipped: usize,
    /// `false` if the host detached and the remainder was dropped.
    pub completed: bool,
}

/// The keystroke emitter. Holds the delay provider and timing; the sink
/// is passed per call so the caller keeps ownership of the endpoint.
pub struct Typist<D> {
    delay: D,
    timing: Timing,
}

impl<D: DelayNs> Typist<D> {
    pub fn new(delay: D) -> Self {
        Self::with_timing(delay, Timing::default())
    }

    pub fn with_timing(delay: D, timing: Timing) -> Self {
        Self { delay, timing }
    }

    /// Type `payload` on the host attached to `sink`, ending with Enter
    /// and an all-keys-released report.
    ///
    /// Bytes without a keycode mapping (most control characters, anything
    /// >= 0x80) are skipped and counted in the outcome. Detachment aborts
    /// the remainder of the sequence - an expected condition, not an
    /// error: `completed` is `false` and the call returns normally.
    pub async fn type_payload<S: KeySink>(&mut self, sink: &mut S, payload: &[u8]) -> TypeOutcome {
        let mut outcome = TypeOutcome::default();

        for &byte in payload {
            let Some(entry) = keymap::lookup(byte) else {
                outcome.skipped += 1;
                continue;
            };

            if !send_if_attached(sink, &KeyboardReport::press(entry), &mut outcome).await {
                return outcome;
            }
            self.delay.delay_ms(self.timing.inter_key_ms).await;
        }

        // New line
        if !send_if_attached(sink, &KeyboardReport::enter(), &mut outcome).await {
            return outcome;
        }
        self.delay.delay_ms(self.timing.release_ms).await;

        // Release all keys
        if !send_if_attached(sink, &KeyboardReport::empty(), &mut outcome).await {
            return outcome;
        }
        self.delay.delay_ms(self.timing.release_ms).await;

        outcome.completed = true;
        outcome
    }
}

/// Returns `false` (abort) when the host is detached.
async fn send_if_attached<S: KeySink>(
    sink: &mut S,
    report: &KeyboardReport,
    outcome: &mut TypeOutcome,
) -> bool {
    if !sink.is_attached() {
        return false;
    }
    sink.send(report).await;
    outcome.reports_sent += 1;
    true
}
