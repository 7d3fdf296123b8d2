//! Integration tests for mq2usb host-testable logic: a publish arriving
//! from the broker, decoded into a command and typed out as a report
//! sequence, checked at the serialized-bytes level.

use embassy_futures::block_on;
use embedded_hal_async::delay::DelayNs;
use mq2usb::config::MQTT_TOPIC_KEYSTROKES;
use mq2usb::hid::keyboard::KEYBOARD_REPORT_SIZE;
use mq2usb::{Command, KeySink, KeyboardReport, Typist};

/// Captures the exact bytes a USB host would receive.
#[derive(Default)]
struct WireSink {
    frames: Vec<[u8; KEYBOARD_REPORT_SIZE]>,
}

impl KeySink for WireSink {
    fn is_attached(&self) -> bool {
        true
    }

    async fn send(&mut self, report: &KeyboardReport) {
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        assert_eq!(report.serialize(&mut buf), KEYBOARD_REPORT_SIZE);
        self.frames.push(buf);
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    async fn delay_ns(&mut self, _ns: u32) {}
}

#[test]
fn publish_to_keystroke_frames() {
    // "Hi!" - shifted letter, plain letter, shifted symbol.
    let command = Command::parse(MQTT_TOPIC_KEYSTROKES, b"Hi!").expect("expected Type command");
    let Command::Type(payload) = command else {
        panic!("expected Type command");
    };

    let mut sink = WireSink::default();
    let outcome = block_on(Typist::new(NoDelay).type_payload(&mut sink, &payload));

    assert!(outcome.completed);
    assert_eq!(
        sink.frames,
        vec![
            [0x02, 0x00, 0x0b, 0x00, 0x00, 0x00, 0x00, 0x00], // Shift+H
            [0x00, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00], // i
            [0x02, 0x00, 0x1e, 0x00, 0x00, 0x00, 0x00, 0x00], // Shift+1 = !
            [0x00, 0x00, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00], // Enter
            [0x00; 8],                                        // all released
        ]
    );
}

#[test]
fn repeated_invocations_produce_identical_wire_traffic() {
    let command = Command::parse(MQTT_TOPIC_KEYSTROKES, b"ok").unwrap();
    let Command::Type(payload) = command else {
        panic!("expected Type command");
    };

    let mut typist = Typist::new(NoDelay);

    let mut first = WireSink::default();
    block_on(typist.type_payload(&mut first, &payload));
    let mut second = WireSink::default();
    block_on(typist.type_payload(&mut second, &payload));

    assert_eq!(first.frames, second.frames);
    assert_eq!(first.frames.len(), payload.len() + 2);
}
