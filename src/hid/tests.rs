//! Unit tests for the keyboard report and the ASCII keymap.
//!
//! These tests run on the host (not embedded) and verify the pure
//! logic of report construction, serialization, and translation.

use super::keyboard::{KeyboardReport, KEYBOARD_REPORT_SIZE, MOD_LEFT_SHIFT};
use super::keymap::{lookup, ASCII_KEYCODES, KEY_ENTER, KEY_NONE};

// ═══════════════════════════════════════════════════════════════════════════
// Keyboard Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn empty_report_has_no_keys() {
    let report = KeyboardReport::empty();
    assert!(report.is_empty());
    assert_eq!(report.modifier, 0);
    assert_eq!(report.reserved, 0);
    assert_eq!(report.keycodes, [0; 6]);
}

#[test]
fn press_report_for_plain_character() {
    // 'a'
    let report = KeyboardReport::press(lookup(b'a').unwrap());
    assert_eq!(report.modifier, 0);
    assert_eq!(report.keycodes, [0x04, 0, 0, 0, 0, 0]);
    assert!(!report.is_empty());
}

#[test]
fn press_report_for_shifted_character() {
    // 'A' - shift must ride on the same report as the keycode.
    let report = KeyboardReport::press(lookup(b'A').unwrap());
    assert_eq!(report.modifier, MOD_LEFT_SHIFT);
    assert_eq!(report.keycodes[0], 0x04);
}

#[test]
fn enter_report() {
    let report = KeyboardReport::enter();
    assert_eq!(report.modifier, 0);
    assert_eq!(report.keycodes, [KEY_ENTER, 0, 0, 0, 0, 0]);
}

#[test]
fn serialize_writes_boot_protocol_layout() {
    let report = KeyboardReport {
        modifier: 0x02,
        reserved: 0x00,
        keycodes: [0x04, 0x05, 0x06, 0x00, 0x00, 0x00],
    };

    let mut buf = [0u8; 8];
    let written = report.serialize(&mut buf);

    assert_eq!(written, KEYBOARD_REPORT_SIZE);
    assert_eq!(buf, [0x02, 0x00, 0x04, 0x05, 0x06, 0x00, 0x00, 0x00]);
}

#[test]
fn serialize_buffer_too_small() {
    let report = KeyboardReport::empty();
    let mut buf = [0u8; 4];
    assert_eq!(report.serialize(&mut buf), 0); // Should fail gracefully
}

#[test]
fn modifier_only_report_is_not_empty() {
    let mut report = KeyboardReport::empty();
    report.modifier = MOD_LEFT_SHIFT;
    assert!(!report.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// Keymap Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn lowercase_letters_are_plain() {
    for (i, byte) in (b'a'..=b'z').enumerate() {
        let entry = lookup(byte).unwrap();
        assert!(!entry.shift, "{} should not need shift", byte as char);
        assert_eq!(entry.keycode, 0x04 + i as u8);
    }
}

#[test]
fn uppercase_letters_are_shifted() {
    for (i, byte) in (b'A'..=b'Z').enumerate() {
        let entry = lookup(byte).unwrap();
        assert!(entry.shift, "{} should need shift", byte as char);
        assert_eq!(entry.keycode, 0x04 + i as u8);
    }
}

#[test]
fn digits_map_to_the_number_row() {
    // '1'..'9' are 0x1e..0x26; '0' wraps to 0x27.
    for (i, byte) in (b'1'..=b'9').enumerate() {
        let entry = lookup(byte).unwrap();
        assert!(!entry.shift);
        assert_eq!(entry.keycode, 0x1e + i as u8);
    }
    assert_eq!(lookup(b'0').unwrap().keycode, 0x27);
}

#[test]
fn shifted_symbols_share_keycode_with_their_base_key() {
    for (shifted_char, base_char) in [
        (b'!', b'1'),
        (b'@', b'2'),
        (b'#', b'3'),
        (b'$', b'4'),
        (b'%', b'5'),
        (b'^', b'6'),
        (b'&', b'7'),
        (b'*', b'8'),
        (b'(', b'9'),
        (b')', b'0'),
        (b'<', b','),
        (b'>', b'.'),
        (b'?', b'/'),
        (b':', b';'),
        (b'_', b'-'),
        (b'+', b'='),
        (b'{', b'['),
        (b'}', b']'),
        (b'|', b'\\'),
        (b'~', b'`'),
        (b'"', b'\''),
    ] {
        let symbol = lookup(shifted_char).unwrap();
        let base = lookup(base_char).unwrap();
        assert!(symbol.shift, "{} should need shift", shifted_char as char);
        assert!(!base.shift, "{} should not need shift", base_char as char);
        assert_eq!(
            symbol.keycode, base.keycode,
            "{} and {} live on the same key",
            shifted_char as char, base_char as char
        );
    }
}

#[test]
fn space_and_newlines_map() {
    assert_eq!(lookup(b' ').unwrap().keycode, 0x2c);
    assert_eq!(lookup(b'\n').unwrap().keycode, KEY_ENTER);
    assert_eq!(lookup(b'\r').unwrap().keycode, KEY_ENTER);
}

#[test]
fn named_control_characters_map() {
    assert_eq!(lookup(0x08).unwrap().keycode, 0x2a); // backspace
    assert_eq!(lookup(b'\t').unwrap().keycode, 0x2b);
    assert_eq!(lookup(0x1b).unwrap().keycode, 0x29); // escape
    assert_eq!(lookup(0x7f).unwrap().keycode, 0x4c); // delete
}

#[test]
fn unnamed_control_characters_are_unmapped() {
    for byte in [0x00u8, 0x01, 0x07, 0x0b, 0x0c, 0x0e, 0x1a, 0x1c, 0x1f] {
        assert_eq!(lookup(byte), None, "0x{byte:02x} should be unmapped");
    }
}

#[test]
fn bytes_above_ascii_are_unmapped() {
    for byte in [0x80u8, 0xa0, 0xc3, 0xff] {
        assert_eq!(lookup(byte), None, "0x{byte:02x} should be unmapped");
    }
}

#[test]
fn every_printable_ascii_character_translates() {
    for byte in 0x20u8..=0x7e {
        assert!(
            lookup(byte).is_some(),
            "printable 0x{:02x} ({}) must map",
            byte,
            byte as char
        );
    }
}

#[test]
fn table_covers_exactly_the_ascii_range() {
    assert_eq!(ASCII_KEYCODES.len(), 128);
    // Unmapped entries never claim a shift modifier.
    for entry in ASCII_KEYCODES {
        if entry.keycode == KEY_NONE {
            assert!(!entry.shift);
        }
    }
}
