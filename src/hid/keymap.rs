//! ASCII to USB HID keycode translation table.
//!
//! One entry per ASCII value 0-127, built once at compile time and never
//! mutated. Each entry records the keycode from the HID keyboard usage
//! table plus whether Left Shift must accompany it (US layout). Control
//! characters without a natural key, and all bytes >= 0x80, have no
//! translation and are reported as unmapped by [`lookup`].

/// Keycode slot value meaning "no key".
pub const KEY_NONE: u8 = 0x00;

/// HID usage code for the Enter key.
pub const KEY_ENTER: u8 = 0x28;

/// Translation for one ASCII value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeycodeEntry {
    /// Left Shift must be held on the same report as the keycode.
    pub shift: bool,
    /// HID keyboard usage code.
    pub keycode: u8,
}

const fn plain(keycode: u8) -> KeycodeEntry {
    KeycodeEntry {
        shift: false,
        keycode,
    }
}

const fn shifted(keycode: u8) -> KeycodeEntry {
    KeycodeEntry {
        shift: true,
        keycode,
    }
}

const NONE: KeycodeEntry = plain(KEY_NONE);

/// Translate one payload byte.
///
/// Returns `None` for bytes >= 0x80 and for ASCII values with no keycode.
pub fn lookup(byte: u8) -> Option<KeycodeEntry> {
    let entry = *ASCII_KEYCODES.get(byte as usize)?;
    if entry.keycode == KEY_NONE {
        return None;
    }
    Some(entry)
}

/// ASCII -> (shift, keycode), indexed by ASCII value.
pub const ASCII_KEYCODES: [KeycodeEntry; 128] = [
    NONE,          // 0x00 NUL
    NONE,          // 0x01 SOH
    NONE,          // 0x02 STX
    NONE,          // 0x03 ETX
    NONE,          // 0x04 EOT
    NONE,          // 0x05 ENQ
    NONE,          // 0x06 ACK
    NONE,          // 0x07 BEL
    plain(0x2a),   // 0x08 backspace
    plain(0x2b),   // 0x09 tab
    plain(0x28),   // 0x0a line feed
    NONE,          // 0x0b VT
    NONE,          // 0x0c FF
    plain(0x28),   // 0x0d carriage return
    NONE,          // 0x0e SO
    NONE,          // 0x0f SI
    NONE,          // 0x10 DLE
    NONE,          // 0x11 DC1
    NONE,          // 0x12 DC2
    NONE,          // 0x13 DC3
    NONE,          // 0x14 DC4
    NONE,          // 0x15 NAK
    NONE,          // 0x16 SYN
    NONE,          // 0x17 ETB
    NONE,          // 0x18 CAN
    NONE,          // 0x19 EM
    NONE,          // 0x1a SUB
    plain(0x29),   // 0x1b escape
    NONE,          // 0x1c FS
    NONE,          // 0x1d GS
    NONE,          // 0x1e RS
    NONE,          // 0x1f US
    plain(0x2c),   // 0x20 space
    shifted(0x1e), // 0x21 !
    shifted(0x34), // 0x22 "
    shifted(0x20), // 0x23 #
    shifted(0x21), // 0x24 $
    shifted(0x22), // 0x25 %
    shifted(0x24), // 0x26 &
    plain(0x34),   // 0x27 '
    shifted(0x26), // 0x28 (
    shifted(0x27), // 0x29 )
    shifted(0x25), // 0x2a *
    shifted(0x2e), // 0x2b +
    plain(0x36),   // 0x2c ,
    plain(0x2d),   // 0x2d -
    plain(0x37),   // 0x2e .
    plain(0x38),   // 0x2f /
    plain(0x27),   // 0x30 0
    plain(0x1e),   // 0x31 1
    plain(0x1f),   // 0x32 2
    plain(0x20),   // 0x33 3
    plain(0x21),   // 0x34 4
    plain(0x22),   // 0x35 5
    plain(0x23),   // 0x36 6
    plain(0x24),   // 0x37 7
    plain(0x25),   // 0x38 8
    plain(0x26),   // 0x39 9
    shifted(0x33), // 0x3a :
    plain(0x33),   // 0x3b ;
    shifted(0x36), // 0x3c <
    plain(0x2e),   // 0x3d =
    shifted(0x37), // 0x3e >
    shifted(0x38), // 0x3f ?
    shifted(0x1f), // 0x40 @
    shifted(0x04), // 0x41 A
    shifted(0x05), // 0x42 B
    shifted(0x06), // 0x43 C
    shifted(0x07), // 0x44 D
    shifted(0x08), // 0x45 E
    shifted(0x09), // 0x46 F
    shifted(0x0a), // 0x47 G
    shifted(0x0b), // 0x48 H
    shifted(0x0c), // 0x49 I
    shifted(0x0d), // 0x4a J
    shifted(0x0e), // 0x4b K
    shifted(0x0f), // 0x4c L
    shifted(0x10), // 0x4d M
    shifted(0x11), // 0x4e N
    shifted(0x12), // 0x4f O
    shifted(0x13), // 0x50 P
    shifted(0x14), // 0x51 Q
    shifted(0x15), // 0x52 R
    shifted(0x16), // 0x53 S
    shifted(0x17), // 0x54 T
    shifted(0x18), // 0x55 U
    shifted(0x19), // 0x56 V
    shifted(0x1a), // 0x57 W
    shifted(0x1b), // 0x58 X
    shifted(0x1c), // 0x59 Y
    shifted(0x1d), // 0x5a Z
    plain(0x2f),   // 0x5b [
    plain(0x31),   // 0x5c backslash
    plain(0x30),   // 0x5d ]
    shifted(0x23), // 0x5e ^
    shifted(0x2d), // 0x5f _
    plain(0x35),   // 0x60 `
    plain(0x04),   // 0x61 a
    plain(0x05),   // 0x62 b
    plain(0x06),   // 0x63 c
    plain(0x07),   // 0x64 d
    plain(0x08),   // 0x65 e
    plain(0x09),   // 0x66 f
    plain(0x0a),   // 0x67 g
    plain(0x0b),   // 0x68 h
    plain(0x0c),   // 0x69 i
    plain(0x0d),   // 0x6a j
    plain(0x0e),   // 0x6b k
    plain(0x0f),   // 0x6c l
    plain(0x10),   // 0x6d m
    plain(0x11),   // 0x6e n
    plain(0x12),   // 0x6f o
    plain(0x13),   // 0x70 p
    plain(0x14),   // 0x71 q
    plain(0x15),   // 0x72 r
    plain(0x16),   // 0x73 s
    plain(0x17),   // 0x74 t
    plain(0x18),   // 0x75 u
    plain(0x19),   // 0x76 v
    plain(0x1a),   // 0x77 w
    plain(0x1b),   // 0x78 x
    plain(0x1c),   // 0x79 y
    plain(0x1d),   // 0x7a z
    shifted(0x2f), // 0x7b {
    shifted(0x31), // 0x7c |
    shifted(0x30), // 0x7d }
    shifted(0x35), // 0x7e ~
    plain(0x4c),   // 0x7f delete
];
