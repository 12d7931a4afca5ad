//! Letter to phonetic digit table.

/// Standard American Soundex digits for `A..=Z`.
static PHONETIC_TABLE: [u8; 26] = [
    b'0', // A
    b'1', // B
    b'2', // C
    b'3', // D
    b'0', // E
    b'1', // F
    b'2', // G
    b'0', // H
    b'0', // I
    b'2', // J
    b'2', // K
    b'4', // L
    b'5', // M
    b'5', // N
    b'0', // O
    b'1', // P
    b'2', // Q
    b'6', // R
    b'2', // S
    b'3', // T
    b'0', // U
    b'1', // V
    b'0', // W
    b'2', // X
    b'0', // Y
    b'2', // Z
];

/// Digit that carries no sound and is never appended to a code.
pub const SILENT: u8 = b'0';

/// Phonetic digit of `c` as an ASCII byte in `b'0'..=b'6'`.
///
/// Case-insensitive. Anything outside `A..=Z` is [`SILENT`].
#[inline]
pub fn phonetic_digit(c: char) -> u8 {
    if c.is_ascii_alphabetic() {
        PHONETIC_TABLE[(c.to_ascii_uppercase() as u8 - b'A') as usize]
    } else {
        SILENT
    }
}
