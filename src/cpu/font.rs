//! The built-in hexadecimal character set.
//!
//! Sixteen 8x5 glyphs, one per hex digit, five bytes each. They occupy the
//! bottom of memory so `Fx29` can find glyph `n` at address `5 * n`.

/// Address the charset is installed at.
pub const FONT_OFFSET: usize = 0x000;

/// Height of one glyph, in rows/bytes.
pub const FONT_HEIGHT: usize = 5;

/// The charset, laid out glyph-major.
#[rustfmt::skip]
pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// Returns the five bytes of the glyph for `digit`, if it has one.
pub fn glyph(digit: u8) -> Option<&'static [u8]> {
    let start = FONT_HEIGHT * digit as usize;
    FONT.get(start..start + FONT_HEIGHT)
}
