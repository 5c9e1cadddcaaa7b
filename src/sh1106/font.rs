//! Font descriptions and the built-in 8x8 glyph tables
//!
//! A glyph table is contiguous packed column data, `char_size` bytes per glyph, covering
//! the character codes `first_char..=last_char`. Every byte is one column of the glyph
//! with bit 0 as its top row, the same shape as a framebuffer column.
//!
//! Both built-in tables are generated at compile time from the public domain
//! `font8x8` basic set, which is stored row by row with bit 0 as the leftmost pixel.

use font8x8::legacy::BASIC_LEGACY;

/// Immutable glyph table borrowed for the duration of a render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec<'a> {
    /// Packed glyph columns
    pub data: &'a [u8],
    /// Glyph cell size in pixels, also the number of bytes per glyph
    pub char_size: u8,
    /// First character code in the table
    pub first_char: u8,
    /// Last character code in the table
    pub last_char: u8,
}

impl<'a> FontSpec<'a> {
    /// Column bytes of the glyph for `c`, `None` when the table does not cover it
    pub fn glyph(&self, c: char) -> Option<&'a [u8]> {
        let code = u32::from(c);
        if code < u32::from(self.first_char) || code > u32::from(self.last_char) {
            return None;
        }
        let size = usize::from(self.char_size);
        let start = size * (code - u32::from(self.first_char)) as usize;
        self.data.get(start..start + size)
    }
}

const FIRST_CHAR: u8 = b' ';
const LAST_CHAR: u8 = b'~';
const CHAR_SIZE: usize = 8;
const GLYPHS: usize = (LAST_CHAR - FIRST_CHAR) as usize + 1;

/// Upright glyphs, one byte per column from left to right
const fn horizontal_table() -> [u8; GLYPHS * CHAR_SIZE] {
    let mut table = [0u8; GLYPHS * CHAR_SIZE];
    let mut glyph = 0;
    while glyph < GLYPHS {
        let rows = BASIC_LEGACY[FIRST_CHAR as usize + glyph];
        let mut column = 0;
        while column < CHAR_SIZE {
            let mut bits = 0u8;
            let mut row = 0;
            while row < CHAR_SIZE {
                if rows[row] & (1 << column) != 0 {
                    bits |= 1 << row;
                }
                row += 1;
            }
            table[glyph * CHAR_SIZE + column] = bits;
            column += 1;
        }
        glyph += 1;
    }
    table
}

/// Glyphs turned 90 degrees clockwise: the glyph's bottom row becomes the leftmost column
const fn vertical_table() -> [u8; GLYPHS * CHAR_SIZE] {
    let mut table = [0u8; GLYPHS * CHAR_SIZE];
    let mut glyph = 0;
    while glyph < GLYPHS {
        let rows = BASIC_LEGACY[FIRST_CHAR as usize + glyph];
        let mut column = 0;
        while column < CHAR_SIZE {
            table[glyph * CHAR_SIZE + column] = rows[CHAR_SIZE - 1 - column];
            column += 1;
        }
        glyph += 1;
    }
    table
}

static FONT_8X8_DATA: [u8; GLYPHS * CHAR_SIZE] = horizontal_table();
static FONT_8X8_VERTICAL_DATA: [u8; GLYPHS * CHAR_SIZE] = vertical_table();

/// 8x8 font for text running left to right
pub static FONT_8X8: FontSpec<'static> = FontSpec {
    data: &FONT_8X8_DATA,
    char_size: CHAR_SIZE as u8,
    first_char: FIRST_CHAR,
    last_char: LAST_CHAR,
};

/// 8x8 font for text running top to bottom, read with the display turned sideways
pub static FONT_8X8_VERTICAL: FontSpec<'static> = FontSpec {
    data: &FONT_8X8_VERTICAL_DATA,
    char_size: CHAR_SIZE as u8,
    first_char: FIRST_CHAR,
    last_char: LAST_CHAR,
};
