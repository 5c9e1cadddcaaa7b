//! Text rendering
//!
//! Text is blitted glyph by glyph, each glyph column OR-ed into a framebuffer column just
//! like a bitmap. Two layouts exist:
//!
//! - horizontal: characters advance to the right, `\n` returns to the start column and
//!   moves one glyph cell down
//! - vertical: characters advance downwards, `\n` returns to the start row and moves one
//!   glyph cell to the left, so lines stack right to left. Paired with
//!   [`FONT_8X8_VERTICAL`] this gives sideways labels without rotating the buffer.
//!
//! Characters the font does not cover are skipped but still take up a glyph cell.

use core::fmt::{self, Write};

use heapless::String;

use super::font::{FontSpec, FONT_8X8, FONT_8X8_VERTICAL};
use super::framebuffer::Framebuffer;
use super::PRINT_BUFFER_SIZE;

/// Text bytes kept by the print functions, the last buffer byte stays reserved
const PRINT_CAPACITY: usize = PRINT_BUFFER_SIZE - 1;

/// Direction in which the text cursor advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLayout {
    /// Left to right, lines top to bottom
    Horizontal,
    /// Top to bottom, lines right to left
    Vertical,
}

impl Framebuffer {
    /// Render `text` left to right with [`FONT_8X8`], top left corner at `(x, y)`
    pub fn render_text(&mut self, x: u8, y: u8, text: &str) {
        self.render_text_with(&FONT_8X8, TextLayout::Horizontal, x, y, text);
    }

    /// Render `text` top to bottom with [`FONT_8X8_VERTICAL`], first glyph at `(x, y)`
    pub fn render_text_vertical(&mut self, x: u8, y: u8, text: &str) {
        self.render_text_with(&FONT_8X8_VERTICAL, TextLayout::Vertical, x, y, text);
    }

    /// Render `text` with any glyph table and layout
    pub fn render_text_with(
        &mut self,
        font: &FontSpec<'_>,
        layout: TextLayout,
        x: u8,
        y: u8,
        text: &str,
    ) {
        let cell = i32::from(font.char_size);
        let (x_start, y_start) = (i32::from(x), i32::from(y));
        let (mut x, mut y) = (x_start, y_start);

        for c in text.chars() {
            match font.glyph(c) {
                Some(glyph) => {
                    for (offset, &column) in glyph.iter().enumerate() {
                        self.or_column_shifted(x + offset as i32, y, u64::from(column));
                    }
                }
                None if c == '\n' => {
                    match layout {
                        TextLayout::Horizontal => {
                            x = x_start;
                            y += cell;
                        }
                        TextLayout::Vertical => {
                            y = y_start;
                            x -= cell;
                        }
                    }
                    continue;
                }
                // not in the font - leave the cell empty
                None => {}
            }

            match layout {
                TextLayout::Horizontal => x += cell,
                TextLayout::Vertical => y += cell,
            }
        }
    }

    /// Format `args` into a [`PRINT_BUFFER_SIZE`] byte buffer and render it horizontally.
    /// At most `PRINT_BUFFER_SIZE - 1` bytes of text are drawn.
    ///
    /// ```ignore
    /// fb.print(0, 0, format_args!("score: {}", score));
    /// ```
    pub fn print(&mut self, x: u8, y: u8, args: fmt::Arguments<'_>) {
        let text = format_bounded(args);
        self.render_text(x, y, &text);
    }

    /// Format `args` into a [`PRINT_BUFFER_SIZE`] byte buffer and render it vertically
    pub fn print_vertical(&mut self, x: u8, y: u8, args: fmt::Arguments<'_>) {
        let text = format_bounded(args);
        self.render_text_vertical(x, y, &text);
    }
}

/// Keeps every whole character that fits and drops the rest
struct TruncatingWriter(String<PRINT_CAPACITY>);

impl Write for TruncatingWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Compose `args` into a fixed buffer; a formatting error gives an empty string
fn format_bounded(args: fmt::Arguments<'_>) -> String<PRINT_CAPACITY> {
    let mut writer = TruncatingWriter(String::new());
    if writer.write_fmt(args).is_err() {
        writer.0.clear();
    }
    writer.0
}
