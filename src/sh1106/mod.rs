//! SH1106 OLED Display Driver with framebuffer
//!
//! Used with the common 1.3" 128x64 monochrome OLED modules, which carry an SH1106
//! (a SSD1306 clone that only supports page addressing).
//!
//! ### Usage
//! This driver does not hide that you're working with one buffer. To
//! display something you:
//!
//! 1. create the driver with [`driver::Sh1106::new`], which resets and powers up the panel
//! 1. clear and draw into [`driver::Sh1106::buffer_mut`], either with the primitives in
//!    [`draw`] and [`text`] or with [`embedded_graphics`](https://github.com/jamwaffles/embedded-graphics)
//! 1. then send the frame to the display using [`driver::Sh1106::update`]
//!
//! The framebuffer is column-major: one `u64` per visible column, bit `y` set means the
//! pixel `(column, y)` is lit. That is the same shape the controller RAM has, split into
//! eight byte-tall pages, so a flush is one shift and mask per column and page.

pub mod bitmap;
pub mod cmd;
pub mod draw;
pub mod driver;
pub mod flag;
pub mod font;
pub mod framebuffer;
pub mod graphics;
pub mod interface;
pub mod text;

/// Display width, visible pixels horizontally
pub const WIDTH: usize = 128;

/// Display height, pixels vertically
pub const HEIGHT: usize = 64;

/// Number of 8 pixel tall pages stacked on top of each other in display RAM
pub const PAGES: usize = 8;

/// Vertical pixels held by one column byte of a page
pub const BITS_PER_PAGE_COLUMN: usize = 8;

/// Display RAM has 132 columns, while only 128 are visible.
/// Writes start after the first 2 non-visible columns.
pub const NONVISIBLE_BORDER_OFFSET: u8 = 2;

/// Contrast value programmed during setup
pub const DEFAULT_CONTRAST: u8 = 128;

/// Size in bytes of the text buffer used by the formatted print functions.
/// The last byte is reserved, so at most 63 bytes of text are rendered.
pub const PRINT_BUFFER_SIZE: usize = 64;

#[cfg(test)]
mod testing;
