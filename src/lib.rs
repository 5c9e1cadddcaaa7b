//! Framebuffer, drawing primitives and text rendering for SH1106 128x64 OLED modules
//!
//! Drawing happens in RAM on a [`Framebuffer`]; nothing reaches the panel until
//! [`Sh1106::update`] streams the whole frame over SPI, one page at a time.
//!
//! The driver is generic over the [`embedded_hal`] 1.0 traits, so it runs on any HAL
//! providing an [`embedded_hal::spi::SpiDevice`], two output pins (data/command
//! indicator and reset) and a [`embedded_hal::delay::DelayNs`].

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod sh1106;

pub use display_interface::DisplayError;

pub use crate::sh1106::bitmap::Bitmap;
pub use crate::sh1106::cmd::Cmd;
pub use crate::sh1106::driver::Sh1106;
pub use crate::sh1106::flag::{AddressingMode, Flag, PowerState};
pub use crate::sh1106::font::{FontSpec, FONT_8X8, FONT_8X8_VERTICAL};
pub use crate::sh1106::framebuffer::Framebuffer;
pub use crate::sh1106::interface::DisplayInterface;
pub use crate::sh1106::text::TextLayout;
pub use crate::sh1106::{HEIGHT, PAGES, WIDTH};
