//! [`embedded_graphics`] support for the framebuffer
//!
//! `BinaryColor::On` lights a pixel, `BinaryColor::Off` is ignored, so shapes and text
//! from embedded-graphics compose by union with everything else in the buffer just
//! like the native primitives. Use [`Framebuffer::clear`] to erase.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use super::framebuffer::Framebuffer;
use super::{HEIGHT, WIDTH};

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if color.is_off() || x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
                continue;
            }
            self.or_column(x as usize, 1 << y);
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}
