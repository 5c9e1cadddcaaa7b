//! Drawing primitives
//!
//! All primitives OR into the [`Framebuffer`]: overlapping shapes compose by union and
//! the order of draws never matters. Geometry reaching past the display edges is clipped.

use super::bitmap::Bitmap;
use super::framebuffer::Framebuffer;
use super::WIDTH;

impl Framebuffer {
    /// Light a single pixel
    pub fn draw_pixel(&mut self, x: u8, y: u8) {
        self.plot(i32::from(x), i32::from(y));
    }

    /// Vertical run of `length` pixels downwards from `(x, y)`, one column write
    pub fn draw_vertical_line(&mut self, x: u8, y: u8, length: u8) {
        self.vertical_run(i32::from(x), i32::from(y), u32::from(length));
    }

    /// Horizontal run of `length` pixels rightwards from `(x, y)`
    pub fn draw_horizontal_line(&mut self, x: u8, y: u8, length: u8) {
        self.horizontal_run(i32::from(x), i32::from(y), u32::from(length));
    }

    /// Straight line between two end points, both included.
    ///
    /// Steps one pixel at a time along the axis with the larger delta and derives the
    /// other coordinate with truncating integer division.
    pub fn draw_line(&mut self, x1: u8, y1: u8, x2: u8, y2: u8) {
        let (x1, y1, x2, y2) = (i32::from(x1), i32::from(y1), i32::from(x2), i32::from(y2));
        let x_delta = x2 - x1;
        let y_delta = y2 - y1;

        if x_delta == 0 && y_delta == 0 {
            self.plot(x1, y1);
            return;
        }

        if x_delta.abs() > y_delta.abs() {
            let step = x_delta.signum();
            let mut x = x1;
            loop {
                self.plot(x, y1 + (x - x1) * y_delta / x_delta);
                if x == x2 {
                    break;
                }
                x += step;
            }
        } else {
            let step = y_delta.signum();
            let mut y = y1;
            loop {
                self.plot(x1 + (y - y1) * x_delta / y_delta, y);
                if y == y2 {
                    break;
                }
                y += step;
            }
        }
    }

    /// Outline of a `width` x `height` rectangle with its top left corner at `(x, y)`
    pub fn draw_rectangle(&mut self, x: u8, y: u8, width: u8, height: u8) {
        if width == 0 || height == 0 {
            return;
        }
        let (x, y) = (i32::from(x), i32::from(y));
        let (w, h) = (u32::from(width), u32::from(height));
        let right = x + w as i32 - 1;
        let bottom = y + h as i32 - 1;

        self.vertical_run(x, y, h);
        self.vertical_run(right, y, h);
        self.horizontal_run(x, y, w);
        self.horizontal_run(x, bottom, w);
    }

    /// Solid `width` x `height` rectangle with its top left corner at `(x, y)`
    pub fn draw_filled_rectangle(&mut self, x: u8, y: u8, width: u8, height: u8) {
        let start = usize::from(x);
        let end = (start + usize::from(width)).min(WIDTH);
        for column in start..end {
            self.vertical_run(column as i32, i32::from(y), u32::from(height));
        }
    }

    /// Blit a packed bitmap with its top left corner at `(x, y)`.
    ///
    /// Source bytes are streamed column by column; once a column has received
    /// `height` rows the next destination column starts. Stops at the right display
    /// edge or when the data runs out.
    pub fn draw_bitmap(&mut self, x: u8, y: u8, bitmap: &Bitmap<'_>) {
        if bitmap.data_size == 0 {
            return;
        }
        let data_size = i32::from(bitmap.data_size);
        let height = i32::from(bitmap.height);
        let mut column = usize::from(x);
        let mut row = 0;

        for &byte in bitmap.data.iter().take(bitmap.packed_len()) {
            if column >= WIDTH {
                break;
            }
            let shift = height - row - data_size + i32::from(y);
            self.or_column_shifted(column as i32, shift, u64::from(byte));

            row += data_size;
            if row >= height {
                column += 1;
                row = 0;
            }
        }
    }

    fn plot(&mut self, x: i32, y: i32) {
        if y < 0 {
            return;
        }
        self.or_column_shifted(x, y, 1);
    }

    fn vertical_run(&mut self, x: i32, y: i32, length: u32) {
        let run = match 1u64.checked_shl(length) {
            Some(bit) => bit - 1,
            None => u64::MAX,
        };
        self.or_column_shifted(x, y, run);
    }

    fn horizontal_run(&mut self, x: i32, y: i32, length: u32) {
        if y < 0 || x >= WIDTH as i32 {
            return;
        }
        let bits = match 1u64.checked_shl(y as u32) {
            Some(bit) => bit,
            None => return,
        };
        let start = x.max(0) as usize;
        let end = (i64::from(x) + i64::from(length)).clamp(0, WIDTH as i64) as usize;
        for column in start..end {
            self.or_column(column, bits);
        }
    }
}
