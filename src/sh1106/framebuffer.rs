//! Column-major monochrome framebuffer
//!
//! One `u64` represents a vertical line of the display, bit `y` of column `x` is the pixel
//! `(x, y)`. Columns map 1:1 onto the controller's visible column RAM, so every primitive
//! is an integer read-modify-write on the affected columns and a flush never has to
//! regroup pixels.
//!
//! Every write is clipped against [`WIDTH`] and [`HEIGHT`]; nothing outside the
//! visible area is ever touched. Drawing only ever sets bits, [`Framebuffer::clear`]
//! is the only way to erase.

use super::{BITS_PER_PAGE_COLUMN, HEIGHT, PAGES, WIDTH};

/// Pixel storage for the whole display
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    columns: [u64; WIDTH],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("lit", &self.lit_pixel_count())
            .finish()
    }
}

impl Framebuffer {
    /// A framebuffer with all pixels cleared
    pub const fn new() -> Self {
        Framebuffer {
            columns: [0; WIDTH],
        }
    }

    /// Zero every column
    pub fn clear(&mut self) {
        self.columns.fill(0);
    }

    /// Raw column words, index = x
    pub fn columns(&self) -> &[u64; WIDTH] {
        &self.columns
    }

    /// Raw mutable column words for code that bypasses the primitives.
    ///
    /// Bits at or above [`HEIGHT`] never reach the controller.
    pub fn columns_mut(&mut self) -> &mut [u64; WIDTH] {
        &mut self.columns
    }

    /// Whether pixel `(x, y)` is lit; anything off-screen reads as dark
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        match self.columns.get(x) {
            Some(column) if y < HEIGHT => column & (1u64 << y) != 0,
            _ => false,
        }
    }

    /// Number of lit pixels on the visible area
    pub fn lit_pixel_count(&self) -> u32 {
        self.columns
            .iter()
            .map(|column| (column & Self::visible_mask()).count_ones())
            .sum()
    }

    /// The byte the controller expects for `page` in `column`:
    /// bits `[8 * page, 8 * page + 8)` of the column word.
    pub fn page_byte(&self, page: usize, column: usize) -> u8 {
        if page >= PAGES {
            return 0;
        }
        self.columns
            .get(column)
            .map_or(0, |word| (word >> (BITS_PER_PAGE_COLUMN * page)) as u8)
    }

    /// Fill `out` with one page, one byte per column from left to right
    pub fn page(&self, page: usize, out: &mut [u8; WIDTH]) {
        for (column, byte) in out.iter_mut().enumerate() {
            *byte = self.page_byte(page, column);
        }
    }

    /// OR `bits` into column `x`, dropping anything off-screen
    #[inline]
    pub(crate) fn or_column(&mut self, x: usize, bits: u64) {
        if let Some(column) = self.columns.get_mut(x) {
            *column |= bits & Self::visible_mask();
        }
    }

    /// OR `value` into column `x` with its bit 0 landing on row `y`.
    ///
    /// Negative rows shift right, rows past the bottom edge shift everything out.
    #[inline]
    pub(crate) fn or_column_shifted(&mut self, x: i32, y: i32, value: u64) {
        if x < 0 {
            return;
        }
        let bits = if y >= 0 {
            value.checked_shl(y as u32).unwrap_or(0)
        } else {
            value.checked_shr(y.unsigned_abs()).unwrap_or(0)
        };
        self.or_column(x as usize, bits);
    }

    const fn visible_mask() -> u64 {
        u64::MAX >> (u64::BITS as usize - HEIGHT)
    }
}
