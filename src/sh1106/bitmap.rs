//! Packed monochrome images
//!
//! Image data is stored column by column. Each source byte holds `data_size` vertical
//! pixels; the first byte of a column covers the bottom-most run and later bytes move
//! upwards, bit 0 being the top row of a run. `build.rs` produces this layout from a PNG.

/// Immutable image borrowed from program storage for the duration of a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    /// Packed pixel data
    pub data: &'a [u8],
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Vertical pixels packed per source byte
    pub data_size: u8,
}

impl<'a> Bitmap<'a> {
    /// Describe packed data; nothing is validated here, see [`Bitmap::is_valid`]
    pub const fn new(data: &'a [u8], width: u16, height: u16, data_size: u8) -> Self {
        Bitmap {
            data,
            width,
            height,
            data_size,
        }
    }

    /// Number of source bytes a full draw consumes: `height * width / data_size`
    pub fn packed_len(&self) -> usize {
        if self.data_size == 0 {
            return 0;
        }
        usize::from(self.height) * usize::from(self.width) / usize::from(self.data_size)
    }

    /// Whether the geometry divides evenly into bytes and the data covers all of it
    pub fn is_valid(&self) -> bool {
        let area = usize::from(self.height) * usize::from(self.width);
        self.data_size != 0
            && area % usize::from(self.data_size) == 0
            && self.data.len() >= self.packed_len()
    }
}
