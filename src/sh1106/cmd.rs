/// SH1106 command bytes
///
/// Commands that carry an argument in their low bits (page, column, start line,
/// addressing mode) are listed with the argument bits cleared; see [`super::flag::Flag`]
/// for the masks.
pub struct Cmd;
#[allow(missing_docs)]
impl Cmd {
    // Fundamental
    pub const SET_CONTRAST: u8 = 0x81;
    pub const ENTIRE_DISPLAY_ON_DISABLE: u8 = 0xA4;
    pub const ENTIRE_DISPLAY_ON: u8 = 0xA5;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const REVERSE_DISPLAY: u8 = 0xA7;
    pub const SET_DISPLAY_OFF: u8 = 0xAE;
    pub const SET_DISPLAY_ON: u8 = 0xAF;

    // Addressing
    pub const SET_PAGE_COLUMN_L: u8 = 0x00;
    pub const SET_PAGE_COLUMN_H: u8 = 0x10;
    pub const SET_ADDRESSING_MODE: u8 = 0x20;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_PAGE: u8 = 0xB0;
}

/*
Datasheet commands not used by this driver:
0xA0 - Segment Remap
0xA8 - Multiplex Ratio
0x8D - Charge Pump
0xC0 / 0xC8 - COM Scan Direction
0xD3 - Display Offset
0xD5 - Display Clock Divide
0xD9 - Pre-charge Period
0xDA - COM Pins
0xDB - VCOM Deselect Level
*/
