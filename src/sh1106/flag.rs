/// Argument bits and masks combined with the [`super::cmd::Cmd`] bytes.
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Set Addressing Mode (0x20) argument
    pub const ADDRESSING_MODE_PAGE: u8 = 0b10;

    // Page and column address commands carry a nibble
    pub const NIBBLE_MASK: u8 = 0x0F;

    // Set Start Line (0x40) carries a line between 0-63
    pub const START_LINE_MASK: u8 = 0x3F;
}

/// RAM addressing schemes understood by the controller.
///
/// The SSD1306 additionally supports a vertical and horizontal addressing mode,
/// the SH1106 only has page addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressingMode {
    /// Explicit page and column selection before each data run
    #[default]
    Page,
}

impl AddressingMode {
    /// Interpret a raw addressing mode value; values the controller lacks give `None`.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            Flag::ADDRESSING_MODE_PAGE => Some(AddressingMode::Page),
            _ => None,
        }
    }

    /// Argument bits for [`super::cmd::Cmd::SET_ADDRESSING_MODE`]
    pub fn bits(self) -> u8 {
        match self {
            AddressingMode::Page => Flag::ADDRESSING_MODE_PAGE,
        }
    }
}

/// Panel power state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    /// Display off, RAM content retained
    #[default]
    Off,
    /// Display on
    On,
}
