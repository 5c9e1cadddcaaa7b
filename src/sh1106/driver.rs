//! SH1106 Display Driver Implementation
//!
//! This module contains the main driver for the SH1106 OLED controller. It owns the
//! framebuffer, runs the device lifecycle and flushes the buffer page by page.
//!
//! ## Architecture
//!
//! ### Lifecycle Functions
//! - `new()` - Create the driver and run `setup()`
//! - `setup()` - Hardware reset, base configuration, blank frame, display on
//! - `reset()` - Hardware reset only
//!
//! ### Buffer Functions
//! - `buffer()` / `buffer_mut()` - Access the framebuffer for drawing
//! - `clear_buffer()` - Erase the framebuffer
//! - `update()` - Flush the framebuffer to display RAM
//!
//! ### Configuration Functions
//! - `set_contrast()`, `set_power()`, `set_inverted()`, `set_start_line()`,
//!   `set_entire_display_on()`, `set_addressing_mode()`
//!
//! ## Protocol Details
//!
//! ### Page Addressing
//!
//! Display RAM is 8 pages of 132 columns, each column byte holding 8 vertical pixels with
//! bit 0 on top. Before writing a page the page and the start column have to be
//! selected, the column split into a low and a high nibble command. Writes always begin
//! at [`NONVISIBLE_BORDER_OFFSET`] so the first visible column receives the first byte.
//!
//! ### Command/Data Indicator
//!
//! The D/C line is driven before every transfer: low for commands, high for data. Argument
//! bytes of commands (the contrast value) are sent as commands too.
//!
//! ### Ownership
//!
//! The framebuffer lives inside the driver and is only reachable through `&mut self`, so
//! drawing and flushing can never interleave. Code sharing the display with an interrupt
//! handler has to put the whole driver behind its own lock; otherwise a draw from the
//! handler in the middle of `update()` shows up as a torn frame.

use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::sh1106::flag::{AddressingMode, Flag, PowerState};
use crate::sh1106::framebuffer::Framebuffer;
use crate::sh1106::interface::DisplayInterface;
use crate::sh1106::{cmd::Cmd, DEFAULT_CONTRAST, NONVISIBLE_BORDER_OFFSET, PAGES, WIDTH};

/// SH1106 OLED Display Driver
///
/// ## Type Parameters
///
/// - `SPI` - SPI device for communication
/// - `DC` - Data/Command output pin
/// - `RST` - Reset output pin
/// - `DELAY` - Delay provider for timing
pub struct Sh1106<SPI, DC, RST, DELAY> {
    /// The display interface
    pub interface: DisplayInterface<SPI, DC, RST, DELAY>,
    buffer: Framebuffer,
    contrast: u8,
    power: PowerState,
    inverted: bool,
    addressing_mode: AddressingMode,
}

impl<SPI, DC, RST, DELAY> Sh1106<SPI, DC, RST, DELAY> {
    /// Create a new instance from an existing interface without touching the hardware
    pub fn from_interface(interface: DisplayInterface<SPI, DC, RST, DELAY>) -> Self {
        Sh1106 {
            interface,
            buffer: Framebuffer::new(),
            contrast: DEFAULT_CONTRAST,
            power: PowerState::Off,
            inverted: false,
            addressing_mode: AddressingMode::Page,
        }
    }

    /// The framebuffer as it will be sent by the next [`Sh1106::update`]
    pub fn buffer(&self) -> &Framebuffer {
        &self.buffer
    }

    /// The framebuffer, for drawing
    pub fn buffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.buffer
    }

    /// Erase the framebuffer; the panel keeps its content until the next update
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Last contrast value sent to the controller
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Last power state sent to the controller
    pub fn power(&self) -> PowerState {
        self.power
    }

    /// Whether the panel shows lit pixels dark
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Addressing mode used for flushing
    pub fn addressing_mode(&self) -> AddressingMode {
        self.addressing_mode
    }

    /// Give back the bus, pins and delay
    pub fn release(self) -> (SPI, DC, RST, DELAY) {
        self.interface.release()
    }
}

impl<SPI, DC, RST, DELAY> Sh1106<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create the driver and carry out the full display setup, including a hardware reset
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: DELAY) -> Result<Self, DisplayError> {
        let interface = DisplayInterface::new(spi, dc, rst, delay);
        let mut sh1106 = Self::from_interface(interface);
        sh1106.setup()?;
        Ok(sh1106)
    }

    /// Reset the controller, configure it, blank the panel and switch it on
    pub fn setup(&mut self) -> Result<(), DisplayError> {
        log::info!("Initializing SH1106 display");

        self.reset()?;
        self.set_power(PowerState::Off)?;
        self.set_start_line(0)?;
        self.set_contrast(DEFAULT_CONTRAST)?;
        self.set_inverted(false)?;

        self.clear_buffer();
        self.update()?;

        self.set_power(PowerState::On)
    }

    /// Carry out a display hardware reset by toggling the reset line.
    ///
    /// The controller forgets its configuration; the tracked state goes back to the
    /// power-on defaults.
    pub fn reset(&mut self) -> Result<(), DisplayError> {
        log::info!("Resetting SH1106 display");
        self.interface.reset()?;
        self.contrast = DEFAULT_CONTRAST;
        self.power = PowerState::Off;
        self.inverted = false;
        self.addressing_mode = AddressingMode::Page;
        Ok(())
    }

    /// Send the whole framebuffer to display RAM.
    ///
    /// Pages go out in order 0 to 7, each one preceded by its page and start column
    /// selection, columns from left to right.
    pub fn update(&mut self) -> Result<(), DisplayError> {
        log::debug!("Flushing framebuffer");
        self.set_addressing_mode(self.addressing_mode)?;

        let mut page_data = [0u8; WIDTH];
        for page in 0..PAGES {
            self.select_page_and_start_column(page as u8, NONVISIBLE_BORDER_OFFSET)?;
            self.buffer.page(page, &mut page_data);
            self.interface.data(&page_data)?;
        }
        Ok(())
    }

    /// Set the display brightness/contrast, 0 - 255. Default value is 128.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        log::debug!("Setting contrast to {}", contrast);
        self.interface.cmds(&[Cmd::SET_CONTRAST, contrast])?;
        self.contrast = contrast;
        Ok(())
    }

    /// Switch the panel on or off, display RAM is retained while off
    pub fn set_power(&mut self, power: PowerState) -> Result<(), DisplayError> {
        let command = match power {
            PowerState::Off => Cmd::SET_DISPLAY_OFF,
            PowerState::On => Cmd::SET_DISPLAY_ON,
        };
        self.interface.cmd(command)?;
        self.power = power;
        Ok(())
    }

    /// Show lit pixels dark and dark pixels lit
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        let command = if inverted {
            Cmd::REVERSE_DISPLAY
        } else {
            Cmd::NORMAL_DISPLAY
        };
        self.interface.cmd(command)?;
        self.inverted = inverted;
        Ok(())
    }

    /// By setting the start line (i.e. the upmost pixel row), the first RAM data row can
    /// be mapped to a lower pixel row. Lines wrap at 64.
    pub fn set_start_line(&mut self, line: u8) -> Result<(), DisplayError> {
        self.interface
            .cmd(Cmd::SET_START_LINE | (line & Flag::START_LINE_MASK))
    }

    /// Light every pixel regardless of RAM content, or go back to showing RAM
    pub fn set_entire_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        let command = if on {
            Cmd::ENTIRE_DISPLAY_ON
        } else {
            Cmd::ENTIRE_DISPLAY_ON_DISABLE
        };
        self.interface.cmd(command)
    }

    /// Select the addressing mode. For the SH1106 there is only page addressing.
    pub fn set_addressing_mode(&mut self, mode: AddressingMode) -> Result<(), DisplayError> {
        self.interface
            .cmd(Cmd::SET_ADDRESSING_MODE | mode.bits())?;
        self.addressing_mode = mode;
        Ok(())
    }

    /// Before writing to the display RAM, the page and column need to be selected
    fn select_page_and_start_column(
        &mut self,
        page: u8,
        start_column: u8,
    ) -> Result<(), DisplayError> {
        self.interface.cmds(&[
            Cmd::SET_PAGE | (page & Flag::NIBBLE_MASK),
            Cmd::SET_PAGE_COLUMN_L | (start_column & Flag::NIBBLE_MASK),
            Cmd::SET_PAGE_COLUMN_H | ((start_column >> 4) & Flag::NIBBLE_MASK),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sh1106::testing::{fake_interface, FakeInterface, Recorder, Sent};
    use crate::sh1106::HEIGHT;
    use std::vec::Vec;

    type TestDisplay = Sh1106<
        crate::sh1106::testing::FakeSpi,
        crate::sh1106::testing::FakeDc,
        crate::sh1106::testing::FakeRst,
        crate::sh1106::testing::FakeDelay,
    >;

    fn display() -> (TestDisplay, Recorder) {
        let (interface, log): (FakeInterface, Recorder) = fake_interface();
        (Sh1106::from_interface(interface), log)
    }

    fn flush_preamble(page: u8) -> [Sent; 3] {
        [Sent::Cmd(0xB0 | page), Sent::Cmd(0x02), Sent::Cmd(0x10)]
    }

    /// Split a recorded flush into its pages, checking the command framing on the way
    fn pages(log: &Recorder) -> Vec<Vec<u8>> {
        let sent = log.sent();
        assert_eq!(sent[0], Sent::Cmd(0x22));
        assert_eq!(sent.len(), 1 + PAGES * (3 + WIDTH));

        sent[1..]
            .chunks(3 + WIDTH)
            .enumerate()
            .map(|(page, chunk)| {
                assert_eq!(chunk[..3], flush_preamble(page as u8));
                chunk[3..]
                    .iter()
                    .map(|s| match s {
                        Sent::Data(b) => *b,
                        Sent::Cmd(b) => panic!("command 0x{:02X} inside page data", b),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_setup_sequence() {
        let (mut display, log) = display();
        display.buffer_mut().draw_pixel(1, 1);
        display.setup().unwrap();

        assert_eq!(log.reset_levels(), [true, false, true]);
        assert_eq!(log.delays_ms(), [1, 1, 1]);

        let sent = log.sent();
        assert_eq!(
            sent[..6],
            [
                Sent::Cmd(0xAE),
                Sent::Cmd(0x40),
                Sent::Cmd(0x81),
                Sent::Cmd(128),
                Sent::Cmd(0xA6),
                Sent::Cmd(0x22),
            ]
        );
        assert_eq!(sent.last(), Some(&Sent::Cmd(0xAF)));

        // the blank frame flushed during setup
        let data = log.data();
        assert_eq!(data.len(), PAGES * WIDTH);
        assert!(data.iter().all(|&b| b == 0));
        assert_eq!(display.buffer().lit_pixel_count(), 0);

        assert_eq!(display.power(), PowerState::On);
        assert_eq!(display.contrast(), DEFAULT_CONTRAST);
        assert!(!display.is_inverted());
    }

    #[test]
    fn test_new_runs_setup() {
        let (spi, dc, rst, delay, log) = crate::sh1106::testing::fake_parts();
        let display = Sh1106::new(spi, dc, rst, delay).unwrap();
        assert_eq!(display.power(), PowerState::On);
        assert_eq!(log.commands().first(), Some(&0xAE));
        assert_eq!(log.commands().last(), Some(&0xAF));
    }

    #[test]
    fn test_flush_single_pixel() {
        let (mut display, log) = display();
        display.buffer_mut().draw_pixel(0, 0);
        display.update().unwrap();

        let pages = pages(&log);
        assert_eq!(pages[0][0], 0x01);
        let lit: usize = pages.iter().flatten().filter(|&&b| b != 0).count();
        assert_eq!(lit, 1);
    }

    #[test]
    fn test_flush_top_row() {
        let (mut display, log) = display();
        display.buffer_mut().draw_horizontal_line(0, 0, 128);
        display.update().unwrap();

        let pages = pages(&log);
        assert!(pages[0].iter().all(|&b| b == 0x01));
        assert!(pages[1..].iter().flatten().all(|&b| b == 0));
    }

    #[test]
    fn test_flush_bytes_are_column_bits_of_their_page() {
        let (mut display, log) = display();
        let fb = display.buffer_mut();
        fb.draw_line(0, 0, 127, 63);
        fb.draw_rectangle(10, 5, 50, 40);
        fb.render_text(20, 20, "Hi!");
        fb.columns_mut()[77] = 0x0123_4567_89AB_CDEF;
        let columns = *display.buffer().columns();
        display.update().unwrap();

        for (page, bytes) in pages(&log).iter().enumerate() {
            assert_eq!(bytes.len(), WIDTH);
            for (column, &byte) in bytes.iter().enumerate() {
                assert_eq!(byte, (columns[column] >> (8 * page)) as u8);
            }
        }
    }

    #[test]
    fn test_full_frame() {
        let (mut display, log) = display();
        display
            .buffer_mut()
            .draw_filled_rectangle(0, 0, WIDTH as u8, HEIGHT as u8);
        display.update().unwrap();
        assert!(pages(&log).iter().flatten().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_contrast_value_is_sent_as_command() {
        let (mut display, log) = display();
        display.set_contrast(0x3F).unwrap();
        assert_eq!(log.sent(), [Sent::Cmd(0x81), Sent::Cmd(0x3F)]);
        assert_eq!(display.contrast(), 0x3F);
    }

    #[test]
    fn test_lifecycle_mutators() {
        let (mut display, log) = display();
        display.set_power(PowerState::On).unwrap();
        display.set_inverted(true).unwrap();
        display.set_entire_display_on(true).unwrap();
        display.set_entire_display_on(false).unwrap();
        display.set_start_line(70).unwrap();
        display.set_addressing_mode(AddressingMode::Page).unwrap();
        display.set_power(PowerState::Off).unwrap();

        assert_eq!(
            log.commands(),
            [0xAF, 0xA7, 0xA5, 0xA4, 0x40 | 6, 0x22, 0xAE]
        );
        assert!(display.is_inverted());
        assert_eq!(display.power(), PowerState::Off);
        assert!(log.data().is_empty());
    }

    #[test]
    fn test_reset_restores_tracked_defaults() {
        let (mut display, log) = display();
        display.set_power(PowerState::On).unwrap();
        display.set_inverted(true).unwrap();
        display.set_contrast(10).unwrap();
        log.clear();

        display.reset().unwrap();
        assert_eq!(log.reset_levels(), [true, false, true]);
        assert!(log.sent().is_empty());
        assert_eq!(display.power(), PowerState::Off);
        assert!(!display.is_inverted());
        assert_eq!(display.contrast(), DEFAULT_CONTRAST);
    }

    #[test]
    fn test_drawing_does_not_touch_the_bus() {
        let (mut display, log) = display();
        display.buffer_mut().draw_filled_rectangle(0, 0, 20, 20);
        display.buffer_mut().print(0, 30, format_args!("{}", 7));
        display.clear_buffer();
        assert!(log.sent().is_empty());
        assert_eq!(log.indicator_writes(), 0);
    }

    #[test]
    fn test_bus_failure_aborts_update() {
        let (mut display, log) = display();
        log.fail_bus();
        assert!(matches!(
            display.update(),
            Err(DisplayError::BusWriteError)
        ));
    }
}
