//! Display interface using SPI
use display_interface::DisplayError;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// The SSD1306 manual states a required reset pulse of 3 us - we are a bit more generous
const RESET_DELAY_MS: u32 = 1;

/// The connection to the controller: SPI transport, command/data indicator and reset line
pub struct DisplayInterface<SPI, DC, RST, DELAY> {
    /// SPI device
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Reseting, active low
    rst: RST,
    /// Delay provider for the reset holds
    delay: DELAY,
}

impl<SPI, DC, RST, DELAY> DisplayInterface<SPI, DC, RST, DELAY> {
    /// Bundle the bus, pins and delay. Nothing is sent to the controller.
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: DELAY) -> Self {
        DisplayInterface {
            spi,
            dc,
            rst,
            delay,
        }
    }

    /// Give back the bus, pins and delay
    pub fn release(self) -> (SPI, DC, RST, DELAY) {
        (self.spi, self.dc, self.rst, self.delay)
    }
}

impl<SPI, DC, RST, DELAY> DisplayInterface<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Signal that the following bytes are commands, by pulling the D/C pin LOW
    pub fn set_command_mode(&mut self) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::DCError)
    }

    /// Signal that the following bytes are data, by pulling the D/C pin HIGH
    pub fn set_data_mode(&mut self) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::DCError)
    }

    /// Transfer a single byte full-duplex and return the byte clocked in from the controller.
    ///
    /// Blocks until the SPI peripheral reports the transfer complete, there is no timeout.
    pub fn send_byte(&mut self, value: u8) -> Result<u8, DisplayError> {
        let mut word = [value];
        self.spi
            .transfer_in_place(&mut word)
            .map_err(|_| DisplayError::BusWriteError)?;
        Ok(word[0])
    }

    /// Basic function for sending a single-byte command
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        // low for commands
        self.set_command_mode()?;

        match self.send_byte(command) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("SPI write error for command 0x{:02X}: {:?}", command, e);
                Err(e)
            }
        }
    }

    /// Send a run of commands, each one preceded by the command indicator
    pub(crate) fn cmds(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        commands.iter().try_for_each(|&command| self.cmd(command))
    }

    /// Basic function for sending an array of u8-values of data over spi
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        // high for data
        self.set_data_mode()?;
        self.spi
            .write(data)
            .map_err(|_| DisplayError::BusWriteError)
    }

    /// Carry out a display hardware reset by toggling the reset line
    pub(crate) fn reset(&mut self) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_DELAY_MS);
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_DELAY_MS);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }
}
