//! Recording stand-ins for the SPI bus, pins and delay used by the unit tests

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, Operation, SpiDevice};

use super::interface::DisplayInterface;

/// One byte as seen by the controller, tagged by the indicator level at transfer time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sent {
    Cmd(u8),
    Data(u8),
}

#[derive(Default)]
struct State {
    dc_high: bool,
    sent: Vec<Sent>,
    indicator_writes: usize,
    reset_levels: Vec<bool>,
    delays_ms: Vec<u32>,
    reply: u8,
    fail_bus: bool,
}

/// Shared view on everything the fakes recorded
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<State>>);

impl Recorder {
    pub fn sent(&self) -> Vec<Sent> {
        self.0.borrow().sent.clone()
    }

    pub fn commands(&self) -> Vec<u8> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Cmd(b) => Some(b),
                Sent::Data(_) => None,
            })
            .collect()
    }

    pub fn data(&self) -> Vec<u8> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Data(b) => Some(b),
                Sent::Cmd(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        let mut state = self.0.borrow_mut();
        state.sent.clear();
        state.indicator_writes = 0;
        state.reset_levels.clear();
        state.delays_ms.clear();
    }

    pub fn indicator_writes(&self) -> usize {
        self.0.borrow().indicator_writes
    }

    pub fn reset_levels(&self) -> Vec<bool> {
        self.0.borrow().reset_levels.clone()
    }

    pub fn delays_ms(&self) -> Vec<u32> {
        self.0.borrow().delays_ms.clone()
    }

    pub fn set_reply(&self, reply: u8) {
        self.0.borrow_mut().reply = reply;
    }

    pub fn fail_bus(&self) {
        self.0.borrow_mut().fail_bus = true;
    }

    fn record(&self, byte: u8) {
        let mut state = self.0.borrow_mut();
        let sent = if state.dc_high {
            Sent::Data(byte)
        } else {
            Sent::Cmd(byte)
        };
        state.sent.push(sent);
    }
}

#[derive(Debug)]
pub struct BusError;

impl spi::Error for BusError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

pub struct FakeSpi(Recorder);

impl spi::ErrorType for FakeSpi {
    type Error = BusError;
}

impl SpiDevice for FakeSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        if self.0 .0.borrow().fail_bus {
            return Err(BusError);
        }
        for op in operations.iter_mut() {
            match op {
                Operation::Write(words) => words.iter().for_each(|&b| self.0.record(b)),
                Operation::TransferInPlace(words) => {
                    let reply = self.0 .0.borrow().reply;
                    for word in words.iter_mut() {
                        self.0.record(*word);
                        *word = reply;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

pub struct FakeDc(Recorder);

impl digital::ErrorType for FakeDc {
    type Error = Infallible;
}

impl OutputPin for FakeDc {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        state.dc_high = false;
        state.indicator_writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        state.dc_high = true;
        state.indicator_writes += 1;
        Ok(())
    }
}

pub struct FakeRst(Recorder);

impl digital::ErrorType for FakeRst {
    type Error = Infallible;
}

impl OutputPin for FakeRst {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0 .0.borrow_mut().reset_levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0 .0.borrow_mut().reset_levels.push(true);
        Ok(())
    }
}

pub struct FakeDelay(Recorder);

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.0 .0.borrow_mut().delays_ms.push(ms);
    }
}

pub type FakeInterface = DisplayInterface<FakeSpi, FakeDc, FakeRst, FakeDelay>;

pub fn fake_parts() -> (FakeSpi, FakeDc, FakeRst, FakeDelay, Recorder) {
    let log = Recorder::default();
    (
        FakeSpi(log.clone()),
        FakeDc(log.clone()),
        FakeRst(log.clone()),
        FakeDelay(log.clone()),
        log,
    )
}

pub fn fake_interface() -> (FakeInterface, Recorder) {
    let (spi, dc, rst, delay, log) = fake_parts();
    (DisplayInterface::new(spi, dc, rst, delay), log)
}
