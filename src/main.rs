use embedded_graphics::mono_font::{iso_8859_15::FONT_5X8, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::{prelude::*, text::Text};

use esp_idf_svc::hal::delay::Delay;
use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;
use esp_idf_svc::hal::spi;

use sh1106_fb::{Bitmap, Sh1106, HEIGHT, WIDTH};

// Column packed logo (generated at build time from logo.png)
const LOGO_IMAGE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/logo.bin"));
const LOGO_SIZE: u16 = 48;

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    log::info!("Configuring SPI for the SH1106");
    let driver = spi::SpiDeviceDriver::new_single(
        peripherals.spi2,
        pins.gpio12,                    // SCK
        pins.gpio11,                    // MOSI
        Option::<gpio::AnyIOPin>::None, // the display never answers
        Some(pins.gpio10),              // CS
        &spi::SpiDriverConfig::new(),
        &spi::SpiConfig::new().baudrate(4.MHz().into()), // Mode0 is the default
    )?;

    let delay = Delay::default();

    let mut display = Sh1106::new(
        driver,
        gpio::PinDriver::output(pins.gpio9)?, // DC
        gpio::PinDriver::output(pins.gpio8)?, // RST
        delay,
    )
    .map_err(|e| anyhow::anyhow!("Display setup failed: {:?}", e))?;

    let fb = display.buffer_mut();
    fb.draw_rectangle(0, 0, WIDTH as u8, HEIGHT as u8);

    let logo = Bitmap::new(LOGO_IMAGE, LOGO_SIZE, LOGO_SIZE, 8);
    if logo.is_valid() {
        fb.draw_bitmap(4, 8, &logo);
    } else {
        log::warn!("Logo image not available (logo.png not found at build time)");
        fb.draw_line(4, 8, 4 + LOGO_SIZE as u8, 8 + LOGO_SIZE as u8);
        fb.draw_line(4, 8 + LOGO_SIZE as u8, 4 + LOGO_SIZE as u8, 8);
    }

    fb.render_text_vertical(WIDTH as u8 - 10, 4, "SH1106");

    let label_style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
    Text::new("uptime", Point::new(58, 14), label_style).draw(fb)?;

    display
        .update()
        .map_err(|e| anyhow::anyhow!("Flush failed: {:?}", e))?;
    log::info!("Static screen drawn, starting counter");

    let mut seconds: u32 = 0;
    loop {
        delay.delay_ms(1000);
        seconds = seconds.wrapping_add(1);

        let fb = display.buffer_mut();
        // wipe the counter area only, the rest of the frame stays
        fb.columns_mut()[58..112]
            .iter_mut()
            .for_each(|column| *column &= !(0xFF << 24));
        fb.print(58, 24, format_args!("{:>5}s", seconds));

        if let Err(e) = display.update() {
            log::error!("Failed to flush frame: {:?}", e);
        }
    }
}
