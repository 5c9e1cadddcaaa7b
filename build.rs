use image::GenericImageView;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Logo size on the 128x64 panel, both multiples of 8
const LOGO_WIDTH: u32 = 48;
const LOGO_HEIGHT: u32 = 48;

/// Convert PNG image to the column packed bitmap layout at build time
///
/// Every column is written as `height / 8` bytes, bottom-most 8 rows first, bit 0 of a
/// byte being the top row of its run. Pixels darker than `threshold` are lit.
fn convert_image_to_columns(
    input_path: &str,
    output_path: &str,
    target_width: u32,
    target_height: u32,
    threshold: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", input_path);

    if !Path::new(input_path).exists() {
        println!("cargo:warning=Image file '{}' not found, skipping conversion", input_path);
        // Create empty file so include_bytes! still resolves
        File::create(output_path)?;
        return Ok(());
    }

    let img = image::open(input_path)?;
    println!("cargo:warning=Original image size: {}x{}", img.width(), img.height());

    // Fit into the target box, keeping the aspect ratio
    let resized = img.resize(
        target_width,
        target_height,
        image::imageops::FilterType::Lanczos3,
    );
    let (new_width, new_height) = resized.dimensions();
    let gray = resized.to_luma8();

    let offset_x = (target_width - new_width) / 2;
    let offset_y = (target_height - new_height) / 2;

    let is_lit = |x: u32, y: u32| -> bool {
        match (x.checked_sub(offset_x), y.checked_sub(offset_y)) {
            (Some(ix), Some(iy)) if ix < new_width && iy < new_height => {
                gray.get_pixel(ix, iy)[0] < threshold
            }
            _ => false,
        }
    };

    let chunks = target_height / 8;
    let mut buffer = Vec::with_capacity((target_width * chunks) as usize);

    for x in 0..target_width {
        for chunk in 0..chunks {
            let top = target_height - 8 * (chunk + 1);
            let mut byte = 0u8;
            for bit in 0..8 {
                if is_lit(x, top + bit) {
                    byte |= 1 << bit;
                }
            }
            buffer.push(byte);
        }
    }

    println!("cargo:warning=Logo packed into {} bytes", buffer.len());

    let mut file = File::create(output_path)?;
    file.write_all(&buffer)?;
    Ok(())
}

fn main() {
    if env::var_os("CARGO_FEATURE_ESP32").is_some() {
        embuild::espidf::sysenv::output();
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let logo_output = format!("{}/logo.bin", out_dir);

    if let Err(e) = convert_image_to_columns(
        "logo.png",
        &logo_output,
        LOGO_WIDTH,
        LOGO_HEIGHT,
        128, // threshold (0-255, 128 = middle gray)
    ) {
        println!("cargo:warning=Failed to convert logo.png: {}", e);
        let _ = File::create(&logo_output);
    }

    println!("cargo:rerun-if-changed=logo.png");
}
