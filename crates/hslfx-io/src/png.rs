//! PNG format support.
//!
//! Reads 8- and 16-bit grayscale, grayscale+alpha, RGB and RGBA files and
//! converts every sample to HSLA. Writes 8-bit RGBA.
//!
//! # Example
//!
//! ```rust,ignore
//! use hslfx_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::{IoError, IoResult};
use hslfx_core::{HslaImage, HslaPixel};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Reads a PNG file from the given path.
///
/// Missing alpha is treated as fully opaque. Indexed and sub-byte images
/// are rejected with [`IoError::UnsupportedBitDepth`].
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<HslaImage> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder.read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader.output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let bytes = &buf[..info.buffer_size()];

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        color_type => {
            return Err(IoError::UnsupportedBitDepth(
                format!("{:?} {:?}", color_type, info.bit_depth)
            ));
        }
    };

    let samples: Vec<f64> = match info.bit_depth {
        png::BitDepth::Eight => bytes.iter().map(|&v| v as f64 / 255.0).collect(),
        png::BitDepth::Sixteen => bytes
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]) as f64 / 65535.0)
            .collect(),
        bit_depth => {
            return Err(IoError::UnsupportedBitDepth(
                format!("{:?} {:?}", info.color_type, bit_depth)
            ));
        }
    };

    debug!(
        width = info.width,
        height = info.height,
        channels,
        color_type = ?info.color_type,
        bit_depth = ?info.bit_depth,
        "Decoded PNG"
    );

    let pixels = samples
        .chunks_exact(channels)
        .map(|s| HslaPixel::from_rgba(expand_to_rgba(s)))
        .collect();

    HslaImage::from_pixels(info.width, info.height, pixels)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Widens 1-4 channel samples to `[r, g, b, a]`.
fn expand_to_rgba(s: &[f64]) -> [f64; 4] {
    match *s {
        [g] => [g, g, g, 1.0],
        [g, a] => [g, g, g, a],
        [r, g, b] => [r, g, b, 1.0],
        [r, g, b, a] => [r, g, b, a],
        _ => unreachable!("chunks_exact yields 1-4 samples"),
    }
}

/// Quantizes one normalized channel to 8 bits.
///
/// Out-of-range values (e.g. luminance driven negative by chained
/// spotlights) are clamped here and nowhere else.
#[inline]
fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Writes an image to a PNG file as 8-bit RGBA.
///
/// # Errors
///
/// PNG cannot store zero-sized images, so an empty image fails with
/// [`IoError::EncodeError`].
pub fn write<P: AsRef<Path>>(path: P, image: &HslaImage) -> IoResult<()> {
    let (width, height) = image.dimensions();
    if image.is_empty() {
        return Err(IoError::EncodeError(format!(
            "cannot encode empty {}x{} image",
            width, height
        )));
    }

    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    // Add sRGB chunk
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder.write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    let u8_data: Vec<u8> = image
        .data()
        .iter()
        .flat_map(|px| px.to_rgba().map(to_u8))
        .collect();

    png_writer.write_image_data(&u8_data)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    debug!(width, height, "Encoded PNG");
    Ok(())
}
