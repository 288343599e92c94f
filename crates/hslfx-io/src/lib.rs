//! # hslfx-io
//!
//! Loading and saving [`HslaImage`] rasters.
//!
//! Image files carry RGB(A) samples; this crate converts them to HSLA on
//! read and back on write so that the transforms in `hslfx-ops` never see
//! anything but [`HslaPixel`](hslfx_core::HslaPixel) values.
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Notes |
//! |--------|------|-------|-------|
//! | PNG | 8/16-bit gray, gray+alpha, RGB, RGBA | 8-bit RGBA | sRGB chunk on write |
//!
//! # Example
//!
//! ```rust,ignore
//! use hslfx_io::{read, write};
//!
//! let mut image = read("alma.png")?;
//! hslfx_ops::grayscale(&mut image);
//! write("out-grayscale.png", &image)?;
//! ```

#![warn(missing_docs)]

mod error;
pub mod png;

pub use error::{IoError, IoResult};

use hslfx_core::HslaImage;
use std::path::Path;

/// File formats known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Portable Network Graphics.
    Png,
    /// Anything else.
    Unknown,
}

impl Format {
    /// Detects the format from a path's extension (case-insensitive).
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => Format::Png,
            _ => Format::Unknown,
        }
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}

/// Reads an image, choosing the decoder from the file extension.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for unknown extensions, otherwise whatever
/// the decoder reports.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<HslaImage> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        Format::Png => png::read(path),
        Format::Unknown => Err(unsupported(path)),
    }
}

/// Writes an image, choosing the encoder from the file extension.
pub fn write<P: AsRef<Path>>(path: P, image: &HslaImage) -> IoResult<()> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        Format::Png => png::write(path, image),
        Format::Unknown => Err(unsupported(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_extension("a/b/alma.png"), Format::Png);
        assert_eq!(Format::from_extension("ALMA.PNG"), Format::Png);
        assert_eq!(Format::from_extension("alma.exr"), Format::Unknown);
        assert_eq!(Format::from_extension("alma"), Format::Unknown);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = read("image.bmp").unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(ref ext) if ext == "bmp"));

        let err = write("image", &HslaImage::new(1, 1)).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(ref ext) if ext == "unknown"));
    }
}
