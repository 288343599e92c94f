//! # hslfx-core
//!
//! Core types for HSLA raster processing.
//!
//! This crate provides the foundational types shared by every other hslfx crate:
//!
//! - [`HslaPixel`] - A color sample with hue, saturation, luminance and alpha channels
//! - [`HslaImage`] - Row-major raster of [`HslaPixel`] samples
//! - [`Error`] - Bounds and dimension errors
//!
//! ## Crate Structure
//!
//! ```text
//! hslfx-core (this crate)
//!    ^
//!    |
//!    +-- hslfx-ops (pixel transforms)
//!    +-- hslfx-io (PNG load/save)
//!    +-- hslfx-cli (command-line driver)
//! ```
//!
//! ## Channel Domains
//!
//! | Channel | Domain |
//! |---------|--------|
//! | `h` | degrees, [0, 360) |
//! | `s` | [0.0, 1.0] |
//! | `l` | [0.0, 1.0] |
//! | `a` | [0.0, 1.0] |
//!
//! Values are not validated on construction. Whoever fills the raster
//! (normally `hslfx-io`) is responsible for keeping them in range.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

// Re-exports for convenience
pub use error::*;
pub use image::*;
pub use pixel::HslaPixel;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use hslfx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::HslaImage;
    pub use crate::pixel::HslaPixel;
}
