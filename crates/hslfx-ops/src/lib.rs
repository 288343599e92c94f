//! # hslfx-ops
//!
//! Whole-image pixel transforms over [`HslaImage`](hslfx_core::HslaImage).
//!
//! Every transform walks every coordinate of the raster and applies a
//! per-pixel rule in place. No state survives between calls; the only
//! inputs besides the image are the fixed constants of each module.
//!
//! # Modules
//!
//! - [`grayscale`] - Drop saturation to zero
//! - [`spotlight`] - Radial luminance falloff around a center point
//! - [`illini`] - Two-color hue quantization (orange / blue)
//! - [`watermark`] - Luminance boost where a stencil is fully bright
//! - [`parallel`] - Row-parallel versions of the above (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use hslfx_core::{HslaImage, HslaPixel};
//! use hslfx_ops::{grayscale, illinify, spotlight, watermark};
//!
//! let mut image = HslaImage::filled(32, 32, HslaPixel::opaque(120.0, 0.8, 0.5));
//! let stencil = HslaImage::filled(32, 32, HslaPixel::opaque(0.0, 0.0, 1.0));
//!
//! illinify(&mut image);
//! spotlight(&mut image, 16, 16);
//! watermark(&mut image, &stencil).unwrap();
//! grayscale(&mut image);
//!
//! assert_eq!(image.pixel(0, 0).s, 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod grayscale;
pub mod illini;
pub mod spotlight;
pub mod watermark;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use grayscale::grayscale;
pub use illini::{illinify, IlliniHue};
pub use spotlight::{euclidean_distance, spotlight};
pub use watermark::watermark;
