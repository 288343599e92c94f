//! Grayscale conversion.
//!
//! Sets saturation to zero and leaves hue, luminance and alpha alone. In HSL
//! that is all it takes to remove color. The operation is idempotent.

use hslfx_core::{HslaImage, HslaPixel};
use tracing::{debug, trace};

/// Removes the color of a single sample.
#[inline]
pub fn grayscale_pixel(pixel: &mut HslaPixel) {
    pixel.s = 0.0;
}

/// Converts every sample of `image` to grayscale in place.
///
/// # Example
///
/// ```rust
/// use hslfx_core::{HslaImage, HslaPixel};
/// use hslfx_ops::grayscale;
///
/// let mut img = HslaImage::filled(8, 8, HslaPixel::opaque(30.0, 0.9, 0.4));
/// grayscale(&mut img);
/// assert_eq!(*img.pixel(3, 3), HslaPixel::opaque(30.0, 0.0, 0.4));
/// ```
pub fn grayscale(image: &mut HslaImage) {
    let (width, height) = image.dimensions();
    trace!(width, height, "grayscale");
    debug!(width, height, "Applying grayscale");

    image.data_mut().iter_mut().for_each(grayscale_pixel);
}
