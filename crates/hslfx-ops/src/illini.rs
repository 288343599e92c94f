//! Illini hue quantization.
//!
//! Collapses the hue wheel onto two targets. Hues inside the half-open
//! complementary window `[101, 281)` (the cool half, between dark sea green
//! and dark gray) become blue; everything else becomes orange.
//!
//! ```text
//!   0 ........ 101 ==================== 281 ........ 360
//!     ORANGE   |        BLUE (216)       |  ORANGE (11)
//! ```
//!
//! Saturation, luminance and alpha are left alone.

use hslfx_core::{HslaImage, HslaPixel};
use tracing::{debug, trace};

/// Lower bound of the complementary window (inclusive), dark sea green.
pub const COMPLEMENTARY_LOW: f64 = 101.0;

/// Upper bound of the complementary window (exclusive), dark gray.
pub const COMPLEMENTARY_HIGH: f64 = 281.0;

/// Quantization target hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IlliniHue {
    /// Illini orange, 11 degrees.
    Orange = 11,
    /// Illini blue, 216 degrees.
    Blue = 216,
}

impl IlliniHue {
    /// Hue in degrees.
    #[inline]
    pub const fn degrees(self) -> f64 {
        self as u16 as f64
    }
}

/// Returns `true` if `h` lies in `[COMPLEMENTARY_LOW, COMPLEMENTARY_HIGH)`.
#[inline]
pub fn in_complementary_window(h: f64) -> bool {
    (COMPLEMENTARY_LOW..COMPLEMENTARY_HIGH).contains(&h)
}

/// Picks the target for hue `h`.
///
/// # Example
///
/// ```rust
/// use hslfx_ops::illini::{illini_hue, IlliniHue};
///
/// assert_eq!(illini_hue(101.0), IlliniHue::Blue);
/// assert_eq!(illini_hue(281.0), IlliniHue::Orange);
/// ```
#[inline]
pub fn illini_hue(h: f64) -> IlliniHue {
    if in_complementary_window(h) {
        IlliniHue::Blue
    } else {
        IlliniHue::Orange
    }
}

/// Replaces the hue of a single sample with its target.
#[inline]
pub fn illini_pixel(pixel: &mut HslaPixel) {
    pixel.h = illini_hue(pixel.h).degrees();
}

/// Quantizes the hue of every sample of `image` in place.
pub fn illinify(image: &mut HslaImage) {
    let (width, height) = image.dimensions();
    trace!(width, height, "illinify");
    debug!(width, height, "Applying Illini hue quantization");

    image.data_mut().iter_mut().for_each(illini_pixel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees() {
        assert_eq!(IlliniHue::Orange.degrees(), 11.0);
        assert_eq!(IlliniHue::Blue.degrees(), 216.0);
    }

    #[test]
    fn test_window_boundaries() {
        assert_eq!(illini_hue(101.0), IlliniHue::Blue);
        assert_eq!(illini_hue(280.0), IlliniHue::Blue);
        assert_eq!(illini_hue(280.999), IlliniHue::Blue);
        assert_eq!(illini_hue(281.0), IlliniHue::Orange);
        assert_eq!(illini_hue(100.999), IlliniHue::Orange);
        assert_eq!(illini_hue(0.0), IlliniHue::Orange);
        assert_eq!(illini_hue(360.0), IlliniHue::Orange);
    }

    #[test]
    fn test_targets_are_stable() {
        // Orange stays orange, blue stays blue
        assert_eq!(illini_hue(IlliniHue::Orange.degrees()), IlliniHue::Orange);
        assert_eq!(illini_hue(IlliniHue::Blue.degrees()), IlliniHue::Blue);
    }

    #[test]
    fn test_only_hue_changes() {
        let mut px = HslaPixel::new(180.0, 0.3, 0.6, 0.9);
        illini_pixel(&mut px);
        assert_eq!(px, HslaPixel::new(216.0, 0.3, 0.6, 0.9));

        let mut px = HslaPixel::new(330.0, 0.3, 0.6, 0.9);
        illini_pixel(&mut px);
        assert_eq!(px, HslaPixel::new(11.0, 0.3, 0.6, 0.9));
    }

    #[test]
    fn test_illinify_image() {
        let mut img = HslaImage::new(360, 1);
        img.for_each_pixel_mut(|x, _, px| px.h = x as f64);
        illinify(&mut img);

        for (x, _, px) in img.pixels() {
            let expected = if (101..281).contains(&x) { 216.0 } else { 11.0 };
            assert_eq!(px.h, expected, "hue {x}");
        }
    }

    #[test]
    fn test_empty_image_is_noop() {
        let mut img = HslaImage::new(5, 0);
        illinify(&mut img);
        assert_eq!(img.pixel_count(), 0);
    }
}
