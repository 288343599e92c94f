//! Radial spotlight.
//!
//! Darkens every sample in proportion to its euclidean distance from a
//! center point. Two regimes:
//!
//! ```text
//! d <  MAX_PIXEL_AWAY:  l -= DECREMENT_NEAR * d * l     (0.5% per pixel)
//! d >= MAX_PIXEL_AWAY:  l -= DECREMENT_FAR * l          (flat 80%)
//! ```
//!
//! Only luminance changes. The result is not clamped: one application keeps
//! a luminance in [0, 1] non-negative, but chained applications are taken
//! at face value.
//!
//! The center may lie outside the image, including at negative coordinates.

use hslfx_core::{HslaImage, HslaPixel};
use tracing::{debug, trace};

/// Distance at which the falloff switches from per-pixel to flat.
pub const MAX_PIXEL_AWAY: f64 = 160.0;

/// Luminance fraction removed from samples at or beyond [`MAX_PIXEL_AWAY`].
pub const DECREMENT_FAR: f64 = 0.8;

/// Luminance fraction removed per pixel of distance inside [`MAX_PIXEL_AWAY`].
pub const DECREMENT_NEAR: f64 = 0.005;

/// Euclidean distance from `(x, y)` to `(center_x, center_y)`.
///
/// Differences are taken in `i64` so a center left of or above the image
/// cannot wrap around.
///
/// # Example
///
/// ```rust
/// use hslfx_ops::euclidean_distance;
///
/// assert_eq!(euclidean_distance(3, 4, 0, 0), 5.0);
/// assert_eq!(euclidean_distance(0, 0, -3, -4), 5.0);
/// ```
#[inline]
pub fn euclidean_distance(x: u32, y: u32, center_x: i32, center_y: i32) -> f64 {
    let dx = (i64::from(x) - i64::from(center_x)) as f64;
    let dy = (i64::from(y) - i64::from(center_y)) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Luminance removed from a sample with luminance `l` at `distance`.
#[inline]
pub fn luminance_decrement(l: f64, distance: f64) -> f64 {
    if distance < MAX_PIXEL_AWAY {
        DECREMENT_NEAR * distance * l
    } else {
        DECREMENT_FAR * l
    }
}

/// Darkens a single sample that sits `distance` pixels from the center.
#[inline]
pub fn spotlight_pixel(pixel: &mut HslaPixel, distance: f64) {
    pixel.l -= luminance_decrement(pixel.l, distance);
}

/// Applies a spotlight centered at (`center_x`, `center_y`) in place.
///
/// # Example
///
/// ```rust
/// use hslfx_core::{HslaImage, HslaPixel};
/// use hslfx_ops::spotlight;
///
/// let mut img = HslaImage::filled(10, 10, HslaPixel::opaque(0.0, 0.0, 1.0));
/// spotlight(&mut img, 0, 0);
///
/// assert_eq!(img.pixel(0, 0).l, 1.0);          // center untouched
/// assert!((img.pixel(3, 4).l - 0.975).abs() < 1e-12);
/// ```
pub fn spotlight(image: &mut HslaImage, center_x: i32, center_y: i32) {
    let (width, height) = image.dimensions();
    trace!(width, height, center_x, center_y, "spotlight");
    debug!(center_x, center_y, "Applying spotlight");

    image.for_each_pixel_mut(|x, y, px| {
        spotlight_pixel(px, euclidean_distance(x, y, center_x, center_y));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_distance_345() {
        assert_eq!(euclidean_distance(3, 4, 0, 0), 5.0);
        assert_eq!(euclidean_distance(0, 0, 3, 4), 5.0);
        assert_eq!(euclidean_distance(7, 7, 7, 7), 0.0);
    }

    #[test]
    fn test_distance_negative_center() {
        assert_eq!(euclidean_distance(0, 0, -3, -4), 5.0);
        assert_eq!(euclidean_distance(2, 0, -1, 4), 5.0);
    }

    #[test]
    fn test_distance_extreme_coordinates() {
        let d = euclidean_distance(u32::MAX, 0, i32::MIN, 0);
        assert_relative_eq!(d, u32::MAX as f64 + 2_147_483_648.0, max_relative = 1e-12);
    }

    #[test]
    fn test_center_pixel_unchanged() {
        let mut px = HslaPixel::opaque(40.0, 0.6, 0.73);
        spotlight_pixel(&mut px, 0.0);
        assert_eq!(px, HslaPixel::opaque(40.0, 0.6, 0.73));
    }

    #[test]
    fn test_near_regime() {
        let mut px = HslaPixel::opaque(0.0, 0.0, 1.0);
        spotlight_pixel(&mut px, 5.0);
        assert_abs_diff_eq!(px.l, 0.975, epsilon = EPSILON);

        let mut px = HslaPixel::opaque(0.0, 0.0, 0.5);
        spotlight_pixel(&mut px, 100.0);
        assert_abs_diff_eq!(px.l, 0.25, epsilon = EPSILON);
    }

    #[test]
    fn test_far_regime() {
        let mut px = HslaPixel::opaque(0.0, 0.0, 1.0);
        spotlight_pixel(&mut px, 200.0);
        assert_abs_diff_eq!(px.l, 0.2, epsilon = EPSILON);
    }

    #[test]
    fn test_threshold_is_far_regime() {
        assert_abs_diff_eq!(luminance_decrement(1.0, MAX_PIXEL_AWAY), 0.8, epsilon = EPSILON);
        assert_abs_diff_eq!(
            luminance_decrement(1.0, MAX_PIXEL_AWAY - 1.0),
            0.795,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_only_luminance_changes() {
        let mut img = HslaImage::filled(20, 20, HslaPixel::new(200.0, 0.4, 0.9, 0.3));
        spotlight(&mut img, 5, 5);
        for (_, _, px) in img.pixels() {
            assert_eq!(px.h, 200.0);
            assert_eq!(px.s, 0.4);
            assert_eq!(px.a, 0.3);
            assert!(px.l >= 0.0 && px.l <= 0.9);
        }
    }

    #[test]
    fn test_image_matches_per_pixel_rule() {
        let mut img = HslaImage::filled(300, 4, HslaPixel::opaque(0.0, 0.0, 1.0));
        spotlight(&mut img, 0, 0);

        assert_eq!(img.pixel(0, 0).l, 1.0);
        assert_abs_diff_eq!(img.pixel(3, 0).l, 1.0 - 0.015, epsilon = EPSILON);
        assert_abs_diff_eq!(img.pixel(250, 0).l, 0.2, epsilon = EPSILON);
    }

    #[test]
    fn test_center_outside_image() {
        let mut img = HslaImage::filled(4, 4, HslaPixel::opaque(0.0, 0.0, 1.0));
        spotlight(&mut img, -3, -4);
        assert_abs_diff_eq!(img.pixel(0, 0).l, 0.975, epsilon = EPSILON);

        let mut far = HslaImage::filled(4, 4, HslaPixel::opaque(0.0, 0.0, 0.5));
        spotlight(&mut far, -1000, 5000);
        for (_, _, px) in far.pixels() {
            assert_abs_diff_eq!(px.l, 0.1, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_chained_application_not_clamped() {
        let mut img = HslaImage::filled(1, 1, HslaPixel::opaque(0.0, 0.0, 1.0));
        spotlight(&mut img, 500, 0);
        spotlight(&mut img, 500, 0);
        assert_abs_diff_eq!(img.pixel(0, 0).l, 0.04, epsilon = EPSILON);
    }

    #[test]
    fn test_empty_image_is_noop() {
        let mut img = HslaImage::new(0, 7);
        spotlight(&mut img, 3, 3);
        assert!(img.is_empty());
    }
}
