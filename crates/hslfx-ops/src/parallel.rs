//! Parallel versions of the transforms using Rayon.
//!
//! Each pixel update depends only on that pixel (and, for the watermark, the
//! stencil pixel at the same coordinate), so rows are handed out to the
//! thread pool with no synchronization. Results are bit-identical to the
//! sequential functions.
//!
//! # Example
//!
//! ```rust
//! use hslfx_core::{HslaImage, HslaPixel};
//! use hslfx_ops::parallel;
//!
//! let mut img = HslaImage::filled(256, 256, HslaPixel::opaque(200.0, 0.7, 0.9));
//! parallel::illinify(&mut img);
//! parallel::spotlight(&mut img, 128, 128);
//! assert_eq!(img.pixel(0, 0).h, 216.0);
//! ```

use crate::grayscale::grayscale_pixel;
use crate::illini::illini_pixel;
use crate::spotlight::{euclidean_distance, spotlight_pixel};
use crate::watermark::{ensure_same_size, watermark_pixel};
use crate::OpsResult;
use hslfx_core::{HslaImage, HslaPixel};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Runs `f(x, y, pixel)` for every pixel, one row per task.
fn par_for_each_pixel<F>(image: &mut HslaImage, f: F)
where
    F: Fn(u32, u32, &mut HslaPixel) + Sync,
{
    if image.is_empty() {
        return;
    }
    let width = image.width() as usize;
    image
        .data_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                f(x as u32, y as u32, px);
            }
        });
}

/// Parallel [`grayscale`](crate::grayscale::grayscale).
pub fn grayscale(image: &mut HslaImage) {
    let (width, height) = image.dimensions();
    trace!(width, height, "parallel::grayscale");
    debug!(width, height, "Applying grayscale");

    par_for_each_pixel(image, |_, _, px| grayscale_pixel(px));
}

/// Parallel [`spotlight`](crate::spotlight::spotlight).
pub fn spotlight(image: &mut HslaImage, center_x: i32, center_y: i32) {
    let (width, height) = image.dimensions();
    trace!(width, height, center_x, center_y, "parallel::spotlight");
    debug!(center_x, center_y, "Applying spotlight");

    par_for_each_pixel(image, |x, y, px| {
        spotlight_pixel(px, euclidean_distance(x, y, center_x, center_y));
    });
}

/// Parallel [`illinify`](crate::illini::illinify).
pub fn illinify(image: &mut HslaImage) {
    let (width, height) = image.dimensions();
    trace!(width, height, "parallel::illinify");
    debug!(width, height, "Applying Illini hue quantization");

    par_for_each_pixel(image, |_, _, px| illini_pixel(px));
}

/// Parallel [`watermark`](crate::watermark::watermark).
///
/// # Errors
///
/// Same as the sequential version: [`OpsError::SizeMismatch`](crate::OpsError::SizeMismatch)
/// before any write.
pub fn watermark(base: &mut HslaImage, stencil: &HslaImage) -> OpsResult<()> {
    let (width, height) = base.dimensions();
    trace!(width, height, "parallel::watermark");
    ensure_same_size(base, stencil)?;
    debug!(width, height, "Applying watermark");

    if base.is_empty() {
        return Ok(());
    }
    let row_len = width as usize;
    base.data_mut()
        .par_chunks_mut(row_len)
        .zip(stencil.data().par_chunks(row_len))
        .for_each(|(row, stencil_row)| {
            for (px, st) in row.iter_mut().zip(stencil_row) {
                watermark_pixel(px, st);
            }
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;

    fn noise(width: u32, height: u32, seed: u64) -> HslaImage {
        // xorshift, good enough for fixtures
        let mut state = seed;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 10_000) as f64 / 10_000.0
        };
        let mut img = HslaImage::new(width, height);
        img.for_each_pixel_mut(|_, _, px| {
            *px = HslaPixel::new(next() * 360.0, next(), next(), next());
        });
        img
    }

    #[test]
    fn test_grayscale_matches_sequential() {
        let mut seq = noise(97, 41, 1);
        let mut par = seq.clone();
        crate::grayscale(&mut seq);
        grayscale(&mut par);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_spotlight_matches_sequential() {
        for (cx, cy) in [(0, 0), (48, 20), (-30, 500), (400, -7)] {
            let mut seq = noise(120, 90, 2);
            let mut par = seq.clone();
            crate::spotlight(&mut seq, cx, cy);
            spotlight(&mut par, cx, cy);
            assert_eq!(seq, par, "center ({cx}, {cy})");
        }
    }

    #[test]
    fn test_illinify_matches_sequential() {
        let mut seq = noise(64, 64, 3);
        let mut par = seq.clone();
        crate::illinify(&mut seq);
        illinify(&mut par);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_watermark_matches_sequential() {
        let mut stencil = noise(50, 30, 4);
        stencil.for_each_pixel_mut(|x, y, px| {
            if (x + y) % 3 == 0 {
                px.l = 1.0;
            }
        });
        let mut seq = noise(50, 30, 5);
        let mut par = seq.clone();
        crate::watermark(&mut seq, &stencil).unwrap();
        watermark(&mut par, &stencil).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_watermark_size_mismatch() {
        let mut base = noise(10, 10, 6);
        let before = base.clone();
        let stencil = noise(10, 11, 7);
        let err = watermark(&mut base, &stencil).unwrap_err();
        assert!(matches!(err, OpsError::SizeMismatch(_)));
        assert_eq!(base, before);
    }

    #[test]
    fn test_empty_images() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let mut img = HslaImage::new(w, h);
            grayscale(&mut img);
            spotlight(&mut img, 1, 1);
            illinify(&mut img);
            let stencil = HslaImage::new(w, h);
            assert!(watermark(&mut img, &stencil).is_ok());
        }
    }
}
