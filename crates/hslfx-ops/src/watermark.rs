//! Luminance watermark.
//!
//! Brightens the base image wherever a stencil image is at full luminance.
//! For every coordinate:
//!
//! ```text
//! if stencil.l == MAX_LUMINANCE && base.l + LUMINANCE_INCREMENT < MAX_LUMINANCE {
//!     base.l += LUMINANCE_INCREMENT
//! }
//! ```
//!
//! The trigger is an exact comparison against `1.0`; a stencil at `0.999`
//! does nothing. When the increment would reach or pass `1.0` it is skipped
//! entirely rather than clamped.
//!
//! Base and stencil must have identical dimensions. A mismatch is reported
//! before any sample is written.

use crate::{OpsError, OpsResult};
use hslfx_core::{HslaImage, HslaPixel};
use tracing::{debug, trace};

/// Luminance added to a base sample under a fully bright stencil sample.
pub const LUMINANCE_INCREMENT: f64 = 0.2;

/// Stencil trigger value and ceiling for the boosted luminance.
pub const MAX_LUMINANCE: f64 = 1.0;

/// Applies the watermark rule to one base sample.
#[inline]
#[allow(clippy::float_cmp)]
pub fn watermark_pixel(base: &mut HslaPixel, stencil: &HslaPixel) {
    let stencil_maxed = stencil.l == MAX_LUMINANCE;
    let within_limit = base.l + LUMINANCE_INCREMENT < MAX_LUMINANCE;
    if stencil_maxed && within_limit {
        base.l += LUMINANCE_INCREMENT;
    }
}

/// Checks that `base` and `stencil` share dimensions.
pub(crate) fn ensure_same_size(base: &HslaImage, stencil: &HslaImage) -> OpsResult<()> {
    if base.dimensions() != stencil.dimensions() {
        return Err(OpsError::SizeMismatch(format!(
            "base is {}x{}, stencil is {}x{}",
            base.width(),
            base.height(),
            stencil.width(),
            stencil.height()
        )));
    }
    Ok(())
}

/// Watermarks `base` with `stencil` in place.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if the images differ in size. `base`
/// is untouched in that case.
///
/// # Example
///
/// ```rust
/// use hslfx_core::{HslaImage, HslaPixel};
/// use hslfx_ops::watermark;
///
/// let mut base = HslaImage::filled(4, 4, HslaPixel::opaque(0.0, 0.0, 0.5));
/// let mut stencil = HslaImage::filled(4, 4, HslaPixel::opaque(0.0, 0.0, 0.0));
/// stencil.pixel_mut(1, 1).l = 1.0;
///
/// watermark(&mut base, &stencil).unwrap();
/// assert!((base.pixel(1, 1).l - 0.7).abs() < 1e-12);
/// assert_eq!(base.pixel(0, 0).l, 0.5);
/// ```
pub fn watermark(base: &mut HslaImage, stencil: &HslaImage) -> OpsResult<()> {
    let (width, height) = base.dimensions();
    trace!(width, height, "watermark");
    ensure_same_size(base, stencil)?;
    debug!(width, height, "Applying watermark");

    base.data_mut()
        .iter_mut()
        .zip(stencil.data())
        .for_each(|(px, st)| watermark_pixel(px, st));
    Ok(())
}
