//! HSLA color sample.
//!
//! [`HslaPixel`] stores four independent `f64` channels. Transforms read and
//! write the fields directly; the type performs no validation.
//!
//! # Conversion
//!
//! Files store RGB(A), so the I/O layer converts through
//! [`HslaPixel::from_rgba`] and [`HslaPixel::to_rgba`] using the usual
//! hexcone HSL model:
//!
//! ```text
//! L = (max + min) / 2
//! S = (max - min) / (max + min)        if L <= 0.5
//!     (max - min) / (2 - max - min)    otherwise
//! H = 60 * sector offset of the dominant channel
//! ```
//!
//! ```
//! use hslfx_core::HslaPixel;
//!
//! let red = HslaPixel::from_rgba([1.0, 0.0, 0.0, 1.0]);
//! assert_eq!(red, HslaPixel::new(0.0, 1.0, 0.5, 1.0));
//! ```

use std::fmt;

/// A color sample in HSL space with an alpha channel.
///
/// - `h` - hue in degrees, [0, 360)
/// - `s` - saturation, [0.0, 1.0]
/// - `l` - luminance, [0.0, 1.0]
/// - `a` - alpha, [0.0, 1.0]
///
/// The default pixel is opaque white (`l = 1.0`, `a = 1.0`), matching a
/// freshly allocated canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslaPixel {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation fraction.
    pub s: f64,
    /// Luminance fraction.
    pub l: f64,
    /// Alpha fraction.
    pub a: f64,
}

impl Default for HslaPixel {
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 0.0,
            l: 1.0,
            a: 1.0,
        }
    }
}

impl HslaPixel {
    /// Creates a pixel from its four channels.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Creates an opaque pixel (`a = 1.0`).
    #[inline]
    pub const fn opaque(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: 1.0 }
    }

    /// Converts normalized `[r, g, b, a]` to HSLA.
    ///
    /// Achromatic input (`r == g == b`) yields `h = 0` and `s = 0`.
    pub fn from_rgba(rgba: [f64; 4]) -> Self {
        let [r, g, b, a] = rgba;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l, a };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: sector * 60.0,
            s,
            l,
            a,
        }
    }

    /// Converts to normalized `[r, g, b, a]`.
    ///
    /// Channels are not clamped; out-of-range luminance produces
    /// out-of-range RGB.
    pub fn to_rgba(&self) -> [f64; 4] {
        if self.s == 0.0 {
            return [self.l, self.l, self.l, self.a];
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        let hk = self.h / 360.0;

        [
            hue_to_channel(p, q, hk + 1.0 / 3.0),
            hue_to_channel(p, q, hk),
            hue_to_channel(p, q, hk - 1.0 / 3.0),
            self.a,
        ]
    }
}

#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl fmt::Display for HslaPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {:.3}, {:.3}, {:.3})",
            self.h, self.s, self.l, self.a
        )
    }
}
