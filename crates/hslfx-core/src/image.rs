//! Raster container for HSLA samples.
//!
//! [`HslaImage`] owns a contiguous buffer of [`HslaPixel`] values addressed
//! by `(x, y)` with `0 <= x < width` and `0 <= y < height`.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [P(0,0) P(1,0) P(2,0) ...]  <- Row 0
//!         [P(0,1) P(1,1) P(2,1) ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use hslfx_core::{HslaImage, HslaPixel};
//!
//! let mut img = HslaImage::new(64, 48);
//!
//! // Exclusive handle to one sample, scoped to this statement
//! img.pixel_mut(10, 20).s = 0.0;
//!
//! assert_eq!(img.pixel(10, 20).s, 0.0);
//! ```
//!
//! Zero-width and zero-height images are valid; they simply contain no
//! pixels.

use crate::{Error, HslaPixel, Result};
use std::slice::ChunksExactMut;

/// Owned HSLA raster.
///
/// The image is the sole owner of its samples. Callers get at individual
/// samples through [`pixel_mut`](Self::pixel_mut), which hands out an
/// exclusive borrow for the duration of the update, or through the row and
/// slice accessors for bulk work.
#[derive(Clone, PartialEq)]
pub struct HslaImage {
    data: Vec<HslaPixel>,
    width: u32,
    height: u32,
}

impl HslaImage {
    /// Creates a new image filled with [`HslaPixel::default`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use hslfx_core::HslaImage;
    ///
    /// let img = HslaImage::new(1920, 1080);
    /// assert_eq!(img.width(), 1920);
    /// assert_eq!(img.height(), 1080);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, HslaPixel::default())
    }

    /// Creates an image where every sample equals `pixel`.
    pub fn filled(width: u32, height: u32, pixel: HslaPixel) -> Self {
        let count = width as usize * height as usize;
        Self {
            data: vec![pixel; count],
            width,
            height,
        }
    }

    /// Creates an image from existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hslfx_core::{HslaImage, HslaPixel};
    ///
    /// let pixels = vec![HslaPixel::default(); 6];
    /// let img = HslaImage::from_pixels(3, 2, pixels).unwrap();
    /// assert_eq!(img.pixel_count(), 6);
    /// ```
    pub fn from_pixels(width: u32, height: u32, data: Vec<HslaPixel>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the sample at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &HslaPixel {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        &self.data[self.index(x, y)]
    }

    /// Returns an exclusive handle to the sample at (x, y).
    ///
    /// Writes through the handle land directly in the image's storage.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut HslaPixel {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    /// Returns the sample at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&HslaPixel> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns an exclusive handle to the sample at (x, y), or `None` if out
    /// of bounds.
    #[inline]
    pub fn get_pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut HslaPixel> {
        if x < self.width && y < self.height {
            Some(self.pixel_mut(x, y))
        } else {
            None
        }
    }

    /// Overwrites the sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if (x, y) lies outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: HslaPixel) -> Result<()> {
        let (width, height) = self.dimensions();
        let slot = self.get_pixel_mut(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            width,
            height,
        })?;
        *slot = pixel;
        Ok(())
    }

    /// Returns the raw row-major samples.
    #[inline]
    pub fn data(&self) -> &[HslaPixel] {
        &self.data
    }

    /// Returns the raw row-major samples mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [HslaPixel] {
        &mut self.data
    }

    /// Returns a row of samples.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[HslaPixel] {
        assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterates over mutable rows, top to bottom.
    ///
    /// Yields nothing for an empty image.
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, HslaPixel> {
        // chunks_exact_mut(0) panics; a zero-width image has no data anyway
        self.data.chunks_exact_mut((self.width as usize).max(1))
    }

    /// Iterates over all samples with their coordinates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hslfx_core::{HslaImage, HslaPixel};
    ///
    /// let img = HslaImage::filled(4, 4, HslaPixel::opaque(11.0, 1.0, 0.5));
    /// for (_x, _y, px) in img.pixels() {
    ///     assert_eq!(px.h, 11.0);
    /// }
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, &HslaPixel)> + '_ {
        let width = self.width;
        self.data.iter().enumerate().map(move |(i, px)| {
            let i = i as u32;
            (i % width, i / width, px)
        })
    }

    /// Applies `f` to every sample in place, passing its coordinates.
    pub fn for_each_pixel_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(u32, u32, &mut HslaPixel),
    {
        for (y, row) in self.rows_mut().enumerate() {
            for (x, px) in row.iter_mut().enumerate() {
                f(x as u32, y as u32, px);
            }
        }
    }
}

impl std::fmt::Debug for HslaImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HslaImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
