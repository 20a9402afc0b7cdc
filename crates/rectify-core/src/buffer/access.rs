//! Pixel access functions
//!
//! Getting and setting individual RGBA pixels. Checked variants return
//! `Option`/`Result`; unchecked variants panic on out-of-range coordinates
//! and are intended for inner loops that already know their bounds.

use super::{PixelBuffer, PixelBufferMut};
use crate::color::{CHANNELS, Rgba};
use crate::error::{Error, Result};

#[inline]
fn offset(stride: usize, x: u32, y: u32) -> usize {
    y as usize * stride + x as usize * CHANNELS
}

#[inline]
fn read(data: &[u8], at: usize) -> Rgba {
    Rgba::new(data[at], data[at + 1], data[at + 2], data[at + 3])
}

impl PixelBuffer {
    /// Get the RGBA value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_rgba_unchecked(x, y))
    }

    /// Get the RGBA value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the data.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> Rgba {
        read(self.data(), offset(self.stride(), x, y))
    }
}

impl PixelBufferMut {
    /// Get the RGBA value at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_rgba_unchecked(x, y))
    }

    /// Get the RGBA value without bounds checking.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> Rgba {
        read(self.data(), offset(self.stride(), x, y))
    }

    /// Set the RGBA value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_rgba_unchecked(x, y, color);
        Ok(())
    }

    /// Set the RGBA value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the data.
    #[inline]
    pub fn set_rgba_unchecked(&mut self, x: u32, y: u32, color: Rgba) {
        let at = offset(self.stride(), x, y);
        self.data_mut()[at..at + CHANNELS].copy_from_slice(&color.to_array());
    }
}

/// Write `color` into pixel `x` of a single row slice.
///
/// # Panics
///
/// Panics if `x` lies outside the row.
#[inline]
pub fn set_row_rgba(row: &mut [u8], x: u32, color: Rgba) {
    let at = x as usize * CHANNELS;
    row[at..at + CHANNELS].copy_from_slice(&color.to_array());
}
