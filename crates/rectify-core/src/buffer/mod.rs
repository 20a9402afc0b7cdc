//! PixelBuffer - RGBA8 image container
//!
//! `PixelBuffer` holds the source image that is sampled and the output
//! image that rectification writes.
//!
//! # Pixel layout
//!
//! - Four bytes per pixel in R, G, B, A order
//! - Rows are stored top to bottom with a fixed stride of `width * 4` bytes
//! - No padding between rows
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning (shared ownership) and is
//! read-only. To modify pixel data, convert to [`PixelBufferMut`] via
//! [`PixelBuffer::try_into_mut`] or [`PixelBuffer::to_mut`], then convert
//! back with `Into<PixelBuffer>`.

mod access;

pub use access::set_row_rgba;

use crate::color::{CHANNELS, Rgba};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal buffer data
#[derive(Debug, Clone, PartialEq, Eq)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per row
    stride: usize,
    /// RGBA bytes, row-major
    data: Vec<u8>,
}

impl BufferData {
    fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let (stride, len) = Self::compute_layout(width, height)?;
        let data = color
            .to_array()
            .iter()
            .copied()
            .cycle()
            .take(len)
            .collect();
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Compute the row stride and total byte length.
    ///
    /// Both products are checked, so dimensions whose byte size does not fit
    /// in `usize` are rejected instead of wrapping.
    fn compute_layout(width: u32, height: u32) -> Result<(usize, usize)> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(CHANNELS)
            .and_then(|stride| {
                stride
                    .checked_mul(height as usize)
                    .map(|len| (stride, len))
            })
            .ok_or(Error::InvalidDimension { width, height })
    }
}

/// RGBA8 image container
///
/// # Examples
///
/// ```
/// use rectify_core::{PixelBuffer, Rgba};
///
/// let buf = PixelBuffer::new(64, 48).unwrap();
/// assert_eq!(buf.width(), 64);
/// assert_eq!(buf.height(), 48);
/// assert_eq!(buf.get_rgba(0, 0), Some(Rgba::TRANSPARENT));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new buffer initialized to transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or the
    /// byte size overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a new buffer with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or the
    /// byte size overflows `usize`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        Ok(PixelBuffer {
            inner: Arc::new(BufferData::filled(width, height, color)?),
        })
    }

    /// Wrap already decoded RGBA8 data.
    ///
    /// `data` must hold exactly `width * height * 4` bytes in row-major
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or the
    /// byte size overflows `usize`, or [`Error::BufferSizeMismatch`] if the
    /// data length is wrong.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let (stride, expected) = BufferData::compute_layout(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            inner: Arc::new(BufferData {
                width,
                height,
                stride,
                data,
            }),
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or the
    /// byte size overflows `usize`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        let mut buf = PixelBufferMut::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                buf.set_rgba_unchecked(x, y, f(x, y));
            }
        }
        Ok(buf.into())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride
    }

    /// Get raw access to the RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        let start = y as usize * self.inner.stride;
        &self.inner.data[start..start + self.inner.stride]
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Consume the buffer and return the raw RGBA bytes.
    ///
    /// Copies only if the data is still shared.
    pub fn into_raw(self) -> Vec<u8> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => data.data,
            Err(arc) => arc.data.clone(),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable, exclusively owned RGBA8 image
///
/// Convert back to an immutable [`PixelBuffer`] using `Into<PixelBuffer>`.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Create a new buffer initialized to transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or the
    /// byte size overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a new buffer with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or the
    /// byte size overflows `usize`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        Ok(PixelBufferMut {
            inner: BufferData::filled(width, height, color)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride
    }

    /// Get raw access to the RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the RGBA bytes.
    ///
    /// The length is fixed; rows can be split off with
    /// `chunks_exact_mut(stride)`.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get the mutable bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.inner.stride;
        let stride = self.inner.stride;
        &mut self.inner.data[start..start + stride]
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgba) {
        let bytes = color.to_array();
        for px in self.inner.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&bytes);
        }
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buf.inner),
        }
    }
}
