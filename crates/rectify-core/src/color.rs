//! RGBA samples
//!
//! Every pixel in a [`PixelBuffer`](crate::PixelBuffer) is four 8-bit
//! channels stored in R, G, B, A byte order.

/// Number of bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Red channel byte offset
pub const RED: usize = 0;
/// Green channel byte offset
pub const GREEN: usize = 1;
/// Blue channel byte offset
pub const BLUE: usize = 2;
/// Alpha channel byte offset
pub const ALPHA: usize = 3;

/// A single RGBA sample, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// Fully transparent black, the value of every pixel in a fresh buffer.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Opaque black
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// Opaque white
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Create a new RGBA color
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque RGB color (alpha = 255)
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Create an opaque gray color
    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Build from bytes in R, G, B, A order.
    #[inline]
    pub const fn from_array(bytes: [u8; CHANNELS]) -> Self {
        Self::new(bytes[RED], bytes[GREEN], bytes[BLUE], bytes[ALPHA])
    }

    /// Bytes in R, G, B, A order.
    #[inline]
    pub const fn to_array(self) -> [u8; CHANNELS] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Whether the alpha channel is 255.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.alpha == 255
    }
}

impl From<[u8; CHANNELS]> for Rgba {
    fn from(bytes: [u8; CHANNELS]) -> Self {
        Self::from_array(bytes)
    }
}

impl From<Rgba> for [u8; CHANNELS] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(c.to_array(), [1, 2, 3, 4]);
        assert_eq!(Rgba::from([1, 2, 3, 4]), c);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
        assert!(!Rgba::TRANSPARENT.is_opaque());
        assert!(Rgba::gray(17).is_opaque());
        assert_eq!(Rgba::rgb(255, 0, 0).to_array(), [255, 0, 0, 255]);
    }
}
