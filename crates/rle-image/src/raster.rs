use crate::{encode::excluded_ranges, RleError, RleResult};

/// A read-only view over a row-major buffer with one byte per pixel
///
/// Any non-zero byte is "on", zero is "off". The view never copies or
/// modifies the pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterView<'a> {
    width: u32,
    height: u32,
    pixels: &'a [u8],
}

impl<'a> RasterView<'a> {
    /// Create a view, checking that `pixels` holds exactly `width * height` bytes
    ///
    /// The pixel count must also stay below `u32::MAX`, so that every
    /// transition index fits the persisted `u32` fields.
    pub fn new(width: u32, height: u32, pixels: &'a [u8]) -> RleResult<Self> {
        let count = (width as usize).checked_mul(height as usize);
        match count {
            Some(n) if n == pixels.len() && n < u32::MAX as usize => Ok(Self {
                width,
                height,
                pixels,
            }),
            _ => Err(RleError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            }),
        }
    }

    /// The width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw pixel bytes
    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// The number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the raster has no pixels at all
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether [`Strategy::WordParallel`](crate::Strategy::WordParallel) sees
    /// the whole image, i.e. no pixel in
    /// [`excluded_ranges`](crate::encode::excluded_ranges) is on.
    pub fn word_parallel_exact(&self) -> bool {
        excluded_ranges(self.len())
            .iter()
            .all(|range| self.pixels[range.clone()].iter().all(|&b| b == 0))
    }
}
