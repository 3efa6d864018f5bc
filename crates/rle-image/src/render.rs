//! # Drawing segments
//!
//! A small software stand-in for a line renderer: every segment is filled
//! into a row-major buffer with one byte per pixel.

use std::io::{self, Write};

#[cfg(feature = "image")]
use image::GrayImage;

use crate::{segments::pairs, EncodedImage, RleError, RleResult};

/// The byte value of a drawn pixel
pub const INK: u8 = 0xFF;

/// Options for drawing the segments of an image
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Shift everything down by one pixel
    ///
    /// Some line rasterizers need this to hit the pixel centers.
    pub draw_offset: bool,
}

/// Draw the segments of `image` into a new buffer of `width * height` bytes
///
/// Drawn pixels are [`INK`], everything else is zero. With
/// [`RenderOptions::draw_offset`], the last row of segments is clipped.
///
/// Images with `u32::MAX` pixels or more are rejected like in
/// [`RasterView::new`](crate::RasterView::new), and a failed allocation is
/// returned as [`RleError::Allocation`].
pub fn rasterize(image: &EncodedImage, options: RenderOptions) -> RleResult<Vec<u8>> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let len = width
        .checked_mul(height)
        .filter(|&len| len < u32::MAX as usize)
        .ok_or(RleError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
            len: 0,
        })?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|source| RleError::Allocation { len, source })?;
    buffer.resize(len, 0);
    let offset = usize::from(options.draw_offset);

    for (start, end) in pairs(image.points()) {
        let y = start.y as usize + offset;
        if start.y != end.y || y >= height {
            continue;
        }
        let x0 = (start.x as usize).min(width);
        let x1 = (end.x as usize).min(width);
        if x0 < x1 {
            let row = y * width;
            buffer[row + x0..row + x1].fill(INK);
        }
    }
    Ok(buffer)
}

#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
/// Draw the segments into a `GrayImage` from the `image` crate
///
/// Ink is white on black unless `invert` is set.
pub fn to_image(
    image: &EncodedImage,
    options: RenderOptions,
    invert: bool,
) -> RleResult<GrayImage> {
    let mut buffer = rasterize(image, options)?;
    if invert {
        for byte in &mut buffer {
            *byte = !*byte;
        }
    }
    let len = buffer.len();
    GrayImage::from_raw(image.width(), image.height(), buffer).ok_or(
        RleError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
            len,
        },
    )
}

/// Write a drawn buffer as a binary Portable Bitmap (P4)
///
/// Ink is black in the bitmap.
pub fn write_pbm<W: Write>(
    out: &mut W,
    buffer: &[u8],
    width: u32,
    height: u32,
) -> io::Result<()> {
    write!(out, "P4\n{} {}\n", width, height)?;
    if width == 0 {
        return Ok(());
    }
    let mut line = Vec::with_capacity((width as usize + 7) / 8);
    for row in buffer.chunks(width as usize).take(height as usize) {
        line.clear();
        for group in row.chunks(8) {
            let mut byte = 0u8;
            for (i, &pixel) in group.iter().enumerate() {
                if pixel != 0 {
                    byte |= 0x80 >> i;
                }
            }
            line.push(byte);
        }
        out.write_all(&line)?;
    }
    Ok(())
}
