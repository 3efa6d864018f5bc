//! # Draw a bi-level buffer as box art

use std::fmt;

/// Characters for a horizontal border
pub struct BorderDrawing {
    /// The corner on the left
    pub left: char,
    /// The repeated middle part
    pub middle: char,
    /// The corner on the right
    pub right: char,
}

/// Characters for a framed picture
pub struct BoxDrawing {
    /// The top border
    pub top: BorderDrawing,
    /// The left border
    pub left: char,
    /// The right border
    pub right: char,
    /// The bottom border
    pub bottom: BorderDrawing,
    /// A pixel that is on
    pub ink: char,
    /// A pixel that is off
    pub no_ink: char,
}

const ASCII_BORDER: BorderDrawing = BorderDrawing {
    left: '+',
    middle: '-',
    right: '+',
};

/// Plain ASCII frame
pub const ASCII: &BoxDrawing = &BoxDrawing {
    top: ASCII_BORDER,
    left: '|',
    right: '|',
    bottom: ASCII_BORDER,
    ink: '#',
    no_ink: ' ',
};

/// Frame with unicode box drawing characters
pub const UNICODE: &BoxDrawing = &BoxDrawing {
    top: BorderDrawing {
        left: '╔',
        middle: '═',
        right: '╗',
    },
    left: '║',
    right: '║',
    bottom: BorderDrawing {
        left: '╚',
        middle: '═',
        right: '╝',
    },
    ink: '█',
    no_ink: ' ',
};

fn border<W: fmt::Write>(w: &mut W, b: &BorderDrawing, width: usize) -> fmt::Result {
    w.write_char(b.left)?;
    for _ in 0..width {
        w.write_char(b.middle)?;
    }
    w.write_char(b.right)?;
    w.write_char('\n')
}

/// Draw a row-major buffer with one byte per pixel using characters
///
/// Any non-zero byte is ink, unless `invert` is set.
pub fn box_art<W: fmt::Write>(
    w: &mut W,
    b: &BoxDrawing,
    buffer: &[u8],
    width: usize,
    invert: bool,
) -> fmt::Result {
    border(w, &b.top, width)?;
    if width > 0 {
        for row in buffer.chunks(width) {
            w.write_char(b.left)?;
            for &pixel in row {
                w.write_char(if (pixel != 0) ^ invert { b.ink } else { b.no_ink })?;
            }
            w.write_char(b.right)?;
            w.write_char('\n')?;
        }
    }
    border(w, &b.bottom, width)
}
