//! # Transition encoding
//!
//! Produces the flat indices at which the pixel classification flips. An
//! implicit "off" pixel precedes index 0, and a trailing open run is closed
//! at the last pixel index, so the output always has an even length.
//!
//! Two scanning strategies are available. [`Strategy::Reference`] looks at
//! every byte. [`Strategy::WordParallel`] reads the buffer in 8-byte words,
//! skips all-zero words and ignores the first and the last word of the
//! buffer (see [`excluded_ranges`]). Both agree whenever the excluded bytes
//! are all zero.

use std::{fmt, ops::Range, str::FromStr};

use log::{debug, trace};
use thiserror::Error;

use crate::{Color, RasterView, RleResult};

/// The number of bytes in a word of the word-parallel scan
pub const WORD_LEN: usize = 8;

/// How the pixel buffer is scanned
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// One byte at a time
    #[default]
    Reference,
    /// One 8-byte word at a time, skipping words that are entirely off
    WordParallel,
}

#[derive(Debug, Error)]
#[error("Unknown strategy, use `reference` or `word-parallel`")]
/// Error for strategy names
pub struct UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "r" | "ref" | "reference" => Ok(Self::Reference),
            "w" | "word" | "word-parallel" => Ok(Self::WordParallel),
            _ => Err(UnknownStrategy {}),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reference => "reference",
            Self::WordParallel => "word-parallel",
        })
    }
}

/// Encode a raster into its transition indices
///
/// The indices are increasing, except for one case: if only the last pixel
/// starts a run, the closing index repeats it. For `[0, 0, 0, 1]` the result
/// is `[3, 3]`, a run of length zero, so that pixel is never drawn.
pub fn encode(raster: &RasterView<'_>, strategy: Strategy) -> Vec<u32> {
    let pixels = raster.pixels();
    let mut data = match strategy {
        Strategy::WordParallel if pixels.len() >= WORD_LEN => scan_words(pixels),
        Strategy::WordParallel => {
            debug!(
                "{} pixels are less than a word, using the reference scan",
                pixels.len()
            );
            scan_bytes(pixels)
        }
        Strategy::Reference => scan_bytes(pixels),
    };

    // An odd count means the last run is still open
    if data.len() % 2 == 1 {
        data.push((pixels.len() - 1) as u32);
    }

    debug!(
        "Encoded {}x{} pixels into {} transitions ({})",
        raster.width(),
        raster.height(),
        data.len(),
        strategy
    );
    data
}

/// Validate the dimensions of `pixels` and [`encode`] them
pub fn encode_pixels(
    width: u32,
    height: u32,
    pixels: &[u8],
    strategy: Strategy,
) -> RleResult<Vec<u32>> {
    let raster = RasterView::new(width, height, pixels)?;
    Ok(encode(&raster, strategy))
}

/// Byte ranges that the word-parallel scan never looks at
///
/// These are the first word and everything from the start of the last full
/// word to the end of the buffer. Buffers shorter than one word are scanned
/// by the reference strategy, so nothing is excluded for them.
pub fn excluded_ranges(len: usize) -> [Range<usize>; 2] {
    let words = len / WORD_LEN;
    if words == 0 {
        return [0..0, len..len];
    }
    [0..WORD_LEN, (words - 1) * WORD_LEN..len]
}

fn scan_bytes(pixels: &[u8]) -> Vec<u32> {
    let mut data = Vec::new();
    let mut prev = Color::Off;
    for (index, &value) in pixels.iter().enumerate() {
        let color = Color::from(value);
        if color != prev {
            data.push(index as u32);
        }
        prev = color;
    }
    data
}

/// The words of a pixel buffer, with the excluded words reading as zero
struct Words<'a> {
    pixels: &'a [u8],
    count: usize,
}

impl<'a> Words<'a> {
    fn new(pixels: &'a [u8]) -> Self {
        Self {
            pixels,
            count: pixels.len() / WORD_LEN,
        }
    }

    fn is_excluded(&self, k: usize) -> bool {
        k == 0 || k + 1 >= self.count
    }

    fn word(&self, k: usize) -> u64 {
        if self.is_excluded(k) {
            return 0;
        }
        let mut bytes = [0; WORD_LEN];
        bytes.copy_from_slice(&self.pixels[k * WORD_LEN..(k + 1) * WORD_LEN]);
        u64::from_ne_bytes(bytes)
    }

    fn byte(&self, index: usize) -> u8 {
        if self.is_excluded(index / WORD_LEN) {
            0
        } else {
            self.pixels[index]
        }
    }
}

/// Whether word `k` records a change at `offset` into its scan window
///
/// The window covers the eight bytes of the word plus the first byte of the
/// next word. A change at that last position is only recorded if the next
/// word is entirely off, because otherwise the next word will see the same
/// change at its own offset 0.
fn records(offset: usize, next_is_zero: bool) -> bool {
    offset < WORD_LEN || next_is_zero
}

fn scan_words(pixels: &[u8]) -> Vec<u32> {
    let words = Words::new(pixels);
    let mut data = Vec::new();
    for k in 1..words.count.saturating_sub(1) {
        if words.word(k) == 0 {
            continue;
        }
        let next_is_zero = words.word(k + 1) == 0;
        let start = k * WORD_LEN;
        trace!("word {} at {}, next is zero: {}", k, start, next_is_zero);

        let mut prev = Color::from(words.byte(start - 1));
        for offset in 0..=WORD_LEN {
            let index = start + offset;
            let color = Color::from(words.byte(index));
            if color != prev && records(offset, next_is_zero) {
                data.push(index as u32);
            }
            prev = color;
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::{encode, encode_pixels, excluded_ranges, records, scan_words, Strategy, WORD_LEN};
    use crate::{EncodedImage, Point, RasterView, RleError};

    fn both(width: u32, height: u32, pixels: &[u8]) -> (Vec<u32>, Vec<u32>) {
        let view = RasterView::new(width, height, pixels).unwrap();
        (
            encode(&view, Strategy::Reference),
            encode(&view, Strategy::WordParallel),
        )
    }

    #[test]
    fn test_single_run() {
        let pixels = [0, 1, 1, 0];
        let view = RasterView::new(4, 1, &pixels).unwrap();
        assert_eq!(encode(&view, Strategy::Reference), vec![1, 3]);
    }

    #[test]
    fn test_all_off() {
        let pixels = [0; 4];
        let view = RasterView::new(4, 1, &pixels).unwrap();
        assert!(encode(&view, Strategy::Reference).is_empty());
        assert!(encode(&view, Strategy::WordParallel).is_empty());
    }

    #[test]
    fn test_only_classification_counts() {
        let pixels = [0, 7, 200, 1, 0, 0];
        let view = RasterView::new(6, 1, &pixels).unwrap();
        assert_eq!(encode(&view, Strategy::Reference), vec![1, 4]);
    }

    #[test]
    fn test_close_open_run() {
        let pixels = [0, 0, 1, 1, 1, 1];
        let view = RasterView::new(3, 2, &pixels).unwrap();
        assert_eq!(encode(&view, Strategy::Reference), vec![2, 5]);

        let pixels = [1; 4];
        let view = RasterView::new(2, 2, &pixels).unwrap();
        assert_eq!(encode(&view, Strategy::Reference), vec![0, 3]);
    }

    #[test]
    fn test_close_repeats_last_pixel() {
        let pixels = [0, 0, 0, 1];
        let view = RasterView::new(4, 1, &pixels).unwrap();
        assert_eq!(encode(&view, Strategy::Reference), vec![3, 3]);

        let image = EncodedImage::encode(&view, Strategy::Reference);
        assert_eq!(image.points(), &[Point::new(3, 0), Point::new(3, 0)]);
    }

    #[test]
    fn test_small_buffer_falls_back() {
        let pixels = [0, 1, 1, 0, 1, 0, 0];
        let (reference, words) = both(7, 1, &pixels);
        assert_eq!(reference, vec![1, 3, 4, 5]);
        assert_eq!(words, reference);
    }

    #[test]
    fn test_encode_pixels_checks_dimensions() {
        let pixels = [0; 10];
        assert!(matches!(
            encode_pixels(3, 3, &pixels, Strategy::WordParallel),
            Err(RleError::InvalidDimensions { .. })
        ));
        assert_eq!(
            encode_pixels(5, 2, &pixels, Strategy::Reference).unwrap(),
            Vec::<u32>::new()
        );
    }

    #[test]
    fn test_records() {
        for offset in 0..WORD_LEN {
            assert!(records(offset, false));
            assert!(records(offset, true));
        }
        assert!(!records(WORD_LEN, false));
        assert!(records(WORD_LEN, true));
    }

    #[test]
    fn test_word_boundary_into_zero_word() {
        // run ends exactly where word 2 (all zero) starts
        let mut pixels = [0u8; 32];
        pixels[12..16].copy_from_slice(&[1, 1, 1, 1]);
        let (reference, words) = both(8, 4, &pixels);
        assert_eq!(reference, vec![12, 16]);
        assert_eq!(words, reference);
    }

    #[test]
    fn test_word_boundary_deferred() {
        // run crosses from word 1 into word 2, both non-zero
        let mut pixels = [0u8; 32];
        pixels[14..19].copy_from_slice(&[1, 1, 1, 1, 1]);
        let (reference, words) = both(8, 4, &pixels);
        assert_eq!(reference, vec![14, 19]);
        assert_eq!(words, reference);

        // the off -> on change sits exactly on the boundary
        let mut pixels = [0u8; 32];
        pixels[16..18].copy_from_slice(&[1, 1]);
        pixels[9] = 1;
        let (reference, words) = both(8, 4, &pixels);
        assert_eq!(reference, vec![9, 10, 16, 18]);
        assert_eq!(words, reference);
    }

    #[test]
    fn test_run_from_zero_word() {
        let mut pixels = [0u8; 40];
        pixels[16] = 1;
        pixels[17] = 1;
        let (reference, words) = both(8, 5, &pixels);
        assert_eq!(reference, vec![16, 18]);
        assert_eq!(words, reference);
    }

    #[test]
    fn test_excluded_words_are_dropped() {
        let mut pixels = [0u8; 32];
        pixels[3] = 1;
        pixels[10] = 1;
        pixels[28] = 1;
        let (reference, words) = both(8, 4, &pixels);
        assert_eq!(reference, vec![3, 4, 10, 11, 28, 29]);
        assert_eq!(words, vec![10, 11]);
    }

    #[test]
    fn test_run_into_last_word_is_cut() {
        let mut pixels = [0u8; 32];
        for p in &mut pixels[20..] {
            *p = 1;
        }
        let (reference, words) = both(8, 4, &pixels);
        assert_eq!(reference, vec![20, 31]);
        assert_eq!(words, vec![20, 24]);
    }

    #[test]
    fn test_trailing_partial_word_is_excluded() {
        let mut pixels = [0u8; 35];
        pixels[33] = 1;
        let (reference, words) = both(35, 1, &pixels);
        assert_eq!(reference, vec![33, 34]);
        assert!(words.is_empty());
        assert_eq!(excluded_ranges(35), [0..8, 24..35]);
    }

    #[test]
    fn test_caller_buffer_untouched() {
        let pixels: Vec<u8> = (0..64u8).map(|i| i % 3).collect();
        let copy = pixels.clone();
        let view = RasterView::new(8, 8, &pixels).unwrap();
        let _ = encode(&view, Strategy::WordParallel);
        assert_eq!(pixels, copy);
    }

    #[test]
    fn test_scan_words_two_words() {
        // two words: both excluded, nothing to scan
        assert!(scan_words(&[1; 16]).is_empty());
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("reference".parse::<Strategy>().unwrap(), Strategy::Reference);
        assert_eq!("w".parse::<Strategy>().unwrap(), Strategy::WordParallel);
        assert!("fast".parse::<Strategy>().is_err());
        assert_eq!(Strategy::WordParallel.to_string(), "word-parallel");
        assert_eq!(Strategy::default(), Strategy::Reference);
    }
}
