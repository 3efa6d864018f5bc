//! Command line options
use std::{fmt, path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};
use rle_image::Strategy;
use thiserror::Error;

/// The format to render an encoded image into
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    /// Portable Network Graphic
    Png,
    /// Portable Bitmap Format
    Pbm,
    /// Plain ASCII art on the console
    Ascii,
    /// Unicode box drawing characters on the console
    Unicode,
}

#[derive(Debug, Error)]
#[error("Use one of `png`, `pbm`, `ascii` or `unicode`")]
/// Failed to parse a format name
pub struct FormatError {}

impl Default for Format {
    fn default() -> Self {
        Format::Png
    }
}

impl FromStr for Format {
    type Err = FormatError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "png" => Ok(Self::Png),
            "pbm" => Ok(Self::Pbm),
            "ascii" => Ok(Self::Ascii),
            "txt" | "unicode" => Ok(Self::Unicode),
            _ => Err(FormatError {}),
        }
    }
}

impl Format {
    fn to_static_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pbm => "pbm",
            Self::Ascii => "ascii",
            Self::Unicode => "unicode",
        }
    }

    /// The file extension for this format, if it writes a file
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Self::Png => Some("png"),
            Self::Pbm => Some("pbm"),
            Self::Ascii | Self::Unicode => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_static_str())
    }
}

#[derive(Parser)]
/// Convert bi-level images to and from run-length transition files
pub struct Options {
    /// What to do
    #[clap(subcommand)]
    pub command: Command,
}

/// The subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Encode an image file into a `.rle` file
    Encode(EncodeOpts),
    /// Draw the segments of a `.rle` file
    Decode(DecodeOpts),
    /// Compare both scanning strategies on an image file
    Verify(VerifyOpts),
}

/// How pixels of a loaded image are classified
#[derive(Parser, Debug, Clone, Copy)]
pub struct Threshold {
    /// Pixels with a luma above this value are on
    #[clap(long, short = 't', default_value = "0")]
    pub threshold: u8,
    /// Classify pixels at or below the threshold as on (dark ink on light paper)
    #[clap(long, short = 'i')]
    pub invert: bool,
}

#[derive(Parser)]
/// Options for `encode`
pub struct EncodeOpts {
    /// The image to encode (e.g. *.png)
    pub file: PathBuf,
    /// Where to store the output, defaults to the input with an `rle` extension
    pub out: Option<PathBuf>,
    /// The scanning strategy: "reference" or "word-parallel"
    #[clap(default_value_t, long, short = 's')]
    pub strategy: Strategy,
    /// Pixel classification
    #[clap(flatten)]
    pub threshold: Threshold,
}

#[derive(Parser)]
/// Options for `decode`
pub struct DecodeOpts {
    /// The `.rle` file
    pub file: PathBuf,
    /// Where to store the output, defaults to the input with the format's extension
    pub out: Option<PathBuf>,
    /// Format of the output. Valid choices are:
    ///
    /// "png", "pbm", "ascii" and "unicode"
    #[clap(default_value_t, long, short = 'F')]
    pub format: Format,
    /// Shift the drawing down by one pixel
    #[clap(long)]
    pub draw_offset: bool,
    /// Draw ink as black on white
    #[clap(long, short = 'i')]
    pub invert: bool,
}

#[derive(Parser)]
/// Options for `verify`
pub struct VerifyOpts {
    /// The image to check
    pub file: PathBuf,
    /// Pixel classification
    #[clap(flatten)]
    pub threshold: Threshold,
}

#[cfg(test)]
mod tests {
    use super::Format;

    #[test]
    fn test_format() {
        assert_eq!("pbm".parse::<Format>().unwrap(), Format::Pbm);
        assert_eq!("txt".parse::<Format>().unwrap(), Format::Unicode);
        assert_eq!("ascii".parse::<Format>().unwrap(), Format::Ascii);
        assert!("pdf".parse::<Format>().is_err());
        assert_eq!(Format::default().to_string(), "png");
        assert_eq!(Format::Ascii.extension(), None);
        assert_eq!(Format::Unicode.to_string(), "unicode");
    }
}
