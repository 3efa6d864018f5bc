#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! # Run-length transitions for bi-level images
//!
//! A bi-level image is stored as the list of flat pixel indices where the
//! pixel classification flips between "off" (zero byte) and "on" (any other
//! byte). Pairs of indices form half-open on-runs in row-major order.
//!
//! ```
//! use rle_image::{EncodedImage, Point, RasterView, Strategy};
//!
//! let pixels = [0, 1, 1, 0];
//! let raster = RasterView::new(4, 1, &pixels)?;
//! let image = EncodedImage::encode(&raster, Strategy::Reference);
//! assert_eq!(image.indices(), &[1, 3]);
//! assert_eq!(image.points(), &[Point::new(1, 0), Point::new(3, 0)]);
//! # Ok::<(), rle_image::RleError>(())
//! ```

mod ascii_art;
mod binary;
mod color;
pub mod encode;
mod encoded;
mod error;
mod raster;
pub mod render;
pub mod segments;

pub use ascii_art::{box_art, BorderDrawing, BoxDrawing, ASCII, UNICODE};
pub use binary::HEADER_LEN;
pub use color::Color;
pub use encode::{encode, encode_pixels, Strategy, UnknownStrategy, WORD_LEN};
pub use encoded::EncodedImage;
pub use error::{RleError, RleResult};
pub use raster::RasterView;
pub use segments::{centroid, reconstruct, Point};
