use crate::{
    encode::{encode, Strategy},
    segments::{centroid, reconstruct, Point},
    RasterView,
};

/// A run-length encoded bi-level image
///
/// The transition indices are the source of truth. The segment points are
/// derived from them and refreshed on every constructor and mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedImage {
    width: u32,
    height: u32,
    indices: Vec<u32>,
    points: Vec<Point>,
}

impl EncodedImage {
    /// Encode a raster with the given strategy
    pub fn encode(raster: &RasterView<'_>, strategy: Strategy) -> Self {
        Self::from_parts(raster.width(), raster.height(), encode(raster, strategy))
    }

    /// Create an image from already encoded transition indices
    ///
    /// The number of indices must fit into a `u32`.
    pub fn from_parts(width: u32, height: u32, indices: Vec<u32>) -> Self {
        let mut image = Self {
            width,
            height,
            indices,
            points: Vec::new(),
        };
        image.refresh();
        image
    }

    /// Replace the content of this image with a new raster
    pub fn reencode(&mut self, raster: &RasterView<'_>, strategy: Strategy) {
        self.width = raster.width();
        self.height = raster.height();
        self.indices = encode(raster, strategy);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.points = reconstruct(&self.indices, self.width);
    }

    /// The width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The transition indices
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// The segment points, two per segment
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The mean of all segment points
    pub fn centroid(&self) -> Option<(f32, f32)> {
        centroid(&self.points)
    }
}
