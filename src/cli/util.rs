use std::path::Path;

use color_eyre::eyre::{self, WrapErr};
use image::GrayImage;
use log::info;

use super::opt::Threshold;

/// An image loaded from disk and classified into one byte per pixel
pub(super) struct Loaded {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

pub(super) fn classify(image: &GrayImage, threshold: Threshold) -> Loaded {
    let pixels = image
        .as_raw()
        .iter()
        .map(|&luma| u8::from((luma > threshold.threshold) ^ threshold.invert))
        .collect();
    Loaded {
        width: image.width(),
        height: image.height(),
        pixels,
    }
}

pub(super) fn load_image(path: &Path, threshold: Threshold) -> eyre::Result<Loaded> {
    let image = image::open(path)
        .wrap_err_with(|| format!("Failed to open image: `{}`", path.display()))?
        .into_luma8();
    info!(
        "Loaded '{}' ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(classify(&image, threshold))
}
