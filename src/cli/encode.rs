//! The `encode` subcommand
use std::{
    fs::File,
    io::{BufWriter, Write},
};

use color_eyre::eyre::{self, WrapErr};
use log::{info, warn};
use rle_image::{EncodedImage, RasterView, Strategy};

use super::{opt::EncodeOpts, util};

/// Encode an image file and save it next to it
pub fn process_encode(opt: EncodeOpts) -> eyre::Result<()> {
    let loaded = util::load_image(&opt.file, opt.threshold)?;
    let raster = RasterView::new(loaded.width, loaded.height, &loaded.pixels)?;

    if opt.strategy == Strategy::WordParallel && !raster.word_parallel_exact() {
        warn!("The first or last 8 pixels are on, `word-parallel` will drop them");
    }
    let image = EncodedImage::encode(&raster, opt.strategy);
    info!(
        "Found {} transitions, {} segments",
        image.indices().len(),
        image.points().len() / 2
    );

    let out_path = opt.out.unwrap_or_else(|| opt.file.with_extension("rle"));
    let file = File::create(&out_path)
        .wrap_err_with(|| format!("Failed to create file: `{}`", out_path.display()))?;
    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer)?;
    writer.flush()?;
    info!("Saved encoding as '{}'", out_path.display());
    Ok(())
}
