//! The `verify` subcommand
use std::time::Instant;

use color_eyre::eyre::{self, eyre};
use log::{info, warn};
use prettytable::{cell, format, row, Cell, Row, Table};
use rle_image::{EncodedImage, RasterView, Strategy};

use super::{opt::VerifyOpts, util};

/// Encode an image with both strategies and compare the results
pub fn process_verify(opt: VerifyOpts) -> eyre::Result<()> {
    let loaded = util::load_image(&opt.file, opt.threshold)?;
    let raster = RasterView::new(loaded.width, loaded.height, &loaded.pixels)?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["strategy", "transitions", "segments", "bytes", "time"]);

    let mut results = Vec::with_capacity(2);
    for strategy in [Strategy::Reference, Strategy::WordParallel] {
        let start = Instant::now();
        let image = EncodedImage::encode(&raster, strategy);
        let elapsed = start.elapsed();

        let bytes = image.to_bytes();
        if EncodedImage::from_bytes(&bytes)? != image {
            return Err(eyre!("{} encoding does not survive a round trip", strategy));
        }

        table.add_row(Row::new(vec![
            Cell::new(&strategy.to_string()),
            Cell::new(&format!("{:8}", image.indices().len())),
            Cell::new(&format!("{:8}", image.points().len() / 2)),
            Cell::new(&format!("{:8}", bytes.len())),
            Cell::new(&format!("{:?}", elapsed)),
        ]));
        results.push(image);
    }
    table.printstd();

    let (reference, words) = (&results[0], &results[1]);
    if reference.indices() == words.indices() {
        info!("Both strategies agree");
        Ok(())
    } else if raster.word_parallel_exact() {
        Err(eyre!(
            "Strategies disagree: {} vs {} transitions",
            reference.indices().len(),
            words.indices().len()
        ))
    } else {
        warn!(
            "Strategies differ because the first or last 8 pixels are on ({} vs {} transitions)",
            reference.indices().len(),
            words.indices().len()
        );
        Ok(())
    }
}
