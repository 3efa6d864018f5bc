use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, WrapErr};
use rle_image::{EncodedImage, HEADER_LEN};

#[derive(clap::Parser)]
/// Describe the content of a `.rle` file
struct Options {
    /// A run-length transition file
    file: PathBuf,
}

fn info(buffer: &[u8], opt: Options) -> eyre::Result<()> {
    let image = EncodedImage::from_bytes(buffer)
        .wrap_err_with(|| format!("Not a valid `.rle` file: `{}`", opt.file.display()))?;

    let used = HEADER_LEN + image.indices().len() * 4;
    println!("Size: {}x{}", image.width(), image.height());
    println!("Transitions: {}", image.indices().len());
    println!("Segments: {}", image.points().len() / 2);
    if let Some((x, y)) = image.centroid() {
        println!("Centroid: ({:.2}, {:.2})", x, y);
    }
    if buffer.len() > used {
        println!("Ignored {} trailing bytes", buffer.len() - used);
    }
    println!("Use `rle-tool decode \"{}\"` to draw it", opt.file.display());
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let opt: Options = Options::parse();

    let buffer = std::fs::read(&opt.file)?;
    info(&buffer, opt)
}
