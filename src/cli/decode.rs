//! The `decode` subcommand
use std::{
    fs::File,
    io::{BufWriter, Write},
};

use color_eyre::eyre::{self, WrapErr};
use image::ImageFormat;
use log::info;
use rle_image::{
    box_art,
    render::{self, RenderOptions},
    EncodedImage, ASCII, UNICODE,
};

use super::opt::{DecodeOpts, Format};

/// Read a `.rle` file and draw it in the requested format
pub fn process_decode(opt: DecodeOpts) -> eyre::Result<()> {
    let buffer = std::fs::read(&opt.file)
        .wrap_err_with(|| format!("Failed to open file: `{}`", opt.file.display()))?;
    let image = EncodedImage::from_bytes(&buffer)
        .wrap_err_with(|| format!("Failed to decode `{}`", opt.file.display()))?;
    info!(
        "Decoded {}x{} image with {} transitions",
        image.width(),
        image.height(),
        image.indices().len()
    );

    let options = RenderOptions {
        draw_offset: opt.draw_offset,
    };
    let out_path = opt
        .format
        .extension()
        .map(|ext| opt.out.clone().unwrap_or_else(|| opt.file.with_extension(ext)));

    match (opt.format, out_path) {
        (Format::Png, Some(out_path)) => {
            let gray = render::to_image(&image, options, opt.invert)?;
            gray.save_with_format(&out_path, ImageFormat::Png)?;
            info!("Saved image as '{}'", out_path.display());
        }
        (Format::Pbm, Some(out_path)) => {
            let mut drawn = render::rasterize(&image, options)?;
            if opt.invert {
                drawn.iter_mut().for_each(|b| *b = !*b);
            }
            let file = File::create(&out_path)
                .wrap_err_with(|| format!("Failed to create file: `{}`", out_path.display()))?;
            let mut writer = BufWriter::new(file);
            render::write_pbm(&mut writer, &drawn, image.width(), image.height())?;
            writer.flush()?;
            info!("Saved image as '{}'", out_path.display());
        }
        (format, _) => {
            let drawn = render::rasterize(&image, options)?;
            let chars = match format {
                Format::Ascii => ASCII,
                _ => UNICODE,
            };
            let mut out = String::new();
            box_art(
                &mut out,
                chars,
                &drawn,
                image.width() as usize,
                opt.invert,
            )?;
            print!("{}", out);
        }
    }
    Ok(())
}
