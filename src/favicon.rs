use crate::{error::AssetError, layout::AssetLayout, png::write_png, resample::resize_rgba};
use anyhow::{Context, Result};
use image::{
    codecs::ico::{IcoEncoder, IcoFrame},
    ColorType, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Square sizes embedded in favicon.ico, smallest first.
pub const FAVICON_SIZES: [u32; 8] = [16, 32, 48, 64, 96, 128, 192, 256];

#[derive(Debug)]
pub struct FaviconReport {
    pub path: PathBuf,
    pub sizes: Vec<u32>,
}

/// Look for `favicon-{size}x{size}.png`, then `{size}.png`.
pub fn find_png_for_size(dir: &Path, size: u32) -> Option<PathBuf> {
    [format!("favicon-{size}x{size}.png"), format!("{size}.png")]
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Decode a candidate and bring it to exactly `size x size` RGBA.
pub fn load_favicon_frame(path: &Path, size: u32) -> Result<RgbaImage, AssetError> {
    let image = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = image.into_rgba8();
    if rgba.dimensions() == (size, size) {
        Ok(rgba)
    } else {
        log::debug!(
            "resizing {} from {}x{} to {size}x{size}",
            path.display(),
            rgba.width(),
            rgba.height()
        );
        Ok(resize_rgba(&rgba, size, size))
    }
}

/// Load every candidate found in `dir`, in ascending size order.
///
/// Candidates that fail to decode are reported on stderr and skipped. This
/// goes through `eprintln!` rather than `log`: the message is part of the
/// command's stderr output and must show up whatever the log level is.
pub fn collect_favicon_frames(dir: &Path) -> Vec<(u32, RgbaImage)> {
    let mut frames = Vec::new();

    for size in FAVICON_SIZES {
        let Some(path) = find_png_for_size(dir, size) else {
            log::debug!("no favicon candidate for {size}x{size}");
            continue;
        };

        match load_favicon_frame(&path, size) {
            Ok(frame) => frames.push((size, frame)),
            Err(err) => eprintln!("{err}"),
        }
    }

    frames
}

/// Write a multi-resolution ICO with one PNG-compressed frame per raster.
pub fn write_ico(path: &Path, frames: &[(u32, RgbaImage)]) -> Result<()> {
    let mut ico_frames = Vec::with_capacity(frames.len());
    for (size, rgba) in frames {
        let mut buf = Vec::new();
        write_png(rgba, &mut buf)?;
        ico_frames.push(IcoFrame::with_encoded(buf, *size, *size, ColorType::Rgba8)?);
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    let encoder = IcoEncoder::new(&mut out_file);
    encoder
        .encode_images(&ico_frames)
        .context("Failed to encode favicon.ico")?;
    out_file.flush()?;
    Ok(())
}

pub fn generate_favicon(layout: &AssetLayout) -> Result<FaviconReport> {
    let dir = layout.public_dir();
    let frames = collect_favicon_frames(&dir);

    if frames.is_empty() {
        return Err(AssetError::NoFaviconSources { dir }.into());
    }

    let path = layout.favicon_path();
    write_ico(&path, &frames)?;

    let sizes: Vec<u32> = frames.iter().map(|(size, _)| *size).collect();
    println!("Wrote {} with {} sizes", path.display(), sizes.len());
    Ok(FaviconReport { path, sizes })
}
