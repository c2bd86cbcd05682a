use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

// Encode RGBA data as PNG with the strongest compression the encoder offers
pub fn write_png<W: Write>(image: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    Ok(())
}

/// Write `image` to `path` as an optimized PNG, replacing any existing file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_png(image, &mut out).with_context(|| format!("Failed to write {}", path.display()))?;
    out.flush()?;
    Ok(())
}
