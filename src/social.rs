use crate::{
    cover::cover_resize_crop, error::AssetError, layout::AssetLayout, png::save_png,
    resample::resize_rgba,
};
use anyhow::{Context, Result};
use image::{DynamicImage, RgbaImage};
use serde::Deserialize;
use std::{fs::create_dir_all, path::PathBuf};

/// Logo width as a fraction of the output width.
pub const LOGO_TARGET_WIDTH_RATIO: f64 = 0.18;
/// Gap between the logo and the right/bottom edges, as a fraction of the output width.
pub const PADDING_RATIO: f64 = 0.04;
pub const LOGO_OPACITY: f64 = 1.0;

const SOCIAL_TARGETS_JSON: &str = r#"
[
  { "width": 1200, "height": 630,  "filename": "og-image-1200x630-with-badge.png" },
  { "width": 1200, "height": 1200, "filename": "og-1200x1200.png" },
  { "width": 1024, "height": 1024, "filename": "og-1024x1024.png" },
  { "width": 600,  "height": 315,  "filename": "og-600x315.png" },
  { "width": 1080, "height": 1080, "filename": "og-1080x1080.png" },
  { "width": 1584, "height": 396,  "filename": "og-1584x396.png" },
  { "width": 1000, "height": 1500, "filename": "og-1000x1500.png" },
  { "width": 1280, "height": 720,  "filename": "og-1280x720.png" },
  { "width": 1200, "height": 627,  "filename": "og-1200x627.png" }
]
"#;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialTarget {
    pub width: u32,
    pub height: u32,
    pub filename: String,
}

#[derive(Debug)]
pub struct SocialReport {
    pub files: Vec<(PathBuf, u32, u32)>,
}

/// Open Graph / social card sizes: Facebook and Twitter cards, Instagram
/// square, LinkedIn banner, Pinterest tall, YouTube thumbnail.
pub fn social_targets() -> Result<Vec<SocialTarget>> {
    serde_json::from_str(SOCIAL_TARGETS_JSON).context("Failed to parse social size table")
}

/// Size and top-left corner of the logo on an `out_w x out_h` card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    pub width: u32,
    pub height: u32,
    pub x: i64,
    pub y: i64,
}

impl LogoPlacement {
    pub fn compute(out_w: u32, out_h: u32, logo_w: u32, logo_h: u32) -> Self {
        let width = ((out_w as f64 * LOGO_TARGET_WIDTH_RATIO) as u32).max(1);
        let height = ((width as f64 * (logo_h as f64 / logo_w.max(1) as f64)) as u32).max(1);
        let padding = (out_w as f64 * PADDING_RATIO) as i64;

        Self {
            width,
            height,
            x: out_w as i64 - width as i64 - padding,
            y: out_h as i64 - height as i64 - padding,
        }
    }
}

/// Scale every alpha value by `opacity`. Fully opaque logos are left untouched.
pub fn apply_opacity(logo: &mut RgbaImage, opacity: f64) {
    if opacity >= 1.0 {
        return;
    }

    let opacity = opacity.max(0.0);
    for pixel in logo.pixels_mut() {
        pixel[3] = (pixel[3] as f64 * opacity) as u8;
    }
}

/// Alpha-blend `logo` into the bottom-right corner of `base`.
pub fn composite_logo(base: &DynamicImage, logo: &DynamicImage, opacity: f64) -> DynamicImage {
    let placement = LogoPlacement::compute(base.width(), base.height(), logo.width(), logo.height());

    let mut badge = resize_rgba(&logo.to_rgba8(), placement.width, placement.height);
    apply_opacity(&mut badge, opacity);

    let mut out = base.to_rgba8();
    image::imageops::overlay(&mut out, &badge, placement.x, placement.y);
    DynamicImage::ImageRgba8(out)
}

pub fn generate_social(layout: &AssetLayout) -> Result<SocialReport> {
    let hero_path = AssetError::require("hero source", layout.hero_source())?;
    let logo_path = AssetError::require("logo", layout.logo_source())?;
    let targets = social_targets()?;

    let open_rgba = |path: &PathBuf| -> Result<DynamicImage, AssetError> {
        image::open(path)
            .map(|image| DynamicImage::ImageRgba8(image.into_rgba8()))
            .map_err(|source| AssetError::Decode {
                path: path.clone(),
                source,
            })
    };
    let hero = open_rgba(&hero_path)?;
    let logo = open_rgba(&logo_path)?;

    let out_dir = layout.og_dir();
    create_dir_all(&out_dir).context("Can't create og directory")?;

    let mut files = Vec::with_capacity(targets.len());
    for target in targets {
        let base = cover_resize_crop(&hero, target.width, target.height)?;
        let card = composite_logo(&base, &logo, LOGO_OPACITY);

        let (width, height) = (card.width(), card.height());
        let out_path = out_dir.join(&target.filename);
        save_png(&card.into_rgba8(), &out_path)?;
        println!("Wrote {} -> ({width}, {height})", target.filename);
        files.push((out_path, width, height));
    }

    Ok(SocialReport { files })
}
