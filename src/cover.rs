//! Cover resizing: scale an image so it fills a target box, then center-crop
//! the overflow. Shared by the splash and social generators.

use crate::error::AssetError;
use image::{imageops::FilterType, DynamicImage};

/// Where a source lands when cover-resized into a target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverGeometry {
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub left: u32,
    pub top: u32,
}

/// Compute the scaled size and crop offset for covering `target_w x target_h`
/// with a `src_w x src_h` source.
///
/// The scale is the larger of the two axis ratios, so the binding axis lands
/// exactly on the target and the other one overflows. Scaled sizes round half
/// up and are clamped to the target so float error never leaves the crop box
/// short by a pixel. The crop is centered; an odd overflow leaves the extra
/// pixel on the right/bottom.
pub fn cover_dimensions(
    src_w: u32,
    src_h: u32,
    target_w: u32,
    target_h: u32,
) -> Result<CoverGeometry, AssetError> {
    if target_w == 0 || target_h == 0 {
        return Err(AssetError::InvalidDimensions {
            width: target_w,
            height: target_h,
        });
    }
    if src_w == 0 || src_h == 0 {
        return Err(AssetError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }

    let scale = (target_w as f64 / src_w as f64).max(target_h as f64 / src_h as f64);
    let scaled_width = ((src_w as f64 * scale + 0.5) as u32).max(target_w);
    let scaled_height = ((src_h as f64 * scale + 0.5) as u32).max(target_h);

    Ok(CoverGeometry {
        scaled_width,
        scaled_height,
        left: (scaled_width - target_w) / 2,
        top: (scaled_height - target_h) / 2,
    })
}

/// Cover-resize `image` to exactly `target_w x target_h`. Never letterboxes.
pub fn cover_resize_crop(
    image: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, AssetError> {
    let geometry = cover_dimensions(image.width(), image.height(), target_w, target_h)?;
    log::debug!(
        "cover {}x{} -> {}x{}: scaled to {}x{}, crop at ({}, {})",
        image.width(),
        image.height(),
        target_w,
        target_h,
        geometry.scaled_width,
        geometry.scaled_height,
        geometry.left,
        geometry.top
    );

    let scaled = if (geometry.scaled_width, geometry.scaled_height) == (image.width(), image.height())
    {
        image.clone()
    } else {
        image.resize_exact(
            geometry.scaled_width,
            geometry.scaled_height,
            FilterType::Lanczos3,
        )
    };

    Ok(scaled.crop_imm(geometry.left, geometry.top, target_w, target_h))
}
