//! Alpha-aware resampling for images with transparent regions.

use image::{
    imageops::{self, FilterType},
    ImageBuffer, Rgba, RgbaImage,
};

type PremultipliedImage = ImageBuffer<Rgba<f32>, Vec<f32>>;

/// Lanczos3 resize on premultiplied alpha.
///
/// Fully transparent pixels carry no color weight, so their RGB (usually
/// black) never darkens the semi-transparent edges of the result.
pub fn resize_rgba(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }

    let premultiplied = premultiply(image);
    let resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);
    unpremultiply(&resized)
}

fn premultiply(image: &RgbaImage) -> PremultipliedImage {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = a as f32 / 255.0;
        Rgba([
            r as f32 / 255.0 * alpha,
            g as f32 / 255.0 * alpha,
            b as f32 / 255.0 * alpha,
            alpha,
        ])
    })
}

fn unpremultiply(image: &PremultipliedImage) -> RgbaImage {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = a.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([
            to_u8(r / alpha),
            to_u8(g / alpha),
            to_u8(b / alpha),
            to_u8(alpha),
        ])
    })
}
