use asset_gen::{
    cover_resize_crop,
    resample::resize_rgba,
    social::{
        apply_opacity, composite_logo, generate_social, social_targets, LogoPlacement,
    },
    AssetError, AssetLayout,
};
use image::{DynamicImage, ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

fn solid(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |_, _| Rgba(color)))
}

/// Logo with a transparent left half and an opaque red right half
fn half_transparent_logo(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([220, 20, 20, 255])
        }
    }))
}

#[test]
fn test_social_targets_table() {
    let targets = social_targets().expect("size table should parse");
    assert_eq!(targets.len(), 9);
    assert_eq!(
        (targets[0].width, targets[0].height, targets[0].filename.as_str()),
        (1200, 630, "og-image-1200x630-with-badge.png")
    );
    assert!(targets
        .iter()
        .any(|t| (t.width, t.height) == (1584, 396) && t.filename == "og-1584x396.png"));
}

#[test]
fn test_logo_placement_on_1200x630_card() {
    let placement = LogoPlacement::compute(1200, 630, 400, 200);
    assert_eq!(
        placement,
        LogoPlacement {
            width: 216,
            height: 108,
            x: 1200 - 216 - 48,
            y: 630 - 108 - 48,
        }
    );

    // Tall logos may poke above the top edge
    let tall = LogoPlacement::compute(100, 50, 10, 100);
    assert_eq!((tall.width, tall.height), (18, 180));
    assert_eq!((tall.x, tall.y), (78, -134));
}

#[test]
fn test_composite_logo_bottom_right() {
    let hero = solid(800, 600, [10, 40, 200, 255]);
    let base = cover_resize_crop(&hero, 1200, 630).unwrap();
    assert_eq!((base.width(), base.height()), (1200, 630));

    let logo = solid(400, 200, [220, 20, 20, 255]);
    let card = composite_logo(&base, &logo, 1.0).into_rgba8();
    assert_eq!(card.dimensions(), (1200, 630));

    // Inside the logo box: 936..1152 x 474..582
    let inside = card.get_pixel(1040, 530);
    assert!(inside[0] > 200 && inside[2] < 60, "logo pixel was {inside:?}");

    // Padding strip and the rest of the card keep the hero color
    for (x, y) in [(1199, 629), (1160, 530), (1040, 590), (100, 100)] {
        let pixel = card.get_pixel(x, y);
        assert!(pixel[2] > 180 && pixel[0] < 40, "hero pixel at {x},{y} was {pixel:?}");
    }
}

#[test]
fn test_full_opacity_is_a_no_op() {
    let base = solid(300, 200, [30, 120, 60, 255]);
    let logo = half_transparent_logo(90, 60);

    let placement = LogoPlacement::compute(300, 200, 90, 60);
    let badge = resize_rgba(&logo.to_rgba8(), placement.width, placement.height);

    let mut adjusted = badge.clone();
    apply_opacity(&mut adjusted, 1.0);
    assert_eq!(adjusted, badge);

    let mut expected = base.to_rgba8();
    image::imageops::overlay(&mut expected, &badge, placement.x, placement.y);

    let composited = composite_logo(&base, &logo, 1.0).into_rgba8();
    assert_eq!(composited, expected);
}

#[test]
fn test_logo_edges_keep_their_color() {
    // White square on a transparent black surround
    let logo = DynamicImage::ImageRgba8(ImageBuffer::from_fn(100, 100, |x, y| {
        if (20..80).contains(&x) && (20..80).contains(&y) {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    }));
    let base = solid(200, 100, [255, 255, 255, 255]);

    let card = composite_logo(&base, &logo, 1.0).into_rgba8();
    for (x, y, pixel) in card.enumerate_pixels() {
        assert_eq!(&pixel.0[..3], &[255, 255, 255], "pixel at {x},{y}");
    }
}

#[test]
fn test_partial_opacity_scales_alpha() {
    let mut logo: RgbaImage = ImageBuffer::from_fn(4, 4, |x, _| {
        Rgba([255, 0, 0, if x == 0 { 0 } else { 255 }])
    });
    apply_opacity(&mut logo, 0.5);

    assert_eq!(logo.get_pixel(0, 0)[3], 0);
    assert_eq!(logo.get_pixel(3, 3)[3], 127);
    assert_eq!(logo.get_pixel(3, 3)[0], 255);
}

#[test]
fn test_generate_social_writes_every_card() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let layout = AssetLayout::new(temp_dir.path());

    let hero_path = layout.hero_source();
    std::fs::create_dir_all(hero_path.parent().unwrap()).unwrap();
    let hero: RgbImage = ImageBuffer::from_fn(160, 120, |x, y| Rgb([x as u8, y as u8, 128]));
    hero.save(&hero_path).expect("Failed to save hero image");
    half_transparent_logo(40, 20)
        .save(layout.logo_source())
        .expect("Failed to save logo");

    let report = generate_social(&layout).expect("social generation failed");
    let targets = social_targets().unwrap();
    assert_eq!(report.files.len(), targets.len());

    for (target, (path, width, height)) in targets.iter().zip(&report.files) {
        assert_eq!(path, &layout.og_dir().join(&target.filename));
        assert_eq!((*width, *height), (target.width, target.height));

        let written = image::open(path).expect("card should decode");
        assert_eq!((written.width(), written.height()), (target.width, target.height));
    }
}

#[test]
fn test_generate_social_missing_logo() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let layout = AssetLayout::new(temp_dir.path());

    let hero_path = layout.hero_source();
    std::fs::create_dir_all(hero_path.parent().unwrap()).unwrap();
    RgbImage::new(16, 12).save(&hero_path).unwrap();

    let err = generate_social(&layout).expect_err("missing logo should fail");
    assert!(matches!(
        err.downcast_ref::<AssetError>(),
        Some(AssetError::MissingInput { what: "logo", .. })
    ));
    assert!(!layout.og_dir().exists());
}
