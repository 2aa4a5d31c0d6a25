use std::io::Cursor;

use thumbforge::{
    decode_image, encode_png, render_thumbnail, AssetSlots, Canvas, Color, FontLibrary,
    FrameRGBA, SlotKind, ThumbnailSettings,
};

fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
    bytes.into_inner()
}

fn assets_with_background(rgba: [u8; 4]) -> AssetSlots {
    let mut assets = AssetSlots::new();
    let img = decode_image(&png_bytes(64, 36, rgba)).unwrap();
    assets.assign(SlotKind::Background, img);
    assets
}

fn quiet_settings() -> ThumbnailSettings {
    ThumbnailSettings {
        title: String::new(),
        overlay_enabled: false,
        ..ThumbnailSettings::default()
    }
}

fn render(settings: &ThumbnailSettings, assets: &AssetSlots) -> FrameRGBA {
    render_thumbnail(settings, assets, &FontLibrary::new(), Canvas::THUMBNAIL).unwrap()
}

#[test]
fn placeholder_background_is_fully_opaque() {
    let frame = render(&quiet_settings(), &AssetSlots::new());
    assert_eq!((frame.width, frame.height), (1280, 720));
    for y in (0..720).step_by(39) {
        for x in (0..1280).step_by(41) {
            assert_eq!(frame.pixel(x, y)[3], 255, "transparent pixel at ({x},{y})");
        }
    }
}

#[test]
fn background_image_covers_the_whole_canvas() {
    let assets = assets_with_background([180, 40, 20, 255]);
    let frame = render(&quiet_settings(), &assets);
    for (x, y) in [(0, 0), (1279, 0), (0, 719), (1279, 719), (640, 360)] {
        assert_eq!(frame.pixel(x, y), [180, 40, 20, 255]);
    }
}

#[test]
fn disabled_overlay_matches_zero_opacity_pixel_for_pixel() {
    let assets = assets_with_background([90, 120, 200, 255]);

    let disabled = render(
        &ThumbnailSettings {
            overlay_enabled: false,
            overlay_opacity: 80,
            ..quiet_settings()
        },
        &assets,
    );
    let zero = render(
        &ThumbnailSettings {
            overlay_enabled: true,
            overlay_opacity: 0,
            ..quiet_settings()
        },
        &assets,
    );
    assert_eq!(disabled, zero);
}

#[test]
fn overlay_darkens_every_background_pixel() {
    let assets = assets_with_background([200, 200, 200, 255]);
    let plain = render(&quiet_settings(), &assets);
    let shaded = render(
        &ThumbnailSettings {
            overlay_enabled: true,
            overlay_color: Color::BLACK,
            overlay_opacity: 30,
            ..quiet_settings()
        },
        &assets,
    );

    for y in (0..720).step_by(97) {
        for x in (0..1280).step_by(101) {
            let a = plain.pixel(x, y);
            let b = shaded.pixel(x, y);
            assert!(b[0] < a[0] && b[1] < a[1] && b[2] < a[2]);
            assert_eq!(b[3], 255);
        }
    }
}

#[test]
fn author_badge_is_confined_to_its_corner_disk() {
    let assets_bg = assets_with_background([10, 10, 10, 255]);

    let mut assets_badge = assets_with_background([10, 10, 10, 255]);
    assets_badge.assign(
        SlotKind::Author,
        decode_image(&png_bytes(48, 48, [0, 255, 0, 255])).unwrap(),
    );

    let base = render(&quiet_settings(), &assets_bg);
    let badged = render(&quiet_settings(), &assets_badge);

    // Default badge: bottom-right, 120px square inset 30px, so the disk is
    // centered at (1190, 570) with radius 60 (plus a few px of border).
    let (cx, cy, outer) = (1190.0f64, 570.0f64, 64.0f64);
    let mut changed_inside = false;
    for y in 0..720u32 {
        for x in 0..1280u32 {
            let d = ((f64::from(x) + 0.5 - cx).powi(2) + (f64::from(y) + 0.5 - cy).powi(2)).sqrt();
            if d > outer {
                assert_eq!(
                    badged.pixel(x, y),
                    base.pixel(x, y),
                    "badge leaked to ({x},{y})"
                );
            } else if d < 50.0 && badged.pixel(x, y) != base.pixel(x, y) {
                changed_inside = true;
            }
        }
    }
    assert!(changed_inside, "badge drew nothing inside its disk");

    // Well inside the circle the author image shows through unblended.
    assert_eq!(badged.pixel(1190, 570), [0, 255, 0, 255]);
}

#[test]
fn renders_are_deterministic_across_calls() {
    let assets = assets_with_background([44, 99, 177, 255]);
    let settings = ThumbnailSettings {
        overlay_enabled: true,
        overlay_opacity: 25,
        ..quiet_settings()
    };
    assert_eq!(render(&settings, &assets), render(&settings, &assets));
}

#[test]
fn frame_encodes_to_png_with_matching_dimensions() {
    let frame = render(&quiet_settings(), &AssetSlots::new());
    let bytes = encode_png(&frame).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), 1280);
    assert_eq!(decoded.height(), 720);
}

#[test]
fn settings_json_drives_the_render() {
    // A partial camelCase document, as the editor would produce.
    let json = r##"{
        "overlayEnabled": true,
        "overlayColor": "#0000ff",
        "overlayOpacity": 100,
        "title": ""
    }"##;
    let settings: ThumbnailSettings = serde_json::from_str(json).unwrap();
    let frame = render(&settings, &assets_with_background([255, 0, 0, 255]));
    assert_eq!(frame.pixel(640, 360), [0, 0, 255, 255]);
}
