use crate::assets::decode::PreparedImage;
use crate::assets::fonts::FontLibrary;
use crate::foundation::core::{Color, Rgba8Premul};
use crate::render::blit::blit_cover;
use crate::render::surface::Surface;
use crate::render::title::fill_line;

/// Dark diagonal gradient shown while no background image is loaded.
const GRADIENT_FROM: Color = Color::rgb(0x1a, 0x1a, 0x2e);
const GRADIENT_TO: Color = Color::rgb(0x16, 0x21, 0x3e);

const PLACEHOLDER_TEXT: &str = "Upload a background image";
const PLACEHOLDER_SIZE: f32 = 30.0;
const PLACEHOLDER_ALPHA: f32 = 0.2;
const PLACEHOLDER_Y_OFFSET: f64 = 100.0;

/// Paint the background pass: the image cover-fitted over the full canvas,
/// or the placeholder gradient with a hint label when no image is loaded.
pub fn draw(surface: &mut Surface, background: Option<&PreparedImage>, fonts: &FontLibrary) {
    match background {
        Some(image) => {
            let full = crate::foundation::core::Canvas {
                width: surface.width(),
                height: surface.height(),
            }
            .rect();
            blit_cover(surface, image, full, None);
        }
        None => {
            draw_gradient(surface);
            draw_placeholder_label(surface, fonts);
        }
    }
}

/// Linear gradient from the top-left corner to the bottom-right corner.
/// The gradient parameter is the projection of the pixel onto the corner
/// diagonal, so isolines run perpendicular to it.
fn draw_gradient(surface: &mut Surface) {
    let w = f64::from(surface.width());
    let h = f64::from(surface.height());
    let denom = w * w + h * h;

    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let t = (f64::from(x) * w + f64::from(y) * h) / denom;
            surface.put_pixel(x, y, lerp_color(GRADIENT_FROM, GRADIENT_TO, t));
        }
    }
}

fn lerp_color(from: Color, to: Color, t: f64) -> Rgba8Premul {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    Rgba8Premul {
        r: mix(from.r, to.r),
        g: mix(from.g, to.g),
        b: mix(from.b, to.b),
        a: 255,
    }
}

fn draw_placeholder_label(surface: &mut Surface, fonts: &FontLibrary) {
    let Some(font) = fonts.resolve("sans-serif") else {
        tracing::warn!("no font available for placeholder label; skipping");
        return;
    };
    let center_x = f64::from(surface.width()) / 2.0;
    let center_y = f64::from(surface.height()) / 2.0 + PLACEHOLDER_Y_OFFSET;
    let color = Color::WHITE.to_premul(PLACEHOLDER_ALPHA);
    fill_line(
        surface,
        font,
        PLACEHOLDER_TEXT,
        PLACEHOLDER_SIZE,
        color,
        center_x as f32,
        center_y as f32,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::Canvas;

    #[test]
    fn gradient_covers_every_pixel_opaquely() {
        let mut surface = Surface::new(Canvas {
            width: 16,
            height: 9,
        });
        draw_gradient(&mut surface);
        for y in 0..9 {
            for x in 0..16 {
                assert_eq!(surface.pixel(x, y).a, 255);
            }
        }
    }

    #[test]
    fn gradient_endpoints_hit_the_corner_colors() {
        let mut surface = Surface::new(Canvas {
            width: 64,
            height: 36,
        });
        draw_gradient(&mut surface);

        let top_left = surface.pixel(0, 0);
        assert_eq!((top_left.r, top_left.g, top_left.b), (0x1a, 0x1a, 0x2e));

        // The last pixel center projects almost, not exactly, to t = 1.
        let bottom_right = surface.pixel(63, 35);
        assert!(bottom_right.b >= 0x3c);
        assert!(bottom_right.g >= 0x20);
    }

    #[test]
    fn gradient_is_monotone_along_the_diagonal() {
        let mut surface = Surface::new(Canvas {
            width: 32,
            height: 32,
        });
        draw_gradient(&mut surface);
        let mut prev = surface.pixel(0, 0).b;
        for i in 1..32 {
            let b = surface.pixel(i, i).b;
            assert!(b >= prev);
            prev = b;
        }
    }

    #[test]
    fn missing_fonts_still_paint_the_gradient() {
        let mut surface = Surface::new(Canvas {
            width: 8,
            height: 8,
        });
        draw(&mut surface, None, &FontLibrary::new());
        assert_eq!(surface.pixel(4, 4).a, 255);
    }
}
