use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::ThumbResult;

/// Decoded bitmap in premultiplied RGBA8 form with known pixel dimensions.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Intrinsic aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba8Premul {
        let idx = ((y * self.width + x) * 4) as usize;
        let px = &self.rgba8_premul[idx..idx + 4];
        Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }

    /// Bilinear sample at pixel-space coordinates, clamped to the edges.
    pub fn sample_bilinear(&self, x: f64, y: f64) -> Rgba8Premul {
        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        let x = (x - 0.5).clamp(0.0, max_x);
        let y = (y - 0.5).clamp(0.0, max_y);

        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;

        let x0 = x0 as u32;
        let y0 = y0 as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let lerp = |a: u8, b: u8, t: f64| f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        let mix = |p00: u8, p10: u8, p01: u8, p11: u8| {
            let top = lerp(p00, p10, fx);
            let bottom = lerp(p01, p11, fx);
            (top + (bottom - top) * fy).round().clamp(0.0, 255.0) as u8
        };

        let (p00, p10, p01, p11) = (
            self.pixel(x0, y0),
            self.pixel(x1, y0),
            self.pixel(x0, y1),
            self.pixel(x1, y1),
        );

        Rgba8Premul {
            r: mix(p00.r, p10.r, p01.r, p11.r),
            g: mix(p00.g, p10.g, p01.g, p11.g),
            b: mix(p00.b, p10.b, p01.b, p11.b),
            a: mix(p00.a, p10.a, p01.a, p11.a),
        }
    }
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
///
/// This is the explicit form of the upload path: the caller decodes, observes
/// the result, and only then assigns the bitmap into an asset slot. A failed
/// decode leaves whatever was in the slot untouched.
pub fn decode_image(bytes: &[u8]) -> ThumbResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
