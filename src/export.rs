//! PNG export of rendered frames.

use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;
use image::{ImageFormat, RgbaImage};

use crate::foundation::error::{ThumbError, ThumbResult};
use crate::render::FrameRGBA;

/// Default output filename, matching what a browser download would use.
pub const DEFAULT_FILENAME: &str = "thumbnail.png";

/// Encode a frame as PNG bytes. Premultiplied frames are converted back to
/// straight alpha first, since PNG stores non-premultiplied samples.
pub fn encode_png(frame: &FrameRGBA) -> ThumbResult<Vec<u8>> {
    let data = if frame.premultiplied {
        unpremultiply(&frame.data)
    } else {
        frame.data.clone()
    };

    let img = RgbaImage::from_raw(frame.width, frame.height, data)
        .ok_or_else(|| ThumbError::render("frame buffer does not match its dimensions"))?;

    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .context("encoding PNG")?;
    Ok(bytes.into_inner())
}

/// Encode and write a frame to `path`.
pub fn save_png(frame: &FrameRGBA, path: &Path) -> ThumbResult<()> {
    let bytes = encode_png(frame)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote thumbnail");
    Ok(())
}

fn unpremultiply(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for px in data.chunks_exact(4) {
        let a = px[3];
        if a == 0 || a == 255 {
            out.extend_from_slice(px);
            continue;
        }
        let un = |c: u8| {
            ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
        };
        out.extend_from_slice(&[un(px[0]), un(px[1]), un(px[2]), a]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
        FrameRGBA {
            width,
            height,
            data: px.repeat((width * height) as usize),
            premultiplied: true,
        }
    }

    #[test]
    fn encode_produces_a_png_signature() {
        let bytes = encode_png(&frame(4, 4, [10, 20, 30, 255])).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn encode_round_trips_through_decode() {
        let bytes = encode_png(&frame(3, 2, [200, 100, 50, 255])).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(1, 1).0, [200, 100, 50, 255]);
    }

    #[test]
    fn premultiplied_pixels_are_straightened() {
        // Premul (100, 50, 25, 128) is straight (199, 100, 50, 128).
        let bytes = encode_png(&frame(1, 1, [100, 50, 25, 128])).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        let [r, g, b, a] = img.get_pixel(0, 0).0;
        assert_eq!(a, 128);
        assert!((i16::from(r) - 199).abs() <= 1);
        assert!((i16::from(g) - 100).abs() <= 1);
        assert!((i16::from(b) - 50).abs() <= 1);
    }

    #[test]
    fn mismatched_buffer_is_rejected() {
        let bad = FrameRGBA {
            width: 4,
            height: 4,
            data: vec![0u8; 7],
            premultiplied: false,
        };
        assert!(encode_png(&bad).is_err());
    }
}
