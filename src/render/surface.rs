use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::render::FrameRGBA;

/// The drawing surface: a premultiplied RGBA8 buffer exclusively owned by
/// one render call and fully overwritten by it.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0u8; (canvas.width as usize) * (canvas.height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba8Premul {
        let idx = ((y * self.width + x) * 4) as usize;
        Rgba8Premul {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
            a: self.data[idx + 3],
        }
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, px: Rgba8Premul) {
        let idx = ((y * self.width + x) * 4) as usize;
        self.data[idx] = px.r;
        self.data[idx + 1] = px.g;
        self.data[idx + 2] = px.b;
        self.data[idx + 3] = px.a;
    }

    /// Source-over blend one pixel onto the surface.
    pub fn over_pixel(&mut self, x: u32, y: u32, src: Rgba8Premul) {
        if x >= self.width || y >= self.height {
            return;
        }
        let blended = over(self.pixel(x, y), src);
        self.put_pixel(x, y, blended);
    }

    /// Source-over blend a single color across the whole surface.
    pub fn blend_fill(&mut self, src: Rgba8Premul) {
        if src.a == 0 {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let dst = Rgba8Premul {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            };
            let out = over(dst, src);
            px[0] = out.r;
            px[1] = out.g;
            px[2] = out.b;
            px[3] = out.a;
        }
    }

    pub fn into_frame(self) -> FrameRGBA {
        FrameRGBA {
            width: self.width,
            height: self.height,
            data: self.data,
            premultiplied: true,
        }
    }
}

/// Premultiplied source-over: `out = src + dst * (1 - src.a)`.
pub fn over(dst: Rgba8Premul, src: Rgba8Premul) -> Rgba8Premul {
    if src.a == 0 {
        return dst;
    }
    if src.a == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src.a);
    Rgba8Premul {
        r: src.r.saturating_add(mul_div255(u16::from(dst.r), inv)),
        g: src.g.saturating_add(mul_div255(u16::from(dst.g), inv)),
        b: src.b.saturating_add(mul_div255(u16::from(dst.b), inv)),
        a: src.a.saturating_add(mul_div255(u16::from(dst.a), inv)),
    }
}

/// Scale a premultiplied pixel by a coverage value in `[0, 1]`.
pub fn scale_coverage(src: Rgba8Premul, coverage: f32) -> Rgba8Premul {
    if coverage >= 1.0 {
        return src;
    }
    if coverage <= 0.0 {
        return Rgba8Premul::transparent();
    }
    let scale = |c: u8| (f32::from(c) * coverage).round().clamp(0.0, 255.0) as u8;
    Rgba8Premul {
        r: scale(src.r),
        g: scale(src.g),
        b: scale(src.b),
        a: scale(src.a),
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn px(r: u8, g: u8, b: u8, a: u8) -> Rgba8Premul {
        Rgba8Premul { r, g, b, a }
    }

    #[test]
    fn over_src_alpha_0_is_noop() {
        let dst = px(10, 20, 30, 40);
        assert_eq!(over(dst, px(255, 255, 255, 0)), dst);
    }

    #[test]
    fn over_src_opaque_replaces_dst() {
        let src = px(255, 0, 0, 255);
        assert_eq!(over(px(0, 0, 0, 255), src), src);
    }

    #[test]
    fn over_dst_transparent_returns_src() {
        let src = px(100, 110, 120, 200);
        assert_eq!(over(px(0, 0, 0, 0), src), src);
    }

    #[test]
    fn over_half_alpha_mixes() {
        let out = over(px(0, 0, 0, 255), px(128, 0, 0, 128));
        assert_eq!(out.a, 255);
        assert_eq!(out.r, 128);
    }

    #[test]
    fn blend_fill_hits_every_pixel() {
        let mut surface = Surface::new(crate::foundation::core::Canvas {
            width: 3,
            height: 2,
        });
        surface.blend_fill(px(0, 255, 0, 255));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(surface.pixel(x, y), px(0, 255, 0, 255));
            }
        }
    }

    #[test]
    fn blend_fill_zero_alpha_is_pixel_identical_noop() {
        let canvas = crate::foundation::core::Canvas {
            width: 4,
            height: 4,
        };
        let mut a = Surface::new(canvas);
        a.put_pixel(1, 1, px(9, 9, 9, 255));
        let b = a.clone();

        a.blend_fill(px(0, 0, 0, 0));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(a.pixel(x, y), b.pixel(x, y));
            }
        }
    }

    #[test]
    fn scale_coverage_endpoints() {
        let src = px(100, 50, 25, 200);
        assert_eq!(scale_coverage(src, 1.0), src);
        assert_eq!(scale_coverage(src, 0.0), Rgba8Premul::transparent());
        assert_eq!(scale_coverage(src, 0.5).a, 100);
    }
}
