use ab_glyph::{Font, FontArc, Glyph, GlyphId, PxScale, ScaleFont};

use crate::assets::fonts::FontLibrary;
use crate::foundation::core::Rgba8Premul;
use crate::render::blur::blur_mask;
use crate::render::surface::{scale_coverage, Surface};
use crate::settings::model::{ThumbnailSettings, TitlePosition};

/// Line advance as a multiple of the glyph size.
const LINE_HEIGHT_FACTOR: f64 = 1.1;

/// Canvas drop-shadow parameters: black at 80%, blur 20, offset (5,5).
/// A canvas `shadowBlur` of `b` is a gaussian with sigma `b / 2`.
const SHADOW_BLUR: u32 = 20;
const SHADOW_SIGMA: f32 = 10.0;
const SHADOW_OFFSET: (i32, i32) = (5, 5);
const SHADOW_COLOR: Rgba8Premul = Rgba8Premul {
    r: 0,
    g: 0,
    b: 0,
    a: 204,
};

/// Vertical anchor of the title block for a given canvas height.
pub fn anchor_y(position: TitlePosition, canvas_height: u32) -> f64 {
    let h = f64::from(canvas_height);
    match position {
        TitlePosition::Top => h * 0.2,
        TitlePosition::Center => h / 2.0,
        TitlePosition::Bottom => h * 0.8,
    }
}

/// Vertical centers of each line, with the whole block centered on `anchor`.
///
/// First line center = anchor − total/2 + lh/2; each next line advances by
/// one line height. The union of centers is symmetric around `anchor` for
/// any line count.
pub fn line_centers(line_count: usize, title_size: u32, anchor: f64) -> Vec<f64> {
    let line_height = f64::from(title_size) * LINE_HEIGHT_FACTOR;
    let total_height = line_count as f64 * line_height;
    let first = anchor - total_height / 2.0 + line_height / 2.0;
    (0..line_count)
        .map(|i| first + i as f64 * line_height)
        .collect()
}

/// Render the title block: per line, optional shadowed stroke, then fill.
pub fn draw(surface: &mut Surface, settings: &ThumbnailSettings, fonts: &FontLibrary) {
    if settings.title.is_empty() {
        return;
    }
    let Some(font) = fonts.resolve(&settings.title_font) else {
        tracing::warn!(
            family = %settings.title_font,
            "no font available for title; skipping title pass"
        );
        return;
    };

    let anchor = anchor_y(settings.title_position, surface.height());
    let center_x = f64::from(surface.width()) / 2.0;
    let size = settings.title_size as f32;

    let lines: Vec<&str> = settings.title.split('\n').collect();
    let centers = line_centers(lines.len(), settings.title_size, anchor);

    for (line, center_y) in lines.into_iter().zip(centers) {
        let Some(fill) = rasterize_line(font, line, size, center_x as f32, center_y as f32)
        else {
            continue;
        };

        let stroke = if settings.stroke_width > 0 {
            Some(dilate_disk(&fill, f64::from(settings.stroke_width) / 2.0))
        } else {
            None
        };

        // The shadow state is only ever active for the stroke; with no
        // stroke there is no shadow either.
        if let Some(stroke) = &stroke {
            if settings.title_shadow {
                if let Some(shadow) = blur_coverage(stroke, SHADOW_BLUR, SHADOW_SIGMA) {
                    composite_mask(surface, &shadow, SHADOW_COLOR, SHADOW_OFFSET);
                }
            }
            composite_mask(
                surface,
                stroke,
                settings.stroke_color.to_premul(1.0),
                (0, 0),
            );
        }

        composite_mask(surface, &fill, settings.title_color.to_premul(1.0), (0, 0));
    }
}

/// Fill a single centered line of text with no stroke or shadow. Used for
/// the background placeholder label.
pub(crate) fn fill_line(
    surface: &mut Surface,
    font: &FontArc,
    text: &str,
    size: f32,
    color: Rgba8Premul,
    center_x: f32,
    center_y: f32,
) {
    if let Some(mask) = rasterize_line(font, text, size, center_x, center_y) {
        composite_mask(surface, &mask, color, (0, 0));
    }
}

/// A glyph coverage mask anchored at an integer canvas position.
struct CoverageMask {
    left: i32,
    top: i32,
    width: usize,
    height: usize,
    cov: Vec<u8>,
}

impl CoverageMask {
    fn get(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return 0;
        }
        self.cov[y as usize * self.width + x as usize]
    }
}

/// Lay out and rasterize one line, horizontally centered on `center_x` with
/// a middle baseline on `center_y` (the em box's vertical midpoint sits on
/// the line center). Returns `None` when nothing inks (empty or
/// whitespace-only line).
fn rasterize_line(
    font: &FontArc,
    text: &str,
    size: f32,
    center_x: f32,
    center_y: f32,
) -> Option<CoverageMask> {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);

    // First pass: advance-based layout relative to a zero caret.
    let mut glyphs: Vec<Glyph> = Vec::new();
    let mut caret = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        if ch.is_control() {
            continue;
        }
        let id = scaled.glyph_id(ch);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, ab_glyph::point(caret, 0.0)));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }
    if glyphs.is_empty() {
        return None;
    }

    // Middle baseline: the baseline sits half the em extent below center.
    let line_width = caret;
    let origin_x = center_x - line_width / 2.0;
    let baseline_y = center_y + (scaled.ascent() + scaled.descent()) / 2.0;

    let outlined: Vec<_> = glyphs
        .into_iter()
        .filter_map(|mut g| {
            g.position = ab_glyph::point(g.position.x + origin_x, baseline_y);
            font.outline_glyph(g)
        })
        .collect();
    if outlined.is_empty() {
        return None;
    }

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for og in &outlined {
        let b = og.px_bounds();
        min_x = min_x.min(b.min.x);
        min_y = min_y.min(b.min.y);
        max_x = max_x.max(b.max.x);
        max_y = max_y.max(b.max.y);
    }

    let left = min_x.floor() as i32;
    let top = min_y.floor() as i32;
    let width = (max_x.ceil() as i32 - left).max(1) as usize;
    let height = (max_y.ceil() as i32 - top).max(1) as usize;
    let mut cov = vec![0u8; width * height];

    for og in &outlined {
        let b = og.px_bounds();
        let gx0 = b.min.x.floor() as i32 - left;
        let gy0 = b.min.y.floor() as i32 - top;
        og.draw(|x, y, c| {
            let px = gx0 + x as i32;
            let py = gy0 + y as i32;
            if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                return;
            }
            let idx = py as usize * width + px as usize;
            let v = (c * 255.0).round().clamp(0.0, 255.0) as u8;
            cov[idx] = cov[idx].max(v);
        });
    }

    Some(CoverageMask {
        left,
        top,
        width,
        height,
        cov,
    })
}

/// Grow a coverage mask by a disk of `radius` pixels (maximum filter with an
/// anti-aliased rim). This is the outline envelope a round-joined stroke of
/// width `2 * radius` adds around the filled glyphs.
fn dilate_disk(mask: &CoverageMask, radius: f64) -> CoverageMask {
    if radius <= 0.0 {
        return CoverageMask {
            left: mask.left,
            top: mask.top,
            width: mask.width,
            height: mask.height,
            cov: mask.cov.clone(),
        };
    }

    let grow = radius.ceil() as i32 + 1;
    let width = mask.width + 2 * grow as usize;
    let height = mask.height + 2 * grow as usize;
    let mut cov = vec![0u8; width * height];

    let mut offsets: Vec<(i32, i32, f32)> = Vec::new();
    for dy in -grow..=grow {
        for dx in -grow..=grow {
            let dist = f64::from(dx * dx + dy * dy).sqrt();
            let w = (radius + 0.5 - dist).clamp(0.0, 1.0) as f32;
            if w > 0.0 {
                offsets.push((dx, dy, w));
            }
        }
    }

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let sx = x - grow;
            let sy = y - grow;
            let mut best = 0u8;
            for &(dx, dy, w) in &offsets {
                let v = mask.get(sx + dx, sy + dy);
                if v == 0 {
                    continue;
                }
                let v = (f32::from(v) * w).round() as u8;
                best = best.max(v);
                if best == 255 {
                    break;
                }
            }
            cov[y as usize * width + x as usize] = best;
        }
    }

    CoverageMask {
        left: mask.left - grow,
        top: mask.top - grow,
        width,
        height,
        cov,
    }
}

/// Gaussian-blur a coverage mask, growing its bounds by the kernel radius.
fn blur_coverage(mask: &CoverageMask, radius: u32, sigma: f32) -> Option<CoverageMask> {
    let grow = radius as usize;
    let width = mask.width + 2 * grow;
    let height = mask.height + 2 * grow;
    let mut padded = vec![0u8; width * height];
    for y in 0..mask.height {
        let src = &mask.cov[y * mask.width..(y + 1) * mask.width];
        let start = (y + grow) * width + grow;
        padded[start..start + mask.width].copy_from_slice(src);
    }

    let blurred = match blur_mask(&padded, width as u32, height as u32, radius, sigma) {
        Ok(b) => b,
        Err(err) => {
            tracing::warn!(%err, "shadow blur failed; dropping shadow");
            return None;
        }
    };

    Some(CoverageMask {
        left: mask.left - grow as i32,
        top: mask.top - grow as i32,
        width,
        height,
        cov: blurred,
    })
}

/// Source-over a colored mask onto the surface at an optional pixel offset.
fn composite_mask(
    surface: &mut Surface,
    mask: &CoverageMask,
    color: Rgba8Premul,
    offset: (i32, i32),
) {
    for y in 0..mask.height {
        let py = mask.top + y as i32 + offset.1;
        if py < 0 || py >= surface.height() as i32 {
            continue;
        }
        for x in 0..mask.width {
            let cov = mask.cov[y * mask.width + x];
            if cov == 0 {
                continue;
            }
            let px = mask.left + x as i32 + offset.0;
            if px < 0 || px >= surface.width() as i32 {
                continue;
            }
            let src = scale_coverage(color, f32::from(cov) / 255.0);
            surface.over_pixel(px as u32, py as u32, src);
        }
    }
}
