use crate::foundation::core::{Point, Rect};

/// Cover-fit placement: scale a `src_w x src_h` image uniformly so it fully
/// covers `target`, preserving aspect ratio, centered; overflow hangs outside
/// the returned rect's intersection with `target` and is clipped by the
/// caller. Wider-than-target sources match the target height and crop
/// left/right; taller ones match the width and crop top/bottom. For a square
/// target this reduces to the landscape/portrait rule (`aspect > 1`).
pub fn cover_fit(src_w: u32, src_h: u32, target: Rect) -> Rect {
    let img_ratio = f64::from(src_w) / f64::from(src_h);
    let target_ratio = target.width() / target.height();

    let (draw_w, draw_h) = if img_ratio > target_ratio {
        (target.height() * img_ratio, target.height())
    } else {
        (target.width(), target.width() / img_ratio)
    };

    let x0 = target.x0 + (target.width() - draw_w) / 2.0;
    let y0 = target.y0 + (target.height() - draw_h) / 2.0;
    Rect::new(x0, y0, x0 + draw_w, y0 + draw_h)
}

/// A circle used as a clip region or a border ring path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Anti-aliased disk coverage of the pixel centered at `p` (0.5px ramp).
    pub fn coverage(&self, p: Point) -> f32 {
        let d = self.center.distance(p);
        ((self.radius + 0.5 - d).clamp(0.0, 1.0)) as f32
    }

    /// Anti-aliased coverage of a stroked ring of width `width` along this
    /// circle's boundary.
    pub fn ring_coverage(&self, width: f64, p: Point) -> f32 {
        let d = (self.center.distance(p) - self.radius).abs();
        ((width / 2.0 + 0.5 - d).clamp(0.0, 1.0)) as f32
    }

    /// Conservative integer bounding box, clamped to `width x height`.
    pub fn bounds(&self, margin: f64, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let r = self.radius + margin;
        let x0 = (self.center.x - r).floor().max(0.0) as u32;
        let y0 = (self.center.y - r).floor().max(0.0) as u32;
        let x1 = ((self.center.x + r).ceil().max(0.0) as u32).min(width);
        let y1 = ((self.center.y + r).ceil().max(0.0) as u32).min(height);
        (x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn wide_image_covers_by_height_and_crops_sides() {
        // 2:1 image into a 16:9 canvas.
        let dest = cover_fit(200, 100, Rect::new(0.0, 0.0, 1280.0, 720.0));
        assert_close(dest.height(), 720.0);
        assert_close(dest.width(), 1440.0);
        assert_close(dest.x0, -80.0);
        assert_close(dest.y0, 0.0);
    }

    #[test]
    fn tall_image_covers_by_width_and_crops_top_bottom() {
        let dest = cover_fit(100, 200, Rect::new(0.0, 0.0, 1280.0, 720.0));
        assert_close(dest.width(), 1280.0);
        assert_close(dest.height(), 2560.0);
        assert_close(dest.y0, (720.0 - 2560.0) / 2.0);
    }

    #[test]
    fn cover_fit_preserves_source_aspect_ratio() {
        for (w, h) in [(1920u32, 1080u32), (640, 640), (300, 900), (97, 31)] {
            let dest = cover_fit(w, h, Rect::new(0.0, 0.0, 1280.0, 720.0));
            let src_ratio = f64::from(w) / f64::from(h);
            assert!((dest.width() / dest.height() - src_ratio).abs() < 1e-9);
        }
    }

    #[test]
    fn cover_fit_fully_covers_target() {
        for (w, h) in [(1920u32, 1080u32), (640, 640), (300, 900)] {
            let target = Rect::new(30.0, 40.0, 150.0, 160.0);
            let dest = cover_fit(w, h, target);
            assert!(dest.x0 <= target.x0 + 1e-9);
            assert!(dest.y0 <= target.y0 + 1e-9);
            assert!(dest.x1 >= target.x1 - 1e-9);
            assert!(dest.y1 >= target.y1 - 1e-9);
        }
    }

    #[test]
    fn square_target_uses_landscape_portrait_rule() {
        let square = Rect::new(0.0, 0.0, 120.0, 120.0);

        // Landscape: match target height, overflow horizontally.
        let dest = cover_fit(240, 120, square);
        assert_close(dest.height(), 120.0);
        assert_close(dest.width(), 240.0);

        // Portrait: match target width, overflow vertically.
        let dest = cover_fit(120, 240, square);
        assert_close(dest.width(), 120.0);
        assert_close(dest.height(), 240.0);

        // Exactly square fills exactly.
        let dest = cover_fit(64, 64, square);
        assert_eq!(dest, square);
    }

    #[test]
    fn disk_coverage_is_full_inside_zero_outside() {
        let c = Circle::new(Point::new(50.0, 50.0), 10.0);
        assert_eq!(c.coverage(Point::new(50.0, 50.0)), 1.0);
        assert_eq!(c.coverage(Point::new(55.0, 50.0)), 1.0);
        assert_eq!(c.coverage(Point::new(70.0, 50.0)), 0.0);
        let edge = c.coverage(Point::new(60.0, 50.0));
        assert!(edge > 0.0 && edge <= 1.0);
    }

    #[test]
    fn ring_coverage_peaks_on_the_boundary() {
        let c = Circle::new(Point::new(0.0, 0.0), 20.0);
        assert_eq!(c.ring_coverage(4.0, Point::new(20.0, 0.0)), 1.0);
        assert_eq!(c.ring_coverage(4.0, Point::new(0.0, 0.0)), 0.0);
        assert_eq!(c.ring_coverage(4.0, Point::new(30.0, 0.0)), 0.0);
    }

    #[test]
    fn bounds_clamp_to_surface() {
        let c = Circle::new(Point::new(5.0, 5.0), 10.0);
        let (x0, y0, x1, y1) = c.bounds(2.0, 64, 64);
        assert_eq!((x0, y0), (0, 0));
        assert!(x1 <= 64 && y1 <= 64);
    }
}
