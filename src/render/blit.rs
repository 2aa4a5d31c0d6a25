use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Point, Rect};
use crate::render::geom::{cover_fit, Circle};
use crate::render::surface::{scale_coverage, Surface};

/// Draw `image` cover-fitted into `target`, optionally clipped to a circle.
///
/// The clip is an argument rather than surface state, so it cannot leak into
/// later passes. Sampling is bilinear; every drawn pixel originates from the
/// source image.
pub fn blit_cover(
    surface: &mut Surface,
    image: &PreparedImage,
    target: Rect,
    clip: Option<Circle>,
) {
    let dest = cover_fit(image.width, image.height, target);

    let x0 = target.x0.floor().max(0.0) as u32;
    let y0 = target.y0.floor().max(0.0) as u32;
    let x1 = (target.x1.ceil().max(0.0) as u32).min(surface.width());
    let y1 = (target.y1.ceil().max(0.0) as u32).min(surface.height());

    let scale_x = f64::from(image.width) / dest.width();
    let scale_y = f64::from(image.height) / dest.height();

    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let coverage = match clip {
                Some(circle) => circle.coverage(center),
                None => 1.0,
            };
            if coverage <= 0.0 {
                continue;
            }

            let u = (center.x - dest.x0) * scale_x;
            let v = (center.y - dest.y0) * scale_y;
            let px = image.sample_bilinear(u, v);
            surface.over_pixel(x, y, scale_coverage(px, coverage));
        }
    }
}
