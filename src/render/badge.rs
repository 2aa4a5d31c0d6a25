use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Color, Point, Rect, Rgba8Premul};
use crate::render::blit::blit_cover;
use crate::render::geom::Circle;
use crate::render::surface::{scale_coverage, Surface};
use crate::settings::model::{BadgePosition, ThumbnailSettings};

/// Distance from the badge's square bounds to the canvas edges.
const EDGE_PADDING: f64 = 30.0;

/// Border: an inner white ring on the clip circle, and a thinner dark ring
/// just outside it to separate the badge from light backgrounds.
const INNER_RING_WIDTH: f64 = 4.0;
const OUTER_RING_WIDTH: f64 = 2.0;
const OUTER_RING_OFFSET: f64 = 2.0;
const OUTER_RING_COLOR: Color = Color::BLACK;
const OUTER_RING_ALPHA: f32 = 0.3;

/// Square placement of the badge in its corner.
pub fn badge_rect(
    position: BadgePosition,
    size: u32,
    canvas_width: u32,
    canvas_height: u32,
) -> Rect {
    let size = f64::from(size);
    let w = f64::from(canvas_width);
    let h = f64::from(canvas_height);
    let (x0, y0) = match position {
        BadgePosition::TopLeft => (EDGE_PADDING, EDGE_PADDING),
        BadgePosition::TopRight => (w - EDGE_PADDING - size, EDGE_PADDING),
        BadgePosition::BottomLeft => (EDGE_PADDING, h - EDGE_PADDING - size),
        BadgePosition::BottomRight => (w - EDGE_PADDING - size, h - EDGE_PADDING - size),
    };
    Rect::new(x0, y0, x0 + size, y0 + size)
}

/// Draw the circular author badge: the image cover-fitted into the corner
/// square, clipped to its inscribed circle, with an optional two-ring border.
pub fn draw(surface: &mut Surface, settings: &ThumbnailSettings, author: &PreparedImage) {
    let target = badge_rect(
        settings.author_position,
        settings.author_size,
        surface.width(),
        surface.height(),
    );
    let clip = Circle::new(target.center(), target.width() / 2.0);

    blit_cover(surface, author, target, Some(clip));

    if settings.author_border {
        stroke_ring(surface, clip, INNER_RING_WIDTH, Color::WHITE.to_premul(1.0));
        let outer = Circle::new(clip.center, clip.radius + OUTER_RING_OFFSET);
        stroke_ring(
            surface,
            outer,
            OUTER_RING_WIDTH,
            OUTER_RING_COLOR.to_premul(OUTER_RING_ALPHA),
        );
    }
}

fn stroke_ring(surface: &mut Surface, circle: Circle, width: f64, color: Rgba8Premul) {
    let margin = width / 2.0 + 1.0;
    let (x0, y0, x1, y1) = circle.bounds(margin, surface.width(), surface.height());
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let coverage = circle.ring_coverage(width, p);
            if coverage > 0.0 {
                surface.over_pixel(x, y, scale_coverage(color, coverage));
            }
        }
    }
}
