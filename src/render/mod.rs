//! The compositing pipeline: fixed passes over a premultiplied RGBA surface.

pub mod background;
pub mod badge;
pub mod blit;
pub mod blur;
pub mod geom;
pub mod overlay;
pub mod surface;
pub mod title;

use crate::assets::fonts::FontLibrary;
use crate::assets::store::AssetSlots;
use crate::foundation::core::Canvas;
use crate::foundation::error::ThumbResult;
use crate::render::surface::Surface;
use crate::settings::model::ThumbnailSettings;

/// A finished frame of RGBA8 pixels, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    /// True when the pixel data is premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

/// Render one thumbnail. Pure with respect to its inputs: the same
/// settings, assets, fonts, and canvas always produce the same pixels.
///
/// Pass order is fixed: background, then the color overlay, then the
/// title block, then the author badge. Each pass draws over the previous
/// ones on a single surface.
#[tracing::instrument(skip_all, fields(width = canvas.width, height = canvas.height))]
pub fn render_thumbnail(
    settings: &ThumbnailSettings,
    assets: &AssetSlots,
    fonts: &FontLibrary,
    canvas: Canvas,
) -> ThumbResult<FrameRGBA> {
    settings.validate()?;

    let mut surface = Surface::new(canvas);

    background::draw(&mut surface, assets.background(), fonts);
    overlay::draw(&mut surface, settings);
    title::draw(&mut surface, settings, fonts);
    if let Some(author) = assets.author() {
        badge::draw(&mut surface, settings, author);
    }

    tracing::debug!("render complete");
    Ok(surface.into_frame())
}
