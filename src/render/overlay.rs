use crate::render::surface::Surface;
use crate::settings::model::ThumbnailSettings;

/// Blend the full-canvas color overlay. Disabled overlays and zero opacity
/// leave the surface pixel-identical; opacity is a whole percentage.
pub fn draw(surface: &mut Surface, settings: &ThumbnailSettings) {
    if !settings.overlay_enabled || settings.overlay_opacity == 0 {
        return;
    }
    let alpha = f32::from(settings.overlay_opacity.min(100)) / 100.0;
    surface.blend_fill(settings.overlay_color.to_premul(alpha));
}
