use crate::foundation::core::Color;
use crate::foundation::error::{ThumbError, ThumbResult};

/// Vertical anchor of the title block.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TitlePosition {
    /// Anchor at 20% of canvas height.
    Top,
    /// Anchor at 50% of canvas height.
    #[default]
    Center,
    /// Anchor at 80% of canvas height.
    Bottom,
}

/// Corner the author badge is pinned to.
///
/// The original picker falls back to the bottom-right corner for anything it
/// does not recognize, which is this enum's default.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BadgePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

/// The complete, always-valid settings record driving a render.
///
/// This is a pure data model: it is created with defaults, mutated through
/// [`EditCommand`](crate::settings::command::EditCommand) reduction or preset
/// application, and read by the render pipeline. It is never stored globally;
/// callers own it and pass it by reference into
/// [`render_thumbnail`](crate::render::render_thumbnail).
///
/// Field names serialize in the camelCase form of the original settings
/// record, and every field has a default, so partial JSON deserializes into a
/// fully-populated record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThumbnailSettings {
    /// Title text; newline-separated lines. Empty skips the title pass.
    pub title: String,
    /// Font family list, CSS style (e.g. `"'Bebas Neue', sans-serif"`).
    pub title_font: String,
    /// Title glyph size in pixels.
    pub title_size: u32,
    /// Title fill color.
    pub title_color: Color,
    /// Title outline color.
    pub stroke_color: Color,
    /// Title outline width in pixels; 0 disables the stroke entirely.
    pub stroke_width: u32,
    /// Vertical anchor of the title block.
    pub title_position: TitlePosition,
    /// Drop shadow behind the title stroke.
    pub title_shadow: bool,
    /// Corner for the author badge.
    pub author_position: BadgePosition,
    /// Author badge diameter in pixels.
    pub author_size: u32,
    /// White border ring around the author badge.
    pub author_border: bool,
    /// Whether the color overlay pass runs at all.
    pub overlay_enabled: bool,
    /// Overlay fill color.
    pub overlay_color: Color,
    /// Overlay opacity as an integer percentage, 0..=100.
    pub overlay_opacity: u8,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            title: "YOUR TITLE HERE".to_string(),
            title_font: "'Bebas Neue', sans-serif".to_string(),
            title_size: 80,
            title_color: Color::WHITE,
            stroke_color: Color::BLACK,
            stroke_width: 4,
            title_position: TitlePosition::Center,
            title_shadow: true,
            author_position: BadgePosition::BottomRight,
            author_size: 120,
            author_border: true,
            overlay_enabled: false,
            overlay_color: Color::BLACK,
            overlay_opacity: 30,
        }
    }
}

impl ThumbnailSettings {
    /// Validate settings invariants.
    ///
    /// The render path assumes pre-validated inputs and does no clamping of
    /// its own; callers that accept external data should validate first.
    pub fn validate(&self) -> ThumbResult<()> {
        if self.title_size == 0 {
            return Err(ThumbError::validation("titleSize must be > 0"));
        }
        if self.author_size == 0 {
            return Err(ThumbError::validation("authorSize must be > 0"));
        }
        if self.overlay_opacity > 100 {
            return Err(ThumbError::validation("overlayOpacity must be <= 100"));
        }
        if self.title_font.trim().is_empty() {
            return Err(ThumbError::validation("titleFont must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_record() {
        let s = ThumbnailSettings::default();
        assert_eq!(s.title, "YOUR TITLE HERE");
        assert_eq!(s.title_font, "'Bebas Neue', sans-serif");
        assert_eq!(s.title_size, 80);
        assert_eq!(s.title_color, Color::WHITE);
        assert_eq!(s.stroke_color, Color::BLACK);
        assert_eq!(s.stroke_width, 4);
        assert_eq!(s.title_position, TitlePosition::Center);
        assert!(s.title_shadow);
        assert_eq!(s.author_position, BadgePosition::BottomRight);
        assert_eq!(s.author_size, 120);
        assert!(s.author_border);
        assert!(!s.overlay_enabled);
        assert_eq!(s.overlay_color, Color::BLACK);
        assert_eq!(s.overlay_opacity, 30);
        s.validate().unwrap();
    }

    #[test]
    fn partial_json_fills_remaining_defaults() {
        let s: ThumbnailSettings = serde_json::from_str(
            r##"{"title":"HELLO","overlayEnabled":true,"overlayColor":"#102030"}"##,
        )
        .unwrap();
        assert_eq!(s.title, "HELLO");
        assert!(s.overlay_enabled);
        assert_eq!(s.overlay_color, Color::rgb(0x10, 0x20, 0x30));
        assert_eq!(s.title_size, 80);
    }

    #[test]
    fn serde_uses_camel_case_and_enum_spellings() {
        let s = ThumbnailSettings {
            title_position: TitlePosition::Bottom,
            author_position: BadgePosition::TopLeft,
            ..ThumbnailSettings::default()
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["titlePosition"], "bottom");
        assert_eq!(json["authorPosition"], "top-left");
        assert_eq!(json["titleColor"], "#ffffff");
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let mut s = ThumbnailSettings::default();
        s.overlay_opacity = 101;
        assert!(s.validate().is_err());

        let mut s = ThumbnailSettings::default();
        s.title_size = 0;
        assert!(s.validate().is_err());
    }
}
