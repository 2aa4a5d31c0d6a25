use crate::foundation::core::Color;
use crate::settings::model::{ThumbnailSettings, TitlePosition};

/// Identifier of a built-in preset.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PresetId {
    Gaming,
    Tutorial,
    Vlog,
    Dramatic,
    Minimal,
}

impl PresetId {
    /// All presets, in presentation order.
    pub const ALL: [PresetId; 5] = [
        PresetId::Gaming,
        PresetId::Tutorial,
        PresetId::Vlog,
        PresetId::Dramatic,
        PresetId::Minimal,
    ];

    /// Resolve a preset name. Unknown names yield `None`, which callers
    /// treat as a no-op; a preset can therefore never partially apply.
    pub fn from_name(name: &str) -> Option<PresetId> {
        match name {
            "gaming" => Some(PresetId::Gaming),
            "tutorial" => Some(PresetId::Tutorial),
            "vlog" => Some(PresetId::Vlog),
            "dramatic" => Some(PresetId::Dramatic),
            "minimal" => Some(PresetId::Minimal),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PresetId::Gaming => "gaming",
            PresetId::Tutorial => "tutorial",
            PresetId::Vlog => "vlog",
            PresetId::Dramatic => "dramatic",
            PresetId::Minimal => "minimal",
        }
    }
}

/// A named, immutable bundle of settings values applied atomically.
///
/// A preset covers exactly the title and overlay fields; badge fields
/// (`authorPosition`, `authorSize`, `authorBorder`) are never part of a
/// preset and survive application untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub title_font: &'static str,
    pub title_size: u32,
    pub title_color: Color,
    pub stroke_color: Color,
    pub stroke_width: u32,
    pub title_position: TitlePosition,
    pub title_shadow: bool,
    pub overlay_enabled: bool,
    pub overlay_color: Color,
    pub overlay_opacity: u8,
    pub title: &'static str,
}

/// Look up the fixed preset table.
pub fn preset(id: PresetId) -> &'static Preset {
    match id {
        PresetId::Gaming => &GAMING,
        PresetId::Tutorial => &TUTORIAL,
        PresetId::Vlog => &VLOG,
        PresetId::Dramatic => &DRAMATIC,
        PresetId::Minimal => &MINIMAL,
    }
}

/// Overwrite exactly the preset-covered fields of `settings`.
pub fn apply_preset(settings: &mut ThumbnailSettings, id: PresetId) {
    let p = preset(id);
    settings.title_font = p.title_font.to_string();
    settings.title_size = p.title_size;
    settings.title_color = p.title_color;
    settings.stroke_color = p.stroke_color;
    settings.stroke_width = p.stroke_width;
    settings.title_position = p.title_position;
    settings.title_shadow = p.title_shadow;
    settings.overlay_enabled = p.overlay_enabled;
    settings.overlay_color = p.overlay_color;
    settings.overlay_opacity = p.overlay_opacity;
    settings.title = p.title.to_string();
}

static GAMING: Preset = Preset {
    title_font: "'Bangers', cursive",
    title_size: 100,
    title_color: Color::rgb(0xff, 0xff, 0x00),
    stroke_color: Color::rgb(0xff, 0x00, 0x00),
    stroke_width: 8,
    title_position: TitlePosition::Center,
    title_shadow: true,
    overlay_enabled: true,
    overlay_color: Color::BLACK,
    overlay_opacity: 20,
    title: "EPIC GAMING\nMOMENT!",
};

static TUTORIAL: Preset = Preset {
    title_font: "'Roboto', sans-serif",
    title_size: 70,
    title_color: Color::WHITE,
    stroke_color: Color::rgb(0x2e, 0xcc, 0x71),
    stroke_width: 5,
    title_position: TitlePosition::Center,
    title_shadow: true,
    overlay_enabled: true,
    overlay_color: Color::BLACK,
    overlay_opacity: 40,
    title: "HOW TO...\nSTEP BY STEP",
};

static VLOG: Preset = Preset {
    title_font: "'Anton', sans-serif",
    title_size: 90,
    title_color: Color::WHITE,
    stroke_color: Color::rgb(0xe7, 0x4c, 0x3c),
    stroke_width: 4,
    title_position: TitlePosition::Bottom,
    title_shadow: true,
    overlay_enabled: false,
    overlay_color: Color::BLACK,
    overlay_opacity: 30,
    title: "DAY IN MY LIFE",
};

static DRAMATIC: Preset = Preset {
    title_font: "'Bebas Neue', sans-serif",
    title_size: 110,
    title_color: Color::WHITE,
    stroke_color: Color::BLACK,
    stroke_width: 6,
    title_position: TitlePosition::Center,
    title_shadow: true,
    overlay_enabled: true,
    overlay_color: Color::BLACK,
    overlay_opacity: 50,
    title: "YOU WON'T\nBELIEVE THIS",
};

static MINIMAL: Preset = Preset {
    title_font: "'Oswald', sans-serif",
    title_size: 60,
    title_color: Color::rgb(0x33, 0x33, 0x33),
    stroke_color: Color::WHITE,
    stroke_width: 0,
    title_position: TitlePosition::Center,
    title_shadow: false,
    overlay_enabled: true,
    overlay_color: Color::WHITE,
    overlay_opacity: 70,
    title: "Clean & Simple",
};
