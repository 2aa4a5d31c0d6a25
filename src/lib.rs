//! Thumbforge is a deterministic thumbnail composition engine.
//!
//! It renders 1280x720 video thumbnails from a declarative settings record:
//! a cover-fitted background image, an optional color overlay, a multi-line
//! stroked title with a drop shadow, and a circular author badge. The same
//! settings, assets, and fonts always produce the same pixels.
//!
//! The public API is pipeline-oriented:
//!
//! - Build or edit a [`ThumbnailSettings`] record (directly, through
//!   [`EditCommand`]s, or by applying a [`PresetId`])
//! - Decode images into [`AssetSlots`] and load fonts into a [`FontLibrary`]
//! - Call [`render_thumbnail`] and export the [`FrameRGBA`] as PNG
#![forbid(unsafe_code)]

pub mod assets;
pub mod export;
mod foundation;
pub mod render;
pub mod settings;

pub use crate::foundation::core::{Canvas, Color, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{ThumbError, ThumbResult};

pub use crate::assets::decode::{decode_image, PreparedImage};
pub use crate::assets::fonts::FontLibrary;
pub use crate::assets::store::{AssetSlots, SlotKind};
pub use crate::export::{encode_png, save_png, DEFAULT_FILENAME};
pub use crate::render::{render_thumbnail, FrameRGBA};
pub use crate::settings::command::{apply, EditCommand};
pub use crate::settings::model::{BadgePosition, ThumbnailSettings, TitlePosition};
pub use crate::settings::preset::{apply_preset, preset, Preset, PresetId};
