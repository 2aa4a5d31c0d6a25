use std::collections::BTreeMap;
use std::path::Path;

use ab_glyph::FontArc;
use anyhow::Context;

use crate::foundation::error::{ThumbError, ThumbResult};

/// Font faces available to the title pass, keyed by family name.
///
/// Families resolve case-insensitively against CSS-style family lists such
/// as `"'Bebas Neue', sans-serif"`. Generic CSS families (`sans-serif`,
/// `serif`, `cursive`, `monospace`) match any loaded face, as does an
/// exhausted list, so text renders with *some* face whenever at least one
/// font is loaded. With no fonts loaded at all the text passes are skipped.
#[derive(Clone, Debug, Default)]
pub struct FontLibrary {
    faces: BTreeMap<String, FontArc>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Register a face under a family name from raw font bytes (TTF/OTF).
    pub fn load_bytes(&mut self, family: &str, bytes: Vec<u8>) -> ThumbResult<()> {
        let face = FontArc::try_from_vec(bytes)
            .map_err(|e| ThumbError::decode(format!("font '{family}': {e}")))?;
        self.faces.insert(normalize_family(family), face);
        Ok(())
    }

    /// Register a face from a font file.
    pub fn load_file(&mut self, family: &str, path: &Path) -> ThumbResult<()> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        self.load_bytes(family, bytes)
    }

    /// Register every `.ttf`/`.otf` in a directory, family = file stem.
    pub fn load_dir(&mut self, dir: &Path) -> ThumbResult<()> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("read font directory '{}'", dir.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("list fonts in '{}'", dir.display()))?;
            let path = entry.path();
            let is_font = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"))
                .unwrap_or(false);
            if !is_font {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let family = stem.replace(['-', '_'], " ");
            self.load_file(&family, &path)?;
        }
        Ok(())
    }

    /// Resolve a CSS-style family list to a loaded face.
    pub fn resolve(&self, family_list: &str) -> Option<&FontArc> {
        for raw in family_list.split(',') {
            let family = raw.trim().trim_matches(|c| c == '\'' || c == '"').trim();
            if family.is_empty() {
                continue;
            }
            if is_generic_family(family) {
                return self.any_face();
            }
            if let Some(face) = self.faces.get(&normalize_family(family)) {
                return Some(face);
            }
        }
        self.any_face()
    }

    fn any_face(&self) -> Option<&FontArc> {
        self.faces.values().next()
    }
}

fn normalize_family(family: &str) -> String {
    family.trim().to_ascii_lowercase()
}

fn is_generic_family(family: &str) -> bool {
    matches!(
        family.to_ascii_lowercase().as_str(),
        "sans-serif" | "serif" | "cursive" | "fantasy" | "monospace" | "system-ui"
    )
}
