use crate::assets::decode::PreparedImage;

/// The two independent image-upload slots a render can draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    Background,
    Author,
}

/// Holds the session's decoded images.
///
/// A slot is either empty or holds a whole decoded bitmap; assignment
/// replaces the previous bitmap wholesale and bitmaps are never mutated in
/// place. Because decoding is an explicit operation whose result the caller
/// assigns, "which upload wins" is simply assignment order.
#[derive(Clone, Debug, Default)]
pub struct AssetSlots {
    background: Option<PreparedImage>,
    author: Option<PreparedImage>,
}

impl AssetSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a slot's bitmap wholesale.
    pub fn assign(&mut self, kind: SlotKind, image: PreparedImage) {
        match kind {
            SlotKind::Background => self.background = Some(image),
            SlotKind::Author => self.author = Some(image),
        }
    }

    /// Empty a slot (the passes that read it are then skipped).
    pub fn clear(&mut self, kind: SlotKind) {
        match kind {
            SlotKind::Background => self.background = None,
            SlotKind::Author => self.author = None,
        }
    }

    pub fn background(&self) -> Option<&PreparedImage> {
        self.background.as_ref()
    }

    pub fn author(&self) -> Option<&PreparedImage> {
        self.author.as_ref()
    }
}
