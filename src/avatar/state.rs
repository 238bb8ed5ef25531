//! Avatar edit state.

use std::fmt;

use crate::mvi::UiState;

/// What the avatar preview displays: a URL or a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a server-side default avatar (e.g., "cat.png").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresetId(String);

impl PresetId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical URL of the preset under `media_prefix` (which ends in `/`).
    pub fn media_url(&self, media_prefix: &str) -> ImageRef {
        ImageRef(format!("{}{}", media_prefix, self.0))
    }
}

/// A file chosen by the user, kept raw for the save request.
#[derive(Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    /// MIME type reported by the picker; may be empty.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// The edit currently in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSelection {
    Upload(Upload),
    Preset(PresetId),
}

/// Whether the avatar differs from what the server has.
///
/// `dirty == false` implies the preview equals `original`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditState {
    pub dirty: bool,
    /// Last value known to be persisted.
    pub original: ImageRef,
}

/// Full state of the avatar editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvatarState {
    pub edit: EditState,
    pub preview: ImageRef,
    /// Edit to send on save. `None` until the user picks something.
    pub selection: Option<AvatarSelection>,
    pub save_control_visible: bool,
    /// Bumped on every edit or discard; decodes started under an older
    /// generation are ignored when they finish.
    pub generation: u64,
}

impl UiState for AvatarState {}

impl AvatarState {
    /// State right after page load.
    pub fn loaded(initial: ImageRef) -> Self {
        Self {
            edit: EditState {
                dirty: false,
                original: initial.clone(),
            },
            preview: initial,
            selection: None,
            save_control_visible: false,
            generation: 0,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.edit.dirty
    }
}
