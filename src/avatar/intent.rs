use crate::mvi::Intent;

use super::state::{ImageRef, PresetId, Upload};

#[derive(Debug, Clone)]
pub enum AvatarIntent {
    /// A file was chosen; its decode is about to start. Invalidates
    /// any decode still in flight.
    BeginEdit,
    /// Decode finished for the edit started under `generation`.
    FileDecoded {
        generation: u64,
        upload: Upload,
        preview: ImageRef,
    },
    PresetSelected { preset: PresetId, preview: ImageRef },
    Discard,
    /// The server accepted `saved`.
    SaveSucceeded { saved: ImageRef },
}

impl Intent for AvatarIntent {}
