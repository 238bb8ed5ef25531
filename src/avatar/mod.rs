//! Avatar editor: preview updates from file uploads and preset picks,
//! tracked against the last persisted value.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `EditState` and the full editor state
//! - `intent.rs` - Edits, discard and save confirmation
//! - `reducer.rs` - State transitions
//! - `decode.rs` - Turning raw uploads into previews

mod decode;
mod intent;
mod reducer;
mod state;

pub use decode::{decode_upload, to_data_url, DecodeError};
pub use intent::AvatarIntent;
pub use reducer::AvatarReducer;
pub use state::{AvatarSelection, AvatarState, EditState, ImageRef, PresetId, Upload};
