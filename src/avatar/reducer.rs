use crate::mvi::Reducer;

use super::intent::AvatarIntent;
use super::state::{AvatarSelection, AvatarState, EditState};

pub struct AvatarReducer;

impl Reducer for AvatarReducer {
    type State = AvatarState;
    type Intent = AvatarIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AvatarIntent::BeginEdit => AvatarState {
                generation: state.generation.wrapping_add(1),
                ..state
            },

            AvatarIntent::FileDecoded {
                generation,
                upload,
                preview,
            } => {
                if generation != state.generation {
                    // A later edit or discard superseded this file.
                    return state;
                }
                AvatarState {
                    edit: EditState {
                        dirty: true,
                        original: state.edit.original,
                    },
                    preview,
                    selection: Some(AvatarSelection::Upload(upload)),
                    save_control_visible: true,
                    generation,
                }
            }

            AvatarIntent::PresetSelected { preset, preview } => AvatarState {
                edit: EditState {
                    dirty: true,
                    original: state.edit.original,
                },
                preview,
                selection: Some(AvatarSelection::Preset(preset)),
                save_control_visible: true,
                generation: state.generation.wrapping_add(1),
            },

            AvatarIntent::Discard => AvatarState {
                preview: state.edit.original.clone(),
                edit: EditState {
                    dirty: false,
                    original: state.edit.original,
                },
                selection: None,
                save_control_visible: false,
                generation: state.generation.wrapping_add(1),
            },

            AvatarIntent::SaveSucceeded { saved } => {
                if state.edit.dirty && state.preview != saved {
                    // Edited again while the save was in flight: the newer
                    // edit stays pending against the new baseline.
                    return AvatarState {
                        edit: EditState {
                            dirty: true,
                            original: saved,
                        },
                        ..state
                    };
                }
                AvatarState {
                    edit: EditState {
                        dirty: false,
                        original: saved.clone(),
                    },
                    preview: saved,
                    selection: None,
                    save_control_visible: false,
                    generation: state.generation,
                }
            }
        }
    }
}
