use crate::mvi::Reducer;

use super::intent::ToastIntent;
use super::state::{Toast, ToastState};

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Show {
                message,
                kind,
                generation,
            } => {
                // The pointer may still rest on the banner being replaced.
                let hovered = matches!(&state, ToastState::Visible(t) if t.hovered);
                ToastState::Visible(Toast {
                    message,
                    kind,
                    generation,
                    hovered,
                })
            }

            ToastIntent::PointerEntered => match state {
                ToastState::Visible(toast) => ToastState::Visible(Toast {
                    hovered: true,
                    ..toast
                }),
                other => other,
            },

            ToastIntent::PointerLeft => ToastState::Hidden,

            ToastIntent::DelayElapsed { generation } => match state {
                ToastState::Visible(toast) if toast.generation == generation && !toast.hovered => {
                    ToastState::Hidden
                }
                other => other,
            },
        }
    }
}
