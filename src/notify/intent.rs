use crate::mvi::Intent;

use super::state::NotificationKind;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    Show {
        message: String,
        kind: NotificationKind,
        generation: u64,
    },
    PointerEntered,
    /// Pointer left the banner: dismiss now.
    PointerLeft,
    /// The auto-dismiss delay for `generation` ran out.
    DelayElapsed { generation: u64 },
}

impl Intent for ToastIntent {}
