use std::time::Duration;

use tokio::sync::mpsc;

use crate::avatar::{DecodeError, ImageRef, Upload};
use crate::remote::{PendingSave, RemoteError, SaveResponse, ToggleResponse};
use crate::toggle::ItemId;

/// Asynchronous work requested by the page.
#[derive(Debug)]
pub enum PageCommand {
    /// Decode a chosen file for the edit started under `generation`.
    Decode { generation: u64, upload: Upload },
    /// POST the avatar. `snapshot` is the preview being saved.
    Save {
        request: PendingSave,
        snapshot: ImageRef,
    },
    /// POST a row's toggle URL.
    Toggle {
        item: ItemId,
        url: String,
        csrf_token: String,
    },
    /// Fire `ToastDelayElapsed` after `after`.
    DismissToast { generation: u64, after: Duration },
}

impl PageCommand {
    /// Decode, save and toggle each owe the page one completion event.
    pub fn awaits_completion(&self) -> bool {
        !matches!(self, PageCommand::DismissToast { .. })
    }
}

/// Continuation of a `PageCommand`, fed back into the page.
#[derive(Debug)]
pub enum PageEvent {
    Decoded {
        generation: u64,
        result: Result<(Upload, ImageRef), DecodeError>,
    },
    SaveFinished {
        snapshot: ImageRef,
        result: Result<SaveResponse, RemoteError>,
    },
    ToggleFinished {
        item: ItemId,
        result: Result<ToggleResponse, RemoteError>,
    },
    ToastDelayElapsed { generation: u64 },
}

impl PageEvent {
    pub fn completes_command(&self) -> bool {
        !matches!(self, PageEvent::ToastDelayElapsed { .. })
    }
}

pub type CommandSender = mpsc::UnboundedSender<PageCommand>;
pub type CommandReceiver = mpsc::UnboundedReceiver<PageCommand>;
pub type EventSender = mpsc::UnboundedSender<PageEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<PageEvent>;
