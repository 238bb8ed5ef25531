use std::sync::Arc;

use tracing::debug;

use crate::avatar::decode_upload;
use crate::remote::ProfileApi;

use super::command::{EventSender, PageCommand, PageEvent};

/// Runs page commands as tokio tasks, one continuation event per command.
///
/// Requests are never cancelled and carry no timeout; each task runs until
/// the transport resolves it.
pub struct PageRuntime {
    api: Arc<dyn ProfileApi>,
    events: EventSender,
}

impl PageRuntime {
    pub fn new(api: Arc<dyn ProfileApi>, events: EventSender) -> Self {
        Self { api, events }
    }

    /// Start `command`. Must be called from within a tokio runtime.
    pub fn execute(&self, command: PageCommand) {
        let events = self.events.clone();

        match command {
            PageCommand::Decode { generation, upload } => {
                tokio::spawn(async move {
                    let result = decode_upload(upload).await;
                    deliver(&events, PageEvent::Decoded { generation, result });
                });
            }

            PageCommand::Save { request, snapshot } => {
                let api = Arc::clone(&self.api);
                tokio::spawn(async move {
                    let result = api.save_avatar(request).await;
                    deliver(&events, PageEvent::SaveFinished { snapshot, result });
                });
            }

            PageCommand::Toggle {
                item,
                url,
                csrf_token,
            } => {
                let api = Arc::clone(&self.api);
                tokio::spawn(async move {
                    let result = api.toggle_status(&url, &csrf_token).await;
                    deliver(&events, PageEvent::ToggleFinished { item, result });
                });
            }

            PageCommand::DismissToast { generation, after } => {
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    deliver(&events, PageEvent::ToastDelayElapsed { generation });
                });
            }
        }
    }
}

fn deliver(events: &EventSender, event: PageEvent) {
    if events.send(event).is_err() {
        debug!("Page closed before continuation ran");
    }
}
