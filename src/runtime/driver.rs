use std::sync::Arc;

use tokio::sync::mpsc;

use crate::avatar::ImageRef;
use crate::config::PageConfig;
use crate::page::ProfilePage;
use crate::remote::ProfileApi;
use crate::surface::PageSurfaces;
use crate::toggle::ToggleItem;

use super::command::{CommandReceiver, EventReceiver};
use super::executor::PageRuntime;

/// A page wired to its runtime.
///
/// Host event handlers call into [`PageDriver::page_mut`]; the host's loop
/// awaits [`PageDriver::step`] to run continuations on the same thread.
pub struct PageDriver {
    page: ProfilePage,
    runtime: PageRuntime,
    commands: CommandReceiver,
    events: EventReceiver,
    outstanding: usize,
}

impl PageDriver {
    pub fn new(
        config: PageConfig,
        initial_avatar: ImageRef,
        items: impl IntoIterator<Item = ToggleItem>,
        surfaces: PageSurfaces,
        api: Arc<dyn ProfileApi>,
    ) -> Self {
        let (command_tx, commands) = mpsc::unbounded_channel();
        let (event_tx, events) = mpsc::unbounded_channel();

        Self {
            page: ProfilePage::new(config, initial_avatar, items, surfaces, command_tx),
            runtime: PageRuntime::new(api, event_tx),
            commands,
            events,
            outstanding: 0,
        }
    }

    pub fn page(&self) -> &ProfilePage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut ProfilePage {
        &mut self.page
    }

    /// Decodes and requests started but not yet applied.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Hand queued commands to the runtime.
    pub fn pump(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            if command.awaits_completion() {
                self.outstanding += 1;
            }
            self.runtime.execute(command);
        }
    }

    /// Wait for one continuation and apply it to the page.
    ///
    /// Returns `false` once no more events can arrive.
    pub async fn step(&mut self) -> bool {
        self.pump();
        let Some(event) = self.events.recv().await else {
            return false;
        };
        if event.completes_command() {
            self.outstanding = self.outstanding.saturating_sub(1);
        }
        self.page.handle_event(event);
        self.pump();
        true
    }

    /// Apply continuations until every decode and request has resolved.
    /// Pending toast timers do not keep this waiting.
    pub async fn run_until_idle(&mut self) {
        self.pump();
        while self.outstanding > 0 {
            if !self.step().await {
                break;
            }
        }
    }
}
