use std::time::Duration;

use tracing::{debug, error};

use crate::mvi::Reducer;
use crate::runtime::{CommandSender, PageCommand};
use crate::surface::{BlockingAlert, ToastSurface};

use super::intent::ToastIntent;
use super::reducer::ToastReducer;
use super::state::{NotificationKind, ToastState};

/// Shows transient messages, holding auto-dismiss while hovered.
pub struct Notifier {
    state: ToastState,
    next_generation: u64,
    dismiss_after: Duration,
    surface: Option<Box<dyn ToastSurface>>,
    alert: Box<dyn BlockingAlert>,
    commands: CommandSender,
}

impl Notifier {
    pub fn new(
        surface: Option<Box<dyn ToastSurface>>,
        alert: Box<dyn BlockingAlert>,
        dismiss_after: Duration,
        commands: CommandSender,
    ) -> Self {
        Self {
            state: ToastState::Hidden,
            next_generation: 0,
            dismiss_after,
            surface,
            alert,
            commands,
        }
    }

    pub fn state(&self) -> &ToastState {
        &self.state
    }

    /// Display `message`. Never fails: without a toast surface the message
    /// goes to the blocking alert instead.
    pub fn notify(&mut self, message: &str, kind: NotificationKind) {
        if self.surface.is_none() {
            error!(kind = %kind, "Toast surface not found, falling back to alert");
            self.alert.alert(message);
            return;
        }

        self.next_generation = self.next_generation.wrapping_add(1);
        let generation = self.next_generation;
        debug!(kind = %kind, generation, "Showing toast");
        self.dispatch(ToastIntent::Show {
            message: message.to_string(),
            kind,
            generation,
        });

        let command = PageCommand::DismissToast {
            generation,
            after: self.dismiss_after,
        };
        if self.commands.send(command).is_err() {
            debug!(generation, "Command channel closed; toast will not auto-dismiss");
        }
    }

    pub fn pointer_entered(&mut self) {
        self.dispatch(ToastIntent::PointerEntered);
    }

    pub fn pointer_left(&mut self) {
        self.dispatch(ToastIntent::PointerLeft);
    }

    pub fn delay_elapsed(&mut self, generation: u64) {
        self.dispatch(ToastIntent::DelayElapsed { generation });
    }

    fn dispatch(&mut self, intent: ToastIntent) {
        let before = self.state.clone();
        self.state = ToastReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state != before {
            self.render();
        }
    }

    fn render(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        match &self.state {
            ToastState::Visible(toast) => surface.show(toast),
            ToastState::Hidden => surface.hide(),
        }
    }
}
