//! The profile page: avatar edit lifecycle, navigation guard and
//! assignment toggles, coordinated on one logical thread.
//!
//! `ProfilePage` is synchronous. Anything asynchronous leaves as a
//! `PageCommand` and comes back through [`ProfilePage::handle_event`].

mod outcome;

use tracing::{debug, info, warn};

use crate::avatar::{
    AvatarIntent, AvatarReducer, AvatarState, DecodeError, EditState, ImageRef, PresetId, Upload,
};
use crate::config::{OverlapPolicy, PageConfig, SaveFailurePolicy};
use crate::guard::{GuardIntent, GuardReducer, GuardState, NavigationIntent};
use crate::mvi::Reducer;
use crate::notify::{NotificationKind, Notifier, ToastState};
use crate::remote::{PendingSave, RemoteError, SaveResponse, ToggleResponse};
use crate::runtime::{CommandSender, PageCommand, PageEvent};
use crate::surface::{AvatarSurface, ConfirmDialog, Navigator, PageSurfaces, RowSurface, TokenSource};
use crate::toggle::{ItemId, ToggleBoard, ToggleItem};

pub use outcome::{DialogChoice, LinkDisposition, SaveStart, ToggleStart, UnloadDecision};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct ProfilePage {
    config: PageConfig,
    avatar: AvatarState,
    guard: GuardState,
    toggles: ToggleBoard,
    notifier: Notifier,
    avatar_surface: Box<dyn AvatarSurface>,
    rows: Box<dyn RowSurface>,
    dialog: Box<dyn ConfirmDialog>,
    navigator: Box<dyn Navigator>,
    tokens: Box<dyn TokenSource>,
    commands: CommandSender,
    saves_in_flight: usize,
}

impl ProfilePage {
    pub fn new(
        config: PageConfig,
        initial_avatar: ImageRef,
        items: impl IntoIterator<Item = ToggleItem>,
        surfaces: PageSurfaces,
        commands: CommandSender,
    ) -> Self {
        let PageSurfaces {
            avatar,
            rows,
            toast,
            alert,
            dialog,
            navigator,
            tokens,
        } = surfaces;

        let notifier = Notifier::new(
            toast,
            alert,
            config.notifications.dismiss_after(),
            commands.clone(),
        );
        let toggles = ToggleBoard::new(items, &config.messages);
        if toggles.is_empty() {
            debug!("Profile page ready without status rows");
        } else {
            debug!(rows = toggles.len(), "Profile page ready");
        }

        Self {
            avatar: AvatarState::loaded(initial_avatar),
            guard: GuardState::Idle,
            toggles,
            notifier,
            avatar_surface: avatar,
            rows,
            dialog,
            navigator,
            tokens,
            commands,
            saves_in_flight: 0,
            config,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn avatar(&self) -> &AvatarState {
        &self.avatar
    }

    pub fn edit_state(&self) -> &EditState {
        &self.avatar.edit
    }

    pub fn is_dirty(&self) -> bool {
        self.avatar.is_dirty()
    }

    pub fn guard(&self) -> &GuardState {
        &self.guard
    }

    pub fn toggles(&self) -> &ToggleBoard {
        &self.toggles
    }

    pub fn toast(&self) -> &ToastState {
        self.notifier.state()
    }

    /// Saves issued but not yet answered. Hosts can disable the save
    /// control while this is non-zero; the page itself does not deduplicate.
    pub fn saves_in_flight(&self) -> usize {
        self.saves_in_flight
    }

    // -- Avatar editing ------------------------------------------------------

    /// Preview a chosen file. The edit counts only once decoding finishes.
    pub fn select_file(&mut self, upload: Upload) {
        self.dispatch_avatar(AvatarIntent::BeginEdit);
        let generation = self.avatar.generation;
        debug!(file = %upload.file_name, generation, "Decoding avatar upload");
        self.send(PageCommand::Decode { generation, upload });
    }

    pub fn select_preset(&mut self, preset: PresetId) {
        let preview = preset.media_url(&self.config.endpoints.media_prefix);
        debug!(preset = preset.as_str(), "Preset avatar selected");
        self.dispatch_avatar(AvatarIntent::PresetSelected { preset, preview });
    }

    pub fn discard(&mut self) {
        debug!("Discarding avatar edit");
        self.dispatch_avatar(AvatarIntent::Discard);
        if matches!(self.guard, GuardState::SavingBeforeLeave { .. }) {
            debug!("Edit discarded; save-before-leave no longer decides navigation");
            dispatch_mvi!(self, guard, GuardReducer, GuardIntent::SaveSettled);
        }
    }

    // -- Saving --------------------------------------------------------------

    pub fn save(&mut self) -> SaveStart {
        if !self.avatar.is_dirty() {
            debug!("Save requested with nothing to save");
            return SaveStart::NotDirty;
        }

        let Some(csrf_token) = self.tokens.csrf_token() else {
            warn!("Anti-forgery token missing; save not sent");
            let message = self.config.messages.missing_token.clone();
            self.notifier.notify(&message, NotificationKind::Error);
            return SaveStart::MissingToken;
        };

        let request = PendingSave {
            selection: self.avatar.selection.clone(),
            csrf_token,
        };
        let snapshot = self.avatar.preview.clone();
        self.saves_in_flight += 1;
        info!(in_flight = self.saves_in_flight, "Saving avatar");
        self.send(PageCommand::Save { request, snapshot });
        SaveStart::Issued
    }

    // -- Navigation guard ----------------------------------------------------

    pub fn click_link(&mut self, target_url: &str) -> LinkDisposition {
        if !self.avatar.is_dirty() {
            self.leave(target_url);
            return LinkDisposition::PassThrough;
        }

        let overlap = self.config.guard.overlapping_links;
        let was_open = self.guard.is_dialog_open();
        if was_open && overlap == OverlapPolicy::Reject {
            debug!(target_url, "Confirmation already open; click ignored");
            return LinkDisposition::Rejected;
        }

        dispatch_mvi!(
            self,
            guard,
            GuardReducer,
            GuardIntent::LinkClicked {
                intent: NavigationIntent::new(target_url),
                overlap,
            }
        );

        if was_open {
            debug!(target_url, "Pending navigation target replaced");
        } else {
            debug!(target_url, "Unsaved changes; asking before navigating");
            self.dialog.open();
        }
        LinkDisposition::Intercepted
    }

    pub fn before_unload(&self) -> UnloadDecision {
        if self.avatar.is_dirty() {
            UnloadDecision::Confirm {
                message: self.config.messages.unload_warning.clone(),
            }
        } else {
            UnloadDecision::Allow
        }
    }

    pub fn resolve_dialog(&mut self, choice: DialogChoice) {
        let GuardState::Confirming { intent } = &self.guard else {
            debug!(?choice, "No confirmation open; choice ignored");
            return;
        };
        let intent = intent.clone();

        match choice {
            DialogChoice::SaveAndContinue => {
                let policy = self.config.guard.on_save_failure;
                let started = self.save();
                dispatch_mvi!(self, guard, GuardReducer, GuardIntent::SaveChosen { policy });
                self.dialog.close();

                match (policy, started) {
                    (SaveFailurePolicy::NavigateAnyway, SaveStart::Issued) => {
                        warn!(
                            target_url = %intent.target_url,
                            "Leaving before the save completes; a failed save loses the edit"
                        );
                        self.navigator.navigate(&intent.target_url);
                    }
                    (SaveFailurePolicy::NavigateAnyway, _) => {
                        self.navigator.navigate(&intent.target_url);
                    }
                    (SaveFailurePolicy::StayOnFailure, SaveStart::Issued) => {
                        debug!(target_url = %intent.target_url, "Waiting for save before leaving");
                    }
                    (SaveFailurePolicy::StayOnFailure, SaveStart::NotDirty) => {
                        dispatch_mvi!(self, guard, GuardReducer, GuardIntent::SaveSettled);
                        self.navigator.navigate(&intent.target_url);
                    }
                    (SaveFailurePolicy::StayOnFailure, SaveStart::MissingToken) => {
                        dispatch_mvi!(self, guard, GuardReducer, GuardIntent::SaveSettled);
                    }
                }
            }

            DialogChoice::DiscardAndContinue => {
                self.discard();
                dispatch_mvi!(self, guard, GuardReducer, GuardIntent::DiscardChosen);
                self.dialog.close();
                self.navigator.navigate(&intent.target_url);
            }

            DialogChoice::Cancel => {
                dispatch_mvi!(self, guard, GuardReducer, GuardIntent::Cancelled);
                self.dialog.close();
            }
        }
    }

    // -- Assignment toggles --------------------------------------------------

    pub fn toggle(&mut self, id: ItemId) -> ToggleStart {
        let Some(row) = self.toggles.row(id) else {
            warn!(item = %id, "Toggle for unknown row");
            return ToggleStart::UnknownItem;
        };
        let url = row.item.url.clone();

        let Some(csrf_token) = self.tokens.csrf_token() else {
            warn!(item = %id, "Anti-forgery token missing; toggle not sent");
            let message = self.config.messages.missing_token.clone();
            self.notifier.notify(&message, NotificationKind::Error);
            return ToggleStart::MissingToken;
        };

        debug!(item = %id, url = %url, "Toggling status");
        self.send(PageCommand::Toggle {
            item: id,
            url,
            csrf_token,
        });
        ToggleStart::Issued
    }

    /// The row left the page. Responses still in flight for it only notify.
    pub fn remove_row(&mut self, id: ItemId) -> bool {
        self.toggles.remove_row(id).is_some()
    }

    // -- Notifications -------------------------------------------------------

    pub fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notifier.notify(message, kind);
    }

    pub fn toast_pointer_entered(&mut self) {
        self.notifier.pointer_entered();
    }

    pub fn toast_pointer_left(&mut self) {
        self.notifier.pointer_left();
    }

    // -- Continuations -------------------------------------------------------

    pub fn handle_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::Decoded { generation, result } => self.finish_decode(generation, result),
            PageEvent::SaveFinished { snapshot, result } => self.finish_save(snapshot, result),
            PageEvent::ToggleFinished { item, result } => self.finish_toggle(item, result),
            PageEvent::ToastDelayElapsed { generation } => self.notifier.delay_elapsed(generation),
        }
    }

    fn finish_decode(&mut self, generation: u64, result: Result<(Upload, ImageRef), DecodeError>) {
        match result {
            Ok((upload, preview)) => {
                self.dispatch_avatar(AvatarIntent::FileDecoded {
                    generation,
                    upload,
                    preview,
                });
            }
            Err(e) if generation == self.avatar.generation => {
                warn!(error = %e, "Avatar upload could not be decoded");
                let message = self.config.messages.decode_failed.clone();
                self.notifier.notify(&message, NotificationKind::Error);
            }
            Err(e) => {
                debug!(error = %e, generation, "Superseded decode failed");
            }
        }
    }

    fn finish_save(&mut self, snapshot: ImageRef, result: Result<SaveResponse, RemoteError>) {
        self.saves_in_flight = self.saves_in_flight.saturating_sub(1);

        let saved = match result {
            Ok(SaveResponse { success: true, .. }) => {
                info!("Avatar saved");
                self.dispatch_avatar(AvatarIntent::SaveSucceeded { saved: snapshot });
                let message = self.config.messages.save_success.clone();
                self.notifier.notify(&message, NotificationKind::Success);
                true
            }
            Ok(SaveResponse {
                success: false,
                error,
            }) => {
                warn!(reason = ?error, "Server rejected avatar");
                let messages = &self.config.messages;
                let message = match error.filter(|reason| !reason.is_empty()) {
                    Some(reason) => format!("{}{}", messages.save_failed_prefix, reason),
                    None => messages.save_failed.clone(),
                };
                self.notifier.notify(&message, NotificationKind::Error);
                false
            }
            Err(e) => {
                warn!(error = %e, kind = e.kind(), "Avatar save failed");
                let message = self.config.messages.save_transport_error.clone();
                self.notifier.notify(&message, NotificationKind::Error);
                false
            }
        };

        self.settle_pending_navigation(saved);
    }

    /// Complete a "save and continue" that waits for its save.
    fn settle_pending_navigation(&mut self, saved: bool) {
        let GuardState::SavingBeforeLeave { intent } = &self.guard else {
            return;
        };
        let target_url = intent.target_url.clone();

        if saved && self.avatar.is_dirty() && self.saves_in_flight > 0 {
            debug!("Newer save still in flight; navigation keeps waiting");
            return;
        }

        dispatch_mvi!(self, guard, GuardReducer, GuardIntent::SaveSettled);
        if saved && !self.avatar.is_dirty() {
            self.navigator.navigate(&target_url);
        } else {
            info!(target_url = %target_url, "Edit not persisted; staying on page");
        }
    }

    fn finish_toggle(&mut self, item: ItemId, result: Result<ToggleResponse, RemoteError>) {
        match result {
            Ok(ToggleResponse {
                success: true,
                is_completed,
                message,
            }) => {
                match self
                    .toggles
                    .apply_status(item, is_completed, &self.config.messages)
                {
                    Some(view) => self.rows.render_row(item, view),
                    None => debug!(item = %item, "Row removed before toggle response"),
                }
                info!(item = %item, is_completed, "Status updated");
                self.notifier.notify(&message, NotificationKind::Success);
            }
            Ok(ToggleResponse { success: false, .. }) => {
                warn!(item = %item, "Server rejected status update");
                let message = self.config.messages.toggle_failed.clone();
                self.notifier.notify(&message, NotificationKind::Error);
            }
            Err(e) => {
                warn!(item = %item, error = %e, kind = e.kind(), "Status update failed");
                let message = self.config.messages.toggle_transport_error.clone();
                self.notifier.notify(&message, NotificationKind::Error);
            }
        }
    }

    /// Navigate away, dropping any navigation still pending.
    fn leave(&mut self, target_url: &str) {
        if self.guard != GuardState::Idle {
            debug!(target_url, "Leaving; pending navigation dropped");
            if self.guard.is_dialog_open() {
                self.dialog.close();
            }
            dispatch_mvi!(self, guard, GuardReducer, GuardIntent::Left);
        }
        self.navigator.navigate(target_url);
    }

    fn dispatch_avatar(&mut self, intent: AvatarIntent) {
        let before = self.avatar.clone();
        dispatch_mvi!(self, avatar, AvatarReducer, intent);
        if self.avatar != before {
            self.avatar_surface.render(&self.avatar);
        }
    }

    fn send(&self, command: PageCommand) {
        if self.commands.send(command).is_err() {
            warn!("Command channel closed; request dropped");
        }
    }
}
