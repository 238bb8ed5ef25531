//! Shared test utilities: recording surfaces, a scripted API, and a
//! harness that drives `ProfilePage` without a runtime.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use profile_sync::avatar::{to_data_url, AvatarState, ImageRef, Upload};
use profile_sync::config::PageConfig;
use profile_sync::notify::Toast;
use profile_sync::page::ProfilePage;
use profile_sync::remote::{PendingSave, ProfileApi, RemoteError, SaveResponse, ToggleResponse};
use profile_sync::runtime::{CommandReceiver, PageCommand, PageEvent};
use profile_sync::surface::{
    AvatarSurface, BlockingAlert, ConfirmDialog, Navigator, PageSurfaces, RowSurface,
    ToastSurface, TokenSource,
};
use profile_sync::toggle::{ItemId, RowView, ToggleItem};
use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const INITIAL_AVATAR: &str = "/media/avatars/original.png";
pub const TOKEN: &str = "csrf-123";

/// Something a surface was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Seen {
    Avatar {
        preview: String,
        dirty: bool,
        save_visible: bool,
    },
    Row {
        id: ItemId,
        label: String,
        class: &'static str,
        highlighted: bool,
        muted: bool,
    },
    ToastShown {
        message: String,
        class: &'static str,
    },
    ToastHidden,
    Alert(String),
    DialogOpened,
    DialogClosed,
    Navigated(String),
}

/// Spy implementing every page surface.
#[derive(Clone, Default)]
pub struct Recorder {
    log: Arc<Mutex<Vec<Seen>>>,
}

impl Recorder {
    pub fn all(&self) -> Vec<Seen> {
        self.log.lock().clone()
    }

    pub fn clear(&self) {
        self.log.lock().clear();
    }

    pub fn navigations(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .filter_map(|s| match s {
                Seen::Navigated(target) => Some(target),
                _ => None,
            })
            .collect()
    }

    pub fn toasts(&self) -> Vec<(String, &'static str)> {
        self.all()
            .into_iter()
            .filter_map(|s| match s {
                Seen::ToastShown { message, class } => Some((message, class)),
                _ => None,
            })
            .collect()
    }

    pub fn last_toast(&self) -> Option<(String, &'static str)> {
        self.toasts().pop()
    }

    pub fn count(&self, seen: &Seen) -> usize {
        self.all().iter().filter(|s| *s == seen).count()
    }

    fn push(&self, seen: Seen) {
        self.log.lock().push(seen);
    }
}

impl AvatarSurface for Recorder {
    fn render(&mut self, state: &AvatarState) {
        self.push(Seen::Avatar {
            preview: state.preview.as_str().to_string(),
            dirty: state.edit.dirty,
            save_visible: state.save_control_visible,
        });
    }
}

impl RowSurface for Recorder {
    fn render_row(&mut self, id: ItemId, view: &RowView) {
        self.push(Seen::Row {
            id,
            label: view.button_label.clone(),
            class: view.button_class,
            highlighted: view.highlighted,
            muted: view.muted,
        });
    }
}

impl ToastSurface for Recorder {
    fn show(&mut self, toast: &Toast) {
        self.push(Seen::ToastShown {
            message: toast.message.clone(),
            class: toast.kind.css_class(),
        });
    }

    fn hide(&mut self) {
        self.push(Seen::ToastHidden);
    }
}

impl BlockingAlert for Recorder {
    fn alert(&mut self, message: &str) {
        self.push(Seen::Alert(message.to_string()));
    }
}

impl ConfirmDialog for Recorder {
    fn open(&mut self) {
        self.push(Seen::DialogOpened);
    }

    fn close(&mut self) {
        self.push(Seen::DialogClosed);
    }
}

impl Navigator for Recorder {
    fn navigate(&mut self, target_url: &str) {
        self.push(Seen::Navigated(target_url.to_string()));
    }
}

/// Hidden-field token the test can change or remove between requests.
#[derive(Clone)]
pub struct SharedToken(Arc<Mutex<Option<String>>>);

impl SharedToken {
    pub fn new(value: Option<&str>) -> Self {
        Self(Arc::new(Mutex::new(value.map(str::to_string))))
    }

    pub fn set(&self, value: Option<&str>) {
        *self.0.lock() = value.map(str::to_string);
    }
}

impl TokenSource for SharedToken {
    fn csrf_token(&self) -> Option<String> {
        self.0.lock().clone()
    }
}

pub fn surfaces(recorder: &Recorder, token: &SharedToken, with_toast: bool) -> PageSurfaces {
    let toast: Option<Box<dyn ToastSurface>> = if with_toast {
        Some(Box::new(recorder.clone()))
    } else {
        None
    };
    PageSurfaces {
        avatar: Box::new(recorder.clone()),
        rows: Box::new(recorder.clone()),
        toast,
        alert: Box::new(recorder.clone()),
        dialog: Box::new(recorder.clone()),
        navigator: Box::new(recorder.clone()),
        tokens: Box::new(token.clone()),
    }
}

pub fn items() -> Vec<ToggleItem> {
    vec![
        ToggleItem {
            id: ItemId(1),
            url: "/labs/1/toggle/".into(),
            completed: false,
        },
        ToggleItem {
            id: ItemId(2),
            url: "/labs/2/toggle/".into(),
            completed: true,
        },
        ToggleItem {
            id: ItemId(3),
            url: "/labs/3/toggle/".into(),
            completed: false,
        },
    ]
}

pub fn png_bytes() -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(image::RgbImage::new(4, 4))
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("encode png");
    buf
}

pub fn png_upload() -> Upload {
    Upload {
        file_name: "me.png".into(),
        content_type: "image/png".into(),
        bytes: png_bytes(),
    }
}

/// A `ProfilePage` whose commands the test answers by hand.
pub struct Harness {
    pub page: ProfilePage,
    pub seen: Recorder,
    pub token: SharedToken,
    pub commands: CommandReceiver,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(PageConfig::default())
    }

    pub fn with_config(config: PageConfig) -> Self {
        Self::build(config, true)
    }

    pub fn without_toast() -> Self {
        Self::build(PageConfig::default(), false)
    }

    fn build(config: PageConfig, with_toast: bool) -> Self {
        let seen = Recorder::default();
        let token = SharedToken::new(Some(TOKEN));
        let (tx, commands) = mpsc::unbounded_channel();
        let page = ProfilePage::new(
            config,
            ImageRef::new(INITIAL_AVATAR),
            items(),
            surfaces(&seen, &token, with_toast),
            tx,
        );
        Self {
            page,
            seen,
            token,
            commands,
        }
    }

    /// Queued commands, toast timers excluded.
    pub fn requests(&mut self) -> Vec<PageCommand> {
        let mut out = Vec::new();
        while let Ok(command) = self.commands.try_recv() {
            if command.awaits_completion() {
                out.push(command);
            }
        }
        out
    }

    /// Run queued decodes synchronously and apply their results.
    pub fn finish_decodes(&mut self) {
        for command in self.requests() {
            match command {
                PageCommand::Decode { generation, upload } => {
                    let result = to_data_url(&upload).map(|preview| (upload, preview));
                    self.page
                        .handle_event(PageEvent::Decoded { generation, result });
                }
                other => panic!("expected Decode, got {:?}", other),
            }
        }
    }

    /// Take the one queued save.
    pub fn take_save(&mut self) -> (PendingSave, ImageRef) {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        match requests.remove(0) {
            PageCommand::Save { request, snapshot } => (request, snapshot),
            other => panic!("expected Save, got {:?}", other),
        }
    }

    pub fn answer_save(&mut self, snapshot: ImageRef, result: Result<SaveResponse, RemoteError>) {
        self.page
            .handle_event(PageEvent::SaveFinished { snapshot, result });
    }
}

/// Scripted `ProfileApi` for driver tests that need no network.
#[derive(Default)]
pub struct FakeApi {
    saves: Mutex<VecDeque<SaveResponse>>,
    toggles: Mutex<VecDeque<ToggleResponse>>,
    pub saved: Mutex<Vec<PendingSave>>,
    pub toggled: Mutex<Vec<(String, String)>>,
}

impl FakeApi {
    pub fn with_save(self, response: SaveResponse) -> Self {
        self.saves.lock().push_back(response);
        self
    }

    pub fn with_toggle(self, response: ToggleResponse) -> Self {
        self.toggles.lock().push_back(response);
        self
    }
}

#[async_trait]
impl ProfileApi for FakeApi {
    async fn save_avatar(&self, save: PendingSave) -> Result<SaveResponse, RemoteError> {
        self.saved.lock().push(save);
        Ok(self.saves.lock().pop_front().unwrap_or(SaveResponse {
            success: true,
            error: None,
        }))
    }

    async fn toggle_status(
        &self,
        url: &str,
        csrf_token: &str,
    ) -> Result<ToggleResponse, RemoteError> {
        self.toggled
            .lock()
            .push((url.to_string(), csrf_token.to_string()));
        Ok(self.toggles.lock().pop_front().unwrap_or(ToggleResponse {
            success: false,
            is_completed: false,
            message: String::new(),
        }))
    }
}
