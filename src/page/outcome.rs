/// What the host should do with a link click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDisposition {
    /// No unsaved edits; navigation already happened.
    PassThrough,
    /// Default navigation suppressed; the dialog holds the target.
    Intercepted,
    /// Dialog already open and exclusive; the click was ignored.
    Rejected,
}

impl LinkDisposition {
    /// Whether the host must cancel the browser's default action.
    pub fn prevents_default(self) -> bool {
        !matches!(self, LinkDisposition::PassThrough)
    }
}

/// Answer to a `beforeunload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnloadDecision {
    Allow,
    /// Ask for the browser's native confirmation.
    Confirm { message: String },
}

/// Buttons of the unsaved-changes dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    SaveAndContinue,
    DiscardAndContinue,
    /// Close button: stay on the page, keep the edit.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStart {
    Issued,
    /// Nothing to save.
    NotDirty,
    /// The page carries no anti-forgery token; nothing was sent.
    MissingToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStart {
    Issued,
    UnknownItem,
    MissingToken,
}
