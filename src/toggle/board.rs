use std::collections::HashMap;
use std::fmt;

use crate::config::Messages;

/// Identifier of one assignment row (the progress record id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    pub id: ItemId,
    /// Server-assigned toggle endpoint; opaque to the page.
    pub url: String,
    pub completed: bool,
}

pub const CLASS_MARK_COMPLETED: &str = "btn-success";
pub const CLASS_MARK_NOT_COMPLETED: &str = "btn-outline-danger";

/// How a row looks for a given status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Label names the action the button performs next.
    pub button_label: String,
    pub button_class: &'static str,
    /// Row background is highlighted (completed rows).
    pub highlighted: bool,
    /// Row title is muted (completed rows).
    pub muted: bool,
}

impl RowView {
    pub fn for_status(completed: bool, messages: &Messages) -> Self {
        if completed {
            Self {
                button_label: messages.mark_not_completed.clone(),
                button_class: CLASS_MARK_NOT_COMPLETED,
                highlighted: true,
                muted: true,
            }
        } else {
            Self {
                button_label: messages.mark_completed.clone(),
                button_class: CLASS_MARK_COMPLETED,
                highlighted: false,
                muted: false,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub item: ToggleItem,
    pub view: RowView,
}

/// All toggle rows on the page, keyed by item.
///
/// Built once at page load. Rows are never shared; a row may disappear
/// while one of its requests is still in flight.
#[derive(Debug, Clone, Default)]
pub struct ToggleBoard {
    rows: HashMap<ItemId, Row>,
}

impl ToggleBoard {
    pub fn new(items: impl IntoIterator<Item = ToggleItem>, messages: &Messages) -> Self {
        let rows = items
            .into_iter()
            .map(|item| {
                let view = RowView::for_status(item.completed, messages);
                (item.id, Row { item, view })
            })
            .collect();
        Self { rows }
    }

    pub fn row(&self, id: ItemId) -> Option<&Row> {
        self.rows.get(&id)
    }

    pub fn remove_row(&mut self, id: ItemId) -> Option<Row> {
        self.rows.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Record a server-confirmed status. Returns the new view, or `None`
    /// if the row is gone.
    pub fn apply_status(
        &mut self,
        id: ItemId,
        completed: bool,
        messages: &Messages,
    ) -> Option<&RowView> {
        let row = self.rows.get_mut(&id)?;
        row.item.completed = completed;
        row.view = RowView::for_status(completed, messages);
        Some(&row.view)
    }
}
