//! Per-row completion toggles for lab assignments.
//!
//! Status changes only after the server confirms them; there is no
//! optimistic update.

mod board;

pub use board::{
    ItemId, Row, RowView, ToggleBoard, ToggleItem, CLASS_MARK_COMPLETED,
    CLASS_MARK_NOT_COMPLETED,
};
