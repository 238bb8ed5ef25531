//! Base trait for page state.

/// Marker trait for state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and default to what the page shows right after load.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
