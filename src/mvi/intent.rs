//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (file chosen, preset picked, dialog button pressed)
/// - Continuations of asynchronous work (image decoded, save confirmed)
/// - Timer expirations
pub trait Intent: Send + 'static {}
