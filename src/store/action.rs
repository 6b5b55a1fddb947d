//! Base trait for actions (user/system events) dispatched to a store.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User actions (key presses, form submissions)
/// - System events (timers, startup)
///
/// Actions are the only vehicle for state change: they are processed by
/// reducers to produce new states.
pub trait Action: Send + 'static {}
