//! Base trait for state held by a store.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
