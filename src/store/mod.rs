//! Unidirectional data flow primitives.
//!
//! This module provides the state container and the base traits it is
//! built on.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── dispatch ────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of application state
//! - **Action**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Store**: Single owner of the current state; mediates reads,
//!   dispatches, and change notification

mod action;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
pub use store::{Store, Subscription};
