//! Core router state types.
//!
//! This module contains the pure value types the rest of the crate moves
//! around:
//! - `RouterState` snapshots
//! - bounded, filtered `RouterHistory`
//! - `Observable` cells and change notification
//!
//! Nothing here knows about the router tree; every operation either reads a
//! value or returns a new one.

mod history;
mod observable;
mod state;

pub use history::{RouterHistory, DEFAULT_HISTORY_LIMIT};
pub use observable::{ChangeEvent, ChangeListener, Observable, ObservedField};
pub use state::RouterState;
