//! Observable fields and change notification.
//!
//! Router `state` and `history` are each held in an [`Observable`] cell. The
//! only way to change a cell is to replace its whole value, which bumps the
//! cell's revision. Whoever performs the replacement reports a [`ChangeEvent`]
//! to the registered [`ChangeListener`]s, so any reactive layer sees every
//! update the same way.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that can only be replaced as a whole.
///
/// # Example
///
/// ```rust
/// use router_state::core::Observable;
///
/// let mut cell = Observable::new(vec![1, 2]);
/// assert_eq!(cell.revision(), 0);
///
/// let old = cell.replace(vec![3]);
/// assert_eq!(old, vec![1, 2]);
/// assert_eq!(cell.get(), &vec![3]);
/// assert_eq!(cell.revision(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Observable<T> {
    value: T,
    revision: u64,
}

impl<T> Observable<T> {
    /// Wrap an initial value at revision 0.
    pub fn new(value: T) -> Self {
        Self { value, revision: 0 }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of replacements since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap in a new value, returning the previous one.
    pub fn replace(&mut self, value: T) -> T {
        self.revision += 1;
        std::mem::replace(&mut self.value, value)
    }
}

/// The two router fields that are observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservedField {
    State,
    History,
}

impl fmt::Display for ObservedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State => write!(f, "state"),
            Self::History => write!(f, "history"),
        }
    }
}

/// Notification that one observable field of one router was replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Name of the router whose field changed
    pub router: String,
    /// Which field was replaced
    pub field: ObservedField,
    /// Revision of the field after the replacement
    pub revision: u64,
}

/// Receiver of change notifications.
///
/// Implemented for any `Fn(&ChangeEvent)` closure.
pub trait ChangeListener: Send + Sync {
    fn on_change(&self, event: &ChangeEvent);
}

impl<F> ChangeListener for F
where
    F: Fn(&ChangeEvent) + Send + Sync,
{
    fn on_change(&self, event: &ChangeEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn new_cell_starts_at_revision_zero() {
        let cell = Observable::new("a");
        assert_eq!(cell.revision(), 0);
        assert_eq!(*cell.get(), "a");
    }

    #[test]
    fn replace_bumps_revision_even_for_equal_values() {
        let mut cell = Observable::new(1);
        cell.replace(1);
        cell.replace(1);
        assert_eq!(cell.revision(), 2);
    }

    #[test]
    fn closures_are_listeners() {
        let seen = Mutex::new(Vec::new());
        let listener = |event: &ChangeEvent| seen.lock().unwrap().push(event.clone());

        let event = ChangeEvent {
            router: "home".to_string(),
            field: ObservedField::History,
            revision: 3,
        };
        listener.on_change(&event);

        assert_eq!(seen.lock().unwrap().as_slice(), &[event]);
    }

    #[test]
    fn observed_field_displays_lowercase() {
        assert_eq!(ObservedField::State.to_string(), "state");
        assert_eq!(ObservedField::History.to_string(), "history");
    }
}
