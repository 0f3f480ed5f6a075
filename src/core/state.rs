//! Router state values.
//!
//! A `RouterState` is an immutable snapshot of one router's visibility plus any
//! action-derived data. State is never edited in place: a transition builds a
//! new value and replaces the old one as a whole.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const VISIBLE_KEY: &str = "visible";

/// Snapshot of a router's visibility and action-derived fields.
///
/// `visible` is optional: a router created under a hidden parent has no
/// defined visibility until the first navigation event gives it one.
///
/// # Example
///
/// ```rust
/// use router_state::core::RouterState;
///
/// let shown = RouterState::visible();
/// assert_eq!(shown.visibility(), Some(true));
///
/// let pending = RouterState::empty();
/// assert!(!pending.has_visibility());
///
/// let with_data = RouterState::hidden().with_field("data", "inbox");
/// assert_eq!(with_data.field("data"), Some(&serde_json::json!("inbox")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouterState {
    /// Whether the router's region is shown; `None` means not yet defined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Additional fields set by router actions (stack order, data, ...).
    /// Never holds a `visible` key.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl RouterState {
    /// State with no defined visibility.
    pub fn empty() -> Self {
        Self::default()
    }

    /// State with `visible: true`.
    pub fn visible() -> Self {
        Self::with_visibility(true)
    }

    /// State with `visible: false`.
    pub fn hidden() -> Self {
        Self::with_visibility(false)
    }

    pub fn with_visibility(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            extra: Map::new(),
        }
    }

    /// Return a copy of this state with an extra field set.
    ///
    /// A `visible` key sets the visibility instead: a boolean defines it,
    /// `null` clears it, and any other value is ignored.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == VISIBLE_KEY {
            match value {
                Value::Bool(visible) => self.visible = Some(visible),
                Value::Null => self.visible = None,
                _ => {}
            }
        } else {
            self.extra.insert(key, value);
        }
        self
    }

    pub fn visibility(&self) -> Option<bool> {
        self.visible
    }

    /// True only when visibility is defined and set.
    pub fn is_visible(&self) -> bool {
        self.visible == Some(true)
    }

    /// True when the state carries a visibility flag at all.
    ///
    /// Only such states are retained in router history.
    pub fn has_visibility(&self) -> bool {
        self.visible.is_some()
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Action-derived fields, without visibility.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.extra
    }
}
