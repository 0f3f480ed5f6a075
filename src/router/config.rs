//! Per-router configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Action name that makes a router visible.
pub const SHOW_ACTION: &str = "show";

/// Configuration attached to a single router.
///
/// Only `default_action` is interpreted by this crate; everything else is
/// carried along untouched in `extra` for the action layer.
///
/// # Example
///
/// ```rust
/// use router_state::router::RouterConfig;
///
/// let config = RouterConfig::with_default_actions(["show"]);
/// assert!(config.shows_by_default());
///
/// assert!(!RouterConfig::default().shows_by_default());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
    /// Actions applied when the router's parent becomes visible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_action: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RouterConfig {
    pub fn with_default_actions<I, A>(actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            default_action: Some(actions.into_iter().map(Into::into).collect()),
            extra: Map::new(),
        }
    }

    /// Default actions, empty when none are configured.
    pub fn default_actions(&self) -> &[String] {
        self.default_action.as_deref().unwrap_or(&[])
    }

    /// Whether the default actions include `show`.
    pub fn shows_by_default(&self) -> bool {
        self.default_actions().iter().any(|a| a == SHOW_ACTION)
    }
}
