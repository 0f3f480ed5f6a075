//! Manager configuration.

use crate::core::DEFAULT_HISTORY_LIMIT;
use crate::router::RouterKind;
use serde::{Deserialize, Serialize};

/// Tunables for a [`Manager`](crate::manager::Manager).
///
/// Deserializes from partial input; missing keys take their defaults.
///
/// # Example
///
/// ```rust
/// use router_state::config::ManagerConfig;
/// use router_state::router::RouterKind;
///
/// let config: ManagerConfig = serde_json::from_str(r#"{ "skip_unchanged": true }"#).unwrap();
/// assert_eq!(config.history_limit, 5);
/// assert_eq!(config.default_kind, RouterKind::Scene);
/// assert!(config.skip_unchanged);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Maximum number of prior states kept per router. Must be between 1
    /// and 5; `ManagerBuilder::build` rejects anything else.
    pub history_limit: usize,

    /// Kind given to routers registered without one
    pub default_kind: RouterKind,

    /// Leave history alone when a navigation event yields the router's
    /// current state again. Off by default: every event records history.
    pub skip_unchanged: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_kind: RouterKind::Scene,
            skip_unchanged: false,
        }
    }
}
