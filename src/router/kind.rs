//! Router kinds.
//!
//! Each router is one of a closed set of kinds. The kind decides which
//! actions a router offers when none are given explicitly.

use super::error::RouterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The concrete variant of a router.
///
/// # Example
///
/// ```rust
/// use router_state::router::RouterKind;
///
/// let kind: RouterKind = "stack".parse().unwrap();
/// assert_eq!(kind, RouterKind::Stack);
/// assert!(kind.default_actions().contains(&"to_front"));
///
/// assert!("carousel".parse::<RouterKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterKind {
    /// Exclusive region: showing one sibling hides the others
    Scene,
    /// Ordered layers: siblings can be moved to the front or back
    Stack,
    /// Independent region toggled on its own
    Feature,
    /// Region that carries a data payload alongside visibility
    Data,
}

impl RouterKind {
    pub const ALL: [RouterKind; 4] = [Self::Scene, Self::Stack, Self::Feature, Self::Data];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scene => "scene",
            Self::Stack => "stack",
            Self::Feature => "feature",
            Self::Data => "data",
        }
    }

    /// Actions a router of this kind may perform when none are specified.
    pub fn default_actions(&self) -> &'static [&'static str] {
        match self {
            Self::Scene | Self::Feature => &["show", "hide"],
            Self::Stack => &["show", "hide", "forward", "backward", "to_front", "to_back"],
            Self::Data => &["show", "hide", "set_data"],
        }
    }
}

impl fmt::Display for RouterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouterKind {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RouterError::UnknownRouterKind(s.to_string()))
    }
}
