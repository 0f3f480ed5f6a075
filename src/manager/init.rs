//! Router construction parameters.

use super::{Manager, ManagerId};
use crate::router::{RouterConfig, RouterKind};
use tracing::{debug, warn};

/// Raw parameters describing a router to construct.
///
/// # Example
///
/// ```rust
/// use router_state::manager::InitParams;
/// use router_state::router::{RouterConfig, RouterKind};
///
/// let params = InitParams::new("inbox")
///     .kind(RouterKind::Stack)
///     .parent("root")
///     .config(RouterConfig::with_default_actions(["show"]));
///
/// assert_eq!(params.parent_name.as_deref(), Some("root"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InitParams {
    pub name: String,
    pub config: RouterConfig,
    /// `None` selects the manager's configured default kind
    pub kind: Option<RouterKind>,
    pub parent_name: Option<String>,
}

impl InitParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: RouterConfig::default(),
            kind: None,
            parent_name: None,
        }
    }

    pub fn kind(mut self, kind: RouterKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn parent(mut self, parent_name: impl Into<String>) -> Self {
        self.parent_name = Some(parent_name.into());
        self
    }

    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }
}

/// Fully resolved arguments for the router factory.
#[derive(Clone, Debug, PartialEq)]
pub struct InitArgs {
    pub name: String,
    /// Owned copy of the caller's configuration
    pub config: RouterConfig,
    pub kind: RouterKind,
    /// Parent name, present only if the parent is registered
    pub parent: Option<String>,
    /// Child names, filled in as children register
    pub routers: Vec<String>,
    pub manager: ManagerId,
    /// Root name; the router's own name only while a parentless root is built
    pub root: String,
}

impl<L> Manager<L> {
    /// Resolve `params` against the registry.
    ///
    /// Never fails: an unregistered parent resolves to `None`, and a missing
    /// kind falls back to `ManagerConfig::default_kind`.
    pub fn create_init_args(&self, params: &InitParams) -> InitArgs {
        let parent = params
            .parent_name
            .as_deref()
            .and_then(|name| self.tree.get(name))
            .map(|parent| parent.name().to_string());
        if let (Some(requested), None) = (params.parent_name.as_deref(), parent.as_ref()) {
            warn!(
                router = %params.name,
                parent = requested,
                "parent router is not registered, constructing without parent"
            );
        }

        let kind = params.kind.unwrap_or_else(|| {
            debug!(
                router = %params.name,
                kind = %self.config.default_kind,
                "no router kind given, using configured default"
            );
            self.config.default_kind
        });

        // Only a parentless router may stand in for a missing root. A child
        // of a registered parent in a rootless tree inherits the parent's
        // root name, which is never its own.
        let root = match (self.tree.root_name(), parent.as_deref()) {
            (Some(root), _) => root.to_string(),
            (None, None) => params.name.clone(),
            (None, Some(parent)) => self
                .tree
                .get(parent)
                .map_or_else(|| parent.to_string(), |parent| parent.root().to_string()),
        };

        InitArgs {
            name: params.name.clone(),
            config: params.config.clone(),
            kind,
            parent,
            routers: Vec::new(),
            manager: self.id,
            root,
        }
    }
}
