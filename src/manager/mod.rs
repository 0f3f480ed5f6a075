//! The router manager.
//!
//! A [`Manager`] owns the router registry and drives it:
//! - `create_init_args` resolves construction parameters against the registry
//! - `create_router` builds a router and derives its initial state
//! - `apply_location` moves every affected router to its next state
//!
//! The manager is an explicit value passed around by the caller; there is no
//! global registry.

mod computer;
mod factory;
mod init;
mod transition;
mod tree;

pub use computer::{StateComputer, StateMap};
pub use init::{InitArgs, InitParams};
pub use tree::RouterTree;

use crate::builder::ManagerBuilder;
use crate::config::ManagerConfig;
use crate::core::{ChangeEvent, ChangeListener};
use crate::router::{Router, RouterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Identity of a manager, recorded in every router it creates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagerId(Uuid);

impl ManagerId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Owner of a router tree, generic over the caller's location type `L`.
///
/// Navigation events are processed one at a time: `apply_location` takes
/// `&mut self`, so no registration or removal can overlap a transition.
pub struct Manager<L> {
    pub(crate) id: ManagerId,
    pub(crate) config: ManagerConfig,
    pub(crate) tree: RouterTree,
    pub(crate) computer: Box<dyn StateComputer<L>>,
    pub(crate) listeners: Vec<Arc<dyn ChangeListener>>,
}

impl<L> Manager<L> {
    /// Start building a manager.
    pub fn builder() -> ManagerBuilder<L> {
        ManagerBuilder::new()
    }

    pub fn id(&self) -> ManagerId {
        self.id
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// The router registry.
    pub fn routers(&self) -> &RouterTree {
        &self.tree
    }

    pub fn router(&self, name: &str) -> Option<&Router> {
        self.tree.get(name)
    }

    pub fn root(&self) -> Option<&Router> {
        self.tree.root()
    }

    /// Register a change listener for every later state or history replacement.
    pub fn subscribe(&mut self, listener: Arc<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    /// Build a router from `params` and register it.
    ///
    /// When `actions` is empty the router gets its kind's default actions.
    /// The first router registered without a parent becomes the root.
    ///
    /// # Errors
    ///
    /// - `DuplicateRouter` if the name is taken
    /// - `RootAlreadyDefined` if `params` names no parent and a root exists
    pub fn add_router(
        &mut self,
        params: InitParams,
        actions: Vec<String>,
    ) -> Result<&Router, RouterError> {
        if self.tree.contains(&params.name) {
            return Err(RouterError::DuplicateRouter { name: params.name });
        }
        if params.parent_name.is_none() {
            if let Some(existing) = self.tree.root_name() {
                return Err(RouterError::RootAlreadyDefined {
                    existing: existing.to_string(),
                    attempted: params.name,
                });
            }
        }

        let init_args = self.create_init_args(&params);
        let actions = if actions.is_empty() {
            init_args
                .kind
                .default_actions()
                .iter()
                .map(|a| a.to_string())
                .collect()
        } else {
            actions
        };
        let router = self.create_router(init_args, actions);
        let name = router.name().to_string();
        self.tree.insert(router);

        self.tree
            .get(&name)
            .ok_or(RouterError::RouterNotFound { name })
    }

    /// Remove a router and its subtree, returning the removed names.
    ///
    /// # Errors
    ///
    /// `RouterNotFound` if no router has that name.
    pub fn remove_router(&mut self, name: &str) -> Result<Vec<String>, RouterError> {
        if !self.tree.contains(name) {
            return Err(RouterError::RouterNotFound {
                name: name.to_string(),
            });
        }
        let removed = self.tree.remove(name);
        debug!(router = name, removed = removed.len(), "removed router subtree");
        Ok(removed)
    }

    pub(crate) fn notify(&self, events: &[ChangeEvent]) {
        for event in events {
            for listener in &self.listeners {
                listener.on_change(event);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::router::{RouterConfig, RouterKind};

    #[test]
    fn first_parentless_router_becomes_root() {
        let mut manager = manager();
        manager.add_router(InitParams::new("root"), vec![]).unwrap();

        let root = manager.root().unwrap();
        assert_eq!(root.name(), "root");
        assert!(root.is_root());
        assert_eq!(root.root(), "root");
        assert_eq!(root.manager(), manager.id());
    }

    #[test]
    fn second_parentless_router_is_rejected() {
        let mut manager = manager();
        manager.add_router(InitParams::new("root"), vec![]).unwrap();

        let err = manager
            .add_router(InitParams::new("other"), vec![])
            .unwrap_err();
        assert_eq!(
            err,
            RouterError::RootAlreadyDefined {
                existing: "root".to_string(),
                attempted: "other".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut manager = manager();
        manager.add_router(InitParams::new("root"), vec![]).unwrap();
        manager
            .add_router(child("a", "root", RouterConfig::default()), vec![])
            .unwrap();

        let err = manager
            .add_router(child("a", "root", RouterConfig::default()), vec![])
            .unwrap_err();
        assert_eq!(err, RouterError::DuplicateRouter { name: "a".into() });
    }

    #[test]
    fn children_are_linked_to_parent() {
        let mut manager = manager();
        manager.add_router(InitParams::new("root"), vec![]).unwrap();
        manager
            .add_router(child("a", "root", RouterConfig::default()), vec![])
            .unwrap();
        manager
            .add_router(child("b", "root", RouterConfig::default()), vec![])
            .unwrap();

        assert_eq!(manager.root().unwrap().children(), &["a", "b"]);
        let names: Vec<_> = manager
            .routers()
            .children("root")
            .iter()
            .map(|r| r.name())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn empty_actions_fall_back_to_kind_defaults() {
        let mut manager = manager();
        let root = manager
            .add_router(InitParams::new("root").kind(RouterKind::Stack), vec![])
            .unwrap();

        assert!(root.can("to_front"));
        assert!(!root.can("set_data"));
    }

    #[test]
    fn explicit_actions_are_kept() {
        let mut manager = manager();
        let root = manager
            .add_router(InitParams::new("root"), vec!["show".to_string()])
            .unwrap();

        assert_eq!(root.actions(), &["show"]);
        assert!(!root.can("hide"));
    }

    #[test]
    fn remove_router_drops_subtree_and_unlinks_parent() {
        let mut manager = manager();
        manager.add_router(InitParams::new("root"), vec![]).unwrap();
        manager
            .add_router(child("a", "root", RouterConfig::default()), vec![])
            .unwrap();
        manager
            .add_router(child("a1", "a", RouterConfig::default()), vec![])
            .unwrap();
        manager
            .add_router(child("b", "root", RouterConfig::default()), vec![])
            .unwrap();

        let mut removed = manager.remove_router("a").unwrap();
        removed.sort();

        assert_eq!(removed, vec!["a", "a1"]);
        assert_eq!(manager.routers().len(), 2);
        assert_eq!(manager.root().unwrap().children(), &["b"]);
    }

    #[test]
    fn removing_root_clears_tree() {
        let mut manager = manager();
        manager.add_router(InitParams::new("root"), vec![]).unwrap();
        manager
            .add_router(child("a", "root", RouterConfig::default()), vec![])
            .unwrap();

        manager.remove_router("root").unwrap();

        assert!(manager.routers().is_empty());
        assert!(manager.root().is_none());
        manager.add_router(InitParams::new("fresh"), vec![]).unwrap();
        assert_eq!(manager.root().unwrap().name(), "fresh");
    }

    #[test]
    fn child_added_after_root_removal_does_not_become_root() {
        let mut manager = manager();
        manager.add_router(InitParams::new("root"), vec![]).unwrap();
        manager
            .add_router(InitParams::new("orphan").parent("missing"), vec![])
            .unwrap();
        manager.remove_router("root").unwrap();
        assert!(manager.router("orphan").is_some());
        assert!(manager.root().is_none());

        let child = manager
            .add_router(InitParams::new("child").parent("orphan"), vec![])
            .unwrap();
        assert_eq!(child.parent(), Some("orphan"));
        assert!(!child.is_root());

        assert!(manager.root().is_none());
        assert!(!manager.router("orphan").unwrap().is_root());
        assert_eq!(manager.router("orphan").unwrap().children(), ["child"]);
    }

    #[test]
    fn removing_unknown_router_is_an_error() {
        let mut manager = manager();
        assert_eq!(
            manager.remove_router("ghost"),
            Err(RouterError::RouterNotFound {
                name: "ghost".into()
            })
        );
    }
}
