//! Router registry.

use crate::router::Router;
use std::collections::HashMap;

/// Name-keyed registry of every router a manager owns.
///
/// The tree shape lives in the routers themselves (parent and child names);
/// the registry only owns the nodes and remembers which one is the root.
#[derive(Clone, Debug, Default)]
pub struct RouterTree {
    routers: HashMap<String, Router>,
    root: Option<String>,
}

impl RouterTree {
    /// Look up a router by name.
    pub fn get(&self, name: &str) -> Option<&Router> {
        self.routers.get(name)
    }

    /// True when a router with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.routers.contains_key(name)
    }

    /// The root router, if one is registered.
    pub fn root(&self) -> Option<&Router> {
        self.root.as_deref().and_then(|name| self.routers.get(name))
    }

    /// Name of the root router, if one is registered.
    pub fn root_name(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Every registered router, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Router> {
        self.routers.values()
    }

    /// Number of registered routers.
    pub fn len(&self) -> usize {
        self.routers.len()
    }

    /// True when no router is registered.
    pub fn is_empty(&self) -> bool {
        self.routers.is_empty()
    }

    /// Direct children of `name`, skipping names that are no longer registered.
    pub fn children(&self, name: &str) -> Vec<&Router> {
        self.get(name)
            .map(|router| {
                router
                    .children()
                    .iter()
                    .filter_map(|child| self.routers.get(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Router> {
        self.routers.get_mut(name)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Router> {
        self.routers.values_mut()
    }

    /// Register a router. The caller has already checked the name is free.
    pub(crate) fn insert(&mut self, router: Router) {
        if router.is_root() && router.parent().is_none() {
            self.root = Some(router.name().to_string());
        }
        if let Some(parent) = router.parent.as_deref() {
            if let Some(parent) = self.routers.get_mut(parent) {
                parent.children.push(router.name.clone());
            }
        }
        self.routers.insert(router.name.clone(), router);
    }

    /// Remove a router and its whole subtree, returning the removed names.
    pub(crate) fn remove(&mut self, name: &str) -> Vec<String> {
        let Some(router) = self.routers.get(name) else {
            return Vec::new();
        };
        if let Some(parent) = router.parent.clone() {
            if let Some(parent) = self.routers.get_mut(&parent) {
                parent.children.retain(|child| child != name);
            }
        }

        let mut removed = Vec::new();
        let mut pending = vec![name.to_string()];
        while let Some(next) = pending.pop() {
            if let Some(router) = self.routers.remove(&next) {
                pending.extend(router.children);
                removed.push(next);
            }
        }
        if self.root.as_deref().is_some_and(|root| removed.iter().any(|r| r == root)) {
            self.root = None;
        }
        removed
    }
}
