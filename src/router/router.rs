//! The router node.

use super::config::RouterConfig;
use super::kind::RouterKind;
use crate::core::{ChangeEvent, Observable, ObservedField, RouterHistory, RouterState};
use crate::manager::ManagerId;

/// One named node of the router tree.
///
/// Identity fields are fixed at construction. `state` and `history` are held
/// in [`Observable`] cells and only change by whole-value replacement, which
/// the owning manager performs during navigation.
///
/// Parent and root are referenced by name; the manager's registry owns
/// every router.
#[derive(Clone, Debug)]
pub struct Router {
    pub(crate) name: String,
    pub(crate) kind: RouterKind,
    pub(crate) config: RouterConfig,
    pub(crate) parent: Option<String>,
    pub(crate) root: String,
    pub(crate) manager: ManagerId,
    pub(crate) children: Vec<String>,
    pub(crate) actions: Vec<String>,
    pub(crate) state: Observable<RouterState>,
    pub(crate) history: Observable<RouterHistory>,
}

impl Router {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RouterKind {
        self.kind
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Name of the parent router, `None` for the root and for orphans.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Name of the tree's root router.
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn is_root(&self) -> bool {
        self.root == self.name
    }

    /// Identity of the manager that created this router.
    pub fn manager(&self) -> ManagerId {
        self.manager
    }

    /// Names of direct children, in registration order.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Actions this router is permitted to perform.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn can(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }

    pub fn state(&self) -> &RouterState {
        self.state.get()
    }

    pub fn history(&self) -> &RouterHistory {
        self.history.get()
    }

    pub fn state_revision(&self) -> u64 {
        self.state.revision()
    }

    pub fn history_revision(&self) -> u64 {
        self.history.revision()
    }

    /// Replace state and history as whole values.
    ///
    /// Returns one change event per replaced field, state first.
    pub(crate) fn replace(
        &mut self,
        state: RouterState,
        history: RouterHistory,
    ) -> [ChangeEvent; 2] {
        self.state.replace(state);
        self.history.replace(history);
        [
            self.change_event(ObservedField::State),
            self.change_event(ObservedField::History),
        ]
    }

    fn change_event(&self, field: ObservedField) -> ChangeEvent {
        let revision = match field {
            ObservedField::State => self.state.revision(),
            ObservedField::History => self.history.revision(),
        };
        ChangeEvent {
            router: self.name.clone(),
            field,
            revision,
        }
    }
}
