//! Router construction and initial state.

use super::init::InitArgs;
use super::Manager;
use crate::core::{Observable, RouterHistory, RouterState};
use crate::router::Router;
use tracing::debug;

impl<L> Manager<L> {
    /// Instantiate a router from resolved arguments.
    ///
    /// The router's `state` and `history` start out as fresh observable
    /// cells. Initial state is derived once, in order of precedence:
    /// 1. parent registered and visible: `{ visible: <own default actions include "show"> }`
    /// 2. router is the root: `{ visible: true }`
    /// 3. otherwise: `{}` with no visibility
    ///
    /// The router is returned, not registered; see `add_router`.
    pub fn create_router(&self, init_args: InitArgs, actions: Vec<String>) -> Router {
        let state = self.initial_state(&init_args);
        let router = Router {
            name: init_args.name,
            kind: init_args.kind,
            config: init_args.config,
            parent: init_args.parent,
            root: init_args.root,
            manager: init_args.manager,
            children: init_args.routers,
            actions,
            state: Observable::new(state),
            history: Observable::new(RouterHistory::new()),
        };

        debug!(
            router = router.name(),
            kind = %router.kind(),
            parent = router.parent(),
            visible = ?router.state().visibility(),
            "created router"
        );
        router
    }

    fn initial_state(&self, init_args: &InitArgs) -> RouterState {
        let parent_visible = init_args
            .parent
            .as_deref()
            .and_then(|name| self.tree.get(name))
            .is_some_and(|parent| parent.state().is_visible());

        if parent_visible {
            RouterState::with_visibility(init_args.config.shows_by_default())
        } else if init_args.root == init_args.name {
            RouterState::visible()
        } else {
            RouterState::empty()
        }
    }
}
