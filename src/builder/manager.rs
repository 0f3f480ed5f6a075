//! Builder for constructing router managers.

use crate::builder::error::BuildError;
use crate::config::ManagerConfig;
use crate::core::{ChangeListener, DEFAULT_HISTORY_LIMIT};
use crate::manager::{Manager, ManagerId, RouterTree, StateComputer};
use crate::router::RouterKind;
use std::sync::Arc;
use tracing::debug;

/// Builder for constructing managers with a fluent API.
///
/// # Example
///
/// ```rust
/// use router_state::builder::ManagerBuilder;
/// use router_state::manager::{RouterTree, StateMap};
/// use router_state::router::Router;
///
/// let manager = ManagerBuilder::new()
///     .history_limit(3)
///     .computer(|_: &String, _: &Router, _: &RouterTree| StateMap::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(manager.config().history_limit, 3);
/// ```
pub struct ManagerBuilder<L> {
    config: ManagerConfig,
    computer: Option<Box<dyn StateComputer<L>>>,
    listeners: Vec<Arc<dyn ChangeListener>>,
}

impl<L> ManagerBuilder<L> {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: ManagerConfig::default(),
            computer: None,
            listeners: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Maximum history length, between 1 and 5.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Kind given to routers registered without one.
    pub fn default_kind(mut self, kind: RouterKind) -> Self {
        self.config.default_kind = kind;
        self
    }

    pub fn skip_unchanged(mut self, skip: bool) -> Self {
        self.config.skip_unchanged = skip;
        self
    }

    /// Set the state computer (required).
    pub fn computer<C>(mut self, computer: C) -> Self
    where
        C: StateComputer<L> + 'static,
    {
        self.computer = Some(Box::new(computer));
        self
    }

    /// Add a change listener.
    pub fn listener<C>(mut self, listener: C) -> Self
    where
        C: ChangeListener + 'static,
    {
        self.listeners.push(Arc::new(listener));
        self
    }

    /// Build the manager.
    /// Returns an error if the computer is missing or the configuration is invalid.
    pub fn build(self) -> Result<Manager<L>, BuildError> {
        let computer = self.computer.ok_or(BuildError::MissingStateComputer)?;

        match self.config.history_limit {
            0 => return Err(BuildError::ZeroHistoryLimit),
            limit if limit > DEFAULT_HISTORY_LIMIT => {
                return Err(BuildError::HistoryLimitTooLarge {
                    limit,
                    max: DEFAULT_HISTORY_LIMIT,
                })
            }
            _ => {}
        }

        let id = ManagerId::new();
        debug!(
            manager = %id,
            history_limit = self.config.history_limit,
            default_kind = %self.config.default_kind,
            skip_unchanged = self.config.skip_unchanged,
            "built router manager"
        );

        Ok(Manager {
            id,
            config: self.config,
            tree: RouterTree::default(),
            computer,
            listeners: self.listeners,
        })
    }
}

impl<L> Default for ManagerBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChangeEvent, RouterState};
    use crate::manager::{InitParams, StateMap};
    use crate::router::Router;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn echo(location: &StateMap, _: &Router, _: &RouterTree) -> StateMap {
        location.clone()
    }

    #[test]
    fn builder_requires_computer() {
        let result = ManagerBuilder::<StateMap>::new().build();

        assert!(matches!(result, Err(BuildError::MissingStateComputer)));
    }

    #[test]
    fn builder_rejects_zero_history_limit() {
        let result = ManagerBuilder::new().history_limit(0).computer(echo).build();

        assert!(matches!(result, Err(BuildError::ZeroHistoryLimit)));
    }

    #[test]
    fn builder_rejects_history_limit_above_five() {
        let result = ManagerBuilder::new().history_limit(6).computer(echo).build();
        assert!(matches!(
            result,
            Err(BuildError::HistoryLimitTooLarge { limit: 6, max: 5 })
        ));

        let config = ManagerConfig {
            history_limit: 50,
            ..ManagerConfig::default()
        };
        let result = ManagerBuilder::new().config(config).computer(echo).build();
        assert!(matches!(result, Err(BuildError::HistoryLimitTooLarge { .. })));

        assert!(ManagerBuilder::new().history_limit(5).computer(echo).build().is_ok());
    }

    #[test]
    fn fluent_api_sets_config() {
        let manager = ManagerBuilder::new()
            .history_limit(4)
            .default_kind(RouterKind::Data)
            .skip_unchanged(true)
            .computer(echo)
            .build()
            .unwrap();

        assert_eq!(
            manager.config(),
            &ManagerConfig {
                history_limit: 4,
                default_kind: RouterKind::Data,
                skip_unchanged: true,
            }
        );
        assert!(manager.routers().is_empty());
    }

    #[test]
    fn managers_get_distinct_ids() {
        let a = ManagerBuilder::new().computer(echo).build().unwrap();
        let b = ManagerBuilder::new().computer(echo).build().unwrap();

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn registered_listeners_are_notified() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let mut manager = ManagerBuilder::new()
            .computer(echo)
            .listener(move |_: &ChangeEvent| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();
        manager.add_router(InitParams::new("root"), vec![]).unwrap();

        let mut location = StateMap::new();
        location.insert("root".to_string(), RouterState::hidden());
        manager.apply_location(&location);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
