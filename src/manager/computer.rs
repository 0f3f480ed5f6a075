//! The external state computer seam.

use super::tree::RouterTree;
use crate::core::RouterState;
use crate::router::Router;
use std::collections::HashMap;

/// New state per router name, as produced for one navigation event.
pub type StateMap = HashMap<String, RouterState>;

/// Computes each router's next state for a location.
///
/// Location parsing, path matching and routing tables all live behind this
/// trait. Implementations must be total and side-effect free: they always
/// return a map, leaving out routers the location does not affect.
///
/// Any `Fn(&L, &Router, &RouterTree) -> StateMap` closure is a computer.
pub trait StateComputer<L>: Send + Sync {
    fn compute(&self, location: &L, root: &Router, tree: &RouterTree) -> StateMap;
}

impl<L, F> StateComputer<L> for F
where
    F: Fn(&L, &Router, &RouterTree) -> StateMap + Send + Sync,
{
    fn compute(&self, location: &L, root: &Router, tree: &RouterTree) -> StateMap {
        self(location, root, tree)
    }
}
