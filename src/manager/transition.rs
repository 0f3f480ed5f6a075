//! Tree-wide state transitions.

use super::Manager;
use tracing::{debug, instrument, trace};

impl<L> Manager<L> {
    /// Move every affected router to its next state for `location`.
    ///
    /// The state computer is called once with the root. Each router it
    /// returns a state for has its current state pushed onto the front of
    /// its history (states without visibility are dropped, the list is cut to
    /// `history_limit`) and then gets the new state. Both fields are replaced
    /// as whole values and each replacement is reported to listeners.
    /// Routers missing from the computed map are left as they are.
    ///
    /// Repeating the same location records the pre-event state again every
    /// time, so history fills up with duplicates unless `skip_unchanged` is set.
    #[instrument(skip_all, fields(manager = %self.id))]
    pub fn apply_location(&mut self, location: &L) {
        let Some(root) = self.tree.root() else {
            debug!("no root router registered, ignoring location");
            return;
        };
        let mut next_states = self.computer.compute(location, root, &self.tree);

        let limit = self.config.history_limit;
        let skip_unchanged = self.config.skip_unchanged;
        let mut events = Vec::new();

        for router in self.tree.iter_mut() {
            let Some(next) = next_states.remove(router.name()) else {
                trace!(router = router.name(), "no new state, leaving router untouched");
                continue;
            };
            if skip_unchanged && router.state() == &next {
                trace!(router = router.name(), "state unchanged, skipping");
                continue;
            }

            let history = router.history().record(router.state(), limit);
            debug!(
                router = router.name(),
                from = ?router.state().visibility(),
                to = ?next.visibility(),
                history = history.len(),
                "applying router state"
            );
            events.extend(router.replace(next, history));
        }

        if !next_states.is_empty() {
            let unknown: Vec<&String> = next_states.keys().collect();
            trace!(?unknown, "computed states for unregistered routers");
        }
        self.notify(&events);
    }
}
