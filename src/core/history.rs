//! Bounded router history.
//!
//! History keeps a router's prior states, most recent first. Like state, it is
//! an immutable value: `record` returns a new history and leaves the original
//! untouched, so the owner can swap it in as a whole.

use super::state::RouterState;
use serde::{Deserialize, Serialize};

/// Number of prior states a router keeps unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Most-recent-first sequence of prior router states.
///
/// Invariants maintained by `record`:
/// - every entry has a defined visibility;
/// - the number of entries never exceeds the limit passed in.
///
/// # Example
///
/// ```rust
/// use router_state::core::{RouterHistory, RouterState, DEFAULT_HISTORY_LIMIT};
///
/// let history = RouterHistory::new();
/// let history = history.record(&RouterState::visible(), DEFAULT_HISTORY_LIMIT);
/// let history = history.record(&RouterState::hidden(), DEFAULT_HISTORY_LIMIT);
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest(), Some(&RouterState::hidden()));
///
/// // States without visibility are never retained
/// let history = history.record(&RouterState::empty(), DEFAULT_HISTORY_LIMIT);
/// assert_eq!(history.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouterHistory {
    entries: Vec<RouterState>,
}

impl RouterHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record `previous` at the front, returning a new history.
    ///
    /// The candidate list (previous state followed by the existing entries)
    /// is filtered down to states with a defined visibility and then cut to
    /// `limit` entries, dropping the oldest first. Identical consecutive
    /// states are kept; nothing is deduplicated.
    pub fn record(&self, previous: &RouterState, limit: usize) -> Self {
        let entries = std::iter::once(previous)
            .chain(self.entries.iter())
            .filter(|state| state.has_visibility())
            .take(limit)
            .cloned()
            .collect();
        Self { entries }
    }

    /// Most recent prior state.
    pub fn latest(&self) -> Option<&RouterState> {
        self.entries.first()
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[RouterState] {
        &self.entries
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &RouterState> {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no prior state has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Describe every way this history breaks the retention invariants for
    /// `limit`. An empty result means the history is well formed.
    pub fn violations(&self, limit: usize) -> Vec<String> {
        let mut problems = Vec::new();
        if self.entries.len() > limit {
            problems.push(format!(
                "history holds {} entries, limit is {}",
                self.entries.len(),
                limit
            ));
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.has_visibility() {
                problems.push(format!("history entry {index} has no visibility"));
            }
        }
        problems
    }
}

impl From<Vec<RouterState>> for RouterHistory {
    /// Wrap entries as-is. Use `violations` to check the result.
    fn from(entries: Vec<RouterState>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = RouterHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }

    #[test]
    fn record_prepends_previous_state() {
        let history = RouterHistory::new()
            .record(&RouterState::visible(), DEFAULT_HISTORY_LIMIT)
            .record(&RouterState::hidden(), DEFAULT_HISTORY_LIMIT);

        assert_eq!(
            history.entries(),
            &[RouterState::hidden(), RouterState::visible()]
        );
    }

    #[test]
    fn record_is_immutable() {
        let history = RouterHistory::new();
        let recorded = history.record(&RouterState::visible(), DEFAULT_HISTORY_LIMIT);

        assert!(history.is_empty());
        assert_eq!(recorded.len(), 1);
    }

    #[test]
    fn record_drops_states_without_visibility() {
        let history = RouterHistory::new().record(&RouterState::empty(), DEFAULT_HISTORY_LIMIT);
        assert!(history.is_empty());
    }

    #[test]
    fn record_filters_existing_entries_too() {
        let dirty = RouterHistory::from(vec![RouterState::empty(), RouterState::hidden()]);
        let history = dirty.record(&RouterState::visible(), DEFAULT_HISTORY_LIMIT);

        assert_eq!(
            history.entries(),
            &[RouterState::visible(), RouterState::hidden()]
        );
    }

    #[test]
    fn record_truncates_oldest_first() {
        let mut history = RouterHistory::new();
        for position in 0..8 {
            let state = RouterState::visible().with_field("position", position);
            history = history.record(&state, DEFAULT_HISTORY_LIMIT);
        }

        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
        let positions: Vec<_> = history
            .iter()
            .map(|s| s.field("position").and_then(|v| v.as_i64()))
            .collect();
        assert_eq!(positions, vec![Some(7), Some(6), Some(5), Some(4), Some(3)]);
    }

    #[test]
    fn record_keeps_duplicates() {
        let history = RouterHistory::new()
            .record(&RouterState::visible(), DEFAULT_HISTORY_LIMIT)
            .record(&RouterState::visible(), DEFAULT_HISTORY_LIMIT);

        assert_eq!(history.len(), 2);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let history = RouterHistory::new().record(&RouterState::visible(), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn violations_reports_every_problem() {
        let history = RouterHistory::from(vec![
            RouterState::visible(),
            RouterState::empty(),
            RouterState::hidden(),
        ]);

        let problems = history.violations(2);
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("limit is 2"));
        assert!(problems[1].contains("entry 1"));
    }

    #[test]
    fn well_formed_history_has_no_violations() {
        let history = RouterHistory::new().record(&RouterState::hidden(), DEFAULT_HISTORY_LIMIT);
        assert!(history.violations(DEFAULT_HISTORY_LIMIT).is_empty());
    }

    #[test]
    fn history_serializes_as_plain_list() {
        let history = RouterHistory::new().record(&RouterState::visible(), DEFAULT_HISTORY_LIMIT);
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"[{"visible":true}]"#);

        let back: RouterHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
