//! Rule toggle state
//!
//! Maps rule ids to enabled/disabled, remembering the order in which ids
//! were first toggled. Validation visits enabled rules in that order.

use serde::Serialize;

use super::constants::builtin_ids;
use crate::config::RuleId;

/// Whether a rule takes part in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Enabled,
    Disabled,
}

/// Insertion-ordered rule toggles.
///
/// Two states are equal when they enable the same ids in the same order.
/// A disabled entry and an absent one are indistinguishable.
#[derive(Debug, Clone, Default)]
pub struct ToggleState {
    entries: Vec<(RuleId, Toggle)>,
}

impl ToggleState {
    /// All built-in rules present and disabled
    pub fn new() -> Self {
        let mut state = Self::default();
        state.reset();
        state
    }

    /// Set a rule's toggle. A rule seen for the first time goes last.
    pub fn set(&mut self, rule_id: RuleId, toggle: Toggle) {
        match self.entries.iter_mut().find(|(id, _)| *id == rule_id) {
            Some(entry) => entry.1 = toggle,
            None => self.entries.push((rule_id, toggle)),
        }
    }

    /// Disable every built-in rule. Custom entries are left alone.
    pub fn reset(&mut self) {
        for rule_id in builtin_ids() {
            self.set(rule_id, Toggle::Disabled);
        }
    }

    /// Current toggle, if the rule was ever set
    pub fn get(&self, rule_id: &RuleId) -> Option<Toggle> {
        self.entries
            .iter()
            .find(|(id, _)| id == rule_id)
            .map(|(_, toggle)| *toggle)
    }

    /// Absent rules count as disabled
    pub fn is_enabled(&self, rule_id: &RuleId) -> bool {
        self.get(rule_id) == Some(Toggle::Enabled)
    }

    /// Enabled rule ids in insertion order
    pub fn enabled(&self) -> impl Iterator<Item = &RuleId> {
        self.entries
            .iter()
            .filter(|(_, toggle)| *toggle == Toggle::Enabled)
            .map(|(id, _)| id)
    }

    /// All entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&RuleId, Toggle)> {
        self.entries.iter().map(|(id, toggle)| (id, *toggle))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for ToggleState {
    fn eq(&self, other: &Self) -> bool {
        self.enabled().eq(other.enabled())
    }
}

impl Eq for ToggleState {}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> RuleId {
        RuleId::Numeric(n)
    }

    #[test]
    fn test_new_disables_builtins() {
        let state = ToggleState::new();
        assert_eq!(state.len(), 5);
        assert!(state.iter().all(|(_, toggle)| toggle == Toggle::Disabled));
        assert_eq!(state.enabled().count(), 0);
    }

    #[test]
    fn test_set_keeps_first_position() {
        let mut state = ToggleState::new();
        state.set(id(101), Toggle::Enabled);
        state.set(id(3), Toggle::Enabled);
        state.set(id(1), Toggle::Enabled);

        let enabled: Vec<_> = state.enabled().cloned().collect();
        assert_eq!(enabled, vec![id(1), id(3), id(101)]);
    }

    #[test]
    fn test_absent_is_disabled() {
        let state = ToggleState::new();
        assert_eq!(state.get(&id(101)), None);
        assert!(!state.is_enabled(&id(101)));
    }

    #[test]
    fn test_reset_leaves_custom_rules() {
        let mut state = ToggleState::new();
        state.set(id(1), Toggle::Enabled);
        state.set(id(101), Toggle::Enabled);

        state.reset();

        assert_eq!(state.get(&id(1)), Some(Toggle::Disabled));
        assert_eq!(state.get(&id(101)), Some(Toggle::Enabled));
        assert_eq!(state.get(&id(102)), None);
    }

    #[test]
    fn test_enable_then_disable_builtin_is_noop() {
        let mut state = ToggleState::new();
        state.set(id(2), Toggle::Enabled);
        state.set(id(2), Toggle::Disabled);
        assert_eq!(state, ToggleState::new());
    }

    #[test]
    fn test_enable_then_disable_custom_is_noop() {
        let mut state = ToggleState::new();
        state.set(id(101), Toggle::Enabled);
        state.set(id(101), Toggle::Disabled);

        assert_eq!(state.len(), 6);
        assert_eq!(state, ToggleState::new());
    }

    #[test]
    fn test_equality_follows_enabled_order() {
        let mut first = ToggleState::new();
        first.set(id(101), Toggle::Enabled);
        first.set(id(102), Toggle::Enabled);

        let mut second = ToggleState::new();
        second.set(id(102), Toggle::Enabled);
        second.set(id(101), Toggle::Enabled);

        assert_ne!(first, second);

        second.set(id(101), Toggle::Disabled);
        first.set(id(101), Toggle::Disabled);
        assert_eq!(first, second);
    }
}
