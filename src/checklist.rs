//! Checklist State
//!
//! Which release tasks are done, mirrored to a key-value store under
//! [`CHECKLIST_STORAGE_KEY`]. Missing ids read as unchecked.

use std::collections::BTreeMap;

use kv_storage::KeyValueStore;
use leptos::logging::error;
use serde::{Deserialize, Serialize};

use crate::config::CHECKLIST_STORAGE_KEY;
use crate::error::ChecklistError;
use crate::models::ChecklistItem;

/// Item id -> done
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckedState(BTreeMap<String, bool>);

impl CheckedState {
    /// Read the persisted state. Absent or malformed data yields an empty state.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let raw = match store.get(CHECKLIST_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                error!("[CHECKLIST] Failed to load checklist: {}", e);
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                error!("[CHECKLIST] Failed to load checklist: {}", e);
                Self::default()
            }
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Copy of this state with exactly `id` flipped
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.0.clone();
        next.insert(id.to_string(), !self.is_checked(id));
        Self(next)
    }

    /// Write the full mapping to the store
    pub fn persist(&self, store: &impl KeyValueStore) -> Result<(), ChecklistError> {
        let raw = serde_json::to_string(&self.0)?;
        store.set(CHECKLIST_STORAGE_KEY, &raw)?;
        Ok(())
    }

    /// Flip `id`, persist, and return the new state.
    ///
    /// A failed write is logged; the returned state still carries the toggle
    /// so the page keeps reflecting what the user clicked.
    pub fn toggle_persisted(&self, id: &str, store: &impl KeyValueStore) -> Self {
        let next = self.toggled(id);
        if let Err(e) = next.persist(store) {
            error!("[CHECKLIST] Failed to save checklist after toggling {}: {}", id, e);
        }
        next
    }

    /// How many of `items` are checked
    pub fn completed(&self, items: &[ChecklistItem]) -> usize {
        items.iter().filter(|item| self.is_checked(item.id)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CHECKLIST_STEPS;
    use kv_storage::MemoryStore;

    fn persisted(store: &MemoryStore) -> serde_json::Value {
        let raw = store.get(CHECKLIST_STORAGE_KEY).unwrap().expect("checklist should be saved");
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_load_absent_is_empty() {
        let state = CheckedState::load(&MemoryStore::new());
        assert_eq!(state, CheckedState::default());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "null", "[true]", r#"{"d42-wav": 1}"#, r#"{"d42-wav": "yes"}"#, ""] {
            let store = MemoryStore::new().with_entry(CHECKLIST_STORAGE_KEY, raw);
            let state = CheckedState::load(&store);
            assert_eq!(state, CheckedState::default(), "raw={:?}", raw);
            for step in CHECKLIST_STEPS {
                for item in step.items {
                    assert!(!state.is_checked(item.id));
                }
            }
        }
    }

    #[test]
    fn test_load_valid_mapping() {
        let store = MemoryStore::new()
            .with_entry(CHECKLIST_STORAGE_KEY, r#"{"d42-wav":true,"d28-meta":false,"retired-id":true}"#);
        let state = CheckedState::load(&store);
        assert!(state.is_checked("d42-wav"));
        assert!(!state.is_checked("d28-meta"));
        assert!(state.is_checked("retired-id"));
        assert!(!state.is_checked("d14-ads"));
    }

    #[test]
    fn test_toggle_persists_and_flips_back() {
        let store = MemoryStore::new();
        let state = CheckedState::load(&store);

        let state = state.toggle_persisted("d42-wav", &store);
        assert!(state.is_checked("d42-wav"));
        assert_eq!(persisted(&store), serde_json::json!({ "d42-wav": true }));

        let state = state.toggle_persisted("d42-wav", &store);
        assert!(!state.is_checked("d42-wav"));
        assert_eq!(persisted(&store), serde_json::json!({ "d42-wav": false }));
    }

    #[test]
    fn test_toggle_keeps_other_entries() {
        let store = MemoryStore::new()
            .with_entry(CHECKLIST_STORAGE_KEY, r#"{"d42-art":true,"d14-pitch":false}"#);
        let before = CheckedState::load(&store);

        let after = before.toggle_persisted("d42-wav", &store);
        assert_eq!(
            persisted(&store),
            serde_json::json!({ "d42-art": true, "d14-pitch": false, "d42-wav": true })
        );

        // Reload from storage matches the in-memory state
        let reloaded = CheckedState::load(&store);
        assert_eq!(reloaded, after);
        assert!(reloaded.is_checked("d42-wav"));
        assert!(reloaded.is_checked("d42-art"));
        assert!(!reloaded.is_checked("d14-pitch"));

        // The previous snapshot is untouched
        assert!(!before.is_checked("d42-wav"));
    }

    #[test]
    fn test_write_failure_still_toggles_in_memory() {
        let store = MemoryStore::new().with_entry(CHECKLIST_STORAGE_KEY, r#"{"d42-art":true}"#);
        let state = CheckedState::load(&store);
        store.set_fail_writes(true);

        let next = state.toggle_persisted("d42-wav", &store);
        assert!(next.is_checked("d42-wav"));
        assert!(next.persist(&store).is_err());
        assert_eq!(persisted(&store), serde_json::json!({ "d42-art": true }));
    }

    #[test]
    fn test_completed_count() {
        let step = &CHECKLIST_STEPS[0];
        let state = CheckedState::default()
            .toggled(step.items[0].id)
            .toggled(step.items[2].id)
            .toggled("d28-upload");
        assert_eq!(state.completed(step.items), 2);
        assert_eq!(state.completed(CHECKLIST_STEPS[1].items), 1);
        assert_eq!(state.completed(CHECKLIST_STEPS[3].items), 0);
    }
}
