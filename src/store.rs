//! Widget State Store
//!
//! One reactive_stores store per widget instance.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ItemId;
use crate::todo::TodoList;

/// Per-widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct WidgetState {
    /// Items, source of truth for the rendered list
    pub list: TodoList,
    /// Current text input value
    pub draft: String,
}

pub type WidgetStore = Store<WidgetState>;

pub fn new_widget_store() -> WidgetStore {
    Store::new(WidgetState::default())
}

// ========================
// Store Helper Functions
// ========================

/// Append an item; `completed` defaults to false
pub fn store_add_item(store: &WidgetStore, text: String, completed: Option<bool>) -> ItemId {
    store.list().write().add(text, completed.unwrap_or(false))
}

/// Flip an item's completed flag by ID
pub fn store_toggle_item(store: &WidgetStore, item_id: ItemId) -> bool {
    store.list().write().toggle(item_id)
}

/// Remove an item by ID
pub fn store_remove_item(store: &WidgetStore, item_id: ItemId) -> bool {
    store.list().write().remove(item_id)
}

pub fn store_set_draft(store: &WidgetStore, value: String) {
    store.draft().set(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_do_not_share_items() {
        let first = new_widget_store();
        let second = new_widget_store();

        store_add_item(&first, "Buy milk".to_string(), None);
        store_add_item(&first, "Call mom".to_string(), Some(true));

        assert_eq!(first.list().read_untracked().len(), 2);
        assert_eq!(second.list().read_untracked().len(), 0);
    }

    #[test]
    fn test_helpers_update_items() {
        let store = new_widget_store();
        let id = store_add_item(&store, "Buy milk".to_string(), None);

        assert!(store_toggle_item(&store, id));
        assert!(store.list().read_untracked().get(id).unwrap().completed);
        assert!(store_remove_item(&store, id));
        assert!(store.list().read_untracked().is_empty());
    }

    #[test]
    fn test_draft_round_trip() {
        let store = new_widget_store();
        store_set_draft(&store, "Buy".to_string());
        assert_eq!(store.draft().get_untracked(), "Buy");
    }
}
