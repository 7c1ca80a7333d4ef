//! Widget Context
//!
//! Handed to every handler and component of one widget instance.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::models::ItemId;
use crate::store::{self, WidgetStore};
use crate::todo::add_enabled;

#[derive(Clone, Copy)]
pub struct WidgetContext {
    /// Instance number, for log lines
    pub instance: u32,
    pub store: WidgetStore,
    config: StoredValue<WidgetConfig>,
}

impl WidgetContext {
    pub fn new(instance: u32, config: WidgetConfig) -> Self {
        Self {
            instance,
            store: store::new_widget_store(),
            config: StoredValue::new(config),
        }
    }

    pub fn with_config<T>(&self, f: impl FnOnce(&WidgetConfig) -> T) -> T {
        self.config.with_value(f)
    }

    pub fn add_item(&self, text: String, completed: Option<bool>) -> ItemId {
        let id = store::store_add_item(&self.store, text, completed);
        log::debug!("[TODO#{}] added item {}", self.instance, id);
        id
    }

    pub fn toggle_item(&self, id: ItemId) {
        if !store::store_toggle_item(&self.store, id) {
            log::debug!("[TODO#{}] toggle on missing item {}", self.instance, id);
        }
    }

    pub fn remove_item(&self, id: ItemId) {
        if store::store_remove_item(&self.store, id) {
            log::debug!("[TODO#{}] removed item {}", self.instance, id);
        }
    }

    pub fn set_draft(&self, value: String) {
        store::store_set_draft(&self.store, value);
    }

    /// Add-button activation: add `value` as an uncompleted item and reset
    /// the draft. Empty input adds nothing and returns `None`.
    pub fn submit(&self, value: &str) -> Option<ItemId> {
        if !add_enabled(value) {
            return None;
        }
        let id = self.add_item(value.to_string(), None);
        // Clearing the input programmatically fires no input event
        self.set_draft(String::new());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::WidgetStateStoreFields;

    fn draft_enables_add(ctx: &WidgetContext) -> bool {
        add_enabled(&ctx.store.draft().get_untracked())
    }

    #[test]
    fn test_submit_adds_item_and_resets_draft() {
        let ctx = WidgetContext::new(1, WidgetConfig::default());
        ctx.set_draft("Buy milk".to_string());

        let id = ctx.submit("Buy milk").unwrap();

        {
            let list = ctx.store.list().read_untracked();
            assert_eq!(list.len(), 1);
            let item = list.get(id).unwrap();
            assert_eq!(item.text, "Buy milk");
            assert!(!item.completed);
        }
        assert_eq!(ctx.store.draft().get_untracked(), "");
        assert!(!draft_enables_add(&ctx));
    }

    #[test]
    fn test_submit_empty_adds_nothing() {
        let ctx = WidgetContext::new(2, WidgetConfig::default());

        assert_eq!(ctx.submit(""), None);
        assert!(ctx.store.list().read_untracked().is_empty());
    }

    #[test]
    fn test_cleared_draft_disables_add() {
        let ctx = WidgetContext::new(3, WidgetConfig::default());

        ctx.set_draft("B".to_string());
        assert!(draft_enables_add(&ctx));
        ctx.set_draft(String::new());
        assert!(!draft_enables_add(&ctx));
    }
}
