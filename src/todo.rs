//! To-do List Model
//!
//! The ordered item collection every widget renders from.

use crate::models::{ItemId, TodoItem};

/// The add control is enabled exactly when the input holds text
pub fn add_enabled(value: &str) -> bool {
    !value.is_empty()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: ItemId,
}

impl TodoList {
    /// Append an item and return its id
    pub fn add(&mut self, text: impl Into<String>, completed: bool) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(TodoItem {
            id,
            text: text.into(),
            completed,
        });
        id
    }

    /// Flip the completed flag. Returns false for an unknown id.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Drop the item. Returns false for an unknown id.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
