//! UI Components
//!
//! Leptos components rendered into a widget's list region.

mod todo_list_view;
mod todo_list_item;

pub use todo_list_view::TodoListView;
pub use todo_list_item::TodoListItem;
