//! Frontend Models
//!
//! Data structures for list entries.

use serde::{Deserialize, Serialize};

/// Per-widget item identifier, never reused within one widget
pub type ItemId = u32;

/// One to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

/// Entry preloaded from a widget's config attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}
