//! Widget Configuration
//!
//! Class names of the markup contract, overridable per widget through a
//! JSON `data-todo-config` attribute on the widget root.

use serde::Deserialize;

use crate::error::WidgetResult;
use crate::models::SeedItem;

/// Attribute on a widget root holding a JSON `WidgetConfig`
pub const CONFIG_ATTR: &str = "data-todo-config";
/// Attribute marking additional widget roots on the page
pub const WIDGET_ATTR: &str = "data-todo-widget";
/// Attribute carrying the item id on rendered items
pub const ITEM_ID_ATTR: &str = "data-item-id";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Host markup: list region
    pub list_class: String,
    /// Host markup: text input
    pub text_class: String,
    /// Host markup: add button
    pub add_class: String,
    /// Produced markup: item element
    pub item_class: String,
    pub item_text_class: String,
    pub item_remove_class: String,
    /// State marker added to completed items
    pub completed_class: String,
    pub remove_glyph: String,
    /// Items added when the widget binds
    pub items: Vec<SeedItem>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            list_class: "todo__list".to_string(),
            text_class: "todo__text".to_string(),
            add_class: "todo__add".to_string(),
            item_class: "todo__list-item".to_string(),
            item_text_class: "todo__list-item-text".to_string(),
            item_remove_class: "todo__list-item-remove".to_string(),
            completed_class: "todo__list-item_completed_yes".to_string(),
            remove_glyph: "\u{274C}".to_string(),
            items: Vec::new(),
        }
    }
}

impl WidgetConfig {
    /// Parse an attribute value; a missing or blank attribute means defaults
    pub fn from_attribute(raw: Option<&str>) -> WidgetResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Ok(serde_json::from_str(json)?),
        }
    }

    /// Class attribute for an item in the given state
    pub fn item_classes(&self, completed: bool) -> String {
        if completed {
            format!("{} {}", self.item_class, self.completed_class)
        } else {
            self.item_class.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WidgetError;

    #[test]
    fn test_missing_attribute_gives_defaults() {
        assert_eq!(WidgetConfig::from_attribute(None).unwrap(), WidgetConfig::default());
        assert_eq!(WidgetConfig::from_attribute(Some("  ")).unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = WidgetConfig::from_attribute(Some(r#"{"listClass": "tasks"}"#)).unwrap();
        assert_eq!(config.list_class, "tasks");
        assert_eq!(config.text_class, "todo__text");
        assert_eq!(config.completed_class, "todo__list-item_completed_yes");
    }

    #[test]
    fn test_seed_items_parse_with_default_completed() {
        let config = WidgetConfig::from_attribute(Some(
            r#"{"items": [{"text": "a"}, {"text": "b", "completed": true}]}"#,
        ))
        .unwrap();
        assert_eq!(
            config.items,
            vec![
                SeedItem { text: "a".into(), completed: false },
                SeedItem { text: "b".into(), completed: true },
            ]
        );
    }

    #[test]
    fn test_malformed_attribute_is_config_error() {
        let err = WidgetConfig::from_attribute(Some("{not json")).unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
    }

    #[test]
    fn test_item_classes() {
        let config = WidgetConfig::default();
        assert_eq!(config.item_classes(false), "todo__list-item");
        assert_eq!(config.item_classes(true), "todo__list-item todo__list-item_completed_yes");
    }
}
