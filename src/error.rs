//! Widget Errors
//!
//! Failures at the JS boundary. None of them reach the user; they are
//! logged and the affected widget part stays inert.

use wasm_bindgen::JsValue;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// A DOM call threw
    Js(String),
    /// `data-todo-config` was not valid JSON for `WidgetConfig`
    Config(String),
    /// No window/document (not running in a browser page)
    NoDocument,
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetError::Js(msg) => write!(f, "DOM error: {}", msg),
            WidgetError::Config(msg) => write!(f, "Invalid widget config: {}", msg),
            WidgetError::NoDocument => write!(f, "No document available"),
        }
    }
}

impl std::error::Error for WidgetError {}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        WidgetError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::Config(err.to_string())
    }
}
