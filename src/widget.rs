//! Todo Widget Binding
//!
//! Attaches a widget to host markup: resolves the list, text input and add
//! button under a root element, wires their listeners and mounts the list
//! view. Every region is optional; a missing one leaves its behaviour inert.

use std::sync::atomic::{AtomicU32, Ordering};

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos_delegate::{bind_delegated, Delegate, DelegateHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::components::TodoListView;
use crate::config::{WidgetConfig, CONFIG_ATTR, ITEM_ID_ATTR, WIDGET_ATTR};
use crate::context::WidgetContext;
use crate::error::{WidgetError, WidgetResult};
use crate::models::{ItemId, TodoItem};
use crate::store::WidgetStateStoreFields;
use crate::todo::add_enabled;

/// Page element bound by default
pub const DEFAULT_ROOT_ID: &str = "list";

static NEXT_INSTANCE: AtomicU32 = AtomicU32::new(1);

/// Delegated list actions
#[derive(Clone, Copy, Debug, PartialEq)]
enum ListAction {
    Toggle,
    Remove,
}

/// Element kinds accepted as the text region
#[derive(Clone, Copy, Debug, PartialEq)]
enum TextKind {
    Input,
    TextArea,
}

impl TextKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "input" => Some(TextKind::Input),
            "textarea" => Some(TextKind::TextArea),
            _ => None,
        }
    }
}

/// Text entry region: an `<input>` or a `<textarea>`
#[derive(Clone)]
enum TextRegion {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextRegion {
    fn from_element(el: HtmlElement) -> Option<Self> {
        match TextKind::from_tag(&el.tag_name())? {
            TextKind::Input => el.dyn_into().ok().map(TextRegion::Input),
            TextKind::TextArea => el.dyn_into().ok().map(TextRegion::TextArea),
        }
    }

    fn value(&self) -> String {
        match self {
            TextRegion::Input(el) => el.value(),
            TextRegion::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            TextRegion::Input(el) => el.set_value(value),
            TextRegion::TextArea(el) => el.set_value(value),
        }
    }

    fn target(&self) -> &web_sys::EventTarget {
        match self {
            TextRegion::Input(el) => el,
            TextRegion::TextArea(el) => el,
        }
    }
}

/// Sub-elements found under a widget root
struct Regions {
    list: Option<HtmlElement>,
    text: Option<TextRegion>,
    add: Option<HtmlButtonElement>,
}

impl Regions {
    fn resolve(root: &Element, config: &WidgetConfig) -> Self {
        Self {
            list: find(root, &config.list_class),
            text: find(root, &config.text_class).and_then(TextRegion::from_element),
            add: find(root, &config.add_class),
        }
    }
}

/// First descendant of `root` with `class`, if it has the expected type
fn find<T: JsCast>(root: &Element, class: &str) -> Option<T> {
    root.query_selector(&format!(".{}", class))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Register `handler` for `event` on `target` for the lifetime of the page
fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> WidgetResult<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Owner for one widget's reactive state. The listeners outlive any
/// handle to the widget, so the state is kept for the lifetime of the page.
fn page_owner() -> Owner {
    let owner = Owner::new();
    std::mem::forget(owner.clone());
    owner
}

pub struct TodoWidget {
    ctx: WidgetContext,
    owner: Owner,
}

impl TodoWidget {
    /// Bind a widget under `root`. Never fails; unresolved regions stay inert.
    pub fn bind(root: &Element, config: WidgetConfig) -> Self {
        let instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        let owner = page_owner();

        let ctx = owner.with(|| {
            let ctx = WidgetContext::new(instance, config);
            provide_context(ctx);

            let regions = ctx.with_config(|c| Regions::resolve(root, c));
            log::debug!(
                "[TODO#{}] regions: list={} text={} add={}",
                instance,
                regions.list.is_some(),
                regions.text.is_some(),
                regions.add.is_some()
            );

            let results = [
                bind_input(ctx, &regions),
                bind_add(ctx, &regions),
                bind_list(ctx, &regions),
            ];
            for err in results.into_iter().filter_map(Result::err) {
                log::warn!("[TODO#{}] {}", instance, err);
            }
            ctx
        });

        let widget = Self { ctx, owner };
        for seed in widget.ctx.with_config(|c| c.items.clone()) {
            widget.add_item(seed.text, Some(seed.completed));
        }
        widget
    }

    /// Bind using the root's `data-todo-config` attribute, or defaults
    pub fn bind_root(root: &Element) -> Self {
        let config = WidgetConfig::from_attribute(root.get_attribute(CONFIG_ATTR).as_deref())
            .unwrap_or_else(|err| {
                log::warn!("[TODO] {}, using defaults", err);
                WidgetConfig::default()
            });
        Self::bind(root, config)
    }

    /// Append an item; `is_completed` defaults to false
    pub fn add_item(&self, text: impl Into<String>, is_completed: Option<bool>) -> ItemId {
        self.ctx.add_item(text.into(), is_completed)
    }

    /// Snapshot of the current items
    pub fn items(&self) -> Vec<TodoItem> {
        self.ctx.store.list().read_untracked().items().to_vec()
    }

    pub fn instance(&self) -> u32 {
        self.ctx.instance
    }
}

/// Mirror the input into the draft; the add button follows the draft
fn bind_input(ctx: WidgetContext, regions: &Regions) -> WidgetResult<()> {
    if let Some(text) = &regions.text {
        ctx.set_draft(text.value());
        let input = text.clone();
        listen(text.target(), "input", move |_| ctx.set_draft(input.value()))?;
    }

    if let Some(button) = &regions.add {
        let button = button.clone();
        button.set_disabled(!add_enabled(&ctx.store.draft().get_untracked()));
        Effect::new(move |_| {
            let draft = ctx.store.draft().get();
            button.set_disabled(!add_enabled(&draft));
        });
    }
    Ok(())
}

/// Add on click, then clear the input and disable the button
fn bind_add(ctx: WidgetContext, regions: &Regions) -> WidgetResult<()> {
    let Some(button) = regions.add.clone() else {
        return Ok(());
    };
    let text = regions.text.clone();

    let target = button.clone();
    listen(&target, "click", move |_| {
        let value = text.as_ref().map(TextRegion::value).unwrap_or_default();
        if ctx.submit(&value).is_none() {
            return;
        }
        if let Some(text) = &text {
            text.set_value("");
        }
        button.set_disabled(true);
    })
}

/// Render items into the list and handle toggle/remove with one listener
fn bind_list(ctx: WidgetContext, regions: &Regions) -> WidgetResult<()> {
    let Some(list) = regions.list.clone() else {
        return Ok(());
    };

    leptos::mount::mount_to(list.clone(), TodoListView).forget();

    let delegate = ctx.with_config(|c| {
        Delegate::new(ITEM_ID_ATTR)
            .rule(&c.item_remove_class, &c.item_class, ListAction::Remove)
            .rule(&c.item_class, &c.item_class, ListAction::Toggle)
    });

    bind_delegated(&list, "click", delegate, move |hit| {
        let Ok(id) = hit.key.parse::<ItemId>() else {
            log::warn!("[TODO#{}] bad item id {:?}", ctx.instance, hit.key);
            return;
        };
        match hit.action {
            ListAction::Toggle => ctx.toggle_item(id),
            ListAction::Remove => ctx.remove_item(id),
        }
    })
    .map(DelegateHandle::forget)
    .map_err(WidgetError::from)
}

/// Bind `#list` and every `[data-todo-widget]` element on the page
pub fn bind_page() -> WidgetResult<Vec<TodoWidget>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(WidgetError::NoDocument)?;

    let mut roots: Vec<Element> = Vec::new();
    if let Some(el) = document.get_element_by_id(DEFAULT_ROOT_ID) {
        roots.push(el);
    }

    let marked = document.query_selector_all(&format!("[{}]", WIDGET_ATTR))?;
    for i in 0..marked.length() {
        let Some(el) = marked.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if !roots.iter().any(|r| r.is_same_node(Some(el.as_ref()))) {
            roots.push(el);
        }
    }

    Ok(roots.iter().map(TodoWidget::bind_root).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{new_widget_store, store_add_item};

    #[test]
    fn test_text_kind_accepts_input_and_textarea() {
        assert_eq!(TextKind::from_tag("INPUT"), Some(TextKind::Input));
        assert_eq!(TextKind::from_tag("TEXTAREA"), Some(TextKind::TextArea));
        assert_eq!(TextKind::from_tag("textarea"), Some(TextKind::TextArea));
        assert_eq!(TextKind::from_tag("DIV"), None);
    }

    #[test]
    fn test_state_survives_dropped_widget_owner() {
        let owner = page_owner();
        let store = owner.with(new_widget_store);
        drop(owner);

        store_add_item(&store, "Buy milk".to_string(), None);
        assert_eq!(store.list().read_untracked().len(), 1);
    }
}
