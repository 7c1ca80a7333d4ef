//! Leptos Delegate Utilities
//!
//! Event delegation for lists whose children come and go.
//! One listener sits on a stable ancestor; the clicked descendant is
//! resolved by walking its ancestor chain and matching class rules.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// One element on the way from the event origin up to the delegate root
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathNode {
    pub classes: Vec<String>,
    /// Value of the delegate's key attribute, if the element carries one
    pub key: Option<String>,
}

impl PathNode {
    pub fn new<I, S>(classes: I, key: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            key: key.map(str::to_string),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A rule: an element classed `trigger` fires `action` on the nearest
/// element at or above it classed `scope`
#[derive(Clone, Debug, PartialEq)]
pub struct DelegateRule<A> {
    pub trigger: String,
    pub scope: String,
    pub action: A,
}

impl<A> DelegateRule<A> {
    pub fn new(trigger: impl Into<String>, scope: impl Into<String>, action: A) -> Self {
        Self {
            trigger: trigger.into(),
            scope: scope.into(),
            action,
        }
    }
}

/// Resolved delegate hit
#[derive(Clone, Debug, PartialEq)]
pub struct Delegated<A> {
    pub action: A,
    /// Key of the scope element
    pub key: String,
}

/// Rule set plus the attribute identifying scope elements
#[derive(Clone, Debug)]
pub struct Delegate<A> {
    pub key_attr: String,
    pub rules: Vec<DelegateRule<A>>,
}

impl<A: Clone> Delegate<A> {
    pub fn new(key_attr: impl Into<String>) -> Self {
        Self {
            key_attr: key_attr.into(),
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, trigger: impl Into<String>, scope: impl Into<String>, action: A) -> Self {
        self.rules.push(DelegateRule::new(trigger, scope, action));
        self
    }

    /// Resolve a path (origin first, root excluded) against the rules.
    ///
    /// The nearest node matching any trigger wins; among rules matching the
    /// same node, the first registered wins. A trigger with no keyed scope
    /// above it resolves to nothing.
    pub fn resolve(&self, path: &[PathNode]) -> Option<Delegated<A>> {
        for (depth, node) in path.iter().enumerate() {
            for rule in &self.rules {
                if !node.has_class(&rule.trigger) {
                    continue;
                }
                return path[depth..]
                    .iter()
                    .find(|n| n.has_class(&rule.scope))
                    .and_then(|scope| scope.key.clone())
                    .map(|key| Delegated {
                        action: rule.action.clone(),
                        key,
                    });
            }
        }
        None
    }
}

/// Build the ancestor path from `origin` up to, not including, `root`.
/// Empty when `origin` is not inside `root`.
pub fn collect_path(origin: &web_sys::Element, root: &web_sys::Element, key_attr: &str) -> Vec<PathNode> {
    let root_node: &web_sys::Node = root.as_ref();
    if root.is_same_node(Some(origin.as_ref())) || !root_node.contains(Some(origin.as_ref())) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(origin.clone());
    while let Some(el) = current {
        if root.is_same_node(Some(el.as_ref())) {
            break;
        }
        let list = el.class_list();
        let classes = (0..list.length()).filter_map(|i| list.item(i));
        path.push(PathNode::new(classes, el.get_attribute(key_attr).as_deref()));
        current = el.parent_element();
    }
    path
}

/// Handle to a delegated listener.
///
/// Dropping the handle drops the closure, which leaves a dangling
/// listener behind; call `forget`.
#[must_use]
pub struct DelegateHandle {
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl DelegateHandle {
    /// Keep the listener for the lifetime of the page
    pub fn forget(self) {
        self.callback.forget();
    }
}

/// Attach one `event` listener on `root` that resolves the origin against
/// `delegate` and hands every hit to `on_hit`
pub fn bind_delegated<A, F>(
    root: &web_sys::Element,
    event: &str,
    delegate: Delegate<A>,
    on_hit: F,
) -> Result<DelegateHandle, JsValue>
where
    A: Clone + 'static,
    F: Fn(Delegated<A>) + 'static,
{
    let scope_root = root.clone();
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(origin) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let path = collect_path(&origin, &scope_root, &delegate.key_attr);
        if let Some(hit) = delegate.resolve(&path) {
            on_hit(hit);
        }
    });

    root.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

    Ok(DelegateHandle { callback })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Action {
        Toggle,
        Remove,
    }

    fn delegate() -> Delegate<Action> {
        Delegate::new("data-id")
            .rule("remove", "item", Action::Remove)
            .rule("item", "item", Action::Toggle)
    }

    fn item(key: &str) -> PathNode {
        PathNode::new(["item"], Some(key))
    }

    #[test]
    fn test_click_on_item_toggles() {
        let path = vec![item("3")];
        let hit = delegate().resolve(&path).unwrap();
        assert_eq!(hit.action, Action::Toggle);
        assert_eq!(hit.key, "3");
    }

    #[test]
    fn test_click_on_item_text_bubbles_to_item() {
        let path = vec![PathNode::new(["text"], None), item("7")];
        let hit = delegate().resolve(&path).unwrap();
        assert_eq!(hit, Delegated { action: Action::Toggle, key: "7".into() });
    }

    #[test]
    fn test_remove_control_wins_over_item() {
        let path = vec![PathNode::new(["remove"], None), item("2")];
        let hit = delegate().resolve(&path).unwrap();
        assert_eq!(hit.action, Action::Remove);
        assert_eq!(hit.key, "2");
    }

    #[test]
    fn test_nearest_item_is_used_when_nested() {
        let path = vec![item("5"), PathNode::new(["wrapper"], None), item("1")];
        assert_eq!(delegate().resolve(&path).unwrap().key, "5");
    }

    #[test]
    fn test_unmatched_path_resolves_to_nothing() {
        let path = vec![PathNode::new(["header"], None)];
        assert_eq!(delegate().resolve(&path), None);
        assert_eq!(delegate().resolve(&[]), None);
    }

    #[test]
    fn test_remove_without_keyed_item_is_ignored() {
        let path = vec![PathNode::new(["remove"], None), PathNode::new(["item"], None)];
        assert_eq!(delegate().resolve(&path), None);
    }
}
