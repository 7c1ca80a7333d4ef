//! Todo List View Component
//!
//! Renders the widget's items into its list region.

use leptos::prelude::*;

use crate::components::TodoListItem;
use crate::context::WidgetContext;
use crate::store::WidgetStateStoreFields;

/// All items of one widget, in insertion order
#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_context::<WidgetContext>().expect("WidgetContext should be provided");

    let items = move || ctx.store.list().read().items().to_vec();

    view! {
        <For
            each=items
            key=|item| item.id
            children=move |item| view! { <TodoListItem id=item.id text=item.text /> }
        />
    }
}
