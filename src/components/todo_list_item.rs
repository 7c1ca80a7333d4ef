//! Todo List Item Component
//!
//! A single entry: text plus remove control. Clicks are handled by the
//! delegated listener on the list region, not here.

use leptos::prelude::*;

use crate::context::WidgetContext;
use crate::models::ItemId;
use crate::store::WidgetStateStoreFields;

#[component]
pub fn TodoListItem(id: ItemId, text: String) -> impl IntoView {
    let ctx = use_context::<WidgetContext>().expect("WidgetContext should be provided");

    let completed = move || {
        ctx.store
            .list()
            .read()
            .get(id)
            .is_some_and(|item| item.completed)
    };
    let (text_class, remove_class, glyph) = ctx.with_config(|c| {
        (c.item_text_class.clone(), c.item_remove_class.clone(), c.remove_glyph.clone())
    });

    // Text goes in as a text node, never as markup.
    // data-item-id must match config::ITEM_ID_ATTR.
    view! {
        <li
            class=move || {
                let done = completed();
                ctx.with_config(|c| c.item_classes(done))
            }
            data-item-id=id.to_string()
        >
            <span class=text_class>{text}</span>
            <span class=remove_class>{glyph}</span>
        </li>
    }
}
