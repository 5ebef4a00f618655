//! Item List Component
//!
//! Renders the current grocery list from the store.

use leptos::prelude::*;

use crate::components::GroceryItemCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="item-list">
            <Show
                when=move || !store.items().read().is_empty()
                fallback=|| view! {
                    <div class="empty-list">
                        <p>"Your grocery list is empty"</p>
                    </div>
                }
            >
                <For
                    each=move || store.items().get()
                    // Every mutable field is part of the key so that an
                    // optimistic change or a rollback re-renders the card
                    key=|item| (item.id, item.name.clone(), item.quantity, item.added_to_cart)
                    children=move |item| view! { <GroceryItemCard item=item /> }
                />
            </Show>
        </div>
    }
}
