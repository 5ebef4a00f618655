//! Purchase Button Component
//!
//! Offered only while at least one item is collected.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_collected_count, use_app_store};

#[component]
pub fn PurchaseButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_purchase = move |_| {
        ctx.spawn(move |coordinator| async move {
            coordinator.purchase().await;
        });
    };

    view! {
        <Show when=move || { store_collected_count(&store) > 0 }>
            <button class="purchase-btn" on:click=on_purchase>
                "Purchased Items (" {move || store_collected_count(&store)} ")"
            </button>
        </Show>
    }
}
