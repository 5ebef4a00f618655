//! Purchase History Component
//!
//! Collapsible list of past purchases, newest first.

use leptos::prelude::*;
use grocery_sync::HistoryRecord;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PurchaseHistory() -> impl IntoView {
    let store = use_app_store();
    let (expanded, set_expanded) = signal(false);

    view! {
        <section class="purchase-history">
            <Show
                when=move || !store.history().read().is_empty()
                fallback=|| view! { <p class="history-empty">"No purchase history yet"</p> }
            >
                <button class="history-toggle" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                    "Purchase History (" {move || store.history().read().len()} ") "
                    {move || if expanded.get() { "▲" } else { "▼" }}
                </button>
                <Show when=move || expanded.get()>
                    <div class="history-records">
                        {move || store.history().get().into_iter()
                            .map(|record| view! { <HistoryEntry record=record /> })
                            .collect_view()}
                    </div>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn HistoryEntry(record: HistoryRecord) -> impl IntoView {
    let when = record
        .purchased_at()
        .map(|at| at.format("%b %d, %Y · %H:%M").to_string())
        .unwrap_or_else(|| record.timestamp.clone());
    let total = record.total_quantity();

    view! {
        <div class="history-record">
            <div class="history-timestamp">{when} <span class="history-total">{total} " items"</span></div>
            <ul class="history-items">
                {record.items.into_iter().map(|item| view! {
                    <li>
                        <span class="history-item-name">{item.name}</span>
                        <span class="history-item-quantity">"Qty: " {item.quantity}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
