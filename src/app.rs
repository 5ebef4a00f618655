//! Grocery List Frontend App
//!
//! Main application component: add form, item list, purchase button and history.

use leptos::prelude::*;
use reactive_stores::Store;
use grocery_sync::{HttpRemote, ItemId, MutationCoordinator, SyncConfig};

use crate::context::AppContext;
use crate::store::{store_finish_loading, AppState, AppStateStoreFields, HistoryHandle, ItemsHandle};
use crate::components::{FailureBanner, ItemList, NewItemForm, PurchaseButton, PurchaseHistory};

#[component]
pub fn App() -> impl IntoView {
    let config = SyncConfig::from_env();
    let remote = match HttpRemote::new(config) {
        Ok(remote) => remote,
        Err(err) => {
            log::error!("[APP] Could not create HTTP client: {}", err);
            return view! { <p class="fatal-error">"Unable to reach the grocery service."</p> }.into_any();
        }
    };
    log::info!("[APP] Using grocery API at {}", remote.config().api_base_url);

    // State
    let store = Store::new(AppState::new());
    provide_context(store);
    let editing_id = signal::<Option<ItemId>>(None);
    let notice = signal::<Option<String>>(None);
    let set_notice = notice.1;

    let coordinator = MutationCoordinator::new(remote, ItemsHandle(store), HistoryHandle(store))
        .with_failure_handler(move |failure| set_notice.set(Some(failure.to_string())));
    let ctx = AppContext::new(coordinator, editing_id, notice);
    provide_context(ctx);

    // Load items and history on mount
    Effect::new(move |_| {
        ctx.spawn(move |coordinator| async move {
            coordinator.load().await;
            store_finish_loading(&store);
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Grocery List"</h1>
            </header>

            <FailureBanner />

            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <div class="loading-spinner"></div> }
            >
                <NewItemForm />
                <ItemList />
                <PurchaseButton />
                <PurchaseHistory />
            </Show>
        </div>
    }
    .into_any()
}
