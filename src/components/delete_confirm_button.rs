//! Delete Confirm Button Component
//!
//! Two-step delete for a list item: the first click asks, the second deletes.

use leptos::prelude::*;

/// Asks "Delete <item>?" before running `on_confirm`
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] item_name: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    move || {
        if asking.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{format!("Delete {}?", item_name)}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |_| {
                            set_asking.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Yes"
                    </button>
                    <button class="cancel-btn" on:click=move |_| set_asking.set(false)>"No"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="delete-btn" title="Delete" on:click=move |_| set_asking.set(true)>
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
