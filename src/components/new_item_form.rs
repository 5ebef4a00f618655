//! New Item Form Component
//!
//! Form for adding items with a quantity stepper.

use leptos::prelude::*;
use grocery_sync::Outcome;

use crate::components::QuantityStepper;
use crate::context::AppContext;

/// Form for adding new items to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_name, set_new_name) = signal(String::new());
    let (quantity, set_quantity) = signal(1u32);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        let qty = quantity.get();

        ctx.spawn(move |coordinator| async move {
            match coordinator.add(&name, qty).await {
                Outcome::Committed => {
                    set_new_name.set(String::new());
                    set_quantity.set(1);
                }
                Outcome::Rejected(err) => ctx.show_notice(err.to_string()),
                _ => {}
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add new item..."
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <QuantityStepper value=quantity set_value=set_quantity />
            <button type="submit" class="add-btn">"Add Item"</button>
        </form>
    }
}
