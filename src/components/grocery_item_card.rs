//! Grocery Item Card Component
//!
//! One row of the list: collected checkbox, name and quantity, inline edit
//! mode and delete.

use leptos::prelude::*;
use grocery_sync::{Item, Outcome};

use crate::components::{DeleteConfirmButton, QuantityStepper};
use crate::context::AppContext;

#[component]
pub fn GroceryItemCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let collected = item.added_to_cart;
    let name = item.name.clone();
    let quantity = item.quantity;
    let card_class = if collected { "item-card collected" } else { "item-card" };

    let (edited_name, set_edited_name) = signal(item.name);
    let (edited_quantity, set_edited_quantity) = signal(item.quantity);

    let on_toggle = move |_| {
        ctx.spawn(move |coordinator| async move {
            coordinator.toggle(id).await;
        });
    };

    let on_delete = Callback::new(move |_: ()| {
        ctx.spawn(move |coordinator| async move {
            coordinator.delete(id).await;
        });
    });

    let on_save = move |_| {
        let name = edited_name.get();
        let qty = edited_quantity.get();
        ctx.spawn(move |coordinator| async move {
            match coordinator.edit(id, &name, qty).await {
                Outcome::Committed => ctx.stop_editing(),
                Outcome::Rejected(err) => ctx.show_notice(err.to_string()),
                _ => {}
            }
        });
    };

    let start_editing = {
        let name = name.clone();
        move |_| {
            set_edited_name.set(name.clone());
            set_edited_quantity.set(quantity);
            ctx.start_editing(id);
        }
    };

    view! {
        <div class=card_class>
            <Show
                when=move || ctx.is_editing(id)
                fallback=move || {
                    let start_editing = start_editing.clone();
                    view! {
                        <label class="item-check">
                            <input type="checkbox" checked=collected on:change=on_toggle />
                        </label>
                        <span class="item-name">{name.clone()}</span>
                        <span class="item-quantity">"Qty: " {quantity}</span>
                        <button class="edit-btn" title="Edit" on:click=start_editing>"✎"</button>
                        <DeleteConfirmButton item_name=name.clone() on_confirm=on_delete />
                    }
                }
            >
                <input
                    type="text"
                    class="edit-name"
                    prop:value=move || edited_name.get()
                    on:input=move |ev| set_edited_name.set(event_target_value(&ev))
                />
                <QuantityStepper value=edited_quantity set_value=set_edited_quantity />
                <button class="save-btn" title="Save" on:click=on_save>"✓"</button>
                <button class="cancel-btn" title="Cancel" on:click=move |_| ctx.stop_editing()>"✗"</button>
            </Show>
        </div>
    }
}
