//! Quantity Stepper Component
//!
//! Minus / number input / plus, never stepping below 1.

use leptos::prelude::*;

#[component]
pub fn QuantityStepper(
    value: ReadSignal<u32>,
    set_value: WriteSignal<u32>,
) -> impl IntoView {
    view! {
        <div class="quantity-stepper">
            <button
                type="button"
                class="step-btn"
                on:click=move |_| set_value.update(|q| *q = q.saturating_sub(1).max(1))
            >
                "−"
            </button>
            <input
                type="number"
                min="1"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    // typed 0 is left for validation to reject
                    if let Ok(q) = event_target_value(&ev).trim().parse::<u32>() {
                        set_value.set(q);
                    }
                }
            />
            <button
                type="button"
                class="step-btn"
                on:click=move |_| set_value.update(|q| *q = q.saturating_add(1))
            >
                "+"
            </button>
        </div>
    }
}
