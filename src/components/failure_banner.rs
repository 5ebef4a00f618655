//! Failure Banner Component
//!
//! Shows the message of the last failed operation. Dismissible, and hides
//! itself after a few seconds.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::context::AppContext;

const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[component]
pub fn FailureBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    Effect::new(move |_| {
        if let Some(message) = ctx.notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                // a newer notice keeps its own timer
                if ctx.notice.get_untracked().as_deref() == Some(message.as_str()) {
                    ctx.dismiss_notice();
                }
            });
        }
    });

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="failure-banner" role="alert">
                <span>{message}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })}
    }
}
