//! Motivation Message Component
//!
//! Renders the feedback emitter's current message, if any. The emitter in
//! `AppContext` owns the timing.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn MotivationMessage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.motivation.get().map(|message| view! {
            <div class="motivation-banner">
                <p>{message}</p>
            </div>
        })}
    }
}
