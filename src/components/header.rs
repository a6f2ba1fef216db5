//! Dashboard Header Component
//!
//! App identity plus the logout action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session;

#[component]
pub fn Header() -> impl IntoView {
    // Redirect either way; on success the server has already cleared the
    // cookie, otherwise the gate re-verifies on the next mount.
    let on_logout = move |_| {
        spawn_local(async move {
            if let Err(err) = api::auth::logout().await {
                web_sys::console::log_1(&format!("[AUTH] logout failed: {:?}", err).into());
            }
            session::redirect_to_entry();
        });
    };

    view! {
        <header class="dashboard-header">
            <div class="header-identity">
                <h1 class="header-title">"Task Tracker"</h1>
                <p class="header-subtitle">"Stay organized and motivated"</p>
            </div>
            <button class="logout-btn" on:click=on_logout>"Logout"</button>
        </header>
    }
}
