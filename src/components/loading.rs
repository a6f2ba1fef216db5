//! Loading Screen Component

use leptos::prelude::*;

/// Centered spinner with a caption, shown while a view resolves.
#[component]
pub fn LoadingScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p class="loading-message">{message}</p>
        </div>
    }
}
