//! Task Tracker App
//!
//! Root component. The session gate resolves exactly once per mount and
//! picks between the auth page and the protected dashboard; protected
//! content never renders while the check is pending.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AuthPage, Dashboard, LoadingScreen};
use crate::session::{self, SessionState};

#[component]
pub fn App() -> impl IntoView {
    let (session_state, set_session_state) = signal(SessionState::Checking);

    // Gate check runs once per mount; the state only moves forward.
    Effect::new(move |_| {
        spawn_local(async move {
            let resolved = session::check_session().await;
            web_sys::console::log_1(&format!("[SESSION] resolved: {:?}", resolved).into());
            set_session_state.set(resolved);
        });
    });

    view! {
        <div class="app-root">
            {move || match session_state.get() {
                SessionState::Checking => view! { <LoadingScreen message="Loading..."/> }.into_any(),
                SessionState::Unauthenticated => view! { <AuthPage/> }.into_any(),
                SessionState::Authenticated => view! { <Dashboard/> }.into_any(),
            }}
        </div>
    }
}
