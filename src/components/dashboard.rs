//! Dashboard Component
//!
//! The protected task view: owns the app store and feedback emitter, runs
//! the initial profile + task load, and composes the panels.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, ApiError};
use crate::components::{
    FilterBar, Header, LoadingScreen, MotivationMessage, ProgressSection, StatsRow, TaskForm,
    TaskList, WelcomeMessage,
};
use crate::context::AppContext;
use crate::session;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let motivation = signal::<Option<&'static str>>(None);
    provide_context(AppContext::new(motivation));

    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<&'static str>>(None);

    // Initial load. The profile is best-effort; the task fetch decides
    // whether the view is usable.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::auth::profile().await {
                Ok(profile) => store.username().set(profile.username),
                Err(err) => {
                    web_sys::console::log_1(&format!("[PROFILE] fetch failed: {:?}", err).into());
                }
            }

            match api::tasks::list().await {
                Ok(tasks) => {
                    web_sys::console::log_1(&format!("[TASKS] loaded {} tasks", tasks.len()).into());
                    store.tasks().set(tasks);
                }
                Err(ApiError::Unauthorized) => {
                    // Session expired between the gate check and this load.
                    session::redirect_to_entry();
                    return;
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[TASKS] load failed: {:?}", err).into());
                    set_load_error.set(Some("Failed to load data. Please try again."));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <LoadingScreen message="Loading your dashboard..."/> }
        >
            <div class="dashboard">
                <Header/>
                <main class="dashboard-body">
                    <WelcomeMessage/>
                    <StatsRow/>
                    <ProgressSection/>
                    <section class="task-panel">
                        <TaskForm/>
                        <MotivationMessage/>
                        <FilterBar/>
                        {move || load_error.get().map(|msg| view! {
                            <div class="banner banner-error"><p>{msg}</p></div>
                        })}
                        <TaskList/>
                    </section>
                </main>
            </div>
        </Show>
    }
}
