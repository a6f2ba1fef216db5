//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The server is
//! authoritative: every mutation helper is called with a server response,
//! never with locally invented state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks for the signed-in user
    pub tasks: Vec<Task>,
    /// Display name from the profile endpoint
    pub username: String,
    /// Active task list filter
    pub filter: Filter,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            username: "User".to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a server-created task to the store
pub fn store_add_task(store: &AppStore, task: Task) {
    store.tasks().write().push(task);
}

/// Replace a task in the store with the server's version, matched by id
pub fn store_replace_task(store: &AppStore, updated: Task) {
    store
        .tasks()
        .write()
        .iter_mut()
        .find(|task| task.id == updated.id)
        .map(|task| *task = updated);
}

/// Remove a task from the store by id
pub fn store_remove_task(store: &AppStore, id: &str) {
    store.tasks().write().retain(|task| task.id != id);
}
