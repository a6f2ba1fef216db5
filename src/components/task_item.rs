//! Task Item Component
//!
//! One row in the task list: completion toggle, text, delete. Mutations are
//! confirmed by the server before local state moves; failures here are
//! logged to the console only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{NewTask, Task};
use crate::store::{store_remove_task, store_replace_task, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let toggle_id = task.id.clone();
    let on_toggle = move |_| {
        let id = toggle_id.clone();
        spawn_local(async move {
            // Locate the current record in the store; the rendered row may
            // lag behind an earlier response.
            let Some(current) = store
                .tasks()
                .get_untracked()
                .into_iter()
                .find(|t| t.id == id)
            else {
                return;
            };
            let record = NewTask {
                title: current.title.clone(),
                description: current.description.clone(),
                completed: !current.completed,
            };
            match api::tasks::update(&id, &record).await {
                Ok(updated) => {
                    let newly_completed = !current.completed;
                    store_replace_task(&store, updated);
                    if newly_completed {
                        ctx.celebrate();
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[TASKS] update {} failed: {:?}", id, err).into(),
                    );
                }
            }
        });
    };

    let delete_id = task.id.clone();
    let on_delete = move |_| {
        let id = delete_id.clone();
        spawn_local(async move {
            match api::tasks::delete(&id).await {
                Ok(()) => store_remove_task(&store, &id),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[TASKS] delete {} failed: {:?}", id, err).into(),
                    );
                }
            }
        });
    };

    let row_class = if task.completed { "task-row done" } else { "task-row" };

    view! {
        <div class=row_class>
            <label class="task-toggle">
                <input
                    type="checkbox"
                    prop:checked=task.completed
                    on:change=on_toggle
                />
            </label>
            <div class="task-body">
                <p class="task-title">{task.title}</p>
                <p class="task-description">{task.description}</p>
            </div>
            <button class="task-delete-btn" on:click=on_delete>"Delete"</button>
        </div>
    }
}
