//! Task List Component
//!
//! Renders the filtered projection of the task store. The projection is
//! recomputed from current state on every change, never cached on its own.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::models::{filter_tasks, Filter};
use crate::store::{use_app_store, AppStateStoreFields};

fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No tasks yet. Add your first task!",
        Filter::Completed => "No completed tasks yet.",
        Filter::Pending => "No pending tasks. Great job!",
    }
}

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();
    let visible = Memo::new(move |_| filter_tasks(&store.tasks().get(), store.filter().get()));

    view! {
        <div class="task-list">
            <h2 class="panel-heading">"Task List"</h2>
            <Show when=move || visible.get().is_empty()>
                <p class="empty-state">{move || empty_message(store.filter().get())}</p>
            </Show>
            <For
                each=move || visible.get()
                key=|task| (
                    task.id.clone(),
                    task.completed,
                    task.title.clone(),
                    task.description.clone(),
                )
                children=move |task| view! { <TaskItem task=task/> }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_copy_matches_filter() {
        assert_eq!(empty_message(Filter::All), "No tasks yet. Add your first task!");
        assert_eq!(empty_message(Filter::Completed), "No completed tasks yet.");
        assert_eq!(empty_message(Filter::Pending), "No pending tasks. Great job!");
    }
}
