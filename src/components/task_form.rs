//! Task Form Component
//!
//! New-task input with client-side validation. Nothing is inserted locally
//! until the server has assigned the record an id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::NewTask;
use crate::store::{store_add_task, use_app_store};

pub const MAX_TITLE_LEN: usize = 50;

/// Gate a draft before any request is issued.
fn validate_draft(title: &str, description: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() || description.trim().is_empty() {
        return Err("Task name and description cannot be empty.");
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err("Task name is too long (max 50 characters).");
    }
    Ok(())
}

#[component]
pub fn TaskForm() -> impl IntoView {
    let store = use_app_store();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = title.get();
        let details = description.get();
        if let Err(msg) = validate_draft(&name, &details) {
            set_error.set(Some(msg));
            return;
        }

        spawn_local(async move {
            let draft = NewTask {
                title: name,
                description: details,
                completed: false,
            };
            match api::tasks::create(&draft).await {
                Ok(created) => {
                    store_add_task(&store, created);
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[TASKS] create failed: {:?}", err).into());
                    set_error.set(Some("Failed to add task."));
                }
            }
        });
    };

    view! {
        <form class="task-form" on:submit=add_task>
            <h2 class="panel-heading">"Add New Task"</h2>
            <div class="task-form-row">
                <input
                    type="text"
                    placeholder="Task Name"
                    maxlength="50"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button type="submit" class="task-add-btn">"Add Task"</button>
            </div>
            {move || error.get().map(|msg| view! {
                <p class="form-error">{msg}</p>
            })}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_draft() {
        assert!(validate_draft("Water the plants", "Back porch too").is_ok());
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(validate_draft("", "details").is_err());
        assert!(validate_draft("title", "").is_err());
        assert!(validate_draft("   ", "details").is_err());
        assert!(validate_draft("title", "  \t ").is_err());
    }

    #[test]
    fn title_length_is_capped_at_fifty() {
        let at_limit = "x".repeat(MAX_TITLE_LEN);
        assert!(validate_draft(&at_limit, "d").is_ok());

        let over = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(
            validate_draft(&over, "d"),
            Err("Task name is too long (max 50 characters).")
        );
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        // 50 multibyte characters are within the limit.
        let title = "ä".repeat(MAX_TITLE_LEN);
        assert!(validate_draft(&title, "d").is_ok());
    }
}
