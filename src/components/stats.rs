//! Dashboard Statistics Components
//!
//! Welcome banner, stat cards, and the overall progress bar, all derived
//! from the task store.

use leptos::prelude::*;

use crate::models::TaskStats;
use crate::store::{use_app_store, AppStateStoreFields};

fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

fn encouragement(stats: &TaskStats) -> &'static str {
    if stats.total == 0 {
        "Ready to start your productive day?"
    } else if stats.completed == 0 {
        "Let's tackle those tasks!"
    } else if stats.completed == stats.total {
        "Amazing! You've completed all tasks! 🎉"
    } else if stats.percent_complete >= 75 {
        "You're almost there! Keep it up! 💪"
    } else if stats.percent_complete >= 50 {
        "Great progress so far! 👏"
    } else {
        "Every step counts. You've got this! 🚀"
    }
}

fn local_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

/// Greeting banner with a progress-dependent encouragement line
#[component]
pub fn WelcomeMessage() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| TaskStats::from_tasks(&store.tasks().get()));

    view! {
        <div class="welcome-banner">
            <h1 class="welcome-title">
                {move || format!("{}, {}! 👋", greeting_for_hour(local_hour()), store.username().get())}
            </h1>
            <p class="welcome-note">{move || encouragement(&stats.get())}</p>
        </div>
    }
}

#[component]
fn StatsCard(
    title: &'static str,
    accent: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] detail: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-title">{title}</p>
            <p class=format!("stat-value {}", accent)>{move || value.get()}</p>
            {detail.map(|detail| view! {
                <p class="stat-detail">{move || detail.get()}</p>
            })}
        </div>
    }
}

/// Four summary cards: total, completed, pending, percent complete
#[component]
pub fn StatsRow() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| TaskStats::from_tasks(&store.tasks().get()));

    view! {
        <div class="stats-grid">
            <StatsCard
                title="Total Tasks"
                accent="stat-blue"
                value=Signal::derive(move || stats.get().total.to_string())
            />
            <StatsCard
                title="Completed"
                accent="stat-green"
                value=Signal::derive(move || stats.get().completed.to_string())
                detail=Signal::derive(move || format!("{}%", stats.get().percent_complete))
            />
            <StatsCard
                title="Pending"
                accent="stat-orange"
                value=Signal::derive(move || stats.get().pending.to_string())
            />
            <StatsCard
                title="Progress"
                accent="stat-purple"
                value=Signal::derive(move || format!("{}%", stats.get().percent_complete))
            />
        </div>
    }
}

/// Overall progress bar, shown once at least one task exists
#[component]
pub fn ProgressSection() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| TaskStats::from_tasks(&store.tasks().get()));

    view! {
        <Show when=move || (stats.get().total > 0)>
            <div class="progress-card">
                <div class="progress-header">
                    <h3>"Overall Progress"</h3>
                    <span class="progress-count">
                        {move || format!("{} of {} completed", stats.get().completed, stats.get().total)}
                    </span>
                </div>
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style=move || format!("width: {}%", stats.get().percent_complete)
                    ></div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(16), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }

    #[test]
    fn encouragement_tracks_progress() {
        let stats = |total, completed| {
            let percent_complete = if total > 0 {
                (completed as f64 / total as f64 * 100.0).round() as u32
            } else {
                0
            };
            TaskStats { total, completed, pending: total - completed, percent_complete }
        };

        assert_eq!(encouragement(&stats(0, 0)), "Ready to start your productive day?");
        assert_eq!(encouragement(&stats(3, 0)), "Let's tackle those tasks!");
        assert_eq!(encouragement(&stats(3, 3)), "Amazing! You've completed all tasks! 🎉");
        assert_eq!(encouragement(&stats(4, 3)), "You're almost there! Keep it up! 💪");
        assert_eq!(encouragement(&stats(2, 1)), "Great progress so far! 👏");
        assert_eq!(encouragement(&stats(3, 1)), "Every step counts. You've got this! 🚀");
    }
}
