//! UI Components
//!
//! Reusable Leptos components.

mod auth_page;
mod dashboard;
mod header;
mod loading;
mod motivation;
mod stats;
mod task_filter;
mod task_form;
mod task_item;
mod task_list;

pub use auth_page::AuthPage;
pub use dashboard::Dashboard;
pub use header::Header;
pub use loading::LoadingScreen;
pub use motivation::MotivationMessage;
pub use stats::{ProgressSection, StatsRow, WelcomeMessage};
pub use task_filter::FilterBar;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
