//! Frontend Models
//!
//! Data structures matching the task API's wire format.

use serde::{Deserialize, Serialize};

/// Task record as returned by the server.
///
/// The id is assigned by the server and treated as opaque; the client never
/// synthesizes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Request body for creating or replacing a task record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Signed-in user info from the profile endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub username: String,
}

/// Tri-state task list filter. Pure view state, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Display order for the filter bar.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Pending];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }
}

/// Project the task collection through a filter. Side-effect free; the
/// caller recomputes this from current state on every render.
pub fn filter_tasks(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}

/// Aggregate counts over the task collection for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub percent_complete: u32,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let percent_complete = if total > 0 {
            (completed as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        Self {
            total,
            completed,
            pending: total - completed,
            percent_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: "details".to_string(),
            completed,
        }
    }

    #[test]
    fn filter_all_is_identity() {
        let tasks = vec![make_task("1", false), make_task("2", true), make_task("3", false)];
        assert_eq!(filter_tasks(&tasks, Filter::All), tasks);
    }

    #[test]
    fn filter_splits_by_completion() {
        let tasks = vec![make_task("1", false), make_task("2", true), make_task("3", false)];

        let completed = filter_tasks(&tasks, Filter::Completed);
        assert_eq!(completed.len(), 1);
        assert!(completed.iter().all(|t| t.completed));

        let pending = filter_tasks(&tasks, Filter::Pending);
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|t| !t.completed));
    }

    #[test]
    fn filters_partition_the_collection() {
        let tasks = vec![make_task("1", true), make_task("2", false), make_task("3", true)];
        let completed = filter_tasks(&tasks, Filter::Completed).len();
        let pending = filter_tasks(&tasks, Filter::Pending).len();
        assert_eq!(completed + pending, tasks.len());
    }

    #[test]
    fn stats_on_empty_collection() {
        let stats = TaskStats::from_tasks(&[]);
        assert_eq!(stats, TaskStats::default());
    }

    #[test]
    fn stats_round_percentage() {
        let tasks = vec![make_task("1", true), make_task("2", false), make_task("3", false)];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
        // 1/3 rounds to 33
        assert_eq!(stats.percent_complete, 33);

        let tasks = vec![make_task("1", true), make_task("2", true), make_task("3", false)];
        // 2/3 rounds to 67
        assert_eq!(TaskStats::from_tasks(&tasks).percent_complete, 67);
    }

    #[test]
    fn task_deserializes_from_wire_shape() {
        let task: Task = serde_json::from_str(
            r#"{"id":"abc123","title":"A","description":"d","completed":false}"#,
        )
        .expect("well-formed task");
        assert_eq!(task.id, "abc123");
        assert!(!task.completed);
    }

    #[test]
    fn non_array_task_payload_is_an_error() {
        // The list endpoint must yield a collection; an object body is a
        // load failure, not an empty list.
        let result = serde_json::from_str::<Vec<Task>>(r#"{"error":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_task_serializes_without_id() {
        let draft = NewTask {
            title: "A".to_string(),
            description: "d".to_string(),
            completed: false,
        };
        let body = serde_json::to_value(&draft).expect("serializable");
        assert!(body.get("id").is_none());
        assert_eq!(body["title"], "A");
    }
}
