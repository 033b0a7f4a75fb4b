//! 起動直後のストアに入る初期データ

use crate::notes::Notes;
use crate::task::{Finished, Task, TaskId};

pub const SEED_NOTES: &str = "Lab on Friday: bring laptop
Ask about responsive images.
Try CSS variables for theme colors.";

pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: TaskId(1),
            task: "Review lecture notes".to_string(),
            finished: Finished::Done,
        },
        Task {
            id: TaskId(2),
            task: "Work on dashboard layout".to_string(),
            finished: Finished::Open,
        },
    ]
}

pub fn seed_notes() -> Notes {
    Notes::new(SEED_NOTES)
}

/// 初期データの最大 ID より大きい最初の採番値
pub fn seed_next_id() -> TaskId {
    seed_tasks()
        .iter()
        .map(|t| t.id)
        .max()
        .map(|id| id.next())
        .unwrap_or(TaskId(1))
}
