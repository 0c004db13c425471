// Built-in starter board used when nothing has been persisted yet

use crate::models::{Priority, Subtask, Task, TaskStatus};
use chrono::{DateTime, TimeZone, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn subtask(id: &str, title: &str, completed: bool) -> Subtask {
    Subtask {
        id: id.to_string(),
        title: title.to_string(),
        completed,
    }
}

/// Default tasks, `sort_order` contiguous within each column
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new("TSK-001", "Design onboarding flow", TaskStatus::Scheduled, date(2025, 1, 6))
            .with_description("Sketch the first-run screens and the empty board state.")
            .with_assignee("Sarah Chen")
            .with_tags(["design", "frontend"])
            .with_priority(Priority::High)
            .with_due_date(date(2025, 1, 20))
            .with_sort_order(0),
        Task::new("TSK-002", "Set up CI pipeline", TaskStatus::Scheduled, date(2025, 1, 6))
            .with_description("Run lint and tests on every push; cache dependencies.")
            .with_assignee("Mike Johnson")
            .with_tags(["devops"])
            .with_priority(Priority::Medium)
            .with_sort_order(1),
        Task::new("TSK-003", "Write API documentation", TaskStatus::Scheduled, date(2025, 1, 7))
            .with_description("Document every endpoint with request and response examples.")
            .with_assignee("Emily Davis")
            .with_tags(["docs", "backend"])
            .with_priority(Priority::Low)
            .with_sort_order(2),
        Task::new("TSK-004", "Implement authentication", TaskStatus::InProgress, date(2025, 1, 3))
            .with_description("Session login with password reset by email.")
            .with_assignee("Mike Johnson")
            .with_tags(["backend", "security"])
            .with_priority(Priority::Critical)
            .with_due_date(date(2025, 1, 15))
            .with_sort_order(0)
            .with_subtasks(vec![
                subtask("TSK-004-1", "Login endpoint", true),
                subtask("TSK-004-2", "Password hashing", true),
                subtask("TSK-004-3", "Reset email", false),
            ]),
        Task::new("TSK-005", "Fix drag and drop on mobile", TaskStatus::InProgress, date(2025, 1, 8))
            .with_description("Cards jump back to their column when dropped with a touch gesture.")
            .with_assignee("Sarah Chen")
            .with_tags(["bug", "frontend"])
            .with_priority(Priority::High)
            .with_sort_order(1),
        Task::new("TSK-006", "Project kickoff", TaskStatus::Done, date(2025, 1, 2))
            .with_description("Agree on scope, milestones and owners.")
            .with_assignee("Emily Davis")
            .with_tags(["planning"])
            .with_priority(Priority::Medium)
            .with_sort_order(0),
    ]
}
