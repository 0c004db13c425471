// Data models for the kanban board

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Scheduled,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Columns in board order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Scheduled, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Scheduled => "scheduled",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    /// Column heading
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Scheduled => "Scheduled",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(TaskStatus::Scheduled),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(format!(
                "unknown status '{}' (expected scheduled, in-progress or done)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            other => Err(format!(
                "unknown priority '{}' (expected low, medium, high or critical)",
                other
            )),
        }
    }
}

/// Checklist item shown on the task detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// A unit of work on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Position within the status column; only comparable between tasks of the same status
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<Subtask>>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: TaskStatus, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status,
            assignee: String::new(),
            tags: Vec::new(),
            priority: None,
            due_date: None,
            created_at: now,
            updated_at: now,
            sort_order: 0,
            subtasks: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_subtasks(mut self, subtasks: Vec<Subtask>) -> Self {
        self.subtasks = Some(subtasks);
        self
    }

    /// Stamp `updated_at` for a mutation happening at `now`.
    ///
    /// The stamp always moves forward, even if the clock reads the same instant
    /// (or an earlier one) as the previous stamp. At the largest representable
    /// time it stays put.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let last = self.updated_at.max(self.created_at);
        let floor = last.checked_add_signed(Duration::nanoseconds(1)).unwrap_or(last);
        self.updated_at = now.max(floor);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// (completed, total) subtask counts
    pub fn subtask_progress(&self) -> (usize, usize) {
        match &self.subtasks {
            Some(subtasks) => (subtasks.iter().filter(|s| s.completed).count(), subtasks.len()),
            None => (0, 0),
        }
    }

    /// How close the due date is, relative to `now`
    pub fn due_state(&self, now: DateTime<Utc>) -> Option<DueState> {
        let due = self.due_date?;
        let millis = (due - now).num_milliseconds() as f64;
        let day_diff = (millis / MILLIS_PER_DAY).ceil();

        Some(if day_diff < 0.0 {
            DueState::Overdue
        } else if day_diff <= 1.0 {
            DueState::DueSoon
        } else {
            DueState::Upcoming
        })
    }
}

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueState {
    Overdue,
    DueSoon,
    Upcoming,
}

/// Partial set of task fields for `TaskStore::update_task`.
///
/// `None` leaves a field alone. Nullable task fields take `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub assignee: Option<String>,
    pub tags: Option<Vec<String>>,
    pub priority: Option<Option<Priority>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub sort_order: Option<i64>,
    pub subtasks: Option<Option<Vec<Subtask>>>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        *self == TaskUpdate::default()
    }

    /// Merge the present fields into `task`. Does not stamp `updated_at`.
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(assignee) = self.assignee {
            task.assignee = assignee;
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(sort_order) = self.sort_order {
            task.sort_order = sort_order;
        }
        if let Some(subtasks) = self.subtasks {
            task.subtasks = subtasks;
        }
    }
}

/// Current wall-clock time
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Build a `TSK-nnnnnn` id from the last six digits of the millisecond timestamp
pub fn generate_task_id(now: DateTime<Utc>) -> String {
    format!("TSK-{:06}", now.timestamp_millis().rem_euclid(1_000_000))
}
