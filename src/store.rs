// In-memory task board state: task collection, active filter and derived column views

use crate::filter::{FilterPatch, FilterState};
use crate::models::{Task, TaskStatus, TaskUpdate, generate_task_id, now};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Position of a task within a column as currently rendered (filtered, sorted by `sort_order`).
///
/// This is not an index into the underlying task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisibleIndex(pub usize);

impl From<usize> for VisibleIndex {
    fn from(index: usize) -> Self {
        VisibleIndex(index)
    }
}

/// Single source of truth for tasks and filters
///
/// Operations that look a task up by id return `false` and leave the state
/// untouched when the id is unknown.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filters: FilterState,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>, filters: FilterState) -> Self {
        Self { tasks, filters }
    }

    /// All tasks in collection order, unfiltered
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // ========================================================================
    // Task mutations
    // ========================================================================

    /// Append a task. The caller sets `sort_order` and timestamps; duplicate ids are not rejected.
    pub fn add_task(&mut self, task: Task) {
        if self.task(&task.id).is_some() {
            warn!(id = %task.id, "add_task: id already present");
        }
        debug!(id = %task.id, status = %task.status, sort_order = task.sort_order, "add_task");
        self.tasks.push(task);
    }

    /// Merge `update` into the task with `id` and stamp `updated_at`
    pub fn update_task(&mut self, id: &str, update: TaskUpdate) -> bool {
        let Some(task) = self.task_mut(id) else {
            debug!(id, "update_task: no such task");
            return false;
        };
        update.apply(task);
        task.touch(now());
        debug!(id, "update_task: updated");
        true
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        debug!(id, removed, "delete_task");
        removed
    }

    /// Change a task's column without touching any ordering
    pub fn move_task(&mut self, task_id: &str, new_status: TaskStatus) -> bool {
        let Some(task) = self.task_mut(task_id) else {
            debug!(task_id, "move_task: no such task");
            return false;
        };
        task.status = new_status;
        task.touch(now());
        debug!(task_id, status = %new_status, "move_task");
        true
    }

    /// Move the task at `old_index` of the visible column to `new_index`.
    ///
    /// Visible tasks get `sort_order` 0..k-1 in their new order. Tasks of the same
    /// column hidden by the filter keep their value, shifted by one when their
    /// position in the full column is at or after the insertion point.
    pub fn reorder_tasks_in_column(
        &mut self,
        status: TaskStatus,
        old_index: VisibleIndex,
        new_index: VisibleIndex,
    ) -> bool {
        let column = self.column_positions(status);
        let mut visible: Vec<usize> = column
            .iter()
            .copied()
            .filter(|&pos| self.filters.matches(&self.tasks[pos]))
            .collect();

        if old_index.0 >= visible.len() {
            debug!(
                %status,
                old_index = old_index.0,
                visible = visible.len(),
                "reorder_tasks_in_column: index out of range"
            );
            return false;
        }

        let moved = visible.remove(old_index.0);
        let insert_at = new_index.0.min(visible.len());
        visible.insert(insert_at, moved);

        let stamp = now();
        for (order, &pos) in visible.iter().enumerate() {
            let task = &mut self.tasks[pos];
            task.sort_order = order as i64;
            task.touch(stamp);
        }

        let shown: HashSet<usize> = visible.iter().copied().collect();
        for (column_index, &pos) in column.iter().enumerate() {
            if shown.contains(&pos) || column_index < insert_at {
                continue;
            }
            let task = &mut self.tasks[pos];
            task.sort_order = task.sort_order.saturating_add(1);
            task.touch(stamp);
        }

        debug!(
            %status,
            old_index = old_index.0,
            new_index = insert_at,
            hidden = column.len() - visible.len(),
            "reorder_tasks_in_column"
        );
        true
    }

    /// Move a task into `new_status` at `target_index` of that column's visible list.
    ///
    /// The target column's visible tasks (the moved one included) are renumbered 0..k-1.
    pub fn move_task_to_column(
        &mut self,
        task_id: &str,
        new_status: TaskStatus,
        target_index: VisibleIndex,
    ) -> bool {
        let Some(moved) = self.position(task_id) else {
            debug!(task_id, "move_task_to_column: no such task");
            return false;
        };

        let mut target: Vec<usize> = self
            .visible_positions(new_status)
            .into_iter()
            .filter(|&pos| pos != moved)
            .collect();
        let insert_at = target_index.0.min(target.len());
        target.insert(insert_at, moved);

        let from = self.tasks[moved].status;
        self.tasks[moved].status = new_status;

        let stamp = now();
        for (order, &pos) in target.iter().enumerate() {
            let task = &mut self.tasks[pos];
            task.sort_order = order as i64;
            task.touch(stamp);
        }

        debug!(task_id, %from, to = %new_status, index = insert_at, "move_task_to_column");
        true
    }

    // ========================================================================
    // Filters
    // ========================================================================

    pub fn set_filter(&mut self, patch: FilterPatch) {
        self.filters.merge(patch);
        debug!(filters = ?self.filters, "set_filter");
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        debug!("clear_filters");
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    /// Tasks passing the active filter, in collection order
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filters.matches(t)).collect()
    }

    /// Column display order: filtered tasks of `status`, ascending `sort_order`
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.visible_positions(status).into_iter().map(|pos| &self.tasks[pos]).collect()
    }

    /// Visible task count per column, in board order
    pub fn column_counts(&self) -> [(TaskStatus, usize); 3] {
        TaskStatus::ALL.map(|status| (status, self.visible_positions(status).len()))
    }

    /// Distinct non-empty assignees, first-seen order
    pub fn assignees(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tasks
            .iter()
            .map(|t| t.assignee.as_str())
            .filter(|a| !a.is_empty() && seen.insert(*a))
            .collect()
    }

    /// Distinct tags across all tasks, first-seen order
    pub fn all_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tasks
            .iter()
            .flat_map(|t| t.tags.iter().map(String::as_str))
            .filter(|tag| seen.insert(*tag))
            .collect()
    }

    /// `sort_order` that places a new task at the end of `status`
    pub fn next_sort_order(&self, status: TaskStatus) -> i64 {
        self.tasks
            .iter()
            .filter(|t| t.status == status)
            .map(|t| t.sort_order.saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// A `TSK-` id not yet used by any task
    pub fn next_task_id(&self, mut at: DateTime<Utc>) -> String {
        loop {
            let id = generate_task_id(at);
            if self.task(&id).is_none() {
                return id;
            }
            at += Duration::milliseconds(1);
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Collection positions of every task in `status`, sorted by `sort_order` (stable)
    fn column_positions(&self, status: TaskStatus) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..self.tasks.len())
            .filter(|&pos| self.tasks[pos].status == status)
            .collect();
        positions.sort_by_key(|&pos| self.tasks[pos].sort_order);
        positions
    }

    fn visible_positions(&self, status: TaskStatus) -> Vec<usize> {
        self.column_positions(status)
            .into_iter()
            .filter(|&pos| self.filters.matches(&self.tasks[pos]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Snapshot, initialize};
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn task(id: &str, status: TaskStatus, sort_order: i64) -> Task {
        Task::new(id, format!("Task {}", id), status, t0()).with_sort_order(sort_order)
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    fn column_store() -> TaskStore {
        TaskStore::new(
            vec![
                task("A", TaskStatus::Scheduled, 0),
                task("B", TaskStatus::Scheduled, 1),
                task("C", TaskStatus::Scheduled, 2),
                task("D", TaskStatus::Done, 0),
                task("E", TaskStatus::Done, 1),
            ],
            FilterState::default(),
        )
    }

    #[test]
    fn test_add_task() {
        let mut store = TaskStore::default();
        let new_task = task("TSK-TEST", TaskStatus::Scheduled, 0);

        store.add_task(new_task.clone());

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.task("TSK-TEST"), Some(&new_task));
    }

    #[test]
    fn test_update_task_merges_and_stamps() {
        let mut store = column_store();
        let before = store.task("A").unwrap().updated_at;

        let found = store.update_task(
            "A",
            TaskUpdate {
                title: Some("Updated Title".to_string()),
                ..Default::default()
            },
        );

        assert!(found);
        let updated = store.task("A").unwrap();
        assert_eq!(updated.title, "Updated Title");
        assert!(updated.updated_at > before);
        assert_eq!(updated.sort_order, 0);
    }

    #[test]
    fn test_update_task_unknown_id_is_noop() {
        let mut store = column_store();
        let before: Vec<Task> = store.tasks().to_vec();

        let found = store.update_task(
            "missing",
            TaskUpdate {
                title: Some("x".to_string()),
                ..Default::default()
            },
        );

        assert!(!found);
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_task() {
        let mut store = column_store();

        assert!(store.delete_task("B"));
        assert_eq!(store.tasks().len(), 4);
        assert!(store.filtered_tasks().iter().all(|t| t.id != "B"));

        assert!(!store.delete_task("B"));
        assert_eq!(store.tasks().len(), 4);
    }

    #[test]
    fn test_move_task_changes_status_only() {
        let mut store = column_store();
        let before = store.task("A").unwrap().updated_at;

        assert!(store.move_task("A", TaskStatus::InProgress));

        let moved = store.task("A").unwrap();
        assert_eq!(moved.status, TaskStatus::InProgress);
        assert_eq!(moved.sort_order, 0);
        assert!(moved.updated_at > before);

        assert!(!store.move_task("missing", TaskStatus::Done));
    }

    #[test]
    fn test_reorder_first_to_last() {
        let mut store = column_store();

        assert!(store.reorder_tasks_in_column(TaskStatus::Scheduled, VisibleIndex(0), VisibleIndex(2)));

        let column = store.tasks_by_status(TaskStatus::Scheduled);
        assert_eq!(ids(&column), vec!["B", "C", "A"]);
        let orders: Vec<i64> = column.iter().map(|t| t.sort_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert!(column.iter().all(|t| t.updated_at > t0()));
    }

    #[test]
    fn test_reorder_last_to_first() {
        let mut store = column_store();

        assert!(store.reorder_tasks_in_column(TaskStatus::Scheduled, VisibleIndex(2), VisibleIndex(0)));

        assert_eq!(ids(&store.tasks_by_status(TaskStatus::Scheduled)), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reorder_clamps_new_index_to_end() {
        let mut store = column_store();

        assert!(store.reorder_tasks_in_column(TaskStatus::Scheduled, VisibleIndex(0), VisibleIndex(3)));

        assert_eq!(ids(&store.tasks_by_status(TaskStatus::Scheduled)), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let mut store = column_store();
        let before: Vec<Task> = store.tasks().to_vec();

        assert!(!store.reorder_tasks_in_column(TaskStatus::Scheduled, VisibleIndex(3), VisibleIndex(0)));
        assert!(!store.reorder_tasks_in_column(TaskStatus::InProgress, VisibleIndex(0), VisibleIndex(0)));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_reorder_leaves_other_columns_alone() {
        let mut store = column_store();

        store.reorder_tasks_in_column(TaskStatus::Scheduled, VisibleIndex(0), VisibleIndex(1));

        let done = store.tasks_by_status(TaskStatus::Done);
        assert_eq!(ids(&done), vec!["D", "E"]);
        assert!(done.iter().all(|t| t.updated_at == t0()));
    }

    #[test]
    fn test_reorder_uses_filtered_view_and_shifts_hidden_tasks() {
        let mut store = TaskStore::new(
            vec![
                task("A", TaskStatus::Scheduled, 0).with_tags(["ui"]),
                task("H", TaskStatus::Scheduled, 1).with_tags(["ops"]),
                task("B", TaskStatus::Scheduled, 2).with_tags(["ui"]),
                task("C", TaskStatus::Scheduled, 3).with_tags(["ui"]),
            ],
            FilterState::default(),
        );
        store.set_filter(FilterPatch::tags(["ui"]));
        assert_eq!(ids(&store.tasks_by_status(TaskStatus::Scheduled)), vec!["A", "B", "C"]);

        // Visible indices refer to [A, B, C], not to the full column
        assert!(store.reorder_tasks_in_column(TaskStatus::Scheduled, VisibleIndex(2), VisibleIndex(0)));

        assert_eq!(ids(&store.tasks_by_status(TaskStatus::Scheduled)), vec!["C", "A", "B"]);
        assert_eq!(store.task("C").unwrap().sort_order, 0);
        assert_eq!(store.task("A").unwrap().sort_order, 1);
        assert_eq!(store.task("B").unwrap().sort_order, 2);

        // H sat at column index 1, at or after the insertion point 0, so it shifts
        // to 2 and ties with B. Ties are allowed; the stable sort breaks them by
        // collection order, which keeps H after A and before B in the full column.
        let hidden = store.task("H").unwrap();
        assert_eq!(hidden.sort_order, 2);
        assert!(hidden.updated_at > t0());

        store.clear_filters();
        assert_eq!(ids(&store.tasks_by_status(TaskStatus::Scheduled)), vec!["C", "A", "H", "B"]);
    }

    #[test]
    fn test_reorder_hidden_task_before_insertion_point_keeps_order() {
        let mut store = TaskStore::new(
            vec![
                task("H", TaskStatus::Scheduled, 0).with_tags(["ops"]),
                task("A", TaskStatus::Scheduled, 1).with_tags(["ui"]),
                task("B", TaskStatus::Scheduled, 2).with_tags(["ui"]),
            ],
            FilterState::default(),
        );
        store.set_filter(FilterPatch::tags(["ui"]));

        assert!(store.reorder_tasks_in_column(TaskStatus::Scheduled, VisibleIndex(0), VisibleIndex(1)));

        assert_eq!(ids(&store.tasks_by_status(TaskStatus::Scheduled)), vec!["B", "A"]);
        let hidden = store.task("H").unwrap();
        assert_eq!(hidden.sort_order, 0);
        assert_eq!(hidden.updated_at, t0());
    }

    #[test]
    fn test_move_task_to_column_front() {
        let mut store = column_store();
        let done_before: Vec<(String, i64)> = store
            .tasks_by_status(TaskStatus::Done)
            .iter()
            .map(|t| (t.id.clone(), t.sort_order))
            .collect();

        assert!(store.move_task_to_column("B", TaskStatus::Done, VisibleIndex(0)));

        let moved = store.task("B").unwrap();
        assert_eq!(moved.status, TaskStatus::Done);
        assert_eq!(moved.sort_order, 0);
        assert!(moved.updated_at > t0());

        for (id, order) in done_before {
            let task = store.task(&id).unwrap();
            assert_eq!(task.sort_order, order + 1);
            assert!(task.updated_at > t0());
        }
        assert_eq!(ids(&store.tasks_by_status(TaskStatus::Done)), vec!["B", "D", "E"]);
        assert_eq!(ids(&store.tasks_by_status(TaskStatus::Scheduled)), vec!["A", "C"]);
    }

    #[test]
    fn test_move_task_to_column_middle_and_end() {
        let mut store = column_store();

        assert!(store.move_task_to_column("A", TaskStatus::Done, VisibleIndex(1)));
        assert_eq!(ids(&store.tasks_by_status(TaskStatus::Done)), vec!["D", "A", "E"]);

        assert!(store.move_task_to_column("C", TaskStatus::Done, VisibleIndex(99)));
        let done = store.tasks_by_status(TaskStatus::Done);
        assert_eq!(ids(&done), vec!["D", "A", "E", "C"]);
        let orders: Vec<i64> = done.iter().map(|t| t.sort_order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_move_task_to_empty_column() {
        let mut store = column_store();

        assert!(store.move_task_to_column("C", TaskStatus::InProgress, VisibleIndex(0)));

        let column = store.tasks_by_status(TaskStatus::InProgress);
        assert_eq!(ids(&column), vec!["C"]);
        assert_eq!(column[0].sort_order, 0);
    }

    #[test]
    fn test_move_task_to_column_unknown_id_is_noop() {
        let mut store = column_store();
        let before: Vec<Task> = store.tasks().to_vec();

        assert!(!store.move_task_to_column("missing", TaskStatus::Done, VisibleIndex(0)));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_filter_composition() {
        let mut store = TaskStore::new(
            vec![
                task("1", TaskStatus::Scheduled, 0)
                    .with_assignee("Ann")
                    .with_tags(["backend"]),
                task("2", TaskStatus::Scheduled, 1)
                    .with_assignee("Bob")
                    .with_tags(["frontend"]),
            ],
            FilterState::default(),
        );
        store.update_task(
            "1",
            TaskUpdate {
                title: Some("Fix bug".to_string()),
                ..Default::default()
            },
        );
        store.update_task(
            "2",
            TaskUpdate {
                title: Some("Ship UI".to_string()),
                ..Default::default()
            },
        );

        store.set_filter(FilterPatch::search("bug"));
        assert_eq!(ids(&store.filtered_tasks()), vec!["1"]);

        store.set_filter(FilterPatch {
            search: Some(String::new()),
            tags: Some(vec!["frontend".to_string()]),
            ..Default::default()
        });
        assert_eq!(ids(&store.filtered_tasks()), vec!["2"]);

        store.set_filter(FilterPatch {
            assignee: Some(Some("Ann".to_string())),
            tags: Some(vec!["frontend".to_string()]),
            ..Default::default()
        });
        assert!(store.filtered_tasks().is_empty());
    }

    #[test]
    fn test_unknown_assignee_filter_yields_empty_view() {
        let mut store = column_store();
        store.set_filter(FilterPatch::assignee(Some("Nobody".to_string())));
        assert!(store.filtered_tasks().is_empty());
        assert_eq!(store.column_counts(), [
            (TaskStatus::Scheduled, 0),
            (TaskStatus::InProgress, 0),
            (TaskStatus::Done, 0)
        ]);
    }

    #[test]
    fn test_clear_filters_is_idempotent() {
        let mut store = column_store();
        store.set_filter(FilterPatch {
            search: Some("test".to_string()),
            assignee: Some(Some("John Doe".to_string())),
            tags: Some(vec!["backend".to_string()]),
        });

        store.clear_filters();
        let once = store.filters().clone();
        store.clear_filters();

        assert_eq!(store.filters(), &once);
        assert_eq!(once, FilterState::default());
        assert!(once.assignee.is_none());
    }

    #[test]
    fn test_tasks_by_status_sorted_subset_of_filtered() {
        let mut store = TaskStore::new(
            vec![
                task("A", TaskStatus::Done, 5).with_tags(["x"]),
                task("B", TaskStatus::Scheduled, 0).with_tags(["x"]),
                task("C", TaskStatus::Done, 1).with_tags(["x"]),
                task("D", TaskStatus::Done, 3),
            ],
            FilterState::default(),
        );
        store.set_filter(FilterPatch::tags(["x"]));

        let filtered = ids(&store.filtered_tasks());
        let done = store.tasks_by_status(TaskStatus::Done);

        assert_eq!(ids(&done), vec!["C", "A"]);
        assert!(done.iter().all(|t| t.status == TaskStatus::Done));
        assert!(done.windows(2).all(|w| w[0].sort_order <= w[1].sort_order));
        assert!(done.iter().all(|t| filtered.contains(&t.id)));
        // collection order, not column order
        assert_eq!(filtered, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_assignees_and_tags_are_unique() {
        let store = TaskStore::new(
            vec![
                task("1", TaskStatus::Scheduled, 0)
                    .with_assignee("Ann")
                    .with_tags(["backend", "api"]),
                task("2", TaskStatus::Scheduled, 1)
                    .with_assignee("Bob")
                    .with_tags(["frontend", "api"]),
                task("3", TaskStatus::Done, 0).with_assignee("Ann"),
                task("4", TaskStatus::Done, 1),
            ],
            FilterState::default(),
        );

        assert_eq!(store.assignees(), vec!["Ann", "Bob"]);
        assert_eq!(store.all_tags(), vec!["backend", "api", "frontend"]);
    }

    #[test]
    fn test_next_sort_order() {
        let store = column_store();
        assert_eq!(store.next_sort_order(TaskStatus::Scheduled), 3);
        assert_eq!(store.next_sort_order(TaskStatus::InProgress), 0);
    }

    fn extreme_store() -> TaskStore {
        let json = format!(
            r#"{{"tasks":[
                {{"id":"X","title":"Edge","status":"scheduled","createdAt":"2025-01-01T00:00:00Z",
                  "updatedAt":"+262142-12-31T23:59:59.999999999Z","sortOrder":0}},
                {{"id":"V","title":"Shown","status":"done","tags":["ui"],"createdAt":"2025-01-01T00:00:00Z",
                  "updatedAt":"2025-01-01T00:00:00Z","sortOrder":0}},
                {{"id":"H","title":"Hidden","status":"done","tags":["ops"],"createdAt":"2025-01-01T00:00:00Z",
                  "updatedAt":"2025-01-01T00:00:00Z","sortOrder":{}}}
            ],"filters":{{"search":"","assignee":null,"tags":["ui"]}}}}"#,
            i64::MAX
        );
        initialize(Some(Snapshot::from_json(&json).unwrap()))
    }

    #[test]
    fn test_next_sort_order_saturates() {
        let store = extreme_store();
        assert_eq!(store.next_sort_order(TaskStatus::Done), i64::MAX);
    }

    #[test]
    fn test_reorder_saturates_hidden_sort_order() {
        let mut store = extreme_store();

        assert!(store.reorder_tasks_in_column(TaskStatus::Done, VisibleIndex(0), VisibleIndex(0)));

        assert_eq!(store.task("V").unwrap().sort_order, 0);
        assert_eq!(store.task("H").unwrap().sort_order, i64::MAX);
    }

    #[test]
    fn test_move_task_with_max_updated_at() {
        let mut store = extreme_store();
        let before = store.task("X").unwrap().updated_at;

        assert!(store.move_task("X", TaskStatus::InProgress));

        let moved = store.task("X").unwrap();
        assert_eq!(moved.status, TaskStatus::InProgress);
        assert_eq!(moved.updated_at, before);
    }

    #[test]
    fn test_next_task_id_skips_taken_ids() {
        let at = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();
        let mut store = TaskStore::default();
        store.add_task(task("TSK-123456", TaskStatus::Scheduled, 0));

        assert_eq!(store.next_task_id(at), "TSK-123457");
    }
}
