// View filtering for board tasks

use crate::models::Task;
use serde::{Deserialize, Serialize};

/// Active view filter
///
/// Dimensions combine with AND; the tag list matches if the task carries any one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive substring matched against title or description
    #[serde(default)]
    pub search: String,
    /// Exact assignee match; `None` disables the dimension
    #[serde(default)]
    pub assignee: Option<String>,
    /// Required tags (any-of)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.assignee_filter().is_some() || !self.tags.is_empty()
    }

    /// Shallow-merge `patch` into this filter
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task) && self.matches_assignee(task) && self.matches_tags(task)
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle) || task.description.to_lowercase().contains(&needle)
    }

    fn matches_assignee(&self, task: &Task) -> bool {
        match self.assignee_filter() {
            Some(assignee) => task.assignee == assignee,
            None => true,
        }
    }

    fn matches_tags(&self, task: &Task) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| task.has_tag(tag))
    }

    // An empty assignee string means "anyone", same as None
    fn assignee_filter(&self) -> Option<&str> {
        self.assignee.as_deref().filter(|a| !a.is_empty())
    }
}

/// Partial filter for `TaskStore::set_filter`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub assignee: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}

impl FilterPatch {
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Default::default()
        }
    }

    pub fn assignee(assignee: Option<String>) -> Self {
        Self {
            assignee: Some(assignee),
            ..Default::default()
        }
    }

    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: Some(tags.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}
