//! Help-wanted task records from the task feed.

use serde::{Deserialize, Serialize};

use super::repo::string_entries;

/// A single help-wanted task.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Task {
    pub title: Option<String>,

    pub description: Option<String>,

    /// Issue or project URL.
    pub url: Option<String>,

    /// Publishing agency.
    pub agency: Option<TaskAgency>,

    #[serde(default, deserialize_with = "string_entries")]
    pub categories: Vec<String>,

    #[serde(default, deserialize_with = "string_entries")]
    pub languages: Vec<String>,

    /// Skill level the task calls for (e.g. "beginner").
    #[serde(rename = "skill", default)]
    pub skill_level: Option<String>,

    /// Estimated effort label (e.g. "small", "medium").
    #[serde(rename = "effort", default)]
    pub time_required: Option<String>,
}

/// Agency stub embedded in a task record.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TaskAgency {
    pub acronym: Option<String>,
    pub name: Option<String>,
}

/// Envelope of the task feed.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TaskFeed {
    #[serde(default)]
    pub items: Vec<Task>,
}

/// A filtered, paginated slice of the task feed.
#[derive(Serialize, Clone, Debug)]
pub struct TasksPage {
    /// Tasks in the requested page window.
    pub tasks: Vec<Task>,

    /// Count of tasks matching the filters before pagination.
    pub total: u64,
}
