//! Task records and the arena that owns them.

use chrono::{DateTime, Utc};

/// Maximum stored description length, in characters.
///
/// Longer descriptions are truncated on creation.
pub const MAX_DESCRIPTION_LEN: usize = 99;

/// Stable handle to a task in a [`TaskArena`].
///
/// A handle is held by at most one container at a time; moving a task from
/// the active store to the completed stack moves the handle, never the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(usize);

/// A user-described unit of work.
#[derive(Debug, Clone)]
pub struct Task {
    description: String,
    created_at: DateTime<Utc>,
}

impl Task {
    fn new(description: &str) -> Self {
        Self {
            description: description.chars().take(MAX_DESCRIPTION_LEN).collect(),
            created_at: Utc::now(),
        }
    }

    /// The task's description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the task was added.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Arena that owns every task for the lifetime of the run.
///
/// Entries are never removed, so a [`TaskId`] stays valid until process
/// exit. Containers decide which tasks are "live" by which handles they
/// currently hold.
#[derive(Debug, Default)]
pub struct TaskArena {
    tasks: Vec<Task>,
}

impl TaskArena {
    /// Create an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Allocate a new task and return its handle.
    pub fn insert(&mut self, description: &str) -> TaskId {
        let id = TaskId(self.tasks.len());
        self.tasks.push(Task::new(description));
        id
    }

    /// Look up a task by handle.
    #[must_use]
    pub fn get(&self, id: TaskId) -> &Task {
        &self.tasks[id.0]
    }

    /// Number of tasks ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
