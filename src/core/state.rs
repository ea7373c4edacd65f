//! Application state: the arena plus all three containers.
//!
//! One `AppState` is created at startup and threaded through the manager
//! loop and the session driver; there is no module-level mutable state.

use super::queue::SessionQueue;
use super::stack::CompletedStack;
use super::store::TaskStore;
use super::task::{Task, TaskArena, TaskId};

/// Result of attempting to complete a task by description.
///
/// All three variants are ordinary user-visible outcomes, reported by the
/// manager loop rather than propagated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// The task was found, removed from the store, and pushed onto the
    /// completed stack.
    Completed(TaskId),
    /// No active task matched the description. Nothing changed.
    NotFound,
    /// The store was empty before any match was attempted. Nothing changed.
    NoTasks,
}

/// All task state for one run of the program.
///
/// Invariant: a handle is held by at most one of the store and the
/// completed stack at a time.
#[derive(Debug, Default)]
pub struct AppState {
    arena: TaskArena,
    store: TaskStore,
    completed: CompletedStack,
    queue: SessionQueue,
}

impl AppState {
    /// Create empty application state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: TaskArena::new(),
            store: TaskStore::new(),
            completed: CompletedStack::new(),
            queue: SessionQueue::new(),
        }
    }

    /// Add a new task to the head of the active store.
    pub fn add_task(&mut self, description: &str) -> TaskId {
        let id = self.arena.insert(description);
        self.store.push(id);
        id
    }

    /// Move the first task matching `description` from the active store to
    /// the completed stack.
    pub fn complete_task(&mut self, description: &str) -> CompleteOutcome {
        if self.store.is_empty() {
            return CompleteOutcome::NoTasks;
        }

        match self.store.remove_by_description(&self.arena, description) {
            Some(id) => {
                self.completed.push(id);
                CompleteOutcome::Completed(id)
            }
            None => CompleteOutcome::NotFound,
        }
    }

    /// Look up a task by handle.
    #[must_use]
    pub fn task(&self, id: TaskId) -> &Task {
        self.arena.get(id)
    }

    /// The arena owning every task.
    #[must_use]
    pub const fn arena(&self) -> &TaskArena {
        &self.arena
    }

    /// The active task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// The completed-task stack.
    #[must_use]
    pub const fn completed(&self) -> &CompletedStack {
        &self.completed
    }

    /// The session queue.
    #[must_use]
    pub const fn queue(&self) -> &SessionQueue {
        &self.queue
    }

    /// Mutable access to the session queue for scheduling.
    pub fn queue_mut(&mut self) -> &mut SessionQueue {
        &mut self.queue
    }
}
