//! The active task store.
//!
//! Holds handles to not-yet-completed tasks in LIFO display order: the most
//! recently added task is at the head and is listed first.

use super::task::{TaskArena, TaskId};

/// Ordered collection of active task handles.
///
/// Internally the head lives at the end of the vec, so insertion and removal
/// at the head are O(1); matching by description is an O(n) scan.
#[derive(Debug, Default)]
pub struct TaskStore {
    handles: Vec<TaskId>,
}

impl TaskStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { handles: Vec::new() }
    }

    /// Insert a handle at the head of the store.
    pub fn push(&mut self, id: TaskId) {
        self.handles.push(id);
    }

    /// Remove and return the first handle (scanning from the head) whose
    /// task description matches `description` exactly, byte for byte.
    ///
    /// Returns `None` when the store is empty or nothing matches; the caller
    /// reports that to the user rather than treating it as a failure. The
    /// order of the remaining handles is preserved.
    pub fn remove_by_description(
        &mut self,
        arena: &TaskArena,
        description: &str,
    ) -> Option<TaskId> {
        let pos = self
            .handles
            .iter()
            .rposition(|&id| arena.get(id).description() == description)?;
        Some(self.handles.remove(pos))
    }

    /// Iterate handles head-to-tail (most recently added first).
    pub fn iter(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.handles.iter().rev().copied()
    }

    /// Number of active tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
