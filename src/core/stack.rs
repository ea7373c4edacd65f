//! The completed-task stack.
//!
//! LIFO history of completed tasks: the most recently completed task is on
//! top and is listed first. Nothing in the interactive flow ever pops, but
//! the operation is part of the container's contract.

use super::task::TaskId;

/// LIFO stack of completed task handles.
#[derive(Debug, Default)]
pub struct CompletedStack {
    handles: Vec<TaskId>,
}

impl CompletedStack {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { handles: Vec::new() }
    }

    /// Push a handle onto the top of the stack. O(1).
    pub fn push(&mut self, id: TaskId) {
        self.handles.push(id);
    }

    /// Pop the top handle, or `None` when the stack is empty. O(1).
    pub fn pop(&mut self) -> Option<TaskId> {
        self.handles.pop()
    }

    /// Iterate handles top-to-bottom (most recently completed first).
    pub fn iter(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.handles.iter().rev().copied()
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no task has been completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
