//! The session queue.
//!
//! Generic FIFO over task handles, front-to-rear. The interactive flow never
//! populates it; it exists for scheduling tasks into future sessions and is
//! kept fully functional for that purpose.

use std::collections::VecDeque;

use super::task::TaskId;

/// FIFO queue of task handles.
#[derive(Debug, Default)]
pub struct SessionQueue {
    handles: VecDeque<TaskId>,
}

impl SessionQueue {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handles: VecDeque::new(),
        }
    }

    /// Append a handle at the rear. O(1).
    pub fn enqueue(&mut self, id: TaskId) {
        self.handles.push_back(id);
    }

    /// Remove and return the front handle, or `None` when the queue is
    /// empty. O(1).
    pub fn dequeue(&mut self) -> Option<TaskId> {
        self.handles.pop_front()
    }

    /// Iterate handles front-to-rear (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.handles.iter().copied()
    }

    /// Number of queued handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
