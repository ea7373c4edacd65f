//! Core task-state management.
//!
//! Tasks live in an arena and are referenced by stable [`TaskId`] handles.
//! The three containers (active store, completed stack, session queue) hold
//! ordered sequences of handles; completing a task moves its handle between
//! containers rather than copying the task.

pub mod queue;
pub mod stack;
pub mod state;
pub mod store;
pub mod task;

pub use queue::SessionQueue;
pub use stack::CompletedStack;
pub use state::{AppState, CompleteOutcome};
pub use store::TaskStore;
pub use task::{Task, TaskArena, TaskId, MAX_DESCRIPTION_LEN};
