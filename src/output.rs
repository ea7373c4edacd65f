//! Read-only rendering of the task containers.
//!
//! Each formatter walks one container in its display order and never
//! mutates anything: the store head-to-tail, the completed stack
//! top-to-bottom, the session queue front-to-rear.

use colored::Colorize;

use crate::core::state::AppState;
use crate::core::task::TaskId;

fn format_list<I: Iterator<Item = TaskId>>(state: &AppState, title: &str, ids: I) -> String {
    let mut lines = vec![title.bold().to_string()];
    let mut any = false;
    for id in ids {
        lines.push(format!("- {}", state.task(id).description()));
        any = true;
    }
    if !any {
        lines.push("(none)".dimmed().to_string());
    }
    lines.join("\n")
}

/// Render the active task store, most recently added first.
#[must_use]
pub fn format_active_tasks(state: &AppState) -> String {
    format_list(state, "Tasks:", state.store().iter())
}

/// Render the completed stack, most recently completed first.
#[must_use]
pub fn format_completed_tasks(state: &AppState) -> String {
    format_list(state, "Completed tasks:", state.completed().iter())
}

/// Render the session queue, oldest first.
#[must_use]
pub fn format_scheduled_sessions(state: &AppState) -> String {
    format_list(state, "Scheduled sessions:", state.queue().iter())
}
