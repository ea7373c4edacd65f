//! The task manager menu loop.
//!
//! Presents the add/complete menu until the user selects 0 (or input hits
//! EOF) and applies the chosen operation to [`AppState`]. Runs once before
//! the first Pomodoro cycle and again after every break.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::core::state::{AppState, CompleteOutcome};
use crate::error::PomoError;

/// A valid menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Complete,
    Exit,
}

fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim().parse::<i64>() {
        Ok(1) => Some(Choice::Add),
        Ok(2) => Some(Choice::Complete),
        Ok(0) => Some(Choice::Exit),
        _ => None,
    }
}

/// Read one line from `input`, stripping the trailing newline.
///
/// Returns `None` at end of input.
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, PomoError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Run the menu loop until the user exits.
///
/// Invalid selections (out-of-range numbers, non-numeric input) re-prompt
/// with a short notice; "not found" and "no tasks" are reported the same
/// way. EOF on `input` behaves like selecting 0, so piped input cannot
/// spin forever.
///
/// # Errors
///
/// Returns an error only if console I/O fails.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    input: &mut R,
    output: &mut W,
) -> Result<(), PomoError> {
    loop {
        writeln!(output)?;
        writeln!(output, "{}", "What would you like to do?".bold())?;
        writeln!(output, "1. Add a new task")?;
        writeln!(output, "2. Mark a task as completed")?;
        writeln!(output, "0. No changes")?;
        write!(output, "\nEnter your choice: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        match parse_choice(&line) {
            Some(Choice::Exit) => return Ok(()),
            Some(Choice::Add) => add_task(state, input, output)?,
            Some(Choice::Complete) => complete_task(state, input, output)?,
            None => writeln!(output, "{}", "Invalid choice, enter 1, 2, or 0.".yellow())?,
        }
    }
}

fn add_task<R: BufRead, W: Write>(
    state: &mut AppState,
    input: &mut R,
    output: &mut W,
) -> Result<(), PomoError> {
    write!(output, "Enter task description: ")?;
    output.flush()?;

    let Some(description) = read_line(input)? else {
        return Ok(());
    };

    if description.trim().is_empty() {
        writeln!(output, "{}", "Description cannot be empty.".yellow())?;
        return Ok(());
    }

    let id = state.add_task(&description);
    writeln!(
        output,
        "{} \"{}\"",
        "Added".green(),
        state.task(id).description()
    )?;
    Ok(())
}

fn complete_task<R: BufRead, W: Write>(
    state: &mut AppState,
    input: &mut R,
    output: &mut W,
) -> Result<(), PomoError> {
    if state.store().is_empty() {
        writeln!(output, "{}", "No tasks to complete.".yellow())?;
        return Ok(());
    }

    write!(output, "Enter task description: ")?;
    output.flush()?;

    let Some(description) = read_line(input)? else {
        return Ok(());
    };

    match state.complete_task(&description) {
        CompleteOutcome::Completed(id) => writeln!(
            output,
            "{} \"{}\"",
            "Completed".green(),
            state.task(id).description()
        )?,
        CompleteOutcome::NotFound => writeln!(
            output,
            "{}",
            format!("No task matching \"{description}\" was found.").yellow()
        )?,
        CompleteOutcome::NoTasks => writeln!(output, "{}", "No tasks to complete.".yellow())?,
    }
    Ok(())
}
