use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::Cli;
use pomo::config::Config;
use pomo::core::state::AppState;
use pomo::error::PomoError;
use pomo::focus::driver::SessionDriver;
use pomo::focus::timer::format_duration;
use pomo::{manager, output};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let mut state = AppState::new();

    // First task-manager visit happens before any timer runs.
    manager::run(&mut state, &mut input, &mut out)?;

    let sessions = match cli.sessions {
        Some(n) => n,
        None => prompt_session_count(&mut input, &mut out)?,
    };

    let plan = cli.session_plan(&config, sessions)?;
    if plan.sessions > 0 {
        writeln!(
            out,
            "\nScheduled {} session{}: {} focus / {} break per cycle.",
            plan.sessions,
            if plan.sessions == 1 { "" } else { "s" },
            format_duration(plan.focus),
            format_duration(plan.rest)
        )?;
    }
    SessionDriver::new(plan).run(&mut state, &mut input, &mut out)?;

    writeln!(out, "\n{}", "Thank you for using pomo!".bold())?;
    writeln!(out)?;
    writeln!(out, "{}", output::format_active_tasks(&state))?;
    writeln!(out)?;
    writeln!(out, "{}", output::format_completed_tasks(&state))?;
    Ok(())
}

/// Ask for the cycle count until a whole number arrives. EOF counts as zero.
fn prompt_session_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<i64, PomoError> {
    loop {
        write!(output, "Enter the number of Pomodoro sessions to run: ")?;
        output.flush()?;

        let Some(line) = manager::read_line(input)? else {
            return Ok(0);
        };

        match line.trim().parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(_) => writeln!(output, "{}", "Enter a whole number.".yellow())?,
        }
    }
}
