//! hatch-shell entry point.
//!
//! A raw-mode terminal host for the hatch console. Type to see inline
//! suggestions, Tab applies the selected one, Up/Down cycle suggestions
//! or recall history, Enter submits. Ctrl+C or Escape quits.
//!
//! A TOML config path may be given as the first CLI argument or through
//! the HATCH_CONFIG environment variable.

mod input;
mod render;

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use hatch_console::{ConsoleConfig, ConsoleSession};
use hatch_types::transcript::LogEntry;

use input::KeyOutcome;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    setup_panic_hook();

    // Resolve config from CLI arg, HATCH_CONFIG env var, or defaults.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("HATCH_CONFIG").ok());
    let config = match config_path {
        Some(path) => ConsoleConfig::from_toml_file(&path)?,
        None => ConsoleConfig::default(),
    };
    log::info!(
        "Starting hatch shell (suggestion cap {}, transcript cap {})",
        config.suggestion_cap,
        config.max_log_entries,
    );

    let mut session = ConsoleSession::new(config);
    let quit = Rc::new(Cell::new(false));
    register_shell_commands(&mut session, &quit)?;

    session.log(format!(
        "hatch v{} -- Type 'help' for commands",
        env!("CARGO_PKG_VERSION")
    ));
    session.log("Ctrl+C or Esc to quit");

    terminal::enable_raw_mode()?;
    let result = run(&mut session, &quit);
    let _ = terminal::disable_raw_mode();
    println!();

    log::info!("hatch shell shut down cleanly");
    result
}

/// Commands the shell itself contributes on top of the built-ins.
fn register_shell_commands(session: &mut ConsoleSession, quit: &Rc<Cell<bool>>) -> Result<()> {
    let log = session.log_handle();
    session.register("echo", "Print the argument back", move |arg| {
        log.borrow_mut()
            .push(LogEntry::info(arg.unwrap_or_default()));
        Ok(())
    })?;

    let flag = Rc::clone(quit);
    session.register("quit", "Leave the shell", move |_| {
        flag.set(true);
        Ok(())
    })?;
    Ok(())
}

fn run(session: &mut ConsoleSession, quit: &Rc<Cell<bool>>) -> Result<()> {
    let mut stdout = io::stdout();
    let log = session.log_handle();

    // Greeting lines queued before raw mode still need printing.
    render::print_entries(&mut stdout, log.borrow().entries())?;
    draw_prompt(&mut stdout, session)?;

    loop {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let events = match input::translate_key(&key, session.buffer()) {
            KeyOutcome::Quit => break,
            KeyOutcome::Events(events) => events,
        };

        let (before_pushed, before_clears) = {
            let log = log.borrow();
            (log.total_pushed(), log.clears())
        };
        for event in events {
            session.handle_event(event);
        }

        {
            let log = log.borrow();
            let pushed =
                usize::try_from(log.total_pushed() - before_pushed).unwrap_or(usize::MAX);
            if log.clears() != before_clears {
                render::clear_screen(&mut stdout)?;
                render::print_entries(&mut stdout, log.entries())?;
            } else if pushed > 0 {
                // New entries always sit at the tail; trimming only eats
                // the head, which has already scrolled away.
                let start = log.entries().len().saturating_sub(pushed);
                render::print_entries(&mut stdout, &log.entries()[start..])?;
            }
        }
        draw_prompt(&mut stdout, session)?;

        if quit.get() {
            break;
        }
    }
    Ok(())
}

fn draw_prompt(stdout: &mut io::Stdout, session: &ConsoleSession) -> Result<()> {
    render::draw_prompt(
        stdout,
        session.prompt(),
        session.buffer(),
        session.suggestions(),
        session.selected_suggestion(),
    )?;
    Ok(())
}
