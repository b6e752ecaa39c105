//! Raw-mode rendering: transcript scrollback and the live prompt line.
//!
//! The prompt always occupies the bottom line. Transcript entries are
//! printed above it as plain scrollback, warnings in yellow and errors in
//! red. Suggestions are drawn inline after the buffer, dimmed, with the
//! selected entry bracketed.

use std::io::{self, Write};

use crossterm::QueueableCommand;
use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use hatch_types::transcript::{LogEntry, Severity};

/// Print transcript entries as scrollback, one terminal line per message
/// line. Starts by overwriting the current prompt line.
pub fn print_entries(out: &mut impl Write, entries: &[LogEntry]) -> io::Result<()> {
    for entry in entries {
        for line in entry.message.split('\n') {
            out.queue(MoveToColumn(0))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            match entry.severity {
                Severity::Info => out.queue(Print(line))?,
                Severity::Warning => out.queue(PrintStyledContent(line.with(Color::Yellow)))?,
                Severity::Error => out.queue(PrintStyledContent(line.with(Color::Red)))?,
            };
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Wipe the whole screen and park the cursor at the top left.
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?;
    out.queue(MoveTo(0, 0))?;
    Ok(())
}

/// Redraw the prompt line: prompt, buffer, then the dimmed suggestion
/// strip. The cursor is parked right after the typed text.
pub fn draw_prompt(
    out: &mut impl Write,
    prompt: &str,
    buffer: &str,
    suggestions: &[String],
    selected: usize,
) -> io::Result<()> {
    out.queue(MoveToColumn(0))?;
    out.queue(Clear(ClearType::CurrentLine))?;
    out.queue(Print(prompt))?;
    out.queue(Print(buffer))?;

    if !suggestions.is_empty() {
        out.queue(Print("  "))?;
        for (idx, name) in suggestions.iter().enumerate() {
            if idx > 0 {
                out.queue(Print(" "))?;
            }
            if idx == selected {
                out.queue(PrintStyledContent(format!("[{name}]").with(Color::White).bold()))?;
            } else {
                out.queue(PrintStyledContent(name.as_str().with(Color::DarkGrey)))?;
            }
        }
    }

    out.queue(MoveToColumn(clamp_col(
        prompt.chars().count() + buffer.chars().count(),
    )))?;
    out.flush()
}

fn clamp_col(col: usize) -> u16 {
    u16::try_from(col).unwrap_or(u16::MAX)
}
