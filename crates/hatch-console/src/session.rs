//! Console session: registry, controller, and transcript wired together.
//!
//! The session is the layer most hosts embed. It feeds input events to the
//! [`InputController`], routes submitted lines into [`CommandRegistry`]
//! dispatch, and maintains the severity-tagged transcript the host renders.
//! Every session carries two built-ins: `help` and `clear`.

use std::cell::RefCell;
use std::rc::Rc;

use hatch_types::error::Result;
use hatch_types::input::InputEvent;
use hatch_types::transcript::LogEntry;

use crate::config::ConsoleConfig;
use crate::controller::{InputController, InputReaction};
use crate::registry::CommandRegistry;

const HELP_DESCRIPTION: &str = "List all commands";

/// Bounded transcript of console output, oldest first.
///
/// `total_pushed` and `clears` are monotone counters a host can poll to
/// tell appended entries apart from a wiped transcript without holding a
/// borrow across events.
pub struct LogBuffer {
    entries: Vec<LogEntry>,
    max_entries: usize,
    total_pushed: u64,
    clears: u64,
}

impl LogBuffer {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
            total_pushed: 0,
            clears: 0,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        self.total_pushed += 1;
        while self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.clears += 1;
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of entries ever pushed, including ones since trimmed.
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    /// Count of times the transcript has been wiped.
    pub fn clears(&self) -> u64 {
        self.clears
    }
}

/// An interactive console: dispatch, suggestions, history, transcript.
///
/// Single-threaded by design; the transcript is shared with command
/// closures through `Rc<RefCell<..>>` so a command can print output or
/// clear the screen without borrowing the session.
pub struct ConsoleSession {
    registry: CommandRegistry,
    controller: InputController,
    log: Rc<RefCell<LogBuffer>>,
    prompt: String,
}

impl ConsoleSession {
    pub fn new(config: ConsoleConfig) -> Self {
        let mut session = Self {
            registry: CommandRegistry::new(),
            controller: InputController::new(config.suggestion_cap),
            log: Rc::new(RefCell::new(LogBuffer::new(config.max_log_entries))),
            prompt: config.prompt,
        };

        let log = Rc::clone(&session.log);
        // Built-in names contain no delimiter; these registrations cannot fail.
        let _ = session
            .registry
            .register("clear", "Clear the console output", move |_| {
                log.borrow_mut().clear();
                Ok(())
            });
        session.refresh_help();
        session.sync_suggestion_source();
        session
    }

    /// Register a command and refresh the suggestion source.
    ///
    /// The session owns `help`: its listing handler is re-registered after
    /// every call here, so a handler supplied under that name is
    /// immediately superseded. `clear` carries no such guard and can be
    /// replaced like any other name (last write wins).
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Result<()>
    where
        F: FnMut(Option<&str>) -> Result<()> + 'static,
    {
        self.registry.register(name, description, handler)?;
        self.refresh_help();
        self.sync_suggestion_source();
        Ok(())
    }

    /// Advance the console by one input event.
    ///
    /// A [`InputReaction::Submitted`] line is echoed to the transcript and
    /// dispatched. An unknown name becomes a warning entry; a handler fault
    /// becomes an error entry rather than poisoning the event loop.
    pub fn handle_event(&mut self, event: InputEvent) -> InputReaction {
        let reaction = self.controller.handle_event(event);
        if let InputReaction::Submitted(ref line) = reaction {
            self.run_line(line);
        }
        reaction
    }

    // -- Transcript -------------------------------------------------------

    /// Shared handle to the transcript, for command closures and hosts.
    pub fn log_handle(&self) -> Rc<RefCell<LogBuffer>> {
        Rc::clone(&self.log)
    }

    pub fn log(&self, message: impl Into<String>) {
        self.log.borrow_mut().push(LogEntry::info(message));
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        self.log.borrow_mut().push(LogEntry::warning(message));
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.log.borrow_mut().push(LogEntry::error(message));
    }

    /// Wipe the transcript, same as the `clear` built-in.
    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }

    // -- Read accessors ---------------------------------------------------

    pub fn buffer(&self) -> &str {
        self.controller.buffer()
    }

    pub fn suggestions(&self) -> &[String] {
        self.controller.suggestions()
    }

    pub fn selected_suggestion(&self) -> usize {
        self.controller.selected_suggestion()
    }

    pub fn history(&self) -> &[String] {
        self.controller.history()
    }

    pub fn command_names(&self) -> Vec<String> {
        self.registry.names()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    // -- Internals --------------------------------------------------------

    fn run_line(&mut self, line: &str) {
        self.log
            .borrow_mut()
            .push(LogEntry::info(format!("{}{line}", self.prompt)));
        match self.registry.dispatch(line) {
            Ok(true) => {},
            Ok(false) => {
                self.log.borrow_mut().push(LogEntry::warning(format!(
                    "\"{line}\" isn't a command. Try 'help' for the list."
                )));
            },
            Err(e) => {
                log::warn!("command failed: {e}");
                self.log
                    .borrow_mut()
                    .push(LogEntry::error(format!("error: {e}")));
            },
        }
    }

    /// Re-register `help` with a listing snapshot of the current table.
    ///
    /// A handler cannot read the registry while dispatch holds it, so the
    /// listing is captured at registration time and refreshed after every
    /// change to the table. Re-registration is the documented overwrite
    /// behavior.
    fn refresh_help(&mut self) {
        // Restore the entry before capturing, so a registration made over
        // `help` never shows its description in the listing.
        let _ = self.registry.register("help", HELP_DESCRIPTION, |_| Ok(()));
        let listing = self.registry.describe_all();
        let log = Rc::clone(&self.log);
        let _ = self
            .registry
            .register("help", HELP_DESCRIPTION, move |_| {
                log.borrow_mut()
                    .push(LogEntry::info(format!("Commands:\n{listing}")));
                Ok(())
            });
    }

    fn sync_suggestion_source(&mut self) {
        self.controller.set_source_names(self.registry.names());
    }
}
