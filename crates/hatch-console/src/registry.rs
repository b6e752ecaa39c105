//! Command registry and dispatch logic.

use std::collections::BTreeMap;

use hatch_types::error::{HatchError, Result};

/// The character separating a command name from its argument.
///
/// A name may never contain it; everything after its first occurrence in a
/// line is the argument, verbatim.
pub const DELIMITER: char = ' ';

/// A command handler.
///
/// Receives the argument portion of the line: `None` when the line had no
/// delimiter, otherwise everything after the first delimiter (possibly
/// empty). Errors propagate unmodified to the dispatch caller.
pub type Handler = Box<dyn FnMut(Option<&str>) -> Result<()>>;

struct Command {
    description: String,
    handler: Handler,
}

/// Registry of available commands with dispatch.
///
/// Stored in a `BTreeMap` so [`names`](CommandRegistry::names) and
/// [`describe_all`](CommandRegistry::describe_all) enumerate in a stable
/// lexicographic order.
pub struct CommandRegistry {
    commands: BTreeMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    ///
    /// Fails with [`HatchError::InvalidCommandName`] if `name` contains the
    /// delimiter; every other name is accepted as-is.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Result<()>
    where
        F: FnMut(Option<&str>) -> Result<()> + 'static,
    {
        let name = name.into();
        if name.contains(DELIMITER) {
            return Err(HatchError::InvalidCommandName { name });
        }
        self.commands.insert(
            name,
            Command {
                description: description.into(),
                handler: Box::new(handler),
            },
        );
        Ok(())
    }

    /// Parse a line and invoke the matching handler.
    ///
    /// The line splits at the first delimiter only: `"cmd a b c"` dispatches
    /// to `"cmd"` with argument `"a b c"`. Name lookup is exact and
    /// case-sensitive. Returns `Ok(true)` after invoking the handler exactly
    /// once, `Ok(false)` without side effects when the name is unregistered,
    /// and the handler's own error when it fails. The registry provides no
    /// isolation between commands; callers that need it wrap dispatch
    /// themselves.
    pub fn dispatch(&mut self, line: &str) -> Result<bool> {
        let (name, arg) = match line.split_once(DELIMITER) {
            Some((name, rest)) => (name, Some(rest)),
            None => (line, None),
        };
        match self.commands.get_mut(name) {
            Some(cmd) => {
                log::debug!("dispatching {name:?}");
                (cmd.handler)(arg)?;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    /// All registered names, lexicographically ascending.
    ///
    /// This is the suggestion source for the interaction controller.
    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// One line per command, `"* {name} - {description}\n"`, in the same
    /// order as [`names`](CommandRegistry::names).
    pub fn describe_all(&self) -> String {
        let mut out = String::new();
        for (name, cmd) in &self.commands {
            out.push_str(&format!("* {name} - {}\n", cmd.description));
        }
        out
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
