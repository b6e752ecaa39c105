//! Console core: command dispatch plus the line-editing interaction model.
//!
//! Two components do the real work. [`CommandRegistry`] owns the mapping of
//! command names to handlers and parses raw input lines into name and
//! argument. [`InputController`] is the event-driven state machine behind
//! the edit line: live suggestion filtering and cycling, cyclic history
//! recall, and submission. [`ConsoleSession`] wires the two together with a
//! severity-tagged transcript and the `help` / `clear` built-ins, which is
//! what most hosts embed.

pub mod config;
pub mod controller;
pub mod registry;
pub mod session;
pub mod suggest;

// Re-exports covering the embedding surface.
pub use config::ConsoleConfig;
pub use controller::{InputController, InputReaction};
pub use registry::{CommandRegistry, Handler, DELIMITER};
pub use session::{ConsoleSession, LogBuffer};
pub use suggest::suggestions_for;
