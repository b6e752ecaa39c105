//! Console transcript entries.
//!
//! The transcript is the user-visible output of a console session. It is
//! distinct from the `log` crate facade, which carries diagnostics for the
//! embedding process.

use serde::{Deserialize, Serialize};

/// Message category of a transcript entry.
///
/// Hosts may render each category with distinct styling; no particular
/// encoding is implied here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One line of console output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_constructor() {
        let e = LogEntry::info("loaded 3 commands");
        assert_eq!(e.severity, Severity::Info);
        assert_eq!(e.message, "loaded 3 commands");
    }

    #[test]
    fn warning_constructor() {
        let e = LogEntry::warning("unknown command");
        assert_eq!(e.severity, Severity::Warning);
    }

    #[test]
    fn error_constructor() {
        let e = LogEntry::error("handler failed");
        assert_eq!(e.severity, Severity::Error);
    }

    #[test]
    fn severities_distinct() {
        assert_ne!(Severity::Info, Severity::Warning);
        assert_ne!(Severity::Warning, Severity::Error);
        assert_ne!(Severity::Info, Severity::Error);
    }

    #[test]
    fn entry_equality_covers_severity() {
        let a = LogEntry::info("same text");
        let b = LogEntry::error("same text");
        assert_ne!(a, b);
    }

    #[test]
    fn entry_serde_roundtrip() {
        let e = LogEntry::warning("\"foo\" isn't a command");
        let json = serde_json::to_string(&e).unwrap();
        let e2: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(e, e2);
    }

    #[test]
    fn entry_accepts_owned_and_borrowed() {
        let owned = LogEntry::info(String::from("owned"));
        let borrowed = LogEntry::info("owned");
        assert_eq!(owned, borrowed);
    }
}
