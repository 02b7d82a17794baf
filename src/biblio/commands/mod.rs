//! Command handlers and the reply types they produce.
//!
//! Each submodule implements one command family as a pure function over the
//! catalog/session state: it validates arguments, checks authorization,
//! mutates or queries state, and pushes formatted reply lines into a
//! [`CmdResult`]. Handlers never print and never fail: every user mistake
//! is a reply line, and push order is the output order.

use chrono::{DateTime, Utc};

pub mod add;
pub mod check;
pub mod lending;
pub mod list;
pub mod login;
pub mod remove;
pub mod search;

/// Severity of a reply line. The text itself is the contract; the level only
/// drives presentation (coloring) in the CLI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Query output rows and neutral notices.
    Info,
    /// A state change happened as requested.
    Success,
    /// Something was skipped but the command carried on.
    Warning,
    /// The command did not do what was asked.
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Ordered reply lines for one processed input line. Empty for ignored
/// input (blank lines and `#` comments).
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }

    /// Reply text in emission order, one element per output line.
    pub fn lines(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// All user-visible dates use day/month/year with slashes.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_render_day_month_year() {
        let date = Utc.with_ymd_and_hms(2024, 3, 8, 23, 59, 0).unwrap();
        assert_eq!(format_date(date), "08/03/2024");
    }

    #[test]
    fn lines_preserve_push_order() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("first"));
        result.add_message(CmdMessage::success("second"));
        assert_eq!(result.lines(), vec!["first", "second"]);
    }
}
