//! # Interpreter Facade
//!
//! The interpreter owns the catalog and the session for the lifetime of one
//! run and is the single entry point for all operations: every UI (the CLI
//! runner, tests, an embedding application) hands it one input line at a
//! time and receives the structured reply.
//!
//! Per line it:
//! - trims and drops blank lines and `#` comments (empty reply),
//! - splits on whitespace runs and takes the first token as the command,
//! - applies the global login gate: without a session only `log` is
//!   understood, everything else (including unknown names) answers
//!   `You must log in with: log [USERNAME]`,
//! - dispatches to the command handler with the logged-in identity.
//!
//! `&mut self` makes the one-caller-at-a-time contract explicit: there is no
//! interior mutability and no locking, so a concurrent embedding has to add
//! its own serialization around the whole value.

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::session::Session;

pub struct Interpreter {
    catalog: Catalog,
    session: Session,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            session: Session::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Processes one input line against the wall clock.
    pub fn process_line(&mut self, line: &str) -> CmdResult {
        self.process_line_at(line, Utc::now())
    }

    /// Processes one input line at an explicit instant. Time only matters
    /// for loan due dates (`borrow`) and the overdue filter (`check -b`).
    pub fn process_line_at(&mut self, line: &str, now: DateTime<Utc>) -> CmdResult {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return CmdResult::default();
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0];

        if command == "log" {
            return commands::login::login(&mut self.session, &parts);
        }

        // Global rule: everything but `log` needs a session, so the gate
        // doubles as the identity lookup for the handlers below.
        let Some(user) = self.session.current().cloned() else {
            return CmdResult::with_message(CmdMessage::error(
                "You must log in with: log [USERNAME]",
            ));
        };

        match command {
            "logout" => commands::login::logout(&mut self.session),
            "add" => commands::add::run(&mut self.catalog, &user, &parts),
            "remove" => commands::remove::run(&mut self.catalog, &user, &parts),
            "list" => commands::list::run(&self.catalog, &user, &parts),
            "borrow" => commands::lending::borrow(&mut self.catalog, &user, &parts, now),
            "return" => commands::lending::return_book(&mut self.catalog, &user, &parts),
            "extend" => commands::lending::extend(&mut self.catalog, &user, &parts),
            "check" => commands::check::run(&self.catalog, &user, &parts, now),
            "search" => commands::search::run(&self.catalog, &parts),
            _ => CmdResult::with_message(CmdMessage::error(format!(
                "Unknown command: {}",
                command
            ))),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
