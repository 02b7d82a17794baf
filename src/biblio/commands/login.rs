use crate::commands::{CmdMessage, CmdResult};
use crate::model::User;
use crate::session::Session;

/// `log [USERNAME]` opens a session. The missing-name check comes before
/// the single-session rule, and an existing session is never replaced.
pub fn login(session: &mut Session, parts: &[&str]) -> CmdResult {
    let Some(username) = parts.get(1) else {
        return CmdResult::with_message(CmdMessage::error("Invalid username format"));
    };

    if session.is_logged_in() {
        return CmdResult::with_message(CmdMessage::error("User already logged in"));
    }

    if !is_valid_username(username) {
        return CmdResult::with_message(CmdMessage::error("Invalid username format"));
    }

    session.login(User::new(*username));
    // Historical reply text, kept verbatim for compatibility.
    CmdResult::with_message(CmdMessage::success(format!("You are log as {}", username)))
}

/// `logout` is only reachable with an active session (the interpreter gates
/// everything but `log`).
pub fn logout(session: &mut Session) -> CmdResult {
    session.logout();
    CmdResult::with_message(CmdMessage::success("You are logged out."))
}

/// Letters only, at least one.
fn is_valid_username(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}
