use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::User;

/// `remove ID...`, admin only. Each token is attempted independently;
/// malformed tokens are reported in scan order ahead of the two summary
/// lines, and giving no ids at all is a silent no-op.
pub fn run(catalog: &mut Catalog, user: &User, parts: &[&str]) -> CmdResult {
    let mut result = CmdResult::default();

    if !user.is_admin() {
        result.add_message(CmdMessage::error("User not authorized"));
        return result;
    }

    if parts.len() < 2 {
        return result;
    }

    let mut removed = Vec::new();
    let mut not_found = Vec::new();

    for token in &parts[1..] {
        match token.parse::<i32>() {
            Ok(id) => {
                if catalog.remove(id) {
                    removed.push(id);
                } else {
                    not_found.push(id);
                }
            }
            Err(_) => {
                result.add_message(CmdMessage::warning(format!(
                    "Invalid ID format in remove command: {}",
                    token
                )));
            }
        }
    }

    if !removed.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "The following books were removed: {}.",
            join_ids(&removed)
        )));
    }

    if !not_found.is_empty() {
        result.add_message(CmdMessage::error(format!(
            "The following IDs do not exist: {}.",
            join_ids(&not_found)
        )));
    }

    result
}

fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
