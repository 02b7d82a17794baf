use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::User;

/// `add -t TITLE -a AUTHOR -d YEAR -i ISBN [-n COPIES]`, admin only.
///
/// Options are scanned pairwise in any order. A recognized option consumes
/// the token after it; an unrecognized one is reported and the scan carries
/// on without consuming a value.
pub fn run(catalog: &mut Catalog, user: &User, parts: &[&str]) -> CmdResult {
    let mut result = CmdResult::default();

    if !user.is_admin() {
        result.add_message(CmdMessage::error("User not authorized"));
        return result;
    }

    let mut title = None;
    let mut author = None;
    let mut year_str = None;
    let mut isbn_str = None;
    let mut copies_str = None;

    let mut i = 1;
    while i + 1 < parts.len() {
        let opt = parts[i];
        let val = parts[i + 1];
        match opt {
            "-t" => {
                title = Some(val);
                i += 1;
            }
            "-a" => {
                author = Some(val);
                i += 1;
            }
            "-d" => {
                year_str = Some(val);
                i += 1;
            }
            "-i" => {
                isbn_str = Some(val);
                i += 1;
            }
            "-n" => {
                copies_str = Some(val);
                i += 1;
            }
            _ => {
                result.add_message(CmdMessage::warning(format!("Unknown option: {}", opt)));
            }
        }
        i += 1;
    }

    let (Some(title), Some(author), Some(year_str), Some(isbn_str)) =
        (title, author, year_str, isbn_str)
    else {
        result.add_message(CmdMessage::error("Missing required option: -t, -a, -d, or -i"));
        return result;
    };

    let Ok(year) = year_str.parse::<i32>() else {
        result.add_message(CmdMessage::error("Invalid year format"));
        return result;
    };

    let Ok(isbn) = isbn_str.parse::<i64>() else {
        result.add_message(CmdMessage::error("Invalid ISBN format"));
        return result;
    };

    let copies = match copies_str {
        None => 1,
        Some(s) => match s.parse::<i32>() {
            Ok(n) if n > 0 => n,
            _ => {
                result.add_message(CmdMessage::error("Invalid copies number"));
                return result;
            }
        },
    };

    if copies == 1 {
        let id = catalog.add_book(isbn, title, author, year);
        result.add_message(CmdMessage::success(format!(
            "The book is registered as {}.",
            id
        )));
    } else {
        let ids: Vec<String> = (0..copies)
            .map(|_| catalog.add_book(isbn, title, author, year).to_string())
            .collect();
        result.add_message(CmdMessage::success(format!(
            "The books are registered as {}.",
            ids.join(" ")
        )));
    }

    result
}
