use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};

/// `search [-t/-title V] [-a/-author V] [-d/-date V]`, any logged-in user.
///
/// Filters are read in strict adjacent pairs starting after the command
/// name; a trailing lone token is ignored. All given filters must match
/// exactly (case-sensitive strings, exact year). With no arguments at all
/// the fixed usage block is printed instead.
pub fn run(catalog: &Catalog, parts: &[&str]) -> CmdResult {
    let mut result = CmdResult::default();

    if parts.len() == 1 {
        result.add_message(CmdMessage::info("Usage: search [FILTERS]"));
        result.add_message(CmdMessage::info("Filters:"));
        result.add_message(CmdMessage::info("  -t [TITLE]   or -title [TITLE]"));
        result.add_message(CmdMessage::info("  -a [AUTHOR]  or -author [AUTHOR]"));
        result.add_message(CmdMessage::info("  -d [YEAR]    or -date [YEAR]"));
        return result;
    }

    let mut title_filter = None;
    let mut author_filter = None;
    let mut year_filter = None;

    let mut i = 1;
    while i + 1 < parts.len() {
        let opt = parts[i];
        let val = parts[i + 1];
        match opt {
            "-t" | "-title" => title_filter = Some(val),
            "-a" | "-author" => author_filter = Some(val),
            "-d" | "-date" => match val.parse::<i32>() {
                Ok(year) => year_filter = Some(year),
                Err(_) => {
                    result.add_message(CmdMessage::error(format!(
                        "Invalid year in search filter: {}",
                        val
                    )));
                    return result;
                }
            },
            _ => {
                result.add_message(CmdMessage::error(format!(
                    "Unknown search option: {}",
                    opt
                )));
                return result;
            }
        }
        i += 2;
    }

    let mut any_printed = false;
    for book in catalog.books() {
        if title_filter.is_some_and(|t| book.title != t) {
            continue;
        }
        if author_filter.is_some_and(|a| book.author != a) {
            continue;
        }
        if year_filter.is_some_and(|y| book.year_published != y) {
            continue;
        }

        any_printed = true;
        result.add_message(CmdMessage::info(format!(
            "{}\t{}\t{}\t{}\t{}",
            book.id, book.isbn, book.title, book.author, book.year_published
        )));
    }

    if !any_printed {
        result.add_message(CmdMessage::info("No books match the given search filters."));
    }

    result
}
