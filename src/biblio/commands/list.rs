use crate::catalog::Catalog;
use crate::commands::{format_date, CmdMessage, CmdResult};
use crate::model::User;

/// `list [-all|-av|-available|-br|-borrowed]`, any logged-in user.
///
/// The default and any unrecognized option both show everything. Rows come
/// out in catalog insertion order; admins additionally see borrower and due
/// date on borrowed rows.
pub fn run(catalog: &Catalog, user: &User, parts: &[&str]) -> CmdResult {
    let mut result = CmdResult::default();
    let option = parts.get(1).copied().unwrap_or("-all");

    if catalog.is_empty() {
        result.add_message(CmdMessage::info("No books in library."));
        return result;
    }

    let admin = user.is_admin();

    for book in catalog.books() {
        let available = book.is_available();

        if matches!(option, "-av" | "-available") && !available {
            continue;
        }
        if matches!(option, "-br" | "-borrowed") && available {
            continue;
        }

        let mut row = format!(
            "{}\t{}\t{}\t{}",
            book.id, book.title, book.author, book.year_published
        );
        if admin {
            if let Some(loan) = &book.loan {
                row.push_str(&format!(
                    "\t{}\t{}",
                    loan.borrower,
                    format_date(loan.due_date)
                ));
            }
        }
        result.add_message(CmdMessage::info(row));
    }

    result
}
