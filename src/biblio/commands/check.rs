use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::commands::{format_date, CmdMessage, CmdResult};
use crate::model::User;

/// `check [-b]`: the loan report. Plain `check` shows active loans; `-b`
/// restricts to overdue ones (due date strictly before `now`). Members only
/// ever see their own loans; admins see everyone's, with a borrower column.
pub fn run(catalog: &Catalog, user: &User, parts: &[&str], now: DateTime<Utc>) -> CmdResult {
    let mut result = CmdResult::default();
    let only_overdue = parts.get(1) == Some(&"-b");

    if catalog.is_empty() {
        result.add_message(CmdMessage::info("No books in library."));
        return result;
    }

    let admin = user.is_admin();
    let mut any_printed = false;

    for book in catalog.books() {
        let Some(loan) = &book.loan else {
            continue;
        };
        if !admin && loan.borrower != user.username {
            continue;
        }
        if only_overdue && loan.due_date >= now {
            continue;
        }

        any_printed = true;
        let row = if admin {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                book.id,
                book.isbn,
                book.title,
                loan.borrower,
                format_date(loan.due_date)
            )
        } else {
            format!(
                "{}\t{}\t{}\t{}",
                book.id,
                book.isbn,
                book.title,
                format_date(loan.due_date)
            )
        };
        result.add_message(CmdMessage::info(row));
    }

    if !any_printed {
        result.add_message(CmdMessage::info("No borrowed books found for this filter."));
    }

    result
}
